// Chart widget seam and the retained-instance slot
use crate::domain::chart::ChartSpec;
use tokio::sync::Mutex;

/// Handle to one live chart instance owned by the embedding shell.
pub trait ChartWidget: Send + Sync {
    /// Tear down this instance. Called exactly once, before a rebuild.
    fn destroy(&mut self);
}

pub trait ChartWidgetFactory: Send + Sync {
    fn build(&self, spec: &ChartSpec) -> Box<dyn ChartWidget>;
}

/// The single retained chart instance of a page. Every reload destroys the
/// previous instance before installing the replacement, so no datasets leak
/// across rebuilds. Overlapping reloads are not de-duplicated; whichever
/// reload resolves last wins the slot.
#[derive(Default)]
pub struct ChartSlot {
    current: Mutex<Option<Box<dyn ChartWidget>>>,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, factory: &dyn ChartWidgetFactory, spec: &ChartSpec) {
        let mut slot = self.current.lock().await;
        if let Some(mut old) = slot.take() {
            old.destroy();
        }
        *slot = Some(factory.build(spec));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    /// Counting factory shared by the controller tests.
    #[derive(Default)]
    pub struct CountingChartFactory {
        pub built: AtomicUsize,
        pub destroyed: Arc<AtomicUsize>,
        pub last_spec: StdMutex<Option<ChartSpec>>,
    }

    pub struct CountingChart {
        destroyed: Arc<AtomicUsize>,
    }

    impl ChartWidget for CountingChart {
        fn destroy(&mut self) {
            self.destroyed.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl ChartWidgetFactory for CountingChartFactory {
        fn build(&self, spec: &ChartSpec) -> Box<dyn ChartWidget> {
            self.built.fetch_add(1, Ordering::SeqCst);
            *self.last_spec.lock().unwrap() = Some(spec.clone());
            Box::new(CountingChart {
                destroyed: self.destroyed.clone(),
            })
        }
    }

    impl CountingChartFactory {
        pub fn built_count(&self) -> usize {
            self.built.load(Ordering::SeqCst)
        }

        pub fn destroyed_count(&self) -> usize {
            self.destroyed.load(Ordering::SeqCst)
        }

        pub fn last_dataset_labels(&self) -> Vec<String> {
            self.last_spec
                .lock()
                .unwrap()
                .as_ref()
                .map(|spec| spec.data.datasets.iter().map(|d| d.label.clone()).collect())
                .unwrap_or_default()
        }
    }
}
