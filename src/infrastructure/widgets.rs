// Chart widget implementation for the headless serving shell
use crate::application::widgets::{ChartWidget, ChartWidgetFactory};
use crate::domain::chart::ChartSpec;

/// Chart instance whose lifecycle is only observable through tracing; the
/// actual drawing happens in the embedding page, which consumes the spec
/// from the served view.
pub struct TracingChart {
    datasets: usize,
}

impl ChartWidget for TracingChart {
    fn destroy(&mut self) {
        tracing::debug!(datasets = self.datasets, "chart instance destroyed");
    }
}

pub struct TracingChartFactory;

impl ChartWidgetFactory for TracingChartFactory {
    fn build(&self, spec: &ChartSpec) -> Box<dyn ChartWidget> {
        let datasets = spec.data.datasets.len();
        tracing::debug!(datasets, "chart instance built");
        Box::new(TracingChart { datasets })
    }
}
