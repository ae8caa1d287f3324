// Backend access seam for the monitoring API
use crate::application::query::SampleQuery;
use crate::domain::sample::{LegacyRouteConfig, Route, RoutePath, Sample};
use async_trait::async_trait;

/// The monitoring backend's read endpoints, consumed as a black box. All
/// fetches surface failures by returning an error; callers decide whether to
/// propagate or fall back (only the route-path fetch falls back).
#[async_trait]
pub trait RouteBackend: Send + Sync {
    async fn fetch_routes(&self) -> anyhow::Result<Vec<Route>>;

    async fn fetch_samples(&self, query: &SampleQuery) -> anyhow::Result<Vec<Sample>>;

    async fn fetch_route_path(&self, route_id: i64) -> anyhow::Result<RoutePath>;

    /// Single-route legacy deployments expose one start/end pair.
    async fn fetch_route_config(&self) -> anyhow::Result<LegacyRouteConfig>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory backend shared by the controller tests.
    pub struct FakeBackend {
        routes: Vec<Route>,
        samples: Mutex<Vec<Sample>>,
        path: Mutex<Option<RoutePath>>,
        legacy: Mutex<Option<LegacyRouteConfig>>,
        route_fetches: AtomicUsize,
        last_query: Mutex<Option<SampleQuery>>,
    }

    impl FakeBackend {
        pub fn new(routes: Vec<Route>) -> Self {
            Self {
                routes,
                samples: Mutex::new(Vec::new()),
                path: Mutex::new(None),
                legacy: Mutex::new(None),
                route_fetches: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        pub fn set_samples(&self, samples: Vec<Sample>) {
            *self.samples.lock().unwrap() = samples;
        }

        pub fn set_path(&self, path: RoutePath) {
            *self.path.lock().unwrap() = Some(path);
        }

        pub fn set_route_config(&self, config: LegacyRouteConfig) {
            *self.legacy.lock().unwrap() = Some(config);
        }

        pub fn route_fetch_count(&self) -> usize {
            self.route_fetches.load(Ordering::SeqCst)
        }

        pub fn last_query(&self) -> Option<SampleQuery> {
            self.last_query.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RouteBackend for FakeBackend {
        async fn fetch_routes(&self) -> anyhow::Result<Vec<Route>> {
            self.route_fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.routes.clone())
        }

        async fn fetch_samples(&self, query: &SampleQuery) -> anyhow::Result<Vec<Sample>> {
            *self.last_query.lock().unwrap() = Some(query.clone());
            Ok(self.samples.lock().unwrap().clone())
        }

        async fn fetch_route_path(&self, _route_id: i64) -> anyhow::Result<RoutePath> {
            self.path
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| anyhow::anyhow!("path endpoint unavailable"))
        }

        async fn fetch_route_config(&self) -> anyhow::Result<LegacyRouteConfig> {
            self.legacy
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| anyhow::anyhow!("config endpoint unavailable"))
        }
    }
}
