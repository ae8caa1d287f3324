// Home page use case: status panel, map scene, and a 24h route chart
use crate::application::backend::RouteBackend;
use crate::application::pipeline::Pipeline;
use crate::application::query::SampleQuery;
use crate::application::status_store::LatestStatusStore;
use crate::application::widgets::{ChartSlot, ChartWidgetFactory};
use crate::domain::chart::ChartSpec;
use crate::domain::map::MapScene;
use crate::domain::sample::{LegacyRouteConfig, Route};
use crate::domain::series::aggregate;
use crate::domain::table::fmt_number;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::OnceCell;

const HOME_CHART_HOURS: i64 = 24;
const NO_DATA_MESSAGE: &str = "No data yet for this route.";

/// One provider's line in the status panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusLine {
    pub provider: String,
    pub summary: String,
    pub eta: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusPanel {
    pub message: Option<String>,
    pub lines: Vec<StatusLine>,
}

impl StatusPanel {
    fn no_data() -> Self {
        Self {
            message: Some(NO_DATA_MESSAGE.to_string()),
            lines: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePageView {
    pub status: StatusPanel,
    pub map: MapScene,
    pub chart: ChartSpec,
}

pub struct HomePageController {
    backend: Arc<dyn RouteBackend>,
    pipeline: Pipeline,
    charts: Arc<dyn ChartWidgetFactory>,
    status: Arc<dyn LatestStatusStore>,
    // Route metadata is fetched once per page load, reused across reloads.
    routes: OnceCell<Vec<Route>>,
    legacy: OnceCell<LegacyRouteConfig>,
    chart: ChartSlot,
}

impl HomePageController {
    pub fn new(
        backend: Arc<dyn RouteBackend>,
        pipeline: Pipeline,
        charts: Arc<dyn ChartWidgetFactory>,
        status: Arc<dyn LatestStatusStore>,
    ) -> Self {
        Self {
            backend,
            pipeline,
            charts,
            status,
            routes: OnceCell::new(),
            legacy: OnceCell::new(),
            chart: ChartSlot::new(),
        }
    }

    pub async fn reload(&self, route_id: Option<i64>) -> anyhow::Result<HomePageView> {
        if self.pipeline.capabilities().has_route_dimension {
            let id = route_id.ok_or_else(|| anyhow::anyhow!("route_id is required"))?;
            self.reload_route(id).await
        } else {
            self.reload_single_route().await
        }
    }

    async fn reload_route(&self, route_id: i64) -> anyhow::Result<HomePageView> {
        let routes = self
            .routes
            .get_or_try_init(|| async { self.backend.fetch_routes().await })
            .await?;
        let route = routes
            .iter()
            .find(|r| r.id == route_id)
            .ok_or_else(|| anyhow::anyhow!("route {} not found", route_id))?;

        let status = self.status_panel(route_id);
        let map = self.map_scene(route).await;

        let mut query = SampleQuery::new(HOME_CHART_HOURS);
        query.route_id = Some(route_id);
        let chart = self.render_chart(&query).await?;

        Ok(HomePageView { status, map, chart })
    }

    /// Legacy single-route deployment: one start/end pair from the config
    /// endpoint, no route dimension on the chart query, no status channel.
    async fn reload_single_route(&self) -> anyhow::Result<HomePageView> {
        let config = self
            .legacy
            .get_or_try_init(|| async { self.backend.fetch_route_config().await })
            .await?;

        let map = MapScene::for_route(config.start, config.end, vec![config.start, config.end]);
        let chart = self.render_chart(&SampleQuery::new(HOME_CHART_HOURS)).await?;

        Ok(HomePageView {
            status: StatusPanel::no_data(),
            map,
            chart,
        })
    }

    fn status_panel(&self, route_id: i64) -> StatusPanel {
        let Some(latest) = self.status.latest_for_route(route_id) else {
            return StatusPanel::no_data();
        };
        if latest.providers.is_empty() {
            return StatusPanel::no_data();
        }

        let formatter = self.pipeline.formatter();
        let lines = latest
            .providers
            .iter()
            .map(|(provider, snap)| StatusLine {
                provider: display_name(provider),
                summary: format!("{} at {}", snap.status, formatter.format(&snap.ts)),
                eta: snap.eta_min.map(|m| format!("ETA: {} min", fmt_number(m))),
                error: snap.error.clone(),
            })
            .collect();

        StatusPanel {
            message: None,
            lines,
        }
    }

    /// The only fetch whose failure is caught: a missing path degrades to the
    /// straight start-end segment.
    async fn map_scene(&self, route: &Route) -> MapScene {
        let points = match self.backend.fetch_route_path(route.id).await {
            Ok(path) if !path.points.is_empty() => path.points,
            Ok(_) => vec![route.start, route.end],
            Err(err) => {
                tracing::warn!(route_id = route.id, "route path fetch failed: {err:#}");
                vec![route.start, route.end]
            }
        };
        MapScene::for_route(route.start, route.end, points)
    }

    async fn render_chart(&self, query: &SampleQuery) -> anyhow::Result<ChartSpec> {
        let samples = self.backend.fetch_samples(query).await?;
        let aggregation = aggregate(&samples, self.pipeline.formatter(), self.pipeline.alignment());
        let spec = ChartSpec::line(&aggregation, &self.pipeline.formatter().axis_label());
        self.chart.replace(self.charts.as_ref(), &spec).await;
        Ok(spec)
    }
}

fn display_name(provider: &str) -> String {
    let mut chars = provider.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::backend::test_support::FakeBackend;
    use crate::application::pipeline::PageCapabilities;
    use crate::application::status_store::{ProviderSnapshot, RouteLatest};
    use crate::application::widgets::test_support::CountingChartFactory;
    use crate::domain::sample::RoutePath;
    use crate::domain::series::SeriesAlignment;
    use crate::domain::time::TimeFormatter;
    use indexmap::IndexMap;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeStatusStore {
        latest: Mutex<HashMap<i64, RouteLatest>>,
    }

    impl FakeStatusStore {
        fn set(&self, route_id: i64, latest: RouteLatest) {
            self.latest.lock().unwrap().insert(route_id, latest);
        }
    }

    impl LatestStatusStore for FakeStatusStore {
        fn latest_for_route(&self, route_id: i64) -> Option<RouteLatest> {
            self.latest.lock().unwrap().get(&route_id).cloned()
        }
    }

    fn route() -> Route {
        Route {
            id: 1,
            name: "Home to Office".to_string(),
            enabled: true,
            start: [32.0, 34.0],
            end: [33.0, 35.0],
        }
    }

    fn controller(
        backend: Arc<FakeBackend>,
        store: Arc<FakeStatusStore>,
        capabilities: PageCapabilities,
    ) -> HomePageController {
        HomePageController::new(
            backend,
            Pipeline::new(
                TimeFormatter::raw(),
                SeriesAlignment::PerProvider,
                capabilities,
            ),
            Arc::new(CountingChartFactory::default()),
            store,
        )
    }

    #[tokio::test]
    async fn map_falls_back_to_the_straight_segment_when_the_path_fetch_fails() {
        let backend = Arc::new(FakeBackend::new(vec![route()]));
        let controller = controller(
            backend,
            Arc::new(FakeStatusStore::default()),
            PageCapabilities::default(),
        );

        let view = controller.reload(Some(1)).await.unwrap();
        assert_eq!(view.map.polyline, vec![[32.0, 34.0], [33.0, 35.0]]);
    }

    #[tokio::test]
    async fn map_uses_fetched_path_geometry_when_available() {
        let backend = Arc::new(FakeBackend::new(vec![route()]));
        backend.set_path(RoutePath {
            points: vec![[32.0, 34.0], [32.5, 34.6], [33.0, 35.0]],
        });
        let controller = controller(
            backend,
            Arc::new(FakeStatusStore::default()),
            PageCapabilities::default(),
        );

        let view = controller.reload(Some(1)).await.unwrap();
        assert_eq!(view.map.polyline.len(), 3);
        assert_eq!(view.map.polyline[1], [32.5, 34.6]);
    }

    #[tokio::test]
    async fn status_panel_reads_the_injected_store() {
        let backend = Arc::new(FakeBackend::new(vec![route()]));
        let store = Arc::new(FakeStatusStore::default());
        let mut providers = IndexMap::new();
        providers.insert(
            "waze".to_string(),
            ProviderSnapshot {
                status: "ok".to_string(),
                ts: "t9".to_string(),
                eta_min: Some(14.0),
                error: None,
            },
        );
        store.set(1, RouteLatest { providers });

        let controller = controller(backend, store, PageCapabilities::default());
        let view = controller.reload(Some(1)).await.unwrap();

        assert_eq!(view.status.message, None);
        assert_eq!(view.status.lines.len(), 1);
        assert_eq!(view.status.lines[0].provider, "Waze");
        assert_eq!(view.status.lines[0].summary, "ok at t9");
        assert_eq!(view.status.lines[0].eta.as_deref(), Some("ETA: 14 min"));
    }

    #[tokio::test]
    async fn status_panel_reports_no_data_for_unseen_routes() {
        let backend = Arc::new(FakeBackend::new(vec![route()]));
        let controller = controller(
            backend,
            Arc::new(FakeStatusStore::default()),
            PageCapabilities::default(),
        );

        let view = controller.reload(Some(1)).await.unwrap();
        assert_eq!(
            view.status.message.as_deref(),
            Some("No data yet for this route.")
        );
        assert!(view.status.lines.is_empty());
    }

    #[tokio::test]
    async fn legacy_variant_uses_the_config_endpoint_and_drops_the_route_filter() {
        let backend = Arc::new(FakeBackend::new(Vec::new()));
        backend.set_route_config(LegacyRouteConfig {
            start: [32.0, 34.0],
            end: [33.0, 35.0],
        });
        let controller = controller(
            backend.clone(),
            Arc::new(FakeStatusStore::default()),
            PageCapabilities {
                has_route_dimension: false,
                has_provider_filter: false,
            },
        );

        let view = controller.reload(None).await.unwrap();
        assert_eq!(view.map.polyline, vec![[32.0, 34.0], [33.0, 35.0]]);
        assert_eq!(backend.last_query().unwrap().route_id, None);
        assert_eq!(backend.route_fetch_count(), 0);
    }

    #[tokio::test]
    async fn unknown_route_id_is_an_error() {
        let backend = Arc::new(FakeBackend::new(vec![route()]));
        let controller = controller(
            backend,
            Arc::new(FakeStatusStore::default()),
            PageCapabilities::default(),
        );

        assert!(controller.reload(Some(99)).await.is_err());
    }
}
