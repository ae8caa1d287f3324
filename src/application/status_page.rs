// Status page use case: fetch, aggregate, rebuild chart, project table
use crate::application::backend::RouteBackend;
use crate::application::pipeline::Pipeline;
use crate::application::query::SampleQuery;
use crate::application::widgets::{ChartSlot, ChartWidgetFactory};
use crate::domain::chart::ChartSpec;
use crate::domain::sample::Route;
use crate::domain::table::TableRow;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// One selector entry for the route dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOption {
    pub id: i64,
    pub label: String,
}

/// Everything the status page renders for one reload cycle.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPageView {
    pub chart: ChartSpec,
    pub rows: Vec<TableRow>,
    pub route_options: Vec<RouteOption>,
    pub download_href: String,
    pub download_filename: String,
}

pub struct StatusPageController {
    backend: Arc<dyn RouteBackend>,
    pipeline: Pipeline,
    charts: Arc<dyn ChartWidgetFactory>,
    // Fetched once per page load, reused across reloads.
    routes: OnceCell<Vec<Route>>,
    chart: ChartSlot,
}

impl StatusPageController {
    pub fn new(
        backend: Arc<dyn RouteBackend>,
        pipeline: Pipeline,
        charts: Arc<dyn ChartWidgetFactory>,
    ) -> Self {
        Self {
            backend,
            pipeline,
            charts,
            routes: OnceCell::new(),
            chart: ChartSlot::new(),
        }
    }

    /// Full reload cycle: sync the download link to the selector state, fetch
    /// the window, recompute the aggregation and table from scratch, and
    /// replace the chart instance.
    pub async fn reload(&self, query: &SampleQuery) -> anyhow::Result<StatusPageView> {
        let query = self.effective_query(query);
        let routes = self.routes().await?;
        let routes_by_id: HashMap<i64, Route> =
            routes.iter().map(|r| (r.id, r.clone())).collect();

        let samples = self.backend.fetch_samples(&query).await?;
        tracing::debug!(count = samples.len(), hours = query.hours, "fetched samples");

        let out = self.pipeline.run(&samples, &routes_by_id);
        let chart = ChartSpec::line(&out.aggregation, &self.pipeline.formatter().axis_label());
        self.chart.replace(self.charts.as_ref(), &chart).await;

        Ok(StatusPageView {
            chart,
            rows: out.rows,
            route_options: routes
                .iter()
                .map(|r| RouteOption {
                    id: r.id,
                    label: r.option_label(),
                })
                .collect(),
            download_href: query.download_href(),
            download_filename: query.download_filename(),
        })
    }

    /// Pages without a provider selector never send a provider filter, no
    /// matter what the caller passes.
    fn effective_query(&self, query: &SampleQuery) -> SampleQuery {
        let mut query = query.clone();
        if !self.pipeline.capabilities().has_provider_filter {
            query.provider = None;
        }
        query
    }

    async fn routes(&self) -> anyhow::Result<&Vec<Route>> {
        self.routes
            .get_or_try_init(|| async { self.backend.fetch_routes().await })
            .await
    }
}
