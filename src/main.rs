// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::backend::RouteBackend;
use crate::application::home_page::HomePageController;
use crate::application::pipeline::Pipeline;
use crate::application::status_page::StatusPageController;
use crate::application::status_store::LatestStatusStore;
use crate::application::widgets::ChartWidgetFactory;
use crate::domain::time::TimeFormatter;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_backend::HttpRouteBackend;
use crate::infrastructure::shared_status::SharedStatusStore;
use crate::infrastructure::status_refresh::run_status_refresh;
use crate::infrastructure::widgets::TracingChartFactory;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, home_view, status_view};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;
    let formatter = TimeFormatter::new(config.display.time_policy()?);
    let pipeline = Pipeline::new(
        formatter,
        config.display.alignment(),
        config.display.capabilities(),
    );

    // Infrastructure: backend client, widget factory, status side channel
    let backend: Arc<dyn RouteBackend> =
        Arc::new(HttpRouteBackend::new(config.backend.base_url.clone()));
    let charts: Arc<dyn ChartWidgetFactory> = Arc::new(TracingChartFactory);
    let status_store = Arc::new(SharedStatusStore::new());

    // The refresher owns all writes to the status store
    tokio::spawn(run_status_refresh(
        backend.clone(),
        status_store.clone(),
        Duration::from_secs(config.status_refresh.minutes * 60),
        config.status_refresh.window_hours,
    ));

    // Page controllers (application layer)
    let status_page = StatusPageController::new(backend.clone(), pipeline.clone(), charts.clone());
    let status_reader: Arc<dyn LatestStatusStore> = status_store.clone();
    let home_page = HomePageController::new(backend.clone(), pipeline, charts, status_reader);

    let state = Arc::new(AppState {
        status_page,
        home_page,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/views/status", get(status_view))
        .route("/views/home", get(home_view))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    println!("Starting route-eta-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
