// HTTP request handlers serving assembled page views
use crate::application::query::SampleQuery;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct StatusParams {
    pub hours: Option<i64>,
    pub provider: Option<String>,
    pub route_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct HomeParams {
    pub route_id: Option<i64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Assembled status page view: chart spec, table rows, download link.
pub async fn status_view(
    Query(params): Query<StatusParams>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let query = SampleQuery {
        hours: params.hours.unwrap_or(SampleQuery::default().hours),
        provider: params.provider,
        route_id: params.route_id,
    };

    match state.status_page.reload(&query).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => {
            tracing::warn!("status page reload failed: {err:#}");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Assembled home page view: status panel, map scene, 24h chart.
pub async fn home_view(
    Query(params): Query<HomeParams>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.home_page.reload(params.route_id).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => {
            tracing::warn!("home page reload failed: {err:#}");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
