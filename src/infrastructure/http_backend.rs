// HTTP client for the monitoring backend API
use crate::application::backend::RouteBackend;
use crate::application::query::SampleQuery;
use crate::domain::sample::{LegacyRouteConfig, Route, RoutePath, Sample};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpRouteBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRouteBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Backend request {} failed with status {}: {}", url, status, body);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

#[async_trait]
impl RouteBackend for HttpRouteBackend {
    async fn fetch_routes(&self) -> Result<Vec<Route>> {
        self.get_json("/api/routes").await
    }

    async fn fetch_samples(&self, query: &SampleQuery) -> Result<Vec<Sample>> {
        self.get_json(&query.samples_path()).await
    }

    async fn fetch_route_path(&self, route_id: i64) -> Result<RoutePath> {
        self.get_json(&format!("/api/routes/{}/path", route_id)).await
    }

    async fn fetch_route_config(&self) -> Result<LegacyRouteConfig> {
        self.get_json("/api/config").await
    }
}
