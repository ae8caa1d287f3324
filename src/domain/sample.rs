// Sample and route models as served by the monitoring backend
use serde::Deserialize;

/// One measurement attempt by one provider for one route.
///
/// `duration_min` is meaningful only when `status == "ok"`; a failed sample
/// may still carry a stale numeric value, so readers must go through
/// [`Sample::eta_minutes`].
#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    pub ts: String,
    pub provider: String,
    #[serde(default)]
    pub route_id: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub duration_min: Option<f64>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Sample {
    /// ETA in minutes, present only for successful readings.
    pub fn eta_minutes(&self) -> Option<f64> {
        if self.status == "ok" {
            self.duration_min
        } else {
            None
        }
    }
}

/// A monitored route; `id` is the join key from `Sample::route_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl Route {
    /// Selector entry text; disabled routes are marked.
    pub fn option_label(&self) -> String {
        if self.enabled {
            self.name.clone()
        } else {
            format!("{} (off)", self.name)
        }
    }
}

/// Geometry returned by the route-path endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutePath {
    #[serde(default)]
    pub points: Vec<[f64; 2]>,
}

/// Single-route deployments expose one start/end pair instead of a route list.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRouteConfig {
    pub start: [f64; 2],
    pub end: [f64; 2],
}
