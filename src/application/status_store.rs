// Latest-status side channel consumed by the home page panel
use indexmap::IndexMap;
use serde::Serialize;

/// The newest reading seen from one provider on one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSnapshot {
    pub status: String,
    pub ts: String,
    pub eta_min: Option<f64>,
    pub error: Option<String>,
}

/// Latest snapshot per provider for one route, in first-seen provider order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteLatest {
    pub providers: IndexMap<String, ProviderSnapshot>,
}

/// Read side of the latest-status cache. The home page panel reads this
/// store instead of deriving from the fetched sample list; updates are owned
/// by a collaborator outside the rendering core.
pub trait LatestStatusStore: Send + Sync {
    fn latest_for_route(&self, route_id: i64) -> Option<RouteLatest>;
}
