// Shared latest-status store fed by the background refresher
use crate::application::status_store::{LatestStatusStore, ProviderSnapshot, RouteLatest};
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-wide latest-status cache. Writers call [`record`](Self::record);
/// the home page panel only reads through the [`LatestStatusStore`] trait.
#[derive(Default)]
pub struct SharedStatusStore {
    inner: RwLock<HashMap<i64, RouteLatest>>,
}

impl SharedStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the newest snapshot for one provider on one route, replacing
    /// any earlier snapshot from the same provider.
    pub fn record(&self, route_id: i64, provider: &str, snapshot: ProviderSnapshot) {
        let mut inner = self.inner.write().expect("status store lock poisoned");
        inner
            .entry(route_id)
            .or_default()
            .providers
            .insert(provider.to_string(), snapshot);
    }
}

impl LatestStatusStore for SharedStatusStore {
    fn latest_for_route(&self, route_id: i64) -> Option<RouteLatest> {
        self.inner
            .read()
            .expect("status store lock poisoned")
            .get(&route_id)
            .cloned()
    }
}
