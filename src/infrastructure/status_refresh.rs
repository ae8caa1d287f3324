// Background poller keeping the latest-status store fresh
use crate::application::backend::RouteBackend;
use crate::application::query::SampleQuery;
use crate::application::status_store::ProviderSnapshot;
use crate::infrastructure::shared_status::SharedStatusStore;
use std::sync::Arc;
use std::time::Duration;

/// Polls recent samples and records the newest per route and provider. Owns
/// all writes to the store; the rendering core never updates it.
pub async fn run_status_refresh(
    backend: Arc<dyn RouteBackend>,
    store: Arc<SharedStatusStore>,
    every: Duration,
    window_hours: i64,
) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        if let Err(err) = refresh_once(backend.as_ref(), &store, window_hours).await {
            tracing::warn!("status refresh failed: {err:#}");
        }
    }
}

async fn refresh_once(
    backend: &dyn RouteBackend,
    store: &SharedStatusStore,
    window_hours: i64,
) -> anyhow::Result<()> {
    let query = SampleQuery::new(window_hours);
    let samples = backend.fetch_samples(&query).await?;

    // Samples arrive ascending, so later records win per provider.
    for sample in &samples {
        if let Some(route_id) = sample.route_id {
            store.record(
                route_id,
                &sample.provider,
                ProviderSnapshot {
                    status: sample.status.clone(),
                    ts: sample.ts.clone(),
                    eta_min: sample.eta_minutes(),
                    error: sample.error.clone(),
                },
            );
        }
    }

    tracing::debug!(count = samples.len(), "status refresh applied");
    Ok(())
}
