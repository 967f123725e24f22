use px_db::RefreshTokenStore;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodically delete expired refresh records until shutdown is signalled.
///
/// Sweeping is best effort: a failed pass is logged and retried on the next tick.
pub fn spawn_sweeper(
    store: Arc<dyn RefreshTokenStore>,
    interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!("Refresh token sweeper started ({}s interval)", interval.as_secs());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match store.sweep_expired(Utc::now()).await {
                        Ok(0) => log::debug!("Sweep found no expired refresh tokens"),
                        Ok(removed) => log::info!("Swept {} expired refresh tokens", removed),
                        Err(e) => log::error!("Refresh token sweep failed: {}", e),
                    }
                }
                _ = shutdown.recv() => {
                    log::info!("Refresh token sweeper stopping");
                    break;
                }
            }
        }
    })
}
