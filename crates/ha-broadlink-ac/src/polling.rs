//! Periodic status polling

use ha_climate::ClimateEntity;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Background task calling `update` on a fixed interval
///
/// The entity sits behind a mutex shared with whoever issues commands, so
/// a poll never overlaps a command on the same entity.
pub struct PollingTask {
    shutdown_tx: broadcast::Sender<()>,
    handle: JoinHandle<()>,
}

impl PollingTask {
    /// Start polling; the first poll runs immediately
    pub fn spawn<E>(entity: Arc<Mutex<E>>, interval: Duration) -> Self
    where
        E: ClimateEntity + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        entity.lock().await.update().await;
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Polling stopped");
                        break;
                    }
                }
            }
        });

        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Stop polling and wait for the task to finish
    pub async fn shutdown(self) {
        // Only fails if the task already exited
        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.handle.await {
            warn!(error = %e, "Polling task ended abnormally");
        }
    }
}
