//! Process-wide stop signal shared by the listener, the sweeper and the
//! readiness probe.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            shutdown_tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Raw receiver, for tasks that `select!` on shutdown
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Request shutdown. Only the first call notifies subscribers.
    pub fn shutdown(&self) {
        if self.triggered.swap(true, Ordering::SeqCst) {
            log::debug!("Shutdown already in progress");
            return;
        }

        log::info!("Shutdown requested, draining connections and stopping the sweeper");
        let _ = self.shutdown_tx.send(());
    }

    /// True once shutdown was requested; readiness reports unavailable from then on
    pub fn is_shutting_down(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard {
            shutdown_rx: self.subscribe(),
            triggered: Arc::clone(&self.triggered),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Awaitable view of the coordinator
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownGuard {
    /// Resolves immediately when shutdown was requested before this guard existed
    pub async fn wait(&mut self) {
        if self.triggered.load(Ordering::SeqCst) {
            return;
        }

        let _ = self.shutdown_rx.recv().await;
    }
}
