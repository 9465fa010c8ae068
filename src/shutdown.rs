//! Cooperative shutdown signal shared by the binary and the runtime.

use std::sync::Arc;

use tokio::sync::watch;

/// Owner of the shutdown flag. Hands out [`ShutdownHandle`]s.
pub struct ShutdownCoordinator {
    handle: ShutdownHandle,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            handle: ShutdownHandle {
                sender: Arc::new(sender),
            },
        }
    }

    /// Start shutdown. Later calls are no-ops.
    pub fn signal(&self) {
        self.handle.signal();
    }

    pub fn handle(&self) -> ShutdownHandle {
        self.handle.clone()
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable view of the shutdown flag.
#[derive(Clone)]
pub struct ShutdownHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    pub fn signal(&self) {
        if !self.sender.send_replace(true) {
            tracing::info!("Graceful shutdown initiated");
        }
    }

    /// Resolve once shutdown has been signalled, immediately if it already was.
    pub async fn wait(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = receiver.wait_for(|down| *down).await;
    }
}
