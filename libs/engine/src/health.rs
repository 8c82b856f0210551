use std::time::Duration;

use store::client::Client;

/// Blocks until the storage dependency answers its liveness probe. Retries
/// forever on a fixed interval; an operator intervenes if it never comes up.
pub struct HealthGate {
    interval: Duration,
}

impl HealthGate {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn wait(&self, client: &Client) {
        loop {
            match client.ping().await {
                Ok(()) => {
                    tracing::info!("Storage ready");
                    return;
                }
                Err(e) => {
                    tracing::warn!("Storage not ready, retrying in {:?}: {e}", self.interval);
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}
