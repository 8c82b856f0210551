use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use chain::access::ChainAccess;
use eyre::{Result, eyre};
use futures_util::StreamExt;
use queue::broker::QueueHandle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::backfill::enrich_event;

/// Live counterpart of the event backfill: follows the contract's transfer
/// log stream and publishes each enriched transaction as it arrives. Keeps
/// no checkpoint state; the downstream dedup absorbs overlap with the block
/// path.
pub struct LiveEventWatcher {
    chain: Arc<dyn ChainAccess>,
    queue: QueueHandle,
    contract: Address,
    poll_interval: Duration,
    restart_delay: Duration,
}

impl LiveEventWatcher {
    pub fn new(
        chain: Arc<dyn ChainAccess>,
        queue: QueueHandle,
        contract: Address,
        poll_interval: Duration,
        restart_delay: Duration,
    ) -> Self {
        Self { chain, queue, contract, poll_interval, restart_delay }
    }

    pub fn spawn(self, shutdown_tx: broadcast::Sender<()>) -> JoinHandle<()> {
        let mut shutdown_rx = shutdown_tx.subscribe();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    outcome = self.follow() => {
                        if let Err(e) = outcome {
                            tracing::error!("Event stream failed: {e:?}");
                        }
                    }
                }

                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = tokio::time::sleep(self.restart_delay) => {}
                }
            }
        })
    }

    async fn follow(&self) -> Result<()> {
        let mut events =
            self.chain.watch_transfer_logs(self.contract, self.poll_interval).await?;

        while let Some(event) = events.next().await {
            tracing::info!("New event received at block {}", event.block_number);

            match enrich_event(self.chain.as_ref(), &event).await {
                Ok(message) => match message.to_bytes() {
                    Ok(payload) => self.queue.publish(payload),
                    Err(e) => tracing::error!("Failed to serialize event message: {e:?}"),
                },
                Err(e) => {
                    tracing::error!("Skipping event at block {}: {e:?}", event.block_number)
                }
            }
        }

        Err(eyre!("event stream ended"))
    }
}
