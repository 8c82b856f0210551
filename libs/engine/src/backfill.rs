use alloy::primitives::{Address, BlockNumber};
use chain::access::ChainAccess;
use chain::types::TransferEvent;
use eyre::{Result, eyre};
use queue::broker::QueueHandle;

use crate::amount;
use crate::checkpointer::Checkpointer;
use crate::message::TxMessage;

/// Resolves the event's transaction and attaches the amount decoded from the
/// event payload, which is authoritative over input decoding.
pub(crate) async fn enrich_event(
    chain: &dyn ChainAccess,
    event: &TransferEvent,
) -> Result<TxMessage> {
    let tx = chain
        .transaction_by_hash(event.transaction_hash)
        .await?
        .ok_or_else(|| eyre!("transaction {} not found", event.transaction_hash))?;

    let tokens_transferred = amount::from_event(event);

    Ok(TxMessage {
        tx,
        tokens_transferred: (!tokens_transferred.is_zero()).then_some(tokens_transferred),
    })
}

pub struct EventBackfillWorker<'a> {
    chain: &'a dyn ChainAccess,
    queue: &'a QueueHandle,
    checkpointer: &'a Checkpointer,
    contract: Address,
}

impl<'a> EventBackfillWorker<'a> {
    pub fn new(
        chain: &'a dyn ChainAccess,
        queue: &'a QueueHandle,
        checkpointer: &'a Checkpointer,
        contract: Address,
    ) -> Self {
        Self { chain, queue, checkpointer, contract }
    }

    /// Drains historical transfer logs over the inclusive range into the
    /// queue, checkpointing after every delivered event. A failing event is
    /// skipped so the rest of the range still goes through.
    pub async fn run(&self, from: BlockNumber, to: BlockNumber) -> Result<()> {
        let events = self.chain.transfer_logs(self.contract, from, to).await?;
        let total = events.len();

        for event in &events {
            if let Err(e) = self.process_event(event).await {
                tracing::error!("Skipping event at block {}: {e:?}", event.block_number);
            }
        }

        tracing::info!("Events processed: {total}");

        Ok(())
    }

    async fn process_event(&self, event: &TransferEvent) -> Result<()> {
        let message = enrich_event(self.chain, event).await?;

        self.queue.publish(message.to_bytes()?);

        let height = message.tx.block_number.unwrap_or(event.block_number);
        self.checkpointer.advance_event(height).await?;

        Ok(())
    }
}
