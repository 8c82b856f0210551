use alloy::primitives::{Address, BlockNumber};
use chain::access::ChainAccess;
use eyre::{Result, eyre};
use queue::broker::QueueHandle;

use crate::checkpointer::Checkpointer;
use crate::message::TxMessage;

pub struct BlockScanWorker<'a> {
    chain: &'a dyn ChainAccess,
    queue: &'a QueueHandle,
    checkpointer: &'a Checkpointer,
    contract: Address,
}

impl<'a> BlockScanWorker<'a> {
    pub fn new(
        chain: &'a dyn ChainAccess,
        queue: &'a QueueHandle,
        checkpointer: &'a Checkpointer,
        contract: Address,
    ) -> Self {
        Self { chain, queue, checkpointer, contract }
    }

    /// Scans the inclusive range ascending, publishing every transaction
    /// addressed to the tracked contract. Returns the last fully processed
    /// height; on a failure at height `i` that is `i - 1`, so the failing
    /// block is retried by the next invocation.
    pub async fn scan_range(&self, from: BlockNumber, to: BlockNumber) -> BlockNumber {
        let mut last_processed = from.saturating_sub(1);

        for height in from..=to {
            match self.process_block(height).await {
                Ok(matched) => {
                    last_processed = height;
                    if matched > 0 {
                        tracing::info!("Block {height}: published {matched} transactions");
                    }
                }
                Err(e) => {
                    tracing::error!("Scan stopped at block {height}: {e:?}");
                    return height.saturating_sub(1);
                }
            }
        }

        last_processed
    }

    async fn process_block(&self, height: BlockNumber) -> Result<usize> {
        let block = self
            .chain
            .block_with_transactions(height)
            .await?
            .ok_or_else(|| eyre!("block {height} not found"))?;

        let mut matched = 0;
        for tx in &block.transactions {
            if tx.to == Some(self.contract) {
                // the token amount is left for the forwarding consumer to
                // fill in; block-path transactions were not decoded at event
                // granularity
                let message = TxMessage { tx: tx.clone(), tokens_transferred: None };
                self.queue.publish(message.to_bytes()?);
                matched += 1;
            }
        }

        self.checkpointer.advance_block(height).await?;

        Ok(matched)
    }
}
