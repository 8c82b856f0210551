use std::time::Duration;

use alloy::primitives::BlockNumber;
use chain::access::ChainAccess;
use eyre::{Result, eyre};
use futures_util::StreamExt;

use crate::checkpointer::Checkpointer;
use crate::scan::BlockScanWorker;

/// Tails new heads after catch-up. Notifications are handled one at a time
/// by this single loop, so two scans never run over overlapping ranges.
pub struct LiveHeadWatcher<'a> {
    chain: &'a dyn ChainAccess,
    scanner: &'a BlockScanWorker<'a>,
    checkpointer: &'a Checkpointer,
    poll_interval: Duration,
}

impl<'a> LiveHeadWatcher<'a> {
    pub fn new(
        chain: &'a dyn ChainAccess,
        scanner: &'a BlockScanWorker<'a>,
        checkpointer: &'a Checkpointer,
        poll_interval: Duration,
    ) -> Self {
        Self { chain, scanner, checkpointer, poll_interval }
    }

    /// Runs until the head stream drops, which is session-fatal: the caller
    /// restarts the whole session from the persisted checkpoint.
    pub async fn run(&self, mut last_processed: BlockNumber) -> Result<()> {
        let mut heads = self.chain.watch_heads(self.poll_interval).await?;

        while let Some(head) = heads.next().await {
            tracing::info!("New head received: {head}");

            if head > last_processed {
                last_processed = self.scanner.scan_range(last_processed + 1, head).await;
                self.checkpointer.advance_block(last_processed).await?;
            }
        }

        Err(eyre!("head stream ended"))
    }
}
