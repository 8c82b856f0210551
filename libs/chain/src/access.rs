use std::time::Duration;

use alloy::primitives::{Address, BlockNumber, TxHash};
use eyre::Result;
use futures_util::stream::BoxStream;

use crate::types::{BlockTxs, TransferEvent, TxRecord};

/// Read capability over the chain: head height, blocks with transaction
/// bodies, single transactions, historical transfer logs, and live streams
/// of new heads and transfer logs.
#[async_trait::async_trait]
pub trait ChainAccess: Send + Sync {
    async fn head_number(&self) -> Result<BlockNumber>;

    async fn block_with_transactions(&self, number: BlockNumber) -> Result<Option<BlockTxs>>;

    async fn transaction_by_hash(&self, hash: TxHash) -> Result<Option<TxRecord>>;

    /// Transfer logs emitted by `address` over the inclusive height range,
    /// ascending by block number and log index.
    async fn transfer_logs(
        &self,
        address: Address,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<TransferEvent>>;

    /// Addresses that emitted a log in the transaction's receipt.
    async fn transaction_log_addresses(&self, hash: TxHash) -> Result<Vec<Address>>;

    /// Stream of new head heights. The stream ending or erroring is a
    /// session-fatal condition for callers.
    async fn watch_heads(
        &self,
        poll_interval: Duration,
    ) -> Result<BoxStream<'static, BlockNumber>>;

    /// Live stream of transfer logs emitted by `address`.
    async fn watch_transfer_logs(
        &self,
        address: Address,
        poll_interval: Duration,
    ) -> Result<BoxStream<'static, TransferEvent>>;
}
