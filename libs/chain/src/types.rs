use alloy::primitives::{Address, B256, BlockNumber, Bytes, TxHash, U256};
use serde::{Deserialize, Serialize};

/// A transaction as read from the chain, trimmed to the fields the pipeline
/// carries downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    pub hash: TxHash,
    pub block_hash: Option<B256>,
    pub block_number: Option<BlockNumber>,
    pub transaction_index: Option<u64>,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
    pub nonce: u64,
    pub gas: u64,
    pub gas_price: Option<u128>,
    pub input: Bytes,
}

/// A block together with its full transaction bodies.
#[derive(Debug, Clone)]
pub struct BlockTxs {
    pub number: BlockNumber,
    pub hash: B256,
    pub transactions: Vec<TxRecord>,
}

/// A decoded ERC-20 Transfer log. Transient: always turned into an enriched
/// transaction before leaving the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub block_number: BlockNumber,
    pub log_index: u64,
    pub transaction_hash: TxHash,
    pub from: Address,
    pub to: Address,
    pub value: U256,
}
