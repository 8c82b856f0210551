use sqlx::FromRow;

/// A forwarded transaction as stored. Hashes, addresses and amounts are kept
/// as raw bytes; `hash` carries the uniqueness constraint that makes
/// duplicate inserts detectable.
#[derive(Clone, FromRow, PartialEq, Eq)]
pub struct Transaction {
    pub hash: Vec<u8>,
    pub block_hash: Option<Vec<u8>>,
    pub block_number: Option<i64>,
    pub transaction_index: Option<i64>,
    pub from_address: Vec<u8>,
    pub to_address: Option<Vec<u8>>,
    pub value: Vec<u8>,
    pub nonce: i64,
    pub gas: i64,
    pub gas_price: Option<Vec<u8>>,
    pub input: Vec<u8>,
    pub tokens_transferred: Option<Vec<u8>>,
}
