use chain::types::TxRecord;
use eyre::Result;
use serde::{Deserialize, Serialize};

use crate::amount::TokenAmount;

pub const TRANSACTIONS_QUEUE: &str = "transactions";

/// What travels over the queue: the chain record plus the token amount the
/// event path decoded, when there was one. Serialized as plain JSON with no
/// envelope or delivery identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxMessage {
    pub tx: TxRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_transferred: Option<TokenAmount>,
}

impl TxMessage {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
