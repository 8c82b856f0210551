use std::fmt::{Debug, Formatter, Result};

use crate::{transaction::model::Transaction, utils};

impl Debug for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Transaction")
            .field("hash", &utils::bytes_to_hex(&self.hash))
            .field("block_number", &self.block_number)
            .field("from_address", &utils::bytes_to_address(&self.from_address))
            .field("to_address", &self.to_address.as_deref().map(utils::bytes_to_address))
            .field("value", &utils::bytes_to_u256_display(&self.value))
            .field(
                "tokens_transferred",
                &self.tokens_transferred.as_deref().map(utils::bytes_to_u256_display),
            )
            .finish_non_exhaustive()
    }
}
