use store::transaction::model::Transaction;
use store::utils;

use crate::message::TxMessage;

impl From<&TxMessage> for Transaction {
    fn from(message: &TxMessage) -> Self {
        let tx = &message.tx;
        Self {
            hash: tx.hash.to_vec(),
            block_hash: tx.block_hash.map(|hash| hash.to_vec()),
            block_number: tx.block_number.map(|number| number as i64),
            transaction_index: tx.transaction_index.map(|index| index as i64),
            from_address: tx.from.to_vec(),
            to_address: tx.to.map(|address| address.to_vec()),
            value: utils::u256_to_bytes(tx.value),
            nonce: tx.nonce as i64,
            gas: tx.gas as i64,
            gas_price: tx.gas_price.map(|price| price.to_be_bytes().to_vec()),
            input: tx.input.to_vec(),
            tokens_transferred: message
                .tokens_transferred
                .map(|amount| utils::u256_to_bytes(amount.base_units())),
        }
    }
}
