use alloy::consensus::Transaction as ConsensusTx;
use alloy::network::TransactionResponse;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::{Block, Log, Transaction};
use eyre::{Result, eyre};

use crate::types::{BlockTxs, TransferEvent, TxRecord};

// Qualified calls: the response and consensus traits overlap on accessor
// names.
impl From<&Transaction> for TxRecord {
    fn from(tx: &Transaction) -> Self {
        Self {
            hash: TransactionResponse::tx_hash(tx),
            block_hash: tx.block_hash,
            block_number: tx.block_number,
            transaction_index: tx.transaction_index,
            from: tx.inner.signer(),
            to: ConsensusTx::to(tx),
            value: ConsensusTx::value(tx),
            nonce: ConsensusTx::nonce(tx),
            gas: ConsensusTx::gas_limit(tx),
            gas_price: ConsensusTx::gas_price(tx),
            input: ConsensusTx::input(tx).clone(),
        }
    }
}

impl TryFrom<&Block> for BlockTxs {
    type Error = eyre::Report;

    fn try_from(block: &Block) -> Result<Self> {
        let transactions = block
            .transactions
            .as_transactions()
            .ok_or_else(|| eyre!("block {} fetched without transaction bodies", block.number()))?
            .iter()
            .map(TxRecord::from)
            .collect();

        Ok(Self { number: block.number(), hash: block.header.hash, transactions })
    }
}

impl TryFrom<&Log> for TransferEvent {
    type Error = eyre::Report;

    fn try_from(log: &Log) -> Result<Self> {
        Ok(Self {
            block_number: log.block_number.ok_or_else(|| eyre!("missing block_number"))?,
            log_index: log.log_index.ok_or_else(|| eyre!("missing log_index"))?,
            transaction_hash: log
                .transaction_hash
                .ok_or_else(|| eyre!("missing transaction_hash"))?,
            from: Address::from_word(*log.topics().get(1).ok_or_else(|| eyre!("missing from"))?),
            to: Address::from_word(*log.topics().get(2).ok_or_else(|| eyre!("missing to"))?),
            value: U256::from_be_slice(&log.data().data),
        })
    }
}
