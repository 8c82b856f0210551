use crate::client::Client;
use crate::transaction::model::Transaction;
use crate::utils;
use alloy::primitives::{BlockNumber, U256};
use sqlx::Error;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // TRANSACTIONS
    // ---------------------------

    /// Plain insert. A duplicate hash surfaces as a database error carrying
    /// the UNIQUE constraint message so callers can treat it as a conflict.
    pub async fn insert_transaction(&self, tx: &Transaction) -> Result<(), Error> {
        let query = r#"
            INSERT INTO transactions (
                hash, block_hash, block_number, transaction_index,
                from_address, to_address, value, nonce, gas, gas_price,
                input, tokens_transferred
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#;

        sqlx::query(query)
            .bind(&tx.hash)
            .bind(&tx.block_hash)
            .bind(tx.block_number)
            .bind(tx.transaction_index)
            .bind(&tx.from_address)
            .bind(&tx.to_address)
            .bind(&tx.value)
            .bind(tx.nonce)
            .bind(tx.gas)
            .bind(&tx.gas_price)
            .bind(&tx.input)
            .bind(&tx.tokens_transferred)
            .execute(self.client.pool())
            .await?;
        Ok(())
    }

    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let query = r#"
            SELECT
                hash, block_hash, block_number, transaction_index,
                from_address, to_address, value, nonce, gas, gas_price,
                input, tokens_transferred
            FROM transactions
            ORDER BY block_number ASC, transaction_index ASC
            "#;
        let transactions = sqlx::query_as(query).fetch_all(self.client.pool()).await?;

        Ok(transactions)
    }

    pub async fn get_transaction_by_hash(
        &self,
        hash: &[u8],
    ) -> Result<Option<Transaction>, Error> {
        let query = r#"
            SELECT
                hash, block_hash, block_number, transaction_index,
                from_address, to_address, value, nonce, gas, gas_price,
                input, tokens_transferred
            FROM transactions
            WHERE hash = ?
            LIMIT 1
            "#;
        let transaction =
            sqlx::query_as(query).bind(hash).fetch_optional(self.client.pool()).await?;

        Ok(transaction)
    }

    /// Replaces the record identified by its hash. Returns false when no such
    /// record exists.
    pub async fn update_transaction(&self, tx: &Transaction) -> Result<bool, Error> {
        let query = r#"
            UPDATE transactions SET
                block_hash = ?, block_number = ?, transaction_index = ?,
                from_address = ?, to_address = ?, value = ?, nonce = ?,
                gas = ?, gas_price = ?, input = ?, tokens_transferred = ?
            WHERE hash = ?
            "#;
        let result = sqlx::query(query)
            .bind(&tx.block_hash)
            .bind(tx.block_number)
            .bind(tx.transaction_index)
            .bind(&tx.from_address)
            .bind(&tx.to_address)
            .bind(&tx.value)
            .bind(tx.nonce)
            .bind(tx.gas)
            .bind(&tx.gas_price)
            .bind(&tx.input)
            .bind(&tx.tokens_transferred)
            .bind(&tx.hash)
            .execute(self.client.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_transaction(&self, hash: &[u8]) -> Result<bool, Error> {
        let query = "DELETE FROM transactions WHERE hash = ?";
        let result = sqlx::query(query).bind(hash).execute(self.client.pool()).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Exact sum of `tokens_transferred` over records at or above the given
    /// height. Amounts are summed as U256 in process; SQLite cannot add
    /// 32-byte integers.
    pub async fn sum_tokens_transferred_since(
        &self,
        from_height: BlockNumber,
    ) -> Result<U256, Error> {
        let query = r#"
            SELECT tokens_transferred
            FROM transactions
            WHERE block_number >= ? AND tokens_transferred IS NOT NULL
            "#;
        let amounts: Vec<Vec<u8>> = sqlx::query_scalar(query)
            .bind(from_height as i64)
            .fetch_all(self.client.pool())
            .await?;

        let total = amounts
            .iter()
            .filter_map(|bytes| utils::bytes_to_u256(bytes))
            .fold(U256::ZERO, |acc, amount| acc.saturating_add(amount));

        Ok(total)
    }
}
