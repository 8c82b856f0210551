#[cfg(test)]
mod tests {
    use alloy::primitives::U256;
    use eyre::Result;
    use store::checkpoint::model::Checkpoint;
    use store::checkpoint::store::Store as CheckpointStore;
    use store::client::Client;
    use store::transaction::model::Transaction;
    use store::transaction::store::Store as TransactionStore;
    use store::utils;

    fn transaction(hash_byte: u8, block_number: i64, tokens: Option<u64>) -> Transaction {
        Transaction {
            hash: vec![hash_byte; 32],
            block_hash: Some(vec![0x11; 32]),
            block_number: Some(block_number),
            transaction_index: Some(0),
            from_address: vec![0x01; 20],
            to_address: Some(vec![0x02; 20]),
            value: utils::u256_to_bytes(U256::from(1u64)),
            nonce: 1,
            gas: 21_000,
            gas_price: Some(vec![0x05; 16]),
            input: vec![],
            tokens_transferred: tokens.map(|t| utils::u256_to_bytes(U256::from(t))),
        }
    }

    #[tokio::test]
    async fn test_checkpoint_is_a_singleton() -> Result<()> {
        let db_url = "sqlite:file:store_checkpoint?mode=memory&cache=shared";
        let client = Client::init(db_url).await?;
        let store = CheckpointStore::new(client);

        assert_eq!(store.get().await?, None);

        store
            .replace(&Checkpoint {
                start_height: 100,
                last_processed_height: Some(100),
                last_processed_event_height: Some(100),
            })
            .await?;
        store
            .replace(&Checkpoint {
                start_height: 100,
                last_processed_height: Some(130),
                last_processed_event_height: Some(120),
            })
            .await?;

        let checkpoint = store.get().await?.unwrap();
        assert_eq!(checkpoint.start_height, 100);
        assert_eq!(checkpoint.last_processed_height, Some(130));
        assert_eq!(checkpoint.last_processed_event_height, Some(120));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_hash_surfaces_unique_violation() -> Result<()> {
        let db_url = "sqlite:file:store_duplicate?mode=memory&cache=shared";
        let client = Client::init(db_url).await?;
        let store = TransactionStore::new(client);

        store.insert_transaction(&transaction(0xAB, 100, None)).await?;

        let duplicate = store.insert_transaction(&transaction(0xAB, 100, None)).await;
        match duplicate {
            Err(sqlx::Error::Database(db_err)) => {
                assert!(db_err.message().contains("UNIQUE constraint failed: transactions.hash"));
            }
            other => panic!("expected a unique violation, got {other:?}"),
        }

        let stored = store.get_transactions().await?;
        assert_eq!(stored.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_sum_tokens_transferred_since_height() -> Result<()> {
        let db_url = "sqlite:file:store_sum?mode=memory&cache=shared";
        let client = Client::init(db_url).await?;
        let store = TransactionStore::new(client);

        store.insert_transaction(&transaction(0x01, 100, Some(5))).await?;
        store.insert_transaction(&transaction(0x02, 120, Some(7))).await?;
        store.insert_transaction(&transaction(0x03, 130, None)).await?;
        store.insert_transaction(&transaction(0x04, 140, Some(11))).await?;

        assert_eq!(store.sum_tokens_transferred_since(120).await?, U256::from(18u64));
        assert_eq!(store.sum_tokens_transferred_since(0).await?, U256::from(23u64));
        assert_eq!(store.sum_tokens_transferred_since(141).await?, U256::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete_by_hash() -> Result<()> {
        let db_url = "sqlite:file:store_crud?mode=memory&cache=shared";
        let client = Client::init(db_url).await?;
        let store = TransactionStore::new(client.clone());

        store.insert_transaction(&transaction(0xCD, 100, None)).await?;

        let mut updated = transaction(0xCD, 100, Some(9));
        updated.block_number = Some(101);
        assert!(store.update_transaction(&updated).await?);

        let fetched = store.get_transaction_by_hash(&[0xCD; 32]).await?.unwrap();
        assert_eq!(fetched.block_number, Some(101));
        assert_eq!(fetched.tokens_transferred, Some(utils::u256_to_bytes(U256::from(9u64))));

        assert!(store.delete_transaction(&[0xCD; 32]).await?);
        assert!(!store.delete_transaction(&[0xCD; 32]).await?);
        assert_eq!(store.get_transaction_by_hash(&[0xCD; 32]).await?, None);

        client.ping().await?;

        Ok(())
    }
}
