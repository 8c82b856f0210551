#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, B256, Bytes, LogData, U256, keccak256};
    use alloy::rpc::types::Log;

    use chain::rpc::TRANSFER_EVENT_SIGNATURE;
    use chain::types::TransferEvent;

    fn transfer_log(
        contract: Address,
        from: Address,
        to: Address,
        value: U256,
        block_number: Option<u64>,
    ) -> Log {
        let topics =
            vec![keccak256(TRANSFER_EVENT_SIGNATURE.as_bytes()), from.into_word(), to.into_word()];
        let data = Bytes::from(value.to_be_bytes::<32>());

        Log {
            inner: alloy::primitives::Log {
                address: contract,
                data: LogData::new_unchecked(topics, data),
            },
            block_hash: Some(B256::repeat_byte(0x11)),
            block_number,
            block_timestamp: None,
            transaction_hash: Some(B256::repeat_byte(0x22)),
            transaction_index: Some(0),
            log_index: Some(7),
            removed: false,
        }
    }

    #[test]
    fn decodes_a_transfer_log() {
        let contract = Address::repeat_byte(0xAA);
        let from = Address::repeat_byte(0x01);
        let to = Address::repeat_byte(0x02);
        let value = U256::from(1_000u64);

        let log = transfer_log(contract, from, to, value, Some(42));
        let event = TransferEvent::try_from(&log).unwrap();

        assert_eq!(event.block_number, 42);
        assert_eq!(event.log_index, 7);
        assert_eq!(event.transaction_hash, B256::repeat_byte(0x22));
        assert_eq!(event.from, from);
        assert_eq!(event.to, to);
        assert_eq!(event.value, value);
    }

    #[test]
    fn rejects_a_pending_log() {
        let log = transfer_log(
            Address::repeat_byte(0xAA),
            Address::repeat_byte(0x01),
            Address::repeat_byte(0x02),
            U256::from(1u64),
            None,
        );

        assert!(TransferEvent::try_from(&log).is_err());
    }

    #[test]
    fn rejects_a_log_without_indexed_parties() {
        let mut log = transfer_log(
            Address::repeat_byte(0xAA),
            Address::repeat_byte(0x01),
            Address::repeat_byte(0x02),
            U256::from(1u64),
            Some(42),
        );
        let topics = vec![log.topics()[0]];
        log.inner.data = LogData::new_unchecked(topics, log.data().data.clone());

        assert!(TransferEvent::try_from(&log).is_err());
    }
}
