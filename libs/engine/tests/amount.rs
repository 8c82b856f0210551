#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, B256, U256};
    use chain::types::TransferEvent;
    use engine::amount::{self, TRANSFER_SELECTOR, TokenAmount};

    fn base_units(tokens: u64) -> U256 {
        U256::from(tokens) * U256::from(10u64).pow(U256::from(18))
    }

    fn transfer_input(to: Address, amount: U256) -> Vec<u8> {
        let mut input = TRANSFER_SELECTOR.to_vec();
        input.extend_from_slice(to.into_word().as_slice());
        input.extend_from_slice(&amount.to_be_bytes::<32>());
        input
    }

    #[test]
    fn decodes_a_transfer_call() {
        let input = transfer_input(Address::repeat_byte(0x02), base_units(7));

        let amount = amount::from_input(&input);

        assert_eq!(amount.whole_tokens(), U256::from(7u64));
        assert_eq!(amount.base_units(), base_units(7));
    }

    #[test]
    fn a_non_matching_selector_is_zero() {
        let mut input = transfer_input(Address::repeat_byte(0x02), base_units(7));
        input[0] ^= 0xFF;

        assert_eq!(amount::from_input(&input), TokenAmount::ZERO);
    }

    #[test]
    fn truncated_input_is_zero() {
        let input = transfer_input(Address::repeat_byte(0x02), base_units(7));

        assert_eq!(amount::from_input(&input[..60]), TokenAmount::ZERO);
        assert_eq!(amount::from_input(&[]), TokenAmount::ZERO);
        assert_eq!(amount::from_input(&TRANSFER_SELECTOR), TokenAmount::ZERO);
    }

    #[test]
    fn takes_the_amount_from_an_event_payload() {
        let event = TransferEvent {
            block_number: 42,
            log_index: 0,
            transaction_hash: B256::repeat_byte(0x22),
            from: Address::repeat_byte(0x01),
            to: Address::repeat_byte(0x02),
            value: base_units(3),
        };

        assert_eq!(amount::from_event(&event).whole_tokens(), U256::from(3u64));
    }

    #[test]
    fn renders_fixed_point_decimals_exactly() {
        let one_and_a_half = U256::from(15u64) * U256::from(10u64).pow(U256::from(17));

        let amount = TokenAmount::from_base_units(one_and_a_half);

        assert_eq!(amount.to_string(), "1.500000000000000000");
        assert_eq!(amount.whole_tokens(), U256::from(1u64));
    }
}
