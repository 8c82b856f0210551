use std::fmt;

use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, B256, U256};
use chain::types::TransferEvent;
use serde::{Deserialize, Serialize};

/// transfer(address,uint256)
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Decimals of the tracked token's base unit.
pub const TOKEN_DECIMALS: u8 = 18;

/// A token quantity carried as raw base units: fixed point, never floating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(U256::ZERO);

    pub fn from_base_units(units: U256) -> Self {
        Self(units)
    }

    pub fn base_units(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The amount scaled down to whole tokens, truncating any fraction.
    pub fn whole_tokens(&self) -> U256 {
        self.0 / U256::from(10u64).pow(U256::from(TOKEN_DECIMALS))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = format_units(self.0, TOKEN_DECIMALS).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

/// Decodes the transferred amount from raw call input: the transfer selector
/// followed by a recipient word and an amount word. Anything else is zero.
pub fn from_input(input: &[u8]) -> TokenAmount {
    if input.len() < 68 || input[..4] != TRANSFER_SELECTOR {
        return TokenAmount::ZERO;
    }

    let recipient = Address::from_word(B256::from_slice(&input[4..36]));
    let amount = U256::from_be_slice(&input[36..68]);
    tracing::debug!("Decoded transfer to {recipient}, amount {amount}");

    TokenAmount::from_base_units(amount)
}

/// The amount a transfer event reports. Event payloads also cover transfers
/// the input decoder cannot see, such as transferFrom and internal calls.
pub fn from_event(event: &TransferEvent) -> TokenAmount {
    TokenAmount::from_base_units(event.value)
}
