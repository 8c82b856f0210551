use alloy::primitives::Address;
use clap::ValueEnum;
use eyre::{Result, eyre};
use queue::broker::AckMode;

#[derive(Debug, Clone, ValueEnum)]
pub enum CliAckMode {
    /// Remove a message from the queue on receipt
    FireAndForget,
    /// Acknowledge only after the storage write resolves
    AfterWrite,
}

impl From<CliAckMode> for AckMode {
    fn from(value: CliAckMode) -> Self {
        match value {
            CliAckMode::FireAndForget => AckMode::FireAndForget,
            CliAckMode::AfterWrite => AckMode::AfterProcess,
        }
    }
}

pub fn parse_address(input: &str) -> Result<Address> {
    input.trim().parse::<Address>().map_err(|e| eyre!("Invalid address {input:?}: {e}"))
}
