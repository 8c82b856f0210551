use std::time::Duration;

use alloy::primitives::{Address, BlockNumber};
use queue::broker::AckMode;

#[derive(Debug, Clone)]
pub struct Args {
    pub contract: Address,
    pub requested_start: Option<BlockNumber>,
    pub poll_interval: Duration,
    pub health_interval: Duration,
    pub restart_delay: Duration,
    pub ack_mode: AckMode,
    pub live_events: bool,
}
