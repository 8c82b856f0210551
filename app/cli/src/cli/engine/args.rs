use clap::Parser;

use crate::cli::read::CliAckMode;

#[derive(Parser, Debug)]
#[command(about = "Start the ingestion pipeline", long_about = None)]
pub struct Args {
    /// Node provider connection string
    #[arg(short, long)]
    pub rpc_url: String,

    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Tracked token contract address
    #[arg(short, long)]
    pub contract: String,

    /// Height to start scanning from; defaults to the chain head
    #[arg(long)]
    pub from_height: Option<u64>,

    /// Poll interval in milliseconds
    #[arg(long, default_value_t = 500)]
    pub poll_interval: u64,

    /// Storage liveness probe interval in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub health_interval: u64,

    /// Delay before a failed session restarts, in milliseconds
    #[arg(long, default_value_t = 5_000)]
    pub restart_delay: u64,

    /// Queue acknowledgment policy
    #[arg(long, value_enum, default_value = "after-write")]
    pub ack_mode: CliAckMode,

    /// Also follow the contract's live event stream
    #[arg(long, default_value_t = false)]
    pub live_events: bool,
}
