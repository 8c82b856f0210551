use clap::Parser;

use crate::cli::query::read::Entity;

#[derive(Parser, Debug)]
#[command(about = "Query indexed results", long_about = None)]
pub struct Query {
    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Node provider connection string; needed for interaction checks
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Tracked token contract address
    #[arg(short, long)]
    pub contract: String,

    /// Entity to query
    #[arg(short, long, value_enum)]
    pub entity: Entity,

    /// Transaction hash for interaction checks
    #[arg(long)]
    pub tx_hash: Option<String>,
}
