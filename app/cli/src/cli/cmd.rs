use clap::{Parser, Subcommand};

use crate::cli::query::args::Query;

use super::engine::args::Args;

#[derive(Parser, Debug)]
#[command(name = "token-indexer")]
#[command(about = "Resumable token transaction ingestion pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the ingestion pipeline
    Engine(Args),
    /// Query indexed results
    Query(Query),
}
