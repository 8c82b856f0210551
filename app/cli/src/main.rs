mod cli {
    pub mod engine {
        pub mod args;
        pub mod run;
    }
    pub mod query {
        pub mod args;
        pub mod read;
        pub mod response;
        pub mod run;
    }
    pub mod cmd;
    pub mod read;
}

use clap::Parser;
use eyre::Result;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    match &cli.command {
        Command::Engine(args) => {
            tracing::info!("Engine Command: {args:?}");
            cli::engine::run::start(args).await
        }
        Command::Query(query) => {
            tracing::info!("Query Command: {query:?}");
            cli::query::run::select(query).await
        }
    }
}

fn init_tracing(cli: &Cli) {
    match &cli.command {
        Command::Engine(_) => {
            // install global subscriber configured based on RUST_LOG envvar.
            tracing_subscriber::fmt::init();
        }
        Command::Query(_) => {
            // keep stdout clean for the JSON response
            tracing_subscriber::fmt::Subscriber::builder().with_writer(std::io::stderr).init();
        }
    }
}
