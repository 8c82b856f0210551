use std::sync::Arc;
use std::time::Duration;

use alloy::transports::http::reqwest::Url;
use chain::access::ChainAccess;
use chain::rpc::NodeClient;
use engine::engine::Engine;
use engine::message::TRANSACTIONS_QUEUE;
use eyre::Result;
use queue::broker::Broker;
use queue::connect::{RetryPolicy, connect_with_retry};
use store::client::Client;

use crate::cli::engine::args::Args;
use crate::cli::read;

pub async fn start(args: &Args) -> Result<()> {
    let node_client = NodeClient::new(Url::parse(&args.rpc_url)?);
    let chain: Arc<dyn ChainAccess> = Arc::new(node_client);

    let client =
        connect_with_retry(&RetryPolicy::default(), || Client::init(&args.db_url)).await?;

    let broker = Broker::new();
    let queue = broker.declare(TRANSACTIONS_QUEUE);

    let engine_args = engine::args::Args {
        contract: read::parse_address(&args.contract)?,
        requested_start: args.from_height,
        poll_interval: Duration::from_millis(args.poll_interval),
        health_interval: Duration::from_millis(args.health_interval),
        restart_delay: Duration::from_millis(args.restart_delay),
        ack_mode: args.ack_mode.clone().into(),
        live_events: args.live_events,
    };

    tracing::info!("Starting the pipeline {engine_args:?}");

    let engine = Engine::start(engine_args, chain, queue, client);

    // Wait for user to request shutdown (SIGINT)
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down pipeline...");

    // Gracefully shutdown
    engine.shutdown().await;

    Ok(())
}
