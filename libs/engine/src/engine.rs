use std::sync::Arc;

use alloy::primitives::BlockNumber;
use chain::access::ChainAccess;
use eyre::Result;
use queue::broker::QueueHandle;
use store::checkpoint::store::Store as CheckpointStore;
use store::client::Client;
use store::transaction::store::Store as TransactionStore;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::args::Args;
use crate::backfill::EventBackfillWorker;
use crate::checkpointer::Checkpointer;
use crate::events::LiveEventWatcher;
use crate::forward::ForwardingConsumer;
use crate::health::HealthGate;
use crate::live::LiveHeadWatcher;
use crate::plan::plan_session;
use crate::scan::BlockScanWorker;

pub struct Engine {
    shutdown_tx: broadcast::Sender<()>,
    pipeline_handle: JoinHandle<()>,
    forwarder_handle: JoinHandle<()>,
    events_handle: Option<JoinHandle<()>>,
}

impl Engine {
    pub fn start(
        args: Args,
        chain: Arc<dyn ChainAccess>,
        queue: QueueHandle,
        client: Client,
    ) -> Engine {
        let checkpointer = Checkpointer::new(CheckpointStore::new(client.clone()));
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let forwarder = ForwardingConsumer::new(
            queue.clone(),
            TransactionStore::new(client.clone()),
            args.ack_mode,
        );
        let forwarder_handle = forwarder.spawn(shutdown_tx.clone());

        let events_handle = args.live_events.then(|| {
            LiveEventWatcher::new(
                Arc::clone(&chain),
                queue.clone(),
                args.contract,
                args.poll_interval,
                args.restart_delay,
            )
            .spawn(shutdown_tx.clone())
        });

        let pipeline_handle = tokio::spawn(run_sessions(
            args,
            chain,
            queue,
            checkpointer,
            client,
            shutdown_tx.subscribe(),
        ));

        Self { shutdown_tx, pipeline_handle, forwarder_handle, events_handle }
    }

    /// Signals shutdown and waits for the workers. In-flight publishes and
    /// forwards are abandoned once the final checkpoint save completes.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.pipeline_handle.await;
        let _ = self.forwarder_handle.await;
        if let Some(handle) = self.events_handle {
            let _ = handle.await;
        }
    }
}

async fn run_sessions(
    args: Args,
    chain: Arc<dyn ChainAccess>,
    queue: QueueHandle,
    checkpointer: Checkpointer,
    client: Client,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    let health = HealthGate::new(args.health_interval);
    let mut requested_start = args.requested_start;

    'sessions: loop {
        tokio::select! {
            _ = shutdown_rx.recv() => break 'sessions,
            outcome = run_session(
                &args,
                requested_start,
                chain.as_ref(),
                &queue,
                &checkpointer,
                &client,
                &health,
            ) => {
                match outcome {
                    // the next attempt resumes this session
                    Ok(session_start) => requested_start = Some(session_start),
                    Err(e) => tracing::error!("Session failed: {e:?}"),
                }
                tracing::warn!("Restarting session in {:?}", args.restart_delay);
            }
        }

        tokio::select! {
            _ = shutdown_rx.recv() => break 'sessions,
            _ = tokio::time::sleep(args.restart_delay) => {}
        }
    }

    // Best-effort final save of the resume state before exit.
    if let Err(e) = checkpointer.flush().await {
        tracing::warn!("Final checkpoint save failed: {e:?}");
    }
}

/// One session: gate on storage, plan the resume point, drain history, then
/// tail live heads until the stream drops. Returns the session start so the
/// next attempt can resume it.
async fn run_session(
    args: &Args,
    requested_start: Option<BlockNumber>,
    chain: &dyn ChainAccess,
    queue: &QueueHandle,
    checkpointer: &Checkpointer,
    client: &Client,
    health: &HealthGate,
) -> Result<BlockNumber> {
    health.wait(client).await;

    let head = chain.head_number().await?;
    let checkpoint = checkpointer.load().await?;
    let plan = plan_session(requested_start, head, checkpoint.as_ref());

    checkpointer.anchor(&plan).await?;
    tracing::info!("Session anchored: {plan:?} at head {head}");

    let backfill = EventBackfillWorker::new(chain, queue, checkpointer, args.contract);
    if let Err(e) = backfill.run(plan.event_start_height, head).await {
        tracing::error!("Event backfill failed: {e:?}");
    }

    let scanner = BlockScanWorker::new(chain, queue, checkpointer, args.contract);
    let mut last_processed = plan.start_height;
    if plan.start_height <= head {
        last_processed = scanner.scan_range(plan.start_height, head).await;
        checkpointer.advance_block(last_processed).await?;
    }

    let watcher = LiveHeadWatcher::new(chain, &scanner, checkpointer, args.poll_interval);
    if let Err(e) = watcher.run(last_processed).await {
        tracing::error!("Live tailing stopped: {e:?}");
    }

    Ok(plan.start_height)
}
