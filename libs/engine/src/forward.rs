use queue::broker::{AckMode, Delivery, QueueHandle};
use store::transaction::model::Transaction;
use store::transaction::store::Store as TransactionStore;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::amount;
use crate::message::TxMessage;

/// Drains the queue into storage, one message at a time in delivery order.
/// A hash conflict is a successful no-op; any other storage failure drops
/// the message after logging it. No retry, no dead-letter queue.
pub struct ForwardingConsumer {
    queue: QueueHandle,
    store: TransactionStore,
    ack_mode: AckMode,
}

impl ForwardingConsumer {
    pub fn new(queue: QueueHandle, store: TransactionStore, ack_mode: AckMode) -> Self {
        Self { queue, store, ack_mode }
    }

    pub fn spawn(self, shutdown_tx: broadcast::Sender<()>) -> JoinHandle<()> {
        let mut shutdown_rx = shutdown_tx.subscribe();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    delivery = self.queue.consume(self.ack_mode) => {
                        self.forward(delivery).await;
                    }
                    _ = shutdown_rx.recv() => break,
                }
            }
        })
    }

    /// Forwards everything currently on the queue, returning once it is
    /// empty.
    pub async fn drain(&self) {
        while !self.queue.is_empty() {
            let delivery = self.queue.consume(self.ack_mode).await;
            self.forward(delivery).await;
        }
    }

    async fn forward(&self, delivery: Delivery) {
        let mut message = match TxMessage::from_bytes(delivery.payload()) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!("Discarding undecodable message: {e:?}");
                delivery.ack();
                return;
            }
        };

        // an amount attached by the event path is authoritative; block-path
        // messages are decoded from the raw input here
        if message.tokens_transferred.is_none() {
            let computed = amount::from_input(&message.tx.input);
            if !computed.is_zero() {
                message.tokens_transferred = Some(computed);
            }
        }

        match self.store.insert_transaction(&Transaction::from(&message)).await {
            Ok(()) => tracing::info!("Forwarded transaction {}", message.tx.hash),
            Err(e) if is_unique_violation(&e) => {
                tracing::info!("Duplicate transaction ignored: {}", message.tx.hash);
            }
            Err(e) => {
                tracing::error!("Failed to forward transaction {}: {e:?}", message.tx.hash);
            }
        }

        delivery.ack();
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => {
            db_err.message().contains("UNIQUE constraint failed: transactions.hash")
        }
        _ => false,
    }
}
