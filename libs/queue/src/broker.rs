use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

/// When a delivery leaves the queue for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckMode {
    /// Removed on receipt. A consumer crash mid-processing loses the message.
    FireAndForget,
    /// Removed only when the consumer acknowledges. An un-acked delivery
    /// returns to the front of the queue when dropped.
    AfterProcess,
}

/// In-process message broker holding named, non-durable FIFO queues of opaque
/// byte payloads. Nothing survives the process.
#[derive(Default)]
pub struct Broker {
    queues: Mutex<HashMap<String, Arc<Inner>>>,
}

#[derive(Default)]
struct Inner {
    messages: Mutex<VecDeque<Vec<u8>>>,
    notify: Notify,
}

impl Broker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the named queue, creating it on first use. Handles
    /// are cheap clones sharing the same underlying queue.
    pub fn declare(&self, name: &str) -> QueueHandle {
        let mut queues = self.queues.lock().unwrap();
        let inner = queues.entry(name.to_string()).or_default();
        QueueHandle { inner: Arc::clone(inner) }
    }
}

#[derive(Clone)]
pub struct QueueHandle {
    inner: Arc<Inner>,
}

impl QueueHandle {
    pub fn publish(&self, payload: Vec<u8>) {
        self.inner.messages.lock().unwrap().push_back(payload);
        self.inner.notify.notify_one();
    }

    /// Waits for the next message in delivery order.
    pub async fn consume(&self, ack_mode: AckMode) -> Delivery {
        loop {
            // Register for a wakeup before checking, so a publish racing this
            // check is not lost.
            let notified = self.inner.notify.notified();

            if let Some(payload) = self.inner.messages.lock().unwrap().pop_front() {
                let pending = match ack_mode {
                    AckMode::FireAndForget => None,
                    AckMode::AfterProcess => {
                        Some((Arc::clone(&self.inner), payload.clone()))
                    }
                };
                return Delivery { payload, pending };
            }

            notified.await;
        }
    }

    pub fn len(&self) -> usize {
        self.inner.messages.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A message taken off the queue. Under `AckMode::AfterProcess` it must be
/// acknowledged to leave the queue permanently.
pub struct Delivery {
    payload: Vec<u8>,
    pending: Option<(Arc<Inner>, Vec<u8>)>,
}

impl Delivery {
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn ack(mut self) {
        self.pending = None;
    }
}

impl Drop for Delivery {
    fn drop(&mut self) {
        // An un-acked delivery goes back to the front so order is preserved.
        if let Some((inner, payload)) = self.pending.take() {
            inner.messages.lock().unwrap().push_front(payload);
            inner.notify.notify_one();
        }
    }
}
