use std::sync::{Arc, Mutex};

use alloy::primitives::BlockNumber;
use eyre::{Result, eyre};
use store::checkpoint::model::Checkpoint;
use store::checkpoint::store::Store as CheckpointStore;

use crate::plan::SessionPlan;

/// Owns the session's resume record. Every change replaces the persisted
/// record as a whole; fields are never written individually.
#[derive(Clone)]
pub struct Checkpointer {
    store: CheckpointStore,
    state: Arc<Mutex<Option<Checkpoint>>>,
}

impl Checkpointer {
    pub fn new(store: CheckpointStore) -> Self {
        Self { store, state: Arc::new(Mutex::new(None)) }
    }

    pub async fn load(&self) -> Result<Option<Checkpoint>> {
        Ok(self.store.get().await?)
    }

    /// Persists the session anchor before any scanning begins, so a crash
    /// mid-backfill still leaves a valid resume point.
    pub async fn anchor(&self, plan: &SessionPlan) -> Result<()> {
        let record = Checkpoint {
            start_height: plan.start_height as i64,
            last_processed_height: Some(plan.start_height as i64),
            last_processed_event_height: Some(plan.event_start_height as i64),
        };
        *self.state.lock().unwrap() = Some(record.clone());
        self.persist(record).await
    }

    pub async fn advance_block(&self, height: BlockNumber) -> Result<()> {
        let record = {
            let mut state = self.state.lock().unwrap();
            let record = state.as_mut().ok_or_else(|| eyre!("no anchored session"))?;
            record.last_processed_height = Some(height as i64);
            record.clone()
        };
        self.persist(record).await
    }

    pub async fn advance_event(&self, height: BlockNumber) -> Result<()> {
        let record = {
            let mut state = self.state.lock().unwrap();
            let record = state.as_mut().ok_or_else(|| eyre!("no anchored session"))?;
            record.last_processed_event_height = Some(height as i64);
            record.clone()
        };
        self.persist(record).await
    }

    /// Re-persists the current snapshot; the best-effort save on shutdown.
    /// A no-op before the first anchor.
    pub async fn flush(&self) -> Result<()> {
        let record = self.state.lock().unwrap().clone();
        match record {
            Some(record) => self.persist(record).await,
            None => Ok(()),
        }
    }

    async fn persist(&self, record: Checkpoint) -> Result<()> {
        self.store.replace(&record).await?;
        tracing::debug!("Checkpoint saved: {record:?}");
        Ok(())
    }
}
