use alloy::primitives::BlockNumber;
use store::checkpoint::model::Checkpoint;

/// Where a session begins: one height for the block path, one for the event
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPlan {
    pub start_height: BlockNumber,
    pub event_start_height: BlockNumber,
}

/// Decides the session start heights. First match wins:
///
/// 1. requested start beyond the head: hold at the head and wait for new
///    blocks
/// 2. no processed heights on record: fresh session from the requested start,
///    or the head
/// 3. requested start equals the recorded session start: resume from the last
///    processed heights
/// 4. requested start changed: new session from the requested start, or the
///    head
pub fn plan_session(
    requested_start: Option<BlockNumber>,
    head: BlockNumber,
    checkpoint: Option<&Checkpoint>,
) -> SessionPlan {
    if let Some(requested) = requested_start {
        if requested > head {
            tracing::info!("Waiting for new blocks from {head}");
            return SessionPlan { start_height: head, event_start_height: head };
        }
    }

    let start = requested_start.unwrap_or(head);
    let fresh = SessionPlan { start_height: start, event_start_height: start };

    let Some(checkpoint) = checkpoint else {
        tracing::info!("Starting from block {start}");
        return fresh;
    };
    if checkpoint.last_processed_height.is_none()
        && checkpoint.last_processed_event_height.is_none()
    {
        tracing::info!("Starting from block {start}");
        return fresh;
    }

    if requested_start == Some(checkpoint.start_height as BlockNumber) {
        // the block path may not have recorded progress when only the event
        // path ran
        let last_processed =
            checkpoint.last_processed_height.unwrap_or(checkpoint.start_height) as BlockNumber;
        let event_start = checkpoint
            .last_processed_event_height
            .map(|height| height as BlockNumber)
            .unwrap_or(last_processed);

        tracing::info!("Continuing from block {last_processed}");
        return SessionPlan { start_height: last_processed, event_start_height: event_start };
    }

    tracing::info!("Starting from block {start}");
    fresh
}
