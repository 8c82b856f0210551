use sqlx::FromRow;

/// The singleton resume record. The processed heights stay unset until the
/// first session anchors itself.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct Checkpoint {
    pub start_height: i64,
    pub last_processed_height: Option<i64>,
    pub last_processed_event_height: Option<i64>,
}
