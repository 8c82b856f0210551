use crate::checkpoint::model::Checkpoint;
use crate::client::Client;
use sqlx::Error;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // CHECKPOINT (singleton row)
    // ---------------------------

    pub async fn get(&self) -> Result<Option<Checkpoint>, Error> {
        let query = r#"
            SELECT start_height, last_processed_height, last_processed_event_height
            FROM checkpoints
            WHERE id = 1
            "#;
        let checkpoint = sqlx::query_as(query).fetch_optional(self.client.pool()).await?;

        Ok(checkpoint)
    }

    /// Replaces the record as a whole. The fixed id keeps a single live row.
    pub async fn replace(&self, checkpoint: &Checkpoint) -> Result<(), Error> {
        let query = r#"
            INSERT INTO checkpoints (id, start_height, last_processed_height, last_processed_event_height)
            VALUES (1, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                start_height = excluded.start_height,
                last_processed_height = excluded.last_processed_height,
                last_processed_event_height = excluded.last_processed_event_height
            "#;
        sqlx::query(query)
            .bind(checkpoint.start_height)
            .bind(checkpoint.last_processed_height)
            .bind(checkpoint.last_processed_event_height)
            .execute(self.client.pool())
            .await?;
        Ok(())
    }
}
