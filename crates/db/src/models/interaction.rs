//! Interaction log row model.

use learnhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `interaction_logs` table. Rows are append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InteractionLog {
    pub id: DbId,
    pub learner_id: DbId,
    pub item_id: DbId,
    pub kind: String,
    pub created_at: Timestamp,
}
