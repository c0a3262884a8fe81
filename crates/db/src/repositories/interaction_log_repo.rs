//! Repository for the `interaction_logs` table.

use learnhub_core::entities::InteractionLogCreate;
use learnhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::interaction::InteractionLog;

const COLUMNS: &str = "id, learner_id, item_id, kind, created_at";

/// Append-only access to interaction logs.
pub struct InteractionLogRepo;

impl InteractionLogRepo {
    /// Record an interaction.
    ///
    /// `learner_id` and `item_id` are checked only by the table's foreign
    /// keys; unknown ids fail with SQLSTATE 23503.
    pub async fn create(
        pool: &PgPool,
        input: &InteractionLogCreate,
    ) -> Result<InteractionLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO interaction_logs (learner_id, item_id, kind)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InteractionLog>(&query)
            .bind(input.learner_id)
            .bind(input.item_id)
            .bind(&input.kind)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InteractionLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interaction_logs WHERE id = $1");
        sqlx::query_as::<_, InteractionLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A learner's interactions, most recent first.
    pub async fn list_for_learner(
        pool: &PgPool,
        learner_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<InteractionLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interaction_logs
             WHERE learner_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, InteractionLog>(&query)
            .bind(learner_id)
            .bind(clamp_limit(limit, DEFAULT_LIMIT, MAX_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Interactions recorded against an item, most recent first.
    pub async fn list_for_item(
        pool: &PgPool,
        item_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<InteractionLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interaction_logs
             WHERE item_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, InteractionLog>(&query)
            .bind(item_id)
            .bind(clamp_limit(limit, DEFAULT_LIMIT, MAX_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }
}
