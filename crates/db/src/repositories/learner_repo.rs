//! Repository for the `learners` table.

use learnhub_core::entities::LearnerCreate;
use learnhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::learner::Learner;

const COLUMNS: &str = "id, name, email, created_at, updated_at";

/// Provides CRUD operations for learners.
pub struct LearnerRepo;

impl LearnerRepo {
    /// Insert a new learner, returning the created row.
    pub async fn create(pool: &PgPool, input: &LearnerCreate) -> Result<Learner, sqlx::Error> {
        let query = format!(
            "INSERT INTO learners (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Learner>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a learner by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Learner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM learners WHERE id = $1");
        sqlx::query_as::<_, Learner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List learners, oldest first, with pagination.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Learner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM learners ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Learner>(&query)
            .bind(clamp_limit(limit, DEFAULT_LIMIT, MAX_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Delete a learner by ID, along with their interaction logs.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM learners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
