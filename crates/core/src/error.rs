use crate::schema::ValidationError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A request payload could not be shaped into its target record.
    #[error(transparent)]
    InvalidPayload(#[from] ValidationError),
}
