//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod interaction_log_repo;
pub mod item_repo;
pub mod learner_repo;

pub use interaction_log_repo::InteractionLogRepo;
pub use item_repo::ItemRepo;
pub use learner_repo::LearnerRepo;
