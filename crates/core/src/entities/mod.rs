//! Validated request records for the three entity families.
//!
//! Each record is built either from typed values (infallible constructors)
//! or from a raw payload through [`FromPayload`](crate::schema::FromPayload).

pub mod interaction;
pub mod item;
pub mod learner;

pub use interaction::InteractionLogCreate;
pub use item::{ItemCreate, ItemUpdate};
pub use learner::LearnerCreate;
