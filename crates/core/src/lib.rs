//! Domain core for the learnhub backend.
//!
//! Pure logic with no database or HTTP dependencies: shared primitive
//! types, the domain error enum, and the request-payload validation
//! boundary for items, learners and interaction logs.

pub mod entities;
pub mod error;
pub mod pagination;
pub mod schema;
pub mod types;
