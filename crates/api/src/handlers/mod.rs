//! Request handlers for items, learners and interaction logs.
//!
//! Handlers take already-shaped records from [`ValidatedJson`](crate::extract::ValidatedJson),
//! delegate to the corresponding repository in `learnhub_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod interactions;
pub mod items;
pub mod learners;
