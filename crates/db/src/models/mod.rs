//! Database row structs.
//!
//! Request DTOs live in `learnhub_core::entities`; they are validated there
//! before any repository sees them. Each submodule here holds the
//! `FromRow` + `Serialize` struct for one table.

pub mod interaction;
pub mod item;
pub mod learner;
