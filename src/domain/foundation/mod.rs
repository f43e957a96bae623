//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and identifiers that form the vocabulary
//! of the survey domain.

mod ids;
mod timestamp;

pub use ids::ResponseId;
pub use timestamp::Timestamp;
