//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `questions` - Question service clients (HTTP, mock)

pub mod questions;

pub use questions::{HttpQuestionSource, MockQuestionSource};
