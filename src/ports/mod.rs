//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod question_source;

pub use question_source::{QuestionSource, QuestionSourceError};
