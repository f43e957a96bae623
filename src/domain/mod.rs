//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs)
//! - `survey` - Survey form aggregate, validation, and submission summary

pub mod foundation;
pub mod survey;
