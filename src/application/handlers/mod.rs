//! Command handlers, grouped by module.

pub mod survey;

pub use survey::{SubmitError, SubmitSurveyHandler};
