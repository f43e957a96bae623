//! Survey command handlers.

mod submit_survey;

pub use submit_survey::{SubmitError, SubmitSurveyHandler};
