//! Survey domain module.
//!
//! Holds everything a shell needs to run one pass through the survey:
//! the form aggregate and its lifecycle, the raw field values, the
//! validator with its per-field error map, and the summary captured at
//! submission.
//!
//! # Conditional sections
//!
//! Each topic unlocks a pair of follow-up fields; `SurveyTopic` owns
//! that mapping and the validator only ever checks the active branch.
//! Values typed into an abandoned branch stay in the response but stop
//! counting.

mod errors;
mod field;
mod form;
mod response;
mod status;
mod summary;
mod topic;
mod validator;

pub use errors::FormError;
pub use field::SurveyField;
pub use form::SurveyForm;
pub use response::SurveyResponse;
pub use status::FormStatus;
pub use summary::SurveySummary;
pub use topic::SurveyTopic;
pub use validator::{validate, FieldErrors, MIN_FEEDBACK_CHARS};
