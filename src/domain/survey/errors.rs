//! Survey-specific error types.

use thiserror::Error;

/// Errors raised by the form state holder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The form was already submitted; submitted forms are read-only.
    #[error("Form has already been submitted")]
    AlreadySubmitted,

    /// A name-keyed update referred to a field that does not exist.
    #[error("Unknown form field '{name}'")]
    UnknownField { name: String },

    /// Submission was attempted while the response has validation errors.
    #[error("Form has validation errors")]
    ValidationFailed,
}

impl FormError {
    /// Creates an unknown-field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        FormError::UnknownField { name: name.into() }
    }
}
