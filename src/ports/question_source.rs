//! Question Source Port - Interface for fetching topic follow-up questions.
//!
//! A submitted response is decorated with supplemental questions for its
//! topic. This port abstracts where those questions come from (HTTP
//! service, fixture, test double) so the submission flow stays decoupled
//! from transport.
//!
//! # Design
//!
//! - One call per submission, keyed by the canonical topic
//! - Questions come back in service order; an empty list is a valid answer
//! - Implementations translate transport failures into `QuestionSourceError`
//!   and leave the degradation decision to the caller
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedSource;
//!
//! #[async_trait]
//! impl QuestionSource for FixedSource {
//!     async fn fetch_for_topic(
//!         &self,
//!         _topic: SurveyTopic,
//!     ) -> Result<Vec<String>, QuestionSourceError> {
//!         Ok(vec!["What would you improve?".to_string()])
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::survey::SurveyTopic;

/// Port for fetching topic-specific supplemental questions.
///
/// Implementations connect to an external question service and translate
/// between its wire format and plain question strings.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the supplemental questions for one topic.
    async fn fetch_for_topic(
        &self,
        topic: SurveyTopic,
    ) -> Result<Vec<String>, QuestionSourceError>;
}

/// Question source errors.
#[derive(Debug, thiserror::Error)]
pub enum QuestionSourceError {
    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Service answered with a non-success status.
    #[error("unexpected status: {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },

    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl QuestionSourceError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Creates an unexpected status error.
    pub fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Returns true if retrying the fetch could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            QuestionSourceError::Network(_) | QuestionSourceError::Timeout { .. } => true,
            QuestionSourceError::UnexpectedStatus { status } => *status >= 500,
            QuestionSourceError::MalformedResponse(_) => false,
        }
    }
}
