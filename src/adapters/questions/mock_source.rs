//! Mock Question Source for testing.
//!
//! Provides a configurable mock implementation of the QuestionSource port,
//! allowing tests to run without a live question service.
//!
//! # Features
//!
//! - Pre-configured question lists
//! - Simulated delays for timeout testing
//! - Error injection for degradation testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let source = MockQuestionSource::new()
//!     .with_questions(["What stack do you use?"])
//!     .with_delay(Duration::from_millis(100));
//!
//! let questions = source.fetch_for_topic(SurveyTopic::Technology).await?;
//! assert_eq!(questions.len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::survey::SurveyTopic;
use crate::ports::{QuestionSource, QuestionSourceError};

/// Mock question source for testing.
///
/// Configurable to return specific question lists, simulate delays, or
/// inject errors.
#[derive(Debug, Clone)]
pub struct MockQuestionSource {
    /// Pre-configured fetch results (consumed in order).
    responses: Arc<Mutex<VecDeque<MockFetch>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Topics fetched, for verification.
    calls: Arc<Mutex<Vec<SurveyTopic>>>,
}

/// A configured mock fetch result.
#[derive(Debug, Clone)]
pub enum MockFetch {
    /// Return a list of questions.
    Success(Vec<String>),
    /// Return an error.
    Error(MockFetchError),
}

/// Mock error types for testing degradation handling.
#[derive(Debug, Clone)]
pub enum MockFetchError {
    /// Simulate a network failure.
    Network { message: String },
    /// Simulate a timeout.
    Timeout { timeout_secs: u64 },
    /// Simulate a non-success status.
    UnexpectedStatus { status: u16 },
    /// Simulate an unparseable body.
    Malformed { message: String },
}

impl From<MockFetchError> for QuestionSourceError {
    fn from(err: MockFetchError) -> Self {
        match err {
            MockFetchError::Network { message } => QuestionSourceError::network(message),
            MockFetchError::Timeout { timeout_secs } => QuestionSourceError::timeout(timeout_secs),
            MockFetchError::UnexpectedStatus { status } => {
                QuestionSourceError::unexpected_status(status)
            }
            MockFetchError::Malformed { message } => QuestionSourceError::malformed(message),
        }
    }
}

impl Default for MockQuestionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockQuestionSource {
    /// Creates a new mock source with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful question list to the queue.
    pub fn with_questions<I, S>(self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = questions.into_iter().map(Into::into).collect();
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockFetch::Success(questions));
        drop(responses);
        self
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: MockFetchError) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockFetch::Error(error));
        drop(responses);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of fetches made against this source.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the topics fetched so far, in order.
    pub fn fetched_topics(&self) -> Vec<SurveyTopic> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next configured result or an empty default.
    fn next_fetch(&self) -> MockFetch {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockFetch::Success(Vec::new()))
    }
}

#[async_trait]
impl QuestionSource for MockQuestionSource {
    async fn fetch_for_topic(
        &self,
        topic: SurveyTopic,
    ) -> Result<Vec<String>, QuestionSourceError> {
        // Record the call
        self.calls.lock().unwrap().push(topic);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_fetch() {
            MockFetch::Success(questions) => Ok(questions),
            MockFetch::Error(err) => Err(err.into()),
        }
    }
}
