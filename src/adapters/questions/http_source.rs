//! HTTP Question Source - QuestionSource implementation over a REST service.
//!
//! Fetches supplemental questions with a single GET per submission:
//!
//! `GET {base_url}/questions?topic={topic}`
//!
//! to which the service answers `{"questions": ["...", ...]}`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AppConfig::load()?.questions;
//! let source = HttpQuestionSource::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::QuestionsConfig;
use crate::domain::survey::SurveyTopic;
use crate::ports::{QuestionSource, QuestionSourceError};

/// HTTP question service client.
pub struct HttpQuestionSource {
    config: QuestionsConfig,
    client: Client,
}

impl HttpQuestionSource {
    /// Creates a new HTTP question source with the given configuration.
    pub fn new(config: QuestionsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the questions endpoint URL.
    fn questions_url(&self) -> String {
        format!("{}/questions", self.config.base_url)
    }
}

/// Wire shape of the service response.
#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    questions: Vec<String>,
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_for_topic(
        &self,
        topic: SurveyTopic,
    ) -> Result<Vec<String>, QuestionSourceError> {
        let url = self.questions_url();

        tracing::debug!("Fetching {} questions from {}", topic, url);

        let response = self
            .client
            .get(&url)
            .query(&[("topic", topic.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QuestionSourceError::timeout(self.config.timeout_secs)
                } else if e.is_connect() {
                    QuestionSourceError::network(format!("Connection failed: {}", e))
                } else {
                    QuestionSourceError::network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Question service returned {}", status);
            return Err(QuestionSourceError::unexpected_status(status.as_u16()));
        }

        let body: QuestionsResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse question service response: {}", e);
            QuestionSourceError::malformed(e.to_string())
        })?;

        tracing::debug!("Fetched {} questions for {}", body.questions.len(), topic);

        Ok(body.questions)
    }
}
