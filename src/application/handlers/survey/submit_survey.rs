//! SubmitSurveyHandler - Command handler for completing a survey submission.

use std::sync::Arc;

use crate::domain::survey::{FieldErrors, FormError, SurveyForm, SurveySummary};
use crate::ports::QuestionSource;

/// Errors surfaced by the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The response failed validation; the form keeps the error map.
    #[error("Submission failed validation")]
    ValidationFailed { errors: FieldErrors },

    /// The form was already submitted.
    #[error("Form has already been submitted")]
    AlreadySubmitted,
}

/// Handler for submitting survey forms.
///
/// Orchestrates the submission: runs validation, fetches the topic's
/// supplemental questions through the port, and completes the submission on
/// the aggregate. A failed fetch never blocks the submission; the summary
/// just carries no extra questions.
pub struct SubmitSurveyHandler {
    questions: Arc<dyn QuestionSource>,
}

impl SubmitSurveyHandler {
    pub fn new(questions: Arc<dyn QuestionSource>) -> Self {
        Self { questions }
    }

    pub async fn handle(&self, form: &mut SurveyForm) -> Result<SurveySummary, SubmitError> {
        // 1. Guard the lifecycle before any remote work
        if form.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }

        // 2. Validate, leaving the full error map on the form for display
        if !form.validate() {
            tracing::debug!(
                response_id = %form.id(),
                "Submission blocked by {} validation errors",
                form.errors().len()
            );
            return Err(SubmitError::ValidationFailed {
                errors: form.errors().clone(),
            });
        }

        // 3. Fetch supplemental questions, degrading to none on failure
        let supplemental_questions = match form.topic() {
            Some(topic) => match self.questions.fetch_for_topic(topic).await {
                Ok(questions) => questions,
                Err(e) => {
                    tracing::warn!(
                        response_id = %form.id(),
                        topic = %topic,
                        "Question fetch failed, submitting without extras: {}",
                        e
                    );
                    Vec::new()
                }
            },
            None => {
                tracing::debug!(
                    response_id = %form.id(),
                    "Topic is not canonical, skipping question fetch"
                );
                Vec::new()
            }
        };

        // 4. Complete the submission on the aggregate
        match form
            .complete_submission(supplemental_questions)
            .map(|summary| summary.clone())
        {
            Ok(summary) => {
                tracing::debug!(response_id = %form.id(), "Survey submitted");
                Ok(summary)
            }
            Err(FormError::AlreadySubmitted) => Err(SubmitError::AlreadySubmitted),
            Err(_) => Err(SubmitError::ValidationFailed {
                errors: form.errors().clone(),
            }),
        }
    }
}
