//! SurveySummary - the display-only copy captured at submission.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ResponseId, Timestamp};

use super::{SurveyField, SurveyResponse, SurveyTopic};

/// Immutable snapshot of a submitted response plus the supplemental
/// follow-up questions fetched for its topic.
///
/// The summary is what a shell renders after submission; the live form
/// cannot change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySummary {
    /// Identity of the response this summary was captured from.
    response_id: ResponseId,

    /// Snapshot of the field values at submission time.
    response: SurveyResponse,

    /// Topic-specific follow-up questions; empty when the fetch was skipped
    /// or degraded.
    supplemental_questions: Vec<String>,

    /// When the submission completed.
    submitted_at: Timestamp,
}

impl SurveySummary {
    /// Captures a summary from a submitted response.
    pub fn new(
        response_id: ResponseId,
        response: SurveyResponse,
        supplemental_questions: Vec<String>,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            response_id,
            response,
            supplemental_questions,
            submitted_at,
        }
    }

    /// Returns the id of the captured response.
    pub fn response_id(&self) -> ResponseId {
        self.response_id
    }

    /// Returns the captured field values.
    pub fn response(&self) -> &SurveyResponse {
        &self.response
    }

    /// Returns the topic the response was submitted under, if canonical.
    pub fn topic(&self) -> Option<SurveyTopic> {
        self.response.topic()
    }

    /// Returns the supplemental follow-up questions.
    pub fn supplemental_questions(&self) -> &[String] {
        &self.supplemental_questions
    }

    /// Returns when the submission completed.
    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }

    /// Returns `(field, value)` pairs in presentation order: the always-on
    /// identity fields, then the active branch's two fields, then feedback.
    ///
    /// Inactive branch values are omitted, mirroring how the form only ever
    /// showed the active branch.
    pub fn display_fields(&self) -> Vec<(SurveyField, &str)> {
        let mut fields = vec![
            SurveyField::FullName,
            SurveyField::Email,
            SurveyField::SurveyTopic,
        ];
        if let Some(topic) = self.topic() {
            fields.extend_from_slice(topic.conditional_fields());
        }
        fields.push(SurveyField::Feedback);

        fields
            .into_iter()
            .map(|field| (field, self.response.get(field)))
            .collect()
    }
}
