//! SurveyForm aggregate entity.
//!
//! The form is the top-level container for one pass through the survey:
//! the live field values, the error map from the latest validation pass,
//! and the summary captured at submission.
//!
//! # Ownership
//!
//! The form owns its response and error map outright. Fetching the
//! supplemental questions that go into the summary is the application
//! layer's job; the form only records what it is handed.

use crate::domain::foundation::{ResponseId, Timestamp};
use serde::{Deserialize, Serialize};

use super::{
    validate, FieldErrors, FormError, FormStatus, SurveyField, SurveyResponse, SurveySummary,
    SurveyTopic,
};

/// SurveyForm aggregate - one respondent's pass through the survey.
///
/// # Invariants
///
/// - `errors` always holds the full result of the most recent validation
///   pass, never a partial or merged map
/// - `summary` and `submitted_at` are `Some` exactly when `status` is
///   `Submitted`
/// - Submitted forms cannot be modified; `reset` is the only way out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyForm {
    /// Unique identifier for this response attempt.
    id: ResponseId,

    /// Live field values.
    response: SurveyResponse,

    /// Error map from the latest validation pass.
    errors: FieldErrors,

    /// Current status (Editing or Submitted).
    status: FormStatus,

    /// Snapshot captured when the submission completed.
    summary: Option<SurveySummary>,

    /// When this attempt started.
    started_at: Timestamp,

    /// When this attempt was submitted.
    submitted_at: Option<Timestamp>,
}

impl SurveyForm {
    /// Create a new empty form in the editing state.
    pub fn new() -> Self {
        Self {
            id: ResponseId::new(),
            response: SurveyResponse::new(),
            errors: FieldErrors::new(),
            status: FormStatus::Editing,
            summary: None,
            started_at: Timestamp::now(),
            submitted_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the response ID.
    pub fn id(&self) -> ResponseId {
        self.id
    }

    /// Returns the live field values.
    pub fn response(&self) -> &SurveyResponse {
        &self.response
    }

    /// Returns the current value of a single field.
    pub fn field(&self, field: SurveyField) -> &str {
        self.response.get(field)
    }

    /// Returns the error map from the latest validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the current status.
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Returns the active topic, if the topic field holds a canonical value.
    pub fn topic(&self) -> Option<SurveyTopic> {
        self.response.topic()
    }

    /// Returns the summary captured at submission, if any.
    pub fn summary(&self) -> Option<&SurveySummary> {
        self.summary.as_ref()
    }

    /// Returns when this attempt started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when this attempt was submitted, if it has been.
    pub fn submitted_at(&self) -> Option<&Timestamp> {
        self.submitted_at.as_ref()
    }

    /// Returns true once the form has been submitted.
    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a new value for one field.
    ///
    /// Any field accepts a value at any time while editing, including fields
    /// outside the active branch; the validator decides what counts.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the form has been submitted
    pub fn set_field(
        &mut self,
        field: SurveyField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.response.set(field, value);
        Ok(())
    }

    /// Store a new value for the field with the given wire name.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if the name matches no field
    /// - `AlreadySubmitted` if the form has been submitted
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = SurveyField::parse(name).ok_or_else(|| FormError::unknown_field(name))?;
        self.set_field(field, value)
    }

    /// Run the validator and replace the error map with its result.
    ///
    /// The previous map is discarded wholesale, so errors for fields the
    /// respondent has since fixed (or branched away from) disappear.
    ///
    /// Returns true when the response passed.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.response);
        self.errors.is_empty()
    }

    /// Complete the submission, capturing the summary.
    ///
    /// Validation runs once more as a guard; a response edited into an
    /// invalid state since the last check is still refused here.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the form has been submitted
    /// - `ValidationFailed` if the response does not pass validation;
    ///   the error map is left populated for display
    pub fn complete_submission(
        &mut self,
        supplemental_questions: Vec<String>,
    ) -> Result<&SurveySummary, FormError> {
        if !self.status.can_transition_to(&FormStatus::Submitted) {
            return Err(FormError::AlreadySubmitted);
        }
        if !self.validate() {
            return Err(FormError::ValidationFailed);
        }

        let submitted_at = Timestamp::now();
        let summary = SurveySummary::new(
            self.id,
            self.response.clone(),
            supplemental_questions,
            submitted_at,
        );
        self.submitted_at = Some(submitted_at);
        self.status = FormStatus::Submitted;
        Ok(self.summary.insert(summary))
    }

    /// Return the form to a fresh editing state under a new response ID.
    ///
    /// Valid from any status; the abandoned values, errors, and summary
    /// are dropped.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates that the form can still be edited.
    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(FormError::AlreadySubmitted)
        }
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SurveyForm {
        let mut form = SurveyForm::new();
        form.set_field(SurveyField::FullName, "Ada Lovelace").unwrap();
        form.set_field(SurveyField::Email, "ada@example.org").unwrap();
        form.set_field(SurveyField::SurveyTopic, "Technology").unwrap();
        form.set_field(SurveyField::FavoriteLanguage, "Python").unwrap();
        form.set_field(SurveyField::YearsOfExperience, "12").unwrap();
        form.set_field(SurveyField::Feedback, "f".repeat(60)).unwrap();
        form
    }

    // Construction tests

    #[test]
    fn new_form_is_editing() {
        let form = SurveyForm::new();
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(!form.is_submitted());
    }

    #[test]
    fn new_form_is_empty() {
        let form = SurveyForm::new();
        assert_eq!(form.response(), &SurveyResponse::new());
        assert!(form.errors().is_empty());
        assert!(form.summary().is_none());
        assert!(form.submitted_at().is_none());
    }

    #[test]
    fn new_forms_get_distinct_ids() {
        assert_ne!(SurveyForm::new().id(), SurveyForm::new().id());
    }

    // Field editing tests

    #[test]
    fn set_field_stores_the_value() {
        let mut form = SurveyForm::new();
        form.set_field(SurveyField::Email, "ada@example.org").unwrap();
        assert_eq!(form.field(SurveyField::Email), "ada@example.org");
    }

    #[test]
    fn set_field_by_name_resolves_wire_names() {
        let mut form = SurveyForm::new();
        form.set_field_by_name("survey_topic", "Health").unwrap();
        assert_eq!(form.topic(), Some(SurveyTopic::Health));
    }

    #[test]
    fn set_field_by_name_rejects_unknown_names() {
        let mut form = SurveyForm::new();
        let result = form.set_field_by_name("favourite_colour", "teal");
        assert_eq!(
            result,
            Err(FormError::UnknownField {
                name: "favourite_colour".to_string()
            })
        );
    }

    #[test]
    fn set_field_fails_after_submission() {
        let mut form = filled_form();
        form.complete_submission(vec![]).unwrap();

        let result = form.set_field(SurveyField::FullName, "Someone Else");
        assert_eq!(result, Err(FormError::AlreadySubmitted));
        assert_eq!(form.field(SurveyField::FullName), "Ada Lovelace");
    }

    // Validation tests

    #[test]
    fn validate_populates_errors_for_empty_form() {
        let mut form = SurveyForm::new();
        assert!(!form.validate());
        assert!(form.errors().contains(SurveyField::FullName));
        assert!(form.errors().contains(SurveyField::Feedback));
    }

    #[test]
    fn validate_replaces_the_previous_error_map() {
        let mut form = filled_form();
        form.set_field(SurveyField::Email, "").unwrap();
        assert!(!form.validate());
        assert!(form.errors().contains(SurveyField::Email));

        form.set_field(SurveyField::Email, "ada@example.org").unwrap();
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn validate_passes_for_complete_response() {
        let mut form = filled_form();
        assert!(form.validate());
    }

    // Submission tests

    #[test]
    fn complete_submission_captures_a_summary() {
        let mut form = filled_form();
        let questions = vec!["What editor do you use?".to_string()];

        let summary = form.complete_submission(questions).unwrap();
        assert_eq!(summary.topic(), Some(SurveyTopic::Technology));
        assert_eq!(summary.supplemental_questions().len(), 1);
    }

    #[test]
    fn complete_submission_transitions_the_status() {
        let mut form = filled_form();
        form.complete_submission(vec![]).unwrap();

        assert_eq!(form.status(), FormStatus::Submitted);
        assert!(form.is_submitted());
        assert!(form.submitted_at().is_some());
        assert!(form.summary().is_some());
    }

    #[test]
    fn complete_submission_snapshot_matches_the_response() {
        let mut form = filled_form();
        let expected = form.response().clone();

        let summary = form.complete_submission(vec![]).unwrap();
        assert_eq!(summary.response(), &expected);
        assert_eq!(summary.response_id(), form.id());
    }

    #[test]
    fn complete_submission_refuses_invalid_responses() {
        let mut form = SurveyForm::new();
        let result = form.complete_submission(vec![]);

        assert_eq!(result, Err(FormError::ValidationFailed));
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(!form.errors().is_empty());
        assert!(form.summary().is_none());
    }

    #[test]
    fn complete_submission_twice_fails() {
        let mut form = filled_form();
        form.complete_submission(vec![]).unwrap();

        let result = form.complete_submission(vec![]);
        assert_eq!(result, Err(FormError::AlreadySubmitted));
    }

    #[test]
    fn submission_revalidates_stale_edits() {
        let mut form = filled_form();
        assert!(form.validate());

        // Broken after the last explicit check.
        form.set_field(SurveyField::YearsOfExperience, "0").unwrap();

        let result = form.complete_submission(vec![]);
        assert_eq!(result, Err(FormError::ValidationFailed));
        assert!(form.errors().contains(SurveyField::YearsOfExperience));
    }

    // Reset tests

    #[test]
    fn reset_returns_to_editing() {
        let mut form = filled_form();
        form.complete_submission(vec![]).unwrap();

        form.reset();
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(form.summary().is_none());
        assert!(form.submitted_at().is_none());
    }

    #[test]
    fn reset_mints_a_new_id() {
        let mut form = filled_form();
        let old_id = form.id();
        form.reset();
        assert_ne!(form.id(), old_id);
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = filled_form();
        form.set_field(SurveyField::Email, "").unwrap();
        form.validate();

        form.reset();
        assert_eq!(form.field(SurveyField::Email), "");
        assert_eq!(form.response(), &SurveyResponse::new());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn form_can_be_refilled_after_reset() {
        let mut form = filled_form();
        form.complete_submission(vec![]).unwrap();
        form.reset();

        form.set_field(SurveyField::FullName, "Grace Hopper").unwrap();
        assert_eq!(form.field(SurveyField::FullName), "Grace Hopper");
    }
}
