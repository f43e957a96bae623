//! Integration tests for the survey submission flow.
//!
//! These tests drive the path a shell would take:
//! 1. Fill the form field by field, addressed by wire name
//! 2. Submit through the handler with a mock question service
//! 3. Inspect the captured summary and the form lifecycle

use std::sync::Arc;

use survey_form::adapters::questions::{MockFetchError, MockQuestionSource};
use survey_form::application::handlers::survey::{SubmitError, SubmitSurveyHandler};
use survey_form::domain::survey::{
    FormStatus, SurveyField, SurveyForm, SurveyTopic, MIN_FEEDBACK_CHARS,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("survey_form=debug")
        .try_init();
}

const FEEDBACK: &str = "The branching felt natural and the questions were easy to follow.";

/// Fills the always-visible fields plus the Technology branch, by wire name.
fn fill_technology_form(form: &mut SurveyForm) {
    let entries = [
        ("full_name", "Ada Lovelace"),
        ("email", "ada@example.org"),
        ("survey_topic", "Technology"),
        ("favorite_language", "Python"),
        ("years_of_experience", "12"),
        ("feedback", FEEDBACK),
    ];
    for (name, value) in entries {
        form.set_field_by_name(name, value).unwrap();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn technology_flow_captures_summary_with_questions() {
    init_tracing();
    let source = Arc::new(MockQuestionSource::new().with_questions([
        "Which framework do you reach for first?",
        "Do you pair program?",
    ]));
    let handler = SubmitSurveyHandler::new(source.clone());

    let mut form = SurveyForm::new();
    fill_technology_form(&mut form);

    let summary = handler.handle(&mut form).await.unwrap();

    assert_eq!(form.status(), FormStatus::Submitted);
    assert_eq!(summary.topic(), Some(SurveyTopic::Technology));
    assert_eq!(summary.supplemental_questions().len(), 2);
    assert_eq!(
        summary.supplemental_questions()[0],
        "Which framework do you reach for first?"
    );
    assert_eq!(source.fetched_topics(), vec![SurveyTopic::Technology]);
}

#[tokio::test]
async fn empty_form_reports_the_exact_messages() {
    init_tracing();
    let source = Arc::new(MockQuestionSource::new());
    let handler = SubmitSurveyHandler::new(source.clone());
    let mut form = SurveyForm::new();

    let result = handler.handle(&mut form).await;

    let errors = match result {
        Err(SubmitError::ValidationFailed { errors }) => errors,
        other => panic!("Expected validation failure, got {:?}", other),
    };

    assert_eq!(errors.get(SurveyField::FullName), Some("Full Name is required"));
    assert_eq!(errors.get(SurveyField::Email), Some("Email is required"));
    assert_eq!(
        errors.get(SurveyField::SurveyTopic),
        Some("Survey Topic is required")
    );
    assert_eq!(
        errors.get(SurveyField::Feedback),
        Some(
            format!(
                "Feedback is required and must be at least {} characters",
                MIN_FEEDBACK_CHARS
            )
            .as_str()
        )
    );

    // The failed attempt left the form editable and never touched the service.
    assert_eq!(form.status(), FormStatus::Editing);
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn health_branch_blocks_until_its_fields_are_filled() {
    init_tracing();
    let source = Arc::new(MockQuestionSource::new().with_questions(["How many hours do you sleep?"]));
    let handler = SubmitSurveyHandler::new(source.clone());

    let mut form = SurveyForm::new();
    form.set_field_by_name("full_name", "Florence Nightingale").unwrap();
    form.set_field_by_name("email", "florence@example.org").unwrap();
    form.set_field_by_name("survey_topic", "Health").unwrap();
    form.set_field_by_name("feedback", FEEDBACK).unwrap();

    let result = handler.handle(&mut form).await;
    let errors = match result {
        Err(SubmitError::ValidationFailed { errors }) => errors,
        other => panic!("Expected validation failure, got {:?}", other),
    };
    assert_eq!(
        errors.get(SurveyField::ExerciseFrequency),
        Some("Exercise Frequency is required")
    );
    assert_eq!(
        errors.get(SurveyField::DietPreference),
        Some("Diet Preference is required")
    );
    assert_eq!(source.call_count(), 0);

    // Completing the branch unblocks the submission.
    form.set_field_by_name("exercise_frequency", "Daily").unwrap();
    form.set_field_by_name("diet_preference", "Vegetarian").unwrap();

    let summary = handler.handle(&mut form).await.unwrap();
    assert_eq!(summary.topic(), Some(SurveyTopic::Health));
    assert_eq!(source.fetched_topics(), vec![SurveyTopic::Health]);
}

#[tokio::test]
async fn abandoned_branch_values_do_not_block_submission() {
    init_tracing();
    let handler = SubmitSurveyHandler::new(Arc::new(MockQuestionSource::new()));

    let mut form = SurveyForm::new();
    fill_technology_form(&mut form);

    // Respondent changes their mind and fills the Education branch instead.
    form.set_field_by_name("survey_topic", "Education").unwrap();
    form.set_field_by_name("highest_qualification", "PhD").unwrap();
    form.set_field_by_name("field_of_study", "Mathematics").unwrap();

    let summary = handler.handle(&mut form).await.unwrap();

    assert_eq!(summary.topic(), Some(SurveyTopic::Education));

    // The stale Technology answer is still in the snapshot but never shown.
    assert_eq!(summary.response().favorite_language, "Python");
    let displayed: Vec<SurveyField> = summary
        .display_fields()
        .into_iter()
        .map(|(field, _)| field)
        .collect();
    assert!(!displayed.contains(&SurveyField::FavoriteLanguage));
    assert!(displayed.contains(&SurveyField::HighestQualification));
}

#[tokio::test]
async fn question_service_outage_does_not_block_submission() {
    init_tracing();
    let source = Arc::new(
        MockQuestionSource::new().with_error(MockFetchError::Timeout { timeout_secs: 10 }),
    );
    let handler = SubmitSurveyHandler::new(source.clone());

    let mut form = SurveyForm::new();
    fill_technology_form(&mut form);

    let summary = handler.handle(&mut form).await.unwrap();

    assert_eq!(form.status(), FormStatus::Submitted);
    assert!(summary.supplemental_questions().is_empty());
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn resubmission_is_rejected_until_reset() {
    init_tracing();
    let source = Arc::new(MockQuestionSource::new());
    let handler = SubmitSurveyHandler::new(source.clone());

    let mut form = SurveyForm::new();
    fill_technology_form(&mut form);

    let first = handler.handle(&mut form).await.unwrap();

    // Submitted forms accept no edits and no second submission.
    assert!(form
        .set_field_by_name("full_name", "Someone Else")
        .is_err());
    assert_eq!(
        handler.handle(&mut form).await,
        Err(SubmitError::AlreadySubmitted)
    );

    // Reset starts a fresh attempt under a new response id.
    form.reset();
    assert_eq!(form.status(), FormStatus::Editing);
    fill_technology_form(&mut form);

    let second = handler.handle(&mut form).await.unwrap();
    assert_ne!(second.response_id(), first.response_id());
    assert_eq!(source.call_count(), 2);
}
