//! Pure validation of a SurveyResponse against the survey's business rules.
//!
//! `validate` is a total function from field values to an error map; it never
//! mutates anything and only looks at fields relevant to the active topic
//! branch. Stale values on inactive branches are ignored, not cleared.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{SurveyField, SurveyResponse, SurveyTopic};

/// Minimum feedback length, counted in characters.
pub const MIN_FEEDBACK_CHARS: usize = 50;

/// Simple shape check: scans for a non-blank local part, an `@`, and a
/// dotted domain. Deliberately loose; real address verification is not the
/// form's job.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Ordered mapping of field to human-readable error message.
///
/// Absence of a key means the field is valid; an empty map means the whole
/// response is valid. Iteration follows presentation order so inline display
/// and tests are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<SurveyField, String>);

impl FieldErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error message for a field, replacing any previous one.
    pub fn insert(&mut self, field: SurveyField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns the message for a field, if it failed validation.
    pub fn get(&self, field: SurveyField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns true if the field failed validation.
    pub fn contains(&self, field: SurveyField) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true if no field failed validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of invalid fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates `(field, message)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (SurveyField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validates a response, returning the error map for invalid fields.
///
/// Rules:
///
/// - full name, email, topic, and feedback are always required;
/// - a non-empty email must pass the shape check;
/// - the active topic branch's two fields are required; years of experience
///   must additionally be a number strictly greater than zero;
/// - feedback must be at least [`MIN_FEEDBACK_CHARS`] characters;
/// - fields on inactive branches are not validated at all.
pub fn validate(response: &SurveyResponse) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if response.full_name.trim().is_empty() {
        errors.insert(SurveyField::FullName, required(SurveyField::FullName));
    }

    if response.email.trim().is_empty() {
        errors.insert(SurveyField::Email, required(SurveyField::Email));
    } else if !EMAIL_PATTERN.is_match(&response.email) {
        errors.insert(SurveyField::Email, "Email is invalid");
    }

    if response.survey_topic.trim().is_empty() {
        errors.insert(SurveyField::SurveyTopic, required(SurveyField::SurveyTopic));
    }

    match response.topic() {
        Some(SurveyTopic::Technology) => {
            if response.favorite_language.trim().is_empty() {
                errors.insert(
                    SurveyField::FavoriteLanguage,
                    required(SurveyField::FavoriteLanguage),
                );
            }
            if !is_positive_number(&response.years_of_experience) {
                errors.insert(
                    SurveyField::YearsOfExperience,
                    "Years of Experience is required and must be greater than 0",
                );
            }
        }
        Some(SurveyTopic::Health) => {
            if response.exercise_frequency.trim().is_empty() {
                errors.insert(
                    SurveyField::ExerciseFrequency,
                    required(SurveyField::ExerciseFrequency),
                );
            }
            if response.diet_preference.trim().is_empty() {
                errors.insert(
                    SurveyField::DietPreference,
                    required(SurveyField::DietPreference),
                );
            }
        }
        Some(SurveyTopic::Education) => {
            if response.highest_qualification.trim().is_empty() {
                errors.insert(
                    SurveyField::HighestQualification,
                    required(SurveyField::HighestQualification),
                );
            }
            if response.field_of_study.trim().is_empty() {
                errors.insert(
                    SurveyField::FieldOfStudy,
                    required(SurveyField::FieldOfStudy),
                );
            }
        }
        // Empty or unrecognized topic: the presence check above already
        // covers the empty case, and no branch is active.
        None => {}
    }

    if response.feedback.trim().is_empty()
        || response.feedback.chars().count() < MIN_FEEDBACK_CHARS
    {
        errors.insert(
            SurveyField::Feedback,
            "Feedback is required and must be at least 50 characters",
        );
    }

    errors
}

/// Standard presence-failure message for a field.
fn required(field: SurveyField) -> String {
    format!("{} is required", field.label())
}

/// True if the value parses as a finite number strictly greater than zero.
fn is_positive_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}
