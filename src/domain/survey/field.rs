//! SurveyField enum naming the fixed set of form fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SurveyTopic;

/// Select options for the topic field.
const TOPIC_OPTIONS: &[&str] = &["Technology", "Health", "Education"];

/// Select options for the favorite language field.
const LANGUAGE_OPTIONS: &[&str] = &["JavaScript", "Python", "Java", "C#"];

/// Select options for the exercise frequency field.
const FREQUENCY_OPTIONS: &[&str] = &["Daily", "Weekly", "Monthly", "Rarely"];

/// Select options for the diet preference field.
const DIET_OPTIONS: &[&str] = &["Vegetarian", "Vegan", "Non-Vegetarian"];

/// Select options for the highest qualification field.
const QUALIFICATION_OPTIONS: &[&str] = &["High School", "Bachelor's", "Master's", "PhD"];

/// The fixed set of survey form fields, in presentation order.
///
/// Fields are string-valued; this enum is the typed key into a
/// [`SurveyResponse`](super::SurveyResponse) and into the error map the
/// validator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyField {
    FullName,
    Email,
    SurveyTopic,
    FavoriteLanguage,
    YearsOfExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
    Feedback,
}

impl SurveyField {
    /// Returns all fields in presentation order.
    pub fn all() -> &'static [SurveyField] {
        &[
            SurveyField::FullName,
            SurveyField::Email,
            SurveyField::SurveyTopic,
            SurveyField::FavoriteLanguage,
            SurveyField::YearsOfExperience,
            SurveyField::ExerciseFrequency,
            SurveyField::DietPreference,
            SurveyField::HighestQualification,
            SurveyField::FieldOfStudy,
            SurveyField::Feedback,
        ]
    }

    /// Returns the wire name of this field (snake_case, matches serde).
    pub fn name(&self) -> &'static str {
        match self {
            SurveyField::FullName => "full_name",
            SurveyField::Email => "email",
            SurveyField::SurveyTopic => "survey_topic",
            SurveyField::FavoriteLanguage => "favorite_language",
            SurveyField::YearsOfExperience => "years_of_experience",
            SurveyField::ExerciseFrequency => "exercise_frequency",
            SurveyField::DietPreference => "diet_preference",
            SurveyField::HighestQualification => "highest_qualification",
            SurveyField::FieldOfStudy => "field_of_study",
            SurveyField::Feedback => "feedback",
        }
    }

    /// Parses a field from its wire name.
    ///
    /// Shells that dispatch change events by field name use this to recover
    /// the typed key.
    pub fn parse(name: &str) -> Option<SurveyField> {
        Self::all().iter().find(|f| f.name() == name).copied()
    }

    /// Returns the human-readable label used in labels and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            SurveyField::FullName => "Full Name",
            SurveyField::Email => "Email",
            SurveyField::SurveyTopic => "Survey Topic",
            SurveyField::FavoriteLanguage => "Favorite Programming Language",
            SurveyField::YearsOfExperience => "Years of Experience",
            SurveyField::ExerciseFrequency => "Exercise Frequency",
            SurveyField::DietPreference => "Diet Preference",
            SurveyField::HighestQualification => "Highest Qualification",
            SurveyField::FieldOfStudy => "Field of Study",
            SurveyField::Feedback => "Feedback",
        }
    }

    /// Returns the branch this field belongs to, or `None` for always-on
    /// fields.
    ///
    /// A shell can derive visibility from this: a conditional field is shown
    /// only while its branch is the active topic.
    pub fn branch(&self) -> Option<SurveyTopic> {
        match self {
            SurveyField::FavoriteLanguage | SurveyField::YearsOfExperience => {
                Some(SurveyTopic::Technology)
            }
            SurveyField::ExerciseFrequency | SurveyField::DietPreference => {
                Some(SurveyTopic::Health)
            }
            SurveyField::HighestQualification | SurveyField::FieldOfStudy => {
                Some(SurveyTopic::Education)
            }
            _ => None,
        }
    }

    /// Returns the fixed option list for select-backed fields, `None` for
    /// free-form fields.
    pub fn select_options(&self) -> Option<&'static [&'static str]> {
        match self {
            SurveyField::SurveyTopic => Some(TOPIC_OPTIONS),
            SurveyField::FavoriteLanguage => Some(LANGUAGE_OPTIONS),
            SurveyField::ExerciseFrequency => Some(FREQUENCY_OPTIONS),
            SurveyField::DietPreference => Some(DIET_OPTIONS),
            SurveyField::HighestQualification => Some(QUALIFICATION_OPTIONS),
            _ => None,
        }
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
