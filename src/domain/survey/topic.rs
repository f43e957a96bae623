//! SurveyTopic enum and the branch each topic activates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SurveyField;

/// The three survey topics, each activating one conditional branch.
///
/// The topic is stored on the response as a plain string (the select value);
/// [`SurveyTopic::parse`] recovers the typed view. An empty or unrecognized
/// string parses to `None` and activates no branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyTopic {
    Technology,
    Health,
    Education,
}

impl SurveyTopic {
    /// Returns all topics in presentation order.
    pub fn all() -> &'static [SurveyTopic] {
        &[
            SurveyTopic::Technology,
            SurveyTopic::Health,
            SurveyTopic::Education,
        ]
    }

    /// Parses a topic from its canonical select value.
    ///
    /// Matching is exact: the shell submits the value verbatim from the
    /// fixed option list.
    pub fn parse(value: &str) -> Option<SurveyTopic> {
        match value {
            "Technology" => Some(SurveyTopic::Technology),
            "Health" => Some(SurveyTopic::Health),
            "Education" => Some(SurveyTopic::Education),
            _ => None,
        }
    }

    /// Returns the canonical string value (select value, fetch parameter,
    /// and display name are all the same).
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyTopic::Technology => "Technology",
            SurveyTopic::Health => "Health",
            SurveyTopic::Education => "Education",
        }
    }

    /// Returns the two conditional fields this topic activates, in
    /// presentation order.
    pub fn conditional_fields(&self) -> &'static [SurveyField] {
        match self {
            SurveyTopic::Technology => &[
                SurveyField::FavoriteLanguage,
                SurveyField::YearsOfExperience,
            ],
            SurveyTopic::Health => &[
                SurveyField::ExerciseFrequency,
                SurveyField::DietPreference,
            ],
            SurveyTopic::Education => &[
                SurveyField::HighestQualification,
                SurveyField::FieldOfStudy,
            ],
        }
    }
}

impl fmt::Display for SurveyTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
