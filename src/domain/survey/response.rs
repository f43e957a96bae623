//! SurveyResponse - the raw field values of one pass through the form.

use serde::{Deserialize, Serialize};

use super::{SurveyField, SurveyTopic};

/// The in-progress or submitted set of form field values.
///
/// Every field is a plain string, exactly as typed or selected in the shell.
/// Interpretation (topic parsing, numeric checks) happens in the validator;
/// values belonging to inactive branches are kept as-is, never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub full_name: String,
    pub email: String,
    pub survey_topic: String,
    pub favorite_language: String,
    pub years_of_experience: String,
    pub exercise_frequency: String,
    pub diet_preference: String,
    pub highest_qualification: String,
    pub field_of_study: String,
    pub feedback: String,
}

impl SurveyResponse {
    /// Creates an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    pub fn get(&self, field: SurveyField) -> &str {
        match field {
            SurveyField::FullName => &self.full_name,
            SurveyField::Email => &self.email,
            SurveyField::SurveyTopic => &self.survey_topic,
            SurveyField::FavoriteLanguage => &self.favorite_language,
            SurveyField::YearsOfExperience => &self.years_of_experience,
            SurveyField::ExerciseFrequency => &self.exercise_frequency,
            SurveyField::DietPreference => &self.diet_preference,
            SurveyField::HighestQualification => &self.highest_qualification,
            SurveyField::FieldOfStudy => &self.field_of_study,
            SurveyField::Feedback => &self.feedback,
        }
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: SurveyField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SurveyField::FullName => self.full_name = value,
            SurveyField::Email => self.email = value,
            SurveyField::SurveyTopic => self.survey_topic = value,
            SurveyField::FavoriteLanguage => self.favorite_language = value,
            SurveyField::YearsOfExperience => self.years_of_experience = value,
            SurveyField::ExerciseFrequency => self.exercise_frequency = value,
            SurveyField::DietPreference => self.diet_preference = value,
            SurveyField::HighestQualification => self.highest_qualification = value,
            SurveyField::FieldOfStudy => self.field_of_study = value,
            SurveyField::Feedback => self.feedback = value,
        }
    }

    /// Returns the typed view of the topic field, if it holds a canonical
    /// topic value.
    pub fn topic(&self) -> Option<SurveyTopic> {
        SurveyTopic::parse(&self.survey_topic)
    }
}
