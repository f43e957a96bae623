//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SURVEY_FORM_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use survey_form::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Questions served from {}", config.questions.base_url);
//! ```

mod error;
mod questions;

pub use error::{ConfigError, ValidationError};
pub use questions::QuestionsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the survey form service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Question service configuration (base URL, timeout)
    #[serde(default)]
    pub questions: QuestionsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SURVEY_FORM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SURVEY_FORM__QUESTIONS__BASE_URL=...` -> `questions.base_url = ...`
    /// - `SURVEY_FORM__QUESTIONS__TIMEOUT_SECS=30` -> `questions.timeout_secs = 30`
    ///
    /// Every section has defaults, so an empty environment is a valid one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SURVEY_FORM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.questions.validate()?;
        Ok(())
    }
}
