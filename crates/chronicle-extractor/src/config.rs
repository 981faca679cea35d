//! Configuration for the extractors

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Limits and thresholds used by the extractors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Maximum number of figures returned by the figure extractor
    pub max_figures: usize,

    /// Maximum number of concepts returned by the concept extractor
    pub max_concepts: usize,

    /// Concepts must be strictly longer than this many UTF-16 code units
    pub min_concept_length: usize,

    /// Timeline title words must be strictly longer than this many UTF-16 code units
    pub min_title_word_length: usize,

    /// Number of placeholder dates generated when the text names no year
    pub placeholder_count: usize,

    /// Years between consecutive placeholder dates
    pub placeholder_interval_years: i32,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_text_length == 0 {
            return Err(ExtractorError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        if self.max_figures == 0 {
            return Err(ExtractorError::Config(
                "max_figures must be greater than 0".to_string(),
            ));
        }
        if self.max_concepts == 0 {
            return Err(ExtractorError::Config(
                "max_concepts must be greater than 0".to_string(),
            ));
        }
        if self.placeholder_count == 0 {
            return Err(ExtractorError::Config(
                "placeholder_count must be greater than 0".to_string(),
            ));
        }
        if self.placeholder_interval_years <= 0 {
            return Err(ExtractorError::Config(
                "placeholder_interval_years must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Check that `text` fits within `max_text_length`
    pub fn check_length(&self, text: &str) -> Result<(), ExtractorError> {
        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.max_text_length));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 50_000,
            max_figures: 5,
            max_concepts: 6,
            min_concept_length: 5,
            min_title_word_length: 4,
            placeholder_count: 5,
            placeholder_interval_years: 25,
        }
    }
}
