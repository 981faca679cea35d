//! Error types for the CLI application.

use chronicle_extractor::ExtractorError;
use chronicle_synthesizer::SynthesizerError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Synthesis error
    #[error("{0}")]
    Synthesis(#[from] SynthesizerError),

    /// Enrichment payload error
    #[error("Enrichment failed: {0}")]
    Analysis(#[from] ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Blank input text
    #[error("Please enter a historical context or story to visualize")]
    EmptyInput,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
