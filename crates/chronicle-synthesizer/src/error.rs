//! Synthesizer error types

use chronicle_extractor::ExtractorError;
use thiserror::Error;

/// Errors that can occur before synthesis starts
///
/// Synthesis itself is infallible; errors come from input validation and
/// configuration.
#[derive(Error, Debug)]
pub enum SynthesizerError {
    /// Extraction boundary error (input too long, bad payload)
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
