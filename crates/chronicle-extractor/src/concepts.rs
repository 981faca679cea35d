//! Mind-map topic selection

use crate::config::ExtractorConfig;
use std::collections::HashSet;
use tracing::debug;

/// Topic used when the text has no qualifying word
pub const FALLBACK_CONCEPT: &str = "Historical Event";

/// Extract up to `max_concepts` distinct long words, in order of first
/// appearance
///
/// Tokens are whitespace-separated and kept verbatim (punctuation included).
/// A token qualifies when it is longer than `min_concept_length` UTF-16 code
/// units and starts with an ASCII letter.
pub fn extract_concepts(text: &str, config: &ExtractorConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let concepts: Vec<String> = text
        .split_whitespace()
        .filter(|word| word.encode_utf16().count() > config.min_concept_length)
        .filter(|word| word.chars().next().is_some_and(|c| c.is_ascii_alphabetic()))
        .filter(|word| seen.insert(*word))
        .take(config.max_concepts)
        .map(str::to_string)
        .collect();

    debug!("Extracted {} concepts", concepts.len());
    concepts
}
