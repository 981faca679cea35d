//! Sentence segmentation

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of non-terminal characters followed by terminal punctuation
static SENTENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

/// Description used when the text has no complete sentence
pub const FALLBACK_SENTENCE: &str = "Historical event occurred.";

/// Split `text` into trimmed sentences, keeping their terminal punctuation
///
/// Trailing text without terminal punctuation is dropped, so text with no
/// `.`, `!` or `?` yields an empty vector.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Sentences that mention any of `keywords`, ignoring case
pub fn sentences_with_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<String> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    split_sentences(text)
        .into_iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            keywords.iter().any(|k| lowered.contains(k.as_str()))
        })
        .collect()
}
