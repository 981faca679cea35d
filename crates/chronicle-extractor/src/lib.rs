//! Chronicle Extractor
//!
//! Heuristic analyzers that pull dates, sentences, figures, concepts and
//! places out of free-form historical narrative.
//!
//! # Overview
//!
//! Every extractor is a pure function of the input text (plus, for dates, an
//! injected [`Clock`](chronicle_domain::Clock)). None of them can fail: each
//! has a fallback for the "nothing found" case, which callers apply through
//! the `*_or_placeholders` helpers and `FALLBACK_*` constants.
//!
//! # Architecture
//!
//! ```text
//!         ┌── dates ──────┐
//! Text ───┼── sentences ──┼──> Synthesizers
//!         ├── figures ────┤
//!         ├── concepts ───┤
//!         └── gazetteer ──┘
//! ```
//!
//! # Example Usage
//!
//! ```
//! use chronicle_extractor::{extract_dates, extract_figures, resolve_locations, ExtractorConfig, FixedClock};
//!
//! let text = "Louis Capet faced revolution in Paris in 1789.";
//! let config = ExtractorConfig::default();
//!
//! let dates = extract_dates(text, &config, &FixedClock(2024));
//! assert_eq!(dates[0].year(), 1789);
//!
//! let figures = extract_figures(text, &config);
//! assert_eq!(figures[0].as_str(), "Louis Capet");
//!
//! let places = resolve_locations(text);
//! assert_eq!(places[0].name, "Paris");
//! ```

#![warn(missing_docs)]

mod analysis;
mod clock;
mod concepts;
mod config;
mod dates;
mod error;
mod figures;
mod gazetteer;
mod sentences;


pub use analysis::{parse_character_analysis, AnalyzedCharacter, AnalyzedRelationship, CharacterAnalysis};
pub use clock::{FixedClock, SystemClock};
pub use concepts::{extract_concepts, FALLBACK_CONCEPT};
pub use config::ExtractorConfig;
pub use dates::extract_dates;
pub use error::ExtractorError;
pub use figures::{extract_figures, figures_or_placeholders, PLACEHOLDER_FIGURES, STOPWORDS};
pub use gazetteer::{lookup, resolve_locations, Place, FALLBACK_PLACE, GAZETTEER};
pub use sentences::{sentences_with_keywords, split_sentences, FALLBACK_SENTENCE};
