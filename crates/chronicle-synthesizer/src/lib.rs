//! Chronicle Synthesizer
//!
//! Combines extractor output into the four visualization payloads: timeline,
//! mind map, geography and character network. Randomness and the clock are
//! injected so every synthesis can be replayed in tests.
//!
//! The `process_*` functions are one-call entry points using the default
//! configuration, the system clock and thread randomness. Use
//! [`Synthesizer`] for custom limits, layout or seeding.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod characters;
mod config;
mod error;
mod geography;
mod mind_map;
mod random;
mod synthesizer;
mod timeline;


pub use characters::{network_from_analysis, network_from_figures, synthesize_character_network};
pub use config::{LayoutConfig, SynthesizerConfig};
pub use error::SynthesizerError;
pub use geography::synthesize_geography;
pub use mind_map::{mind_map_from_concepts, synthesize_mind_map, CENTRAL_ID, EDGE_LABEL};
pub use random::{SeededRandom, ThreadRandom};
pub use synthesizer::{HistoryAnalysis, Synthesizer};
pub use timeline::{synthesize_timeline, FALLBACK_TITLE_WORD};

use chronicle_domain::{CharacterNetwork, GeographyData, MindMap, TimelineEvent};
use chronicle_extractor::{ExtractorConfig, SystemClock};

/// Timeline of `text` with default settings
pub fn process_timeline(text: &str) -> Vec<TimelineEvent> {
    synthesize_timeline(
        text,
        &ExtractorConfig::default(),
        &SystemClock,
        &mut ThreadRandom::new(),
    )
}

/// Mind map of `text` with default settings
pub fn process_mind_map(text: &str) -> MindMap {
    synthesize_mind_map(text, &ExtractorConfig::default(), &LayoutConfig::default())
}

/// Geography of `text` with default settings
pub fn process_geography(text: &str) -> GeographyData {
    synthesize_geography(
        text,
        &ExtractorConfig::default(),
        &SystemClock,
        &mut ThreadRandom::new(),
    )
}

/// Character network of `text` with default settings
pub fn process_characters(text: &str) -> CharacterNetwork {
    synthesize_character_network(text, &ExtractorConfig::default(), &LayoutConfig::default())
}
