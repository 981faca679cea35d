//! Facade bundling configuration, clock and randomness

use crate::characters::synthesize_character_network;
use crate::config::SynthesizerConfig;
use crate::error::SynthesizerError;
use crate::geography::synthesize_geography;
use crate::mind_map::synthesize_mind_map;
use crate::random::{SeededRandom, ThreadRandom};
use crate::timeline::synthesize_timeline;
use chronicle_domain::{
    CharacterNetwork, Clock, GeographyData, MindMap, RandomSource, TimelineEvent,
};
use chronicle_extractor::SystemClock;
use serde::{Deserialize, Serialize};
use tracing::info;

/// All four visualizations of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryAnalysis {
    /// Chronological events
    pub timeline: Vec<TimelineEvent>,

    /// Concept star graph
    pub mind_map: MindMap,

    /// Map events
    pub geography: GeographyData,

    /// Figure network
    pub characters: CharacterNetwork,
}

/// Synthesizer service turning text into visualization data
///
/// Every entry point rejects text longer than the configured maximum before
/// doing any work. Past that check, synthesis cannot fail.
///
/// # Examples
///
/// ```
/// use chronicle_synthesizer::{Synthesizer, SynthesizerConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut synthesizer = Synthesizer::seeded(SynthesizerConfig::default(), 7)?;
/// let analysis = synthesizer.analyze("Napoleon entered Moscow in 1812.")?;
///
/// assert_eq!(analysis.timeline.len(), 1);
/// assert_eq!(analysis.geography.events[0].name, "Event in Moscow");
/// # Ok(())
/// # }
/// ```
pub struct Synthesizer<C = SystemClock, R = ThreadRandom> {
    config: SynthesizerConfig,
    clock: C,
    rng: R,
}

impl Synthesizer<SystemClock, ThreadRandom> {
    /// Create a synthesizer with the system clock and thread randomness
    pub fn new(config: SynthesizerConfig) -> Result<Self, SynthesizerError> {
        Self::with_ports(config, SystemClock, ThreadRandom::new())
    }
}

impl Synthesizer<SystemClock, SeededRandom> {
    /// Create a synthesizer whose random choices repeat for the same seed
    pub fn seeded(config: SynthesizerConfig, seed: u64) -> Result<Self, SynthesizerError> {
        Self::with_ports(config, SystemClock, SeededRandom::new(seed))
    }
}

impl<C: Clock, R: RandomSource> Synthesizer<C, R> {
    /// Create a synthesizer with explicit clock and random source
    pub fn with_ports(config: SynthesizerConfig, clock: C, rng: R) -> Result<Self, SynthesizerError> {
        config.validate()?;
        Ok(Self { config, clock, rng })
    }

    /// Get the active configuration
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Timeline events, oldest first
    pub fn timeline(&mut self, text: &str) -> Result<Vec<TimelineEvent>, SynthesizerError> {
        self.config.extractor.check_length(text)?;
        Ok(synthesize_timeline(
            text,
            &self.config.extractor,
            &self.clock,
            &mut self.rng,
        ))
    }

    /// Concept mind map
    pub fn mind_map(&self, text: &str) -> Result<MindMap, SynthesizerError> {
        self.config.extractor.check_length(text)?;
        Ok(synthesize_mind_map(text, &self.config.extractor, &self.config.layout))
    }

    /// Map events for the places named in the text
    pub fn geography(&mut self, text: &str) -> Result<GeographyData, SynthesizerError> {
        self.config.extractor.check_length(text)?;
        Ok(synthesize_geography(
            text,
            &self.config.extractor,
            &self.clock,
            &mut self.rng,
        ))
    }

    /// Hub-and-spoke figure network
    pub fn character_network(&self, text: &str) -> Result<CharacterNetwork, SynthesizerError> {
        self.config.extractor.check_length(text)?;
        Ok(synthesize_character_network(
            text,
            &self.config.extractor,
            &self.config.layout,
        ))
    }

    /// All four visualizations
    pub fn analyze(&mut self, text: &str) -> Result<HistoryAnalysis, SynthesizerError> {
        self.config.extractor.check_length(text)?;

        let analysis = HistoryAnalysis {
            timeline: synthesize_timeline(text, &self.config.extractor, &self.clock, &mut self.rng),
            mind_map: synthesize_mind_map(text, &self.config.extractor, &self.config.layout),
            geography: synthesize_geography(text, &self.config.extractor, &self.clock, &mut self.rng),
            characters: synthesize_character_network(text, &self.config.extractor, &self.config.layout),
        };

        info!(
            "Analyzed text: {} timeline events, {} concepts, {} places, {} figures",
            analysis.timeline.len(),
            analysis.mind_map.nodes.len(),
            analysis.geography.events.len(),
            analysis.characters.nodes.len()
        );
        Ok(analysis)
    }
}
