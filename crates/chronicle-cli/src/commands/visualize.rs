//! Timeline, mind map, geography, characters and analyze commands.

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::read_text;
use crate::output::Formatter;
use chronicle_domain::{Clock, RandomSource};
use chronicle_synthesizer::Synthesizer;
use std::io;
use tracing::debug;

/// Which artifact a command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visualization {
    /// Dated events
    Timeline,
    /// Concept star graph
    MindMap,
    /// Map events
    Geography,
    /// Figure network
    Characters,
    /// All four
    All,
}

/// Execute a visualization command.
///
/// A seed makes sentence and word selection reproducible.
pub fn execute_visualize(
    kind: Visualization,
    args: &InputArgs,
    seed: Option<u64>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_text(args, io::stdin().lock())?;
    debug!("Read {} characters of input", text.chars().count());

    let synthesizer_config = config.synthesizer_config();
    let output = match seed {
        Some(seed) => render(
            kind,
            &text,
            &mut Synthesizer::seeded(synthesizer_config, seed)?,
            formatter,
        )?,
        None => render(
            kind,
            &text,
            &mut Synthesizer::new(synthesizer_config)?,
            formatter,
        )?,
    };

    println!("{}", output);
    Ok(())
}

/// Synthesize and format one visualization.
pub fn render<C: Clock, R: RandomSource>(
    kind: Visualization,
    text: &str,
    synthesizer: &mut Synthesizer<C, R>,
    formatter: &Formatter,
) -> Result<String> {
    match kind {
        Visualization::Timeline => formatter.format_timeline(&synthesizer.timeline(text)?),
        Visualization::MindMap => formatter.format_mind_map(&synthesizer.mind_map(text)?),
        Visualization::Geography => formatter.format_geography(&synthesizer.geography(text)?),
        Visualization::Characters => {
            formatter.format_network(&synthesizer.character_network(text)?)
        }
        Visualization::All => formatter.format_analysis(&synthesizer.analyze(text)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use chronicle_extractor::FixedClock;
    use chronicle_synthesizer::{SeededRandom, SynthesizerConfig};

    const TEXT: &str = "Hannibal crossed the Alps in 1218. Rome feared him.";

    fn synthesizer(config: SynthesizerConfig) -> Synthesizer<FixedClock, SeededRandom> {
        Synthesizer::with_ports(config, FixedClock(2024), SeededRandom::new(5)).unwrap()
    }

    #[test]
    fn test_render_timeline_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = render(
            Visualization::Timeline,
            TEXT,
            &mut synthesizer(SynthesizerConfig::default()),
            &formatter,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["date"], "January 1, 1218");
    }

    #[test]
    fn test_render_geography_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = render(
            Visualization::Geography,
            TEXT,
            &mut synthesizer(SynthesizerConfig::default()),
            &formatter,
        )
        .unwrap();
        assert!(output.contains("Event in Rome"));
        assert!(output.contains("1218"));
    }

    #[test]
    fn test_render_all() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = render(
            Visualization::All,
            TEXT,
            &mut synthesizer(SynthesizerConfig::default()),
            &formatter,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["characters"]["nodes"][0]["data"]["label"], "Hannibal");
        assert_eq!(value["mind_map"]["nodes"][0]["data"]["label"], "Hannibal");
    }

    #[test]
    fn test_too_long_text() {
        let mut config = SynthesizerConfig::default();
        config.extractor.max_text_length = 5;
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = render(Visualization::MindMap, TEXT, &mut synthesizer(config), &formatter);
        assert!(matches!(result, Err(CliError::Synthesis(_))));
    }
}
