//! Enrich command implementation.

use crate::cli::EnrichArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chronicle_extractor::parse_character_analysis;
use chronicle_synthesizer::network_from_analysis;
use std::fs;

/// Execute the enrich command.
pub fn execute_enrich(args: EnrichArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let response = fs::read_to_string(&args.analysis)?;
    println!("{}", render_enriched(&response, config, formatter)?);
    Ok(())
}

/// Parse an analysis response and format the resulting network.
pub fn render_enriched(response: &str, config: &Config, formatter: &Formatter) -> Result<String> {
    let analysis = parse_character_analysis(response)?;
    let network = network_from_analysis(&analysis, &config.layout);

    let dropped = analysis.relationships.len().saturating_sub(network.edges.len());
    if dropped > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} relationship(s) referenced unknown characters", dropped))
        );
    }

    formatter.format_network(&network)
}
