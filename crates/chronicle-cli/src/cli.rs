//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Chronicle CLI - Turn historical narrative into visualization data.
#[derive(Debug, Parser)]
#[command(name = "chronicle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CHRONICLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible sentence and word selection
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a timeline of dated events
    Timeline(InputArgs),

    /// Build a concept mind map
    #[command(name = "mindmap")]
    MindMap(InputArgs),

    /// Place events on a map
    Geography(InputArgs),

    /// Build a character network
    Characters(InputArgs),

    /// Build all four visualizations
    Analyze(InputArgs),

    /// Build a character network from an external analysis response
    Enrich(EnrichArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Where the narrative text comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Narrative text
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File containing the narrative (stdin when neither option is given)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the enrich command.
#[derive(Debug, Parser)]
pub struct EnrichArgs {
    /// File holding the analysis response (JSON, optionally wrapped in prose)
    pub analysis: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
