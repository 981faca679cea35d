//! Chronicle CLI - Visualize historical narrative from the command line.

use chronicle_cli::commands::{self, Visualization};
use chronicle_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> chronicle_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, defaults when the file is absent
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let (kind, args) = match cli.command {
        Command::Enrich(args) => return commands::execute_enrich(args, &config, &formatter),
        Command::Config(args) => {
            return commands::execute_config(args, &config, &config_path, format, &formatter)
        }
        Command::Timeline(args) => (Visualization::Timeline, args),
        Command::MindMap(args) => (Visualization::MindMap, args),
        Command::Geography(args) => (Visualization::Geography, args),
        Command::Characters(args) => (Visualization::Characters, args),
        Command::Analyze(args) => (Visualization::All, args),
    };

    commands::execute_visualize(kind, &args, cli.seed, &config, &formatter)
}

/// Log to stderr, filtered by `CHRONICLE_LOG` (default `warn`)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("CHRONICLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
