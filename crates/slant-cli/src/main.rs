//! Slant CLI - Estimate the sentiment bias of news articles.

use anyhow::Context;
use clap::Parser;
use slant_cli::commands;
use slant_cli::repl;
use slant_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };

    if let Some(api_key) = cli.api_key {
        config.provider.api_key = api_key;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Show(args)) => {
            commands::execute_show(args, &formatter)?;
        }
        Some(Command::List) => {
            let store = commands::open_store(&config)?;
            commands::execute_list(&store, &formatter)?;
        }
        Some(Command::Score(args)) => {
            let lexicon = commands::load_lexicon(&config)
                .with_context(|| format!("Failed to load lexicon {}", config.lexicon_path.display()))?;
            commands::execute_score(args, &lexicon, &formatter)?;
        }
        Some(Command::Analyze(args)) => {
            let analyzer = commands::build_analyzer(&config).context("Failed to start pipeline")?;
            commands::execute_analyze(args, &analyzer, &formatter).await?;
        }
        None | Some(Command::Repl) => {
            let analyzer = commands::build_analyzer(&config).context("Failed to start pipeline")?;
            repl::run_repl(&analyzer, &formatter).await?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins unless `-v` flags are given.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
