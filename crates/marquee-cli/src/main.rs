// crates/marquee-cli/src/main.rs
//
// CLI entrypoint for Marquee.
//
// Provides subcommands for registering and rating people and movies,
// predicting enjoyment of a movie from its cast, and computing the p-value
// of an ensemble clearing an enjoyment level.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use commands::movie::MovieCmd;
use commands::person::PersonCmd;
use commands::predict::PredictCmd;
use commands::pvalue::PValueCmd;
use commands::Context;
use config::CliConfig;
use marquee_engine::Engine;
use marquee_store::JsonFileStore;
use output::OutputFormat;

/// Marquee — predict how much you will enjoy a movie from its cast.
#[derive(Parser, Debug)]
#[command(
    name = "marquee",
    version = "0.1.0",
    about = "Predict movie enjoyment from your ratings of its cast"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.marquee/config.toml")]
    config: String,

    /// Override the catalog file from the configuration.
    #[arg(long, global = true)]
    data_file: Option<String>,

    /// Emit JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// People: add, rate, list, show.
    #[command(subcommand)]
    Person(PersonCmd),

    /// Movies: add, rate, list.
    #[command(subcommand)]
    Movie(MovieCmd),

    /// Predict enjoyment of a movie from its billed cast.
    Predict(PredictCmd),

    /// Probability that an ensemble clears an enjoyment level.
    Pvalue(PValueCmd),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration from TOML file, falling back to defaults only if the
    // file does not exist. A malformed file is fatal.
    let (mut cli_config, loaded) = CliConfig::load_or_default(&cli.config)?;
    if let Some(path) = &cli.data_file {
        cli_config.data_file = path.clone();
    }

    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli_config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if loaded {
        tracing::info!("Loaded configuration from {}", cli.config);
    } else {
        tracing::warn!("No config at {}. Using defaults.", cli.config);
    }

    let store = JsonFileStore::open(cli_config.data_path()).await?;
    tracing::info!("Using catalog {}", store.path().display());
    let ctx = Context {
        engine: Engine::new(store, cli_config.engine.clone()),
        format: OutputFormat::from_json_flag(cli.json),
    };

    match &cli.command {
        Commands::Person(cmd) => commands::person::run(cmd, &ctx).await?,
        Commands::Movie(cmd) => commands::movie::run(cmd, &ctx).await?,
        Commands::Predict(cmd) => commands::predict::run(cmd, &ctx).await?,
        Commands::Pvalue(cmd) => commands::pvalue::run(cmd, &ctx).await?,
    }

    Ok(())
}
