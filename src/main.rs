//! Wortschatz command-line entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wortschatz::Config;

mod cli;

/// Wortschatz: vocabulary normalization and link inference
#[derive(Parser, Debug)]
#[command(name = "wortschatz")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load one language's vocabulary file into the graph store
    Load {
        /// Language label attached to every entry (e.g. "German")
        language: String,
        /// Path to the YAML vocabulary file
        path: String,
    },
    /// Load all configured languages concurrently
    LoadAll,
    /// Parse a vocabulary file and print attributes and inferred links
    /// without storing anything
    Inspect {
        /// Path to the YAML vocabulary file
        path: String,
        /// Language label to attach
        #[arg(short, long, default_value = "German")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    match args.command {
        Command::Load { language, path } => cli::run_load(config, language, path, args.json).await,
        Command::LoadAll => cli::run_load_all(config, args.json).await,
        Command::Inspect { path, language } => {
            cli::run_inspect(config, path, language, args.json)
        }
    }
}
