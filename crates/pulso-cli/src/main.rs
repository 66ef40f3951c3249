//! Pulso CLI - tap-tempo estimation from the command line.

mod commands;
mod common;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pulso")]
#[command(author, version, about = "Pulso tap-tempo toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a timestamp log and report the tempo
    Analyze(commands::analyze::AnalyzeArgs),

    /// Tap along interactively and read the tempo live
    Tap(commands::tap::TapArgs),

    /// List and inspect tuning profiles
    Profiles(commands::profiles::ProfilesArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Tap(args) => commands::tap::run(args),
        Commands::Profiles(args) => commands::profiles::run(args),
    }
}
