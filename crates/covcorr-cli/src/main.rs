//! covcorr - Command-line interface for coverage track cross-correlation.

mod commands;
mod track;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "covcorr")]
#[command(author, version, about = "Coverage track cross-correlation", long_about = None)]
struct Cli {
    /// Print debug diagnostics around each pipeline step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross-correlate two coverage tracks and report the peak lag
    Correlate(commands::correlate::CorrelateArgs),

    /// Plan the power-of-two padding length for a maximum track length
    Plan(commands::plan::PlanArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Correlate(args) => commands::correlate::run(args),
        Commands::Plan(args) => commands::plan::run(args),
    }
}
