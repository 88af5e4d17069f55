//! PickleBalance CLI - Command-line interface
//!
//! Commands:
//! - build: Reconstruct a schedule from raw pairings
//! - stats: Partner/opponent matrices for a schedule
//! - filter: One player's view of a schedule
//! - generate: Run the local generator
//! - serve: Start the HTTP API server

mod build_cmd;
mod filter;
mod generate;
mod io;
mod report;
mod server;
mod stats;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "picklebalance")]
#[command(about = "Doubles round-robin schedule builder and fairness analyzer")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct a schedule from raw pairings
    Build(build_cmd::BuildArgs),
    /// Show partner and opponent statistics
    Stats(stats::StatsArgs),
    /// Show the schedule for a single player
    Filter(filter::FilterArgs),
    /// Generate a schedule with the local greedy generator
    Generate(generate::GenerateArgs),
    /// Start the HTTP API server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build(args) => build_cmd::run(args),
        Commands::Stats(args) => stats::run(args),
        Commands::Filter(args) => filter::run(args),
        Commands::Generate(args) => generate::run(args),
        Commands::Serve(args) => server::run(args),
    }
}

/// Logs go to stderr so JSON on stdout stays clean
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
