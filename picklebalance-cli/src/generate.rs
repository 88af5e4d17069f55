//! Generate command - build a schedule with the local generator
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_generation(), report_generation()
//! - Level 3: (delegated to picklebalance-solver)
//! - Level 4: configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use picklebalance_core::{compute_matrices, Player, RosterIndex};
use picklebalance_solver::{generate_schedule, GenerationConfig, Generated, GreedyGenerator};

use crate::io::{roster_or_demo, write_output};
use crate::report::format_schedule;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct GenerateArgs {
    /// Roster JSON file (demo roster if omitted)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Courts available each round (1-10)
    #[arg(long, default_value = "3")]
    pub courts: u32,

    /// Rounds to schedule (1-20)
    #[arg(long, default_value = "10")]
    pub rounds: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Independent attempts; the best is kept
    #[arg(long, default_value = "16")]
    pub attempts: usize,

    /// Write the schedule JSON here instead of printing a table
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run generate command
///
/// 1. Load roster
/// 2. Configure and run the generator
/// 3. Report the schedule
pub fn run(args: GenerateArgs) -> Result<()> {
    let roster = roster_or_demo(args.roster.as_ref())?;
    let config = configure_generation(&args);

    tracing::info!(
        "Generating {} rounds on {} courts for {} players ({} byes per round)",
        config.rounds,
        config.courts,
        roster.len(),
        config.byes_per_round(roster.len())
    );

    let generator = GreedyGenerator::new(&config);
    let generated =
        generate_schedule(&generator, &roster, &config).context("Schedule generation failed")?;

    report_generation(&generated, &roster, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn configure_generation(args: &GenerateArgs) -> GenerationConfig {
    let config = GenerationConfig::new(args.courts, args.rounds).with_attempts(args.attempts);
    match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn report_generation(generated: &Generated, roster: &[Player], args: &GenerateArgs) -> Result<()> {
    let schedule = &generated.schedule;

    if args.json || args.output.is_some() {
        write_output(&serde_json::to_string_pretty(schedule)?, args.output.as_ref())?;
    } else {
        print!("{}", format_schedule(schedule, &RosterIndex::new(roster)));
    }

    let summary = compute_matrices(schedule, roster).summary();
    tracing::info!(
        "Max partner repeat {}, max opponent repeat {}, {} frequent opponent pairs",
        summary.max_partner_repeat,
        summary.max_opponent_repeat,
        summary.frequent_opponent_pairs
    );

    Ok(())
}
