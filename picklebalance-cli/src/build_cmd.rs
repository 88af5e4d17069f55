//! Build command - reconstruct a schedule from raw pairings
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load inputs, build, report
//! - Level 3: (delegated to picklebalance-core)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use picklebalance_core::{build, RosterIndex};

use crate::io::{load_raw, load_roster, write_output};
use crate::report::format_schedule;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BuildArgs {
    /// Roster JSON file (array of {id, name, rating})
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Raw pairings JSON file ({"rawRounds": [...]})
    #[arg(long, value_name = "FILE")]
    pub raw: PathBuf,

    /// Write the schedule JSON here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run build command
///
/// 1. Load roster and raw pairings
/// 2. Reconstruct the schedule
/// 3. Print or write it
pub fn run(args: BuildArgs) -> Result<()> {
    let roster = load_roster(&args.roster)?;
    let raw = load_raw(&args.raw)?;

    for dup in raw.duplicate_slots() {
        tracing::warn!(
            "Round {}, court {}: {} appears more than once",
            dup.round_number,
            dup.court_number,
            dup.player_id
        );
    }

    let schedule = build(&raw, &roster);
    tracing::info!(
        "Built {} rounds, {} matches for {} players",
        schedule.round_count(),
        schedule.total_matches(),
        roster.len()
    );

    if args.json || args.output.is_some() {
        write_output(&serde_json::to_string_pretty(&schedule)?, args.output.as_ref())
    } else {
        print!("{}", format_schedule(&schedule, &RosterIndex::new(&roster)));
        Ok(())
    }
}
