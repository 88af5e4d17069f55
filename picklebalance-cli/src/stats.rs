//! Stats command - partner/opponent matrices for a schedule
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: compute statistics, report
//! - Level 3: (delegated to picklebalance-core)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use picklebalance_core::{
    bye_counts, compute_matrices, InteractionStats, PairCount, Player, StatsSummary,
};

use crate::io::{load_roster, load_schedule};
use crate::report::format_matrix;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct StatsArgs {
    /// Roster JSON file
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Schedule JSON file (output of `build --json`)
    #[arg(long, value_name = "FILE")]
    pub schedule: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    #[serde(flatten)]
    stats: &'a InteractionStats,
    bye_counts: Vec<u32>,
    partner_violations: Vec<PairCount>,
    frequent_opponents: Vec<PairCount>,
    summary: StatsSummary,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: StatsArgs) -> Result<()> {
    let roster = load_roster(&args.roster)?;
    let schedule = load_schedule(&args.schedule)?;

    let stats = compute_matrices(&schedule, &roster);
    let byes = bye_counts(&schedule, &roster);

    if args.json {
        let output = StatsOutput {
            stats: &stats,
            bye_counts: byes,
            partner_violations: stats.partner_violations(),
            frequent_opponents: stats.frequent_opponents(),
            summary: stats.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text_stats(&stats, &byes, &roster);
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn print_text_stats(stats: &InteractionStats, byes: &[u32], roster: &[Player]) {
    let summary = stats.summary();

    println!("\n=== Players ===");
    for (i, player) in roster.iter().enumerate() {
        println!(
            "{:>3}. {:<20} games {:>2}  byes {:>2}",
            i + 1,
            player.name,
            stats.games_played[i],
            byes[i]
        );
    }

    println!();
    print!("{}", format_matrix("=== Partners ===", &stats.partner));
    println!();
    print!("{}", format_matrix("=== Opponents ===", &stats.opponent));

    println!("\n=== Summary ===");
    println!("Max partner repeat:   {}", summary.max_partner_repeat);
    println!("Max opponent repeat:  {}", summary.max_opponent_repeat);
    println!(
        "Partner repeats:      {} warning, {} violation",
        summary.partner_warnings, summary.partner_violations
    );
    println!("Frequent opponents:   {}", summary.frequent_opponent_pairs);

    for pair in stats.partner_violations() {
        println!(
            "  partners {} & {}: {} times",
            roster[pair.first].name, roster[pair.second].name, pair.count
        );
    }
    for pair in stats.frequent_opponents() {
        println!(
            "  opponents {} & {}: {} times",
            roster[pair.first].name, roster[pair.second].name, pair.count
        );
    }
}
