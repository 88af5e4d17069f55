//! Filter command - one player's view of a schedule

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use picklebalance_core::{filter_for_player, RosterIndex};

use crate::io::{load_schedule, roster_or_demo};
use crate::report::format_player_view;

#[derive(Args)]
pub struct FilterArgs {
    /// Schedule JSON file (output of `build --json`)
    #[arg(long, value_name = "FILE")]
    pub schedule: PathBuf,

    /// Player id to focus on; omit for the whole schedule
    #[arg(long)]
    pub player: Option<String>,

    /// Roster JSON file used for display names (demo roster if omitted)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FilterArgs) -> Result<()> {
    let schedule = load_schedule(&args.schedule)?;
    let view = filter_for_player(&schedule, args.player.as_deref());

    let anomalies = view.anomalies();
    if !anomalies.is_empty() {
        tracing::warn!("Player missing from rounds {:?}", anomalies);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let roster = roster_or_demo(args.roster.as_ref())?;
        print!("{}", format_player_view(&view, &RosterIndex::new(&roster)));
    }

    Ok(())
}
