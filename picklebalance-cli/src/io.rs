//! File loading and output helpers shared by the commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use picklebalance_core::{demo_roster, Player, RawAssignment, TournamentSchedule};

pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let text = read(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse roster: {}", path.display()))
}

/// Roster from `path`, or the demo roster when none is given
pub fn roster_or_demo(path: Option<&PathBuf>) -> Result<Vec<Player>> {
    match path {
        Some(path) => load_roster(path),
        None => {
            tracing::info!("No roster given, using the demo roster");
            Ok(demo_roster())
        }
    }
}

pub fn load_raw(path: &Path) -> Result<RawAssignment> {
    let text = read(path)?;
    RawAssignment::from_json(&text)
        .with_context(|| format!("Invalid raw pairings: {}", path.display()))
}

pub fn load_schedule(path: &Path) -> Result<TournamentSchedule> {
    let text = read(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse schedule: {}", path.display()))
}

/// Write `text` to `output`, or to stdout
pub fn write_output(text: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
