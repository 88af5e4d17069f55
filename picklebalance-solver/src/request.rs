//! Generator request construction
//!
//! Level 4 - Utilities and configuration

use picklebalance_core::Player;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;

/// What a generator needs to know about each player
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub rating: f64,
}

/// Everything handed to a [`crate::ScheduleGenerator`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Players in roster order
    pub roster: Vec<RosterEntry>,
    pub courts: u32,
    pub rounds: u32,
    /// Ordering and output-format rules for the generator
    pub instructions: String,
}

impl GenerationRequest {
    pub fn new(players: &[Player], config: &GenerationConfig) -> Self {
        Self {
            roster: players
                .iter()
                .map(|p| RosterEntry {
                    id: p.id.clone(),
                    rating: p.rating,
                })
                .collect(),
            courts: config.courts,
            rounds: config.rounds,
            instructions: render_instructions(players, config.courts, config.rounds),
        }
    }
}

/// One `id: rating` line per player
pub fn roster_summary(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| format!("{}: {:.2}", p.id, p.rating))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Constraint and output-format text for a generator
pub fn render_instructions(players: &[Player], courts: u32, rounds: u32) -> String {
    format!(
        "Generate a balanced round robin doubles schedule.\n\
         \n\
         Configuration:\n\
         - Total players: {players}\n\
         - Courts: {courts}\n\
         - Rounds: {rounds}\n\
         \n\
         Roster (ID: rating):\n\
         {summary}\n\
         \n\
         Constraints, in order of importance:\n\
         1. No repeat partners: two players are never partners more than once.\n\
         2. Minimize repeat opponents: two players face each other at most twice.\n\
         3. Court capacity: exactly {courts} matches per round, 4 players per match.\n\
         4. Rating balance: total rating of team 1 close to total rating of team 2.\n\
         5. Bye distribution: players sit out as evenly as possible.\n\
         \n\
         Output format:\n\
         A JSON object with a 3-D array \"rawRounds\": rounds, then matches,\n\
         then exactly 4 player IDs [Team1_P1, Team1_P2, Team2_P1, Team2_P2].\n\
         Do not include explanations, byes, or court numbers.",
        players = players.len(),
        courts = courts,
        rounds = rounds,
        summary = roster_summary(players),
    )
}
