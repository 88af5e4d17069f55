//! Schedule entities
//!
//! Wire names are camelCase so the same JSON is understood by the web
//! frontend and the command-line tool.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::roster::RosterIndex;

/// Placeholder for an empty slot in a raw match tuple
pub const UNKNOWN_PLAYER_ID: &str = "?";

/// A rostered player
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Skill rating, used for balance diagnostics only
    #[serde(alias = "dupr")]
    pub rating: f64,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
        }
    }
}

/// Two player slots on one side of the net
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub player1_id: String,
    pub player2_id: String,
}

impl Team {
    pub fn new(player1_id: impl Into<String>, player2_id: impl Into<String>) -> Self {
        Self {
            player1_id: player1_id.into(),
            player2_id: player2_id.into(),
        }
    }

    pub fn ids(&self) -> [&str; 2] {
        [&self.player1_id, &self.player2_id]
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

/// One doubles match on a court
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// 1-based position within the round
    pub court_number: u32,
    pub team1: Team,
    pub team2: Team,
    /// Informational balance note, e.g. "Diff: 0.27"
    #[serde(default, alias = "explanation", skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl Match {
    /// Slots in raw order: [T1P1, T1P2, T2P1, T2P2]
    pub fn player_ids(&self) -> [&str; 4] {
        [
            &self.team1.player1_id,
            &self.team1.player2_id,
            &self.team2.player1_id,
            &self.team2.player2_id,
        ]
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.team1.contains(player_id) || self.team2.contains(player_id)
    }

    /// Absolute team rating difference, if all four players are rostered
    pub fn rating_diff(&self, roster: &RosterIndex<'_>) -> Option<f64> {
        let [a, b, c, d] = self.player_ids().map(|id| roster.rating(id));
        let team1 = a? + b?;
        let team2 = c? + d?;
        Some((team1 - team2).abs())
    }
}

/// A round of simultaneous matches plus the players sitting out
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based, sequential
    pub round_number: u32,
    pub matches: Vec<Match>,
    /// Player ids sitting out, in roster order
    pub byes: Vec<String>,
}

impl Round {
    /// Ids placed in any match this round (the unknown placeholder excluded)
    pub fn playing_ids(&self) -> FxHashSet<&str> {
        self.matches
            .iter()
            .flat_map(|m| m.player_ids())
            .filter(|id| *id != UNKNOWN_PLAYER_ID)
            .collect()
    }

    pub fn is_bye(&self, player_id: &str) -> bool {
        self.byes.iter().any(|id| id == player_id)
    }

    /// The match containing `player_id`, if any
    pub fn match_for(&self, player_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.contains(player_id))
    }

    /// Roster players neither scheduled nor on a bye.
    ///
    /// Empty for any round produced by [`crate::build`].
    pub fn unaccounted<'a>(&self, roster: &'a [Player]) -> Vec<&'a str> {
        let playing = self.playing_ids();
        roster
            .iter()
            .map(|p| p.id.as_str())
            .filter(|id| !playing.contains(id) && !self.is_bye(id))
            .collect()
    }
}

/// A complete schedule. Never mutated after construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentSchedule {
    pub rounds: Vec<Round>,
}

impl TournamentSchedule {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
