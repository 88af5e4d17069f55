//! Player-scoped schedule projection

use serde::{Deserialize, Serialize};

use crate::model::{Match, Round, TournamentSchedule};

/// How a projected round relates to the selected player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundSlot {
    /// No player selected; the round is shown in full
    All,
    /// The player is in exactly the one match shown
    Playing,
    /// The player sits out this round
    Bye,
    /// The player is neither scheduled nor listed as a bye
    Unaccounted,
}

/// One round as seen through the filter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub round_number: u32,
    pub matches: Vec<Match>,
    pub byes: Vec<String>,
    pub slot: RoundSlot,
}

impl RoundView {
    fn full(round: &Round) -> Self {
        Self {
            round_number: round.round_number,
            matches: round.matches.clone(),
            byes: round.byes.clone(),
            slot: RoundSlot::All,
        }
    }

    fn scoped(round: &Round, matches: Vec<Match>, slot: RoundSlot) -> Self {
        Self {
            round_number: round.round_number,
            matches,
            byes: round.byes.clone(),
            slot,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.slot == RoundSlot::Bye
    }
}

/// A schedule projected for one player (or for nobody)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub player_id: Option<String>,
    pub rounds: Vec<RoundView>,
}

impl PlayerView {
    /// Round numbers where the player could not be found at all
    pub fn anomalies(&self) -> Vec<u32> {
        self.rounds
            .iter()
            .filter(|r| r.slot == RoundSlot::Unaccounted)
            .map(|r| r.round_number)
            .collect()
    }

    /// Rounds worth displaying (unaccounted rounds omitted)
    pub fn visible(&self) -> impl Iterator<Item = &RoundView> {
        self.rounds
            .iter()
            .filter(|r| r.slot != RoundSlot::Unaccounted)
    }

    pub fn bye_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_bye()).count()
    }

    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }
}

/// Project `schedule` onto `player_id`.
///
/// `None` is the identity projection. Otherwise every round is kept in its
/// original order and tagged as playing, bye, or unaccounted; an
/// unaccounted round is never reported as a bye.
pub fn filter_for_player(schedule: &TournamentSchedule, player_id: Option<&str>) -> PlayerView {
    let rounds = match player_id {
        None => schedule.rounds.iter().map(RoundView::full).collect(),
        Some(id) => schedule
            .rounds
            .iter()
            .map(|round| project_round(round, id))
            .collect(),
    };

    PlayerView {
        player_id: player_id.map(str::to_string),
        rounds,
    }
}

fn project_round(round: &Round, player_id: &str) -> RoundView {
    if round.is_bye(player_id) {
        return RoundView::scoped(round, Vec::new(), RoundSlot::Bye);
    }

    match round.match_for(player_id) {
        Some(m) => RoundView::scoped(round, vec![m.clone()], RoundSlot::Playing),
        None => {
            tracing::warn!(
                round = round.round_number,
                player = player_id,
                "player neither scheduled nor on a bye"
            );
            RoundView::scoped(round, Vec::new(), RoundSlot::Unaccounted)
        }
    }
}
