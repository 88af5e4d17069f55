//! Schedule reconstruction
//!
//! Turns a [`RawAssignment`] into an addressable [`TournamentSchedule`]:
//! court numbers from match position, byes by set subtraction against the
//! roster, and a rating-difference diagnostic for fully rostered matches.
//!
//! Reconstruction is lossless. Ids that do not resolve against the roster
//! are kept verbatim; only the diagnostic is skipped for those matches.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::model::{Match, Player, Round, Team, TournamentSchedule, UNKNOWN_PLAYER_ID};
use crate::raw::{RawAssignment, RawMatch};
use crate::roster::RosterIndex;

/// Team rating difference below which a match counts as even
pub const EVEN_MATCH_THRESHOLD: f64 = 0.3;

/// Informational balance band for a match's rating difference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceBand {
    Even,
    Uneven,
}

impl BalanceBand {
    /// Judged on the difference as displayed, rounded to two decimals
    pub fn classify(diff: f64) -> Self {
        if round_to_cents(diff) < EVEN_MATCH_THRESHOLD {
            BalanceBand::Even
        } else {
            BalanceBand::Uneven
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Reconstruct a full schedule from raw pairings.
///
/// Round and match counts are preserved exactly. An empty assignment yields
/// an empty schedule.
pub fn build(raw: &RawAssignment, roster: &[Player]) -> TournamentSchedule {
    let index = RosterIndex::new(roster);

    let rounds: Vec<Round> = raw
        .rounds()
        .iter()
        .enumerate()
        .map(|(r, tuples)| build_round(r, tuples, &index))
        .collect();

    tracing::debug!(
        rounds = rounds.len(),
        players = roster.len(),
        "reconstructed schedule"
    );

    TournamentSchedule { rounds }
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

fn build_round(round_index: usize, tuples: &[RawMatch], index: &RosterIndex<'_>) -> Round {
    let round_number = round_index as u32 + 1;
    let mut playing: FxHashSet<&str> = FxHashSet::default();

    let matches = tuples
        .iter()
        .enumerate()
        .map(|(m, ids)| {
            playing.extend(
                ids.iter()
                    .map(String::as_str)
                    .filter(|id| *id != UNKNOWN_PLAYER_ID),
            );
            build_match(round_number, m, ids, index)
        })
        .collect();

    let byes = index
        .players()
        .iter()
        .filter(|p| !playing.contains(p.id.as_str()))
        .map(|p| p.id.clone())
        .collect();

    Round {
        round_number,
        matches,
        byes,
    }
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

fn build_match(
    round_number: u32,
    match_index: usize,
    ids: &RawMatch,
    index: &RosterIndex<'_>,
) -> Match {
    let court_number = match_index as u32 + 1;
    warn_on_duplicates(round_number, court_number, ids);

    let [p1, p2, p3, p4] = ids.clone();
    let mut built = Match {
        court_number,
        team1: Team::new(p1, p2),
        team2: Team::new(p3, p4),
        diagnostic: None,
    };
    built.diagnostic = built.rating_diff(index).map(format_diagnostic);
    built
}

/// Diagnostic text for a rating difference, two decimals
pub fn format_diagnostic(diff: f64) -> String {
    format!("Diff: {:.2}", diff)
}

fn warn_on_duplicates(round_number: u32, court_number: u32, ids: &RawMatch) {
    for (i, id) in ids.iter().enumerate() {
        if id != UNKNOWN_PLAYER_ID && ids[i + 1..].contains(id) {
            tracing::warn!(
                round = round_number,
                court = court_number,
                player = %id,
                "player id repeated within one match"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<Player> {
        (1..=n)
            .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), 3.0 + i as f64 * 0.1))
            .collect()
    }

    fn raw(json: &str) -> RawAssignment {
        RawAssignment::from_json(json).unwrap()
    }

    #[test]
    fn test_single_match_no_byes() {
        let players = roster(4);
        let schedule = build(&raw(r#"[[["p1","p2","p3","p4"]]]"#), &players);

        assert_eq!(schedule.round_count(), 1);
        let round = &schedule.rounds[0];
        assert_eq!(round.round_number, 1);
        assert_eq!(round.matches.len(), 1);
        assert_eq!(round.matches[0].court_number, 1);
        assert!(round.byes.is_empty());
    }

    #[test]
    fn test_byes_in_roster_order() {
        let players = roster(7);
        let schedule = build(&raw(r#"[[["p6","p2","p3","p4"]]]"#), &players);
        assert_eq!(schedule.rounds[0].byes, vec!["p1", "p5", "p7"]);
    }

    #[test]
    fn test_court_and_round_numbers_are_positional() {
        let players = roster(8);
        let schedule = build(
            &raw(
                r#"[[["p1","p2","p3","p4"],["p5","p6","p7","p8"]],
                    [["p1","p3","p5","p7"],["p2","p4","p6","p8"]],
                    [["p1","p4","p6","p7"]]]"#,
            ),
            &players,
        );
        assert_eq!(schedule.round_count(), 3);
        assert_eq!(schedule.total_matches(), 5);
        for (r, round) in schedule.rounds.iter().enumerate() {
            assert_eq!(round.round_number as usize, r + 1);
            for (m, built) in round.matches.iter().enumerate() {
                assert_eq!(built.court_number as usize, m + 1);
            }
        }
        assert_eq!(schedule.rounds[2].byes, vec!["p2", "p3", "p5", "p8"]);
    }

    #[test]
    fn test_every_player_accounted_for() {
        let players = roster(10);
        let schedule = build(
            &raw(r#"[[["p1","p2","p3","p4"],["p5","p6","p7","p8"]],[["p9","p10","p1","p2"]]]"#),
            &players,
        );
        for round in &schedule.rounds {
            assert!(round.unaccounted(&players).is_empty());
            let playing = round.playing_ids();
            assert_eq!(playing.len() + round.byes.len(), players.len());
        }
    }

    #[test]
    fn test_diagnostic_two_decimals() {
        let players = vec![
            Player::new("p1", "A", 4.157),
            Player::new("p2", "B", 3.575),
            Player::new("p3", "C", 3.714),
            Player::new("p4", "D", 3.42),
        ];
        let schedule = build(&raw(r#"[[["p1","p2","p3","p4"]]]"#), &players);
        // |7.732 - 7.134| = 0.598
        assert_eq!(
            schedule.rounds[0].matches[0].diagnostic.as_deref(),
            Some("Diff: 0.60")
        );
    }

    #[test]
    fn test_unknown_id_kept_without_diagnostic() {
        let players = roster(4);
        let schedule = build(&raw(r#"[[["p1","p2","p3","pX"]]]"#), &players);
        let built = &schedule.rounds[0].matches[0];
        assert_eq!(built.team2.player2_id, "pX");
        assert!(built.diagnostic.is_none());
        assert_eq!(schedule.rounds[0].byes, vec!["p4"]);
    }

    #[test]
    fn test_empty_slot_sentinel_preserved() {
        let players = roster(4);
        let schedule = build(&raw(r#"[[["p1","","p3","p4"]]]"#), &players);
        let built = &schedule.rounds[0].matches[0];
        assert_eq!(built.team1.player2_id, UNKNOWN_PLAYER_ID);
        assert_eq!(schedule.rounds[0].byes, vec!["p2"]);
    }

    #[test]
    fn test_duplicate_in_match_passes_through() {
        let players = roster(4);
        let schedule = build(&raw(r#"[[["p1","p2","p1","p3"]]]"#), &players);
        let built = &schedule.rounds[0].matches[0];
        assert_eq!(built.player_ids(), ["p1", "p2", "p1", "p3"]);
        assert_eq!(schedule.rounds[0].byes, vec!["p4"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build(&RawAssignment::default(), &roster(4)).is_empty());

        let schedule = build(&raw(r#"[[["p1","p2","p3","p4"]]]"#), &[]);
        assert_eq!(schedule.total_matches(), 1);
        assert!(schedule.rounds[0].byes.is_empty());
        assert!(schedule.rounds[0].matches[0].diagnostic.is_none());
    }

    #[test]
    fn test_round_with_no_matches_is_all_byes() {
        let players = roster(3);
        let schedule = build(&raw(r#"[[]]"#), &players);
        assert_eq!(schedule.rounds[0].byes, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_balance_band() {
        assert_eq!(BalanceBand::classify(0.0), BalanceBand::Even);
        assert_eq!(BalanceBand::classify(0.29), BalanceBand::Even);
        assert_eq!(BalanceBand::classify(0.3), BalanceBand::Uneven);
    }

    #[test]
    fn test_balance_band_matches_displayed_diff() {
        let players = vec![
            Player::new("p1", "A", 3.6),
            Player::new("p2", "B", 3.0),
            Player::new("p3", "C", 3.3),
            Player::new("p4", "D", 3.0),
        ];
        let schedule = build(&raw(r#"[[["p1","p2","p3","p4"]]]"#), &players);
        let built = &schedule.rounds[0].matches[0];
        let diff = built.rating_diff(&RosterIndex::new(&players)).unwrap();

        assert!(diff < EVEN_MATCH_THRESHOLD);
        assert_eq!(built.diagnostic.as_deref(), Some("Diff: 0.30"));
        assert_eq!(BalanceBand::classify(diff), BalanceBand::Uneven);
        assert_eq!(BalanceBand::classify(0.294), BalanceBand::Even);
    }

    #[test]
    fn test_whitespace_id_plays_not_bye() {
        let players = vec![
            Player::new(" ", "Blank", 3.5),
            Player::new("p2", "B", 3.5),
            Player::new("p3", "C", 3.5),
            Player::new("p4", "D", 3.5),
        ];
        let schedule = build(&raw(r#"[[[" ","p2","p3","p4"]]]"#), &players);
        let round = &schedule.rounds[0];

        assert_eq!(round.matches[0].team1.player1_id, " ");
        assert!(round.byes.is_empty());
        assert_eq!(round.matches[0].diagnostic.as_deref(), Some("Diff: 0.00"));
    }
}
