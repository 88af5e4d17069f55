//! Partner / opponent interaction matrices
//!
//! Counts, over a whole schedule, how often each pair of rostered players
//! were teammates and how often they faced each other, plus games played
//! per player. Rows and columns follow roster order.
//!
//! Ids that do not resolve against the roster are skipped: they never
//! contribute a count and never cause a failure.

use serde::{Deserialize, Serialize};

use crate::model::{Player, TournamentSchedule};
use crate::roster::RosterIndex;

/// Square, symmetric count matrix indexed by roster position
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionMatrix {
    rows: Vec<Vec<u32>>,
}

impl InteractionMatrix {
    pub fn zeros(size: usize) -> Self {
        Self {
            rows: vec![vec![0; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.rows[i][j]
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Largest off-diagonal entry
    pub fn max_count(&self) -> u32 {
        self.upper_pairs().map(|(_, _, c)| c).max().unwrap_or(0)
    }

    /// Increment both (i, j) and (j, i). The diagonal is never written.
    fn record_pair(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.rows[i][j] += 1;
        self.rows[j][i] += 1;
    }

    /// Every unordered pair `i < j` with its count
    fn upper_pairs(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j, self.rows[i][j])))
    }
}

/// Partner repeat classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerBand {
    /// Never partnered
    Ideal,
    /// Partnered once
    Acceptable,
    /// Partnered twice
    Warning,
    /// Partnered three or more times
    Violation,
}

impl PartnerBand {
    pub fn classify(count: u32) -> Self {
        match count {
            0 => PartnerBand::Ideal,
            1 => PartnerBand::Acceptable,
            2 => PartnerBand::Warning,
            _ => PartnerBand::Violation,
        }
    }
}

/// Opponent repeat classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentBand {
    /// Faced each other at most twice
    Normal,
    /// Three or more meetings
    Frequent,
}

impl OpponentBand {
    pub fn classify(count: u32) -> Self {
        if count >= 3 {
            OpponentBand::Frequent
        } else {
            OpponentBand::Normal
        }
    }
}

/// An unordered pair of roster positions and how often it occurred
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub first: usize,
    pub second: usize,
    pub count: u32,
}

/// Whole-schedule totals for quick auditing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub players: usize,
    pub appearances: u32,
    pub max_partner_repeat: u32,
    pub max_opponent_repeat: u32,
    pub partner_warnings: usize,
    pub partner_violations: usize,
    pub frequent_opponent_pairs: usize,
}

/// Output of [`compute_matrices`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionStats {
    pub partner: InteractionMatrix,
    pub opponent: InteractionMatrix,
    pub games_played: Vec<u32>,
}

impl InteractionStats {
    pub fn partner_band(&self, i: usize, j: usize) -> PartnerBand {
        PartnerBand::classify(self.partner.get(i, j))
    }

    pub fn opponent_band(&self, i: usize, j: usize) -> OpponentBand {
        OpponentBand::classify(self.opponent.get(i, j))
    }

    /// Pairs partnered twice or more (band Warning or Violation)
    pub fn partner_violations(&self) -> Vec<PairCount> {
        self.partner
            .upper_pairs()
            .filter(|&(_, _, c)| PartnerBand::classify(c) >= PartnerBand::Warning)
            .map(|(first, second, count)| PairCount {
                first,
                second,
                count,
            })
            .collect()
    }

    /// Pairs that met as opponents three or more times
    pub fn frequent_opponents(&self) -> Vec<PairCount> {
        self.opponent
            .upper_pairs()
            .filter(|&(_, _, c)| OpponentBand::classify(c) == OpponentBand::Frequent)
            .map(|(first, second, count)| PairCount {
                first,
                second,
                count,
            })
            .collect()
    }

    pub fn summary(&self) -> StatsSummary {
        let partner_pairs: Vec<PartnerBand> = self
            .partner
            .upper_pairs()
            .map(|(_, _, c)| PartnerBand::classify(c))
            .collect();

        StatsSummary {
            players: self.games_played.len(),
            appearances: self.games_played.iter().sum(),
            max_partner_repeat: self.partner.max_count(),
            max_opponent_repeat: self.opponent.max_count(),
            partner_warnings: partner_pairs
                .iter()
                .filter(|b| **b == PartnerBand::Warning)
                .count(),
            partner_violations: partner_pairs
                .iter()
                .filter(|b| **b == PartnerBand::Violation)
                .count(),
            frequent_opponent_pairs: self.frequent_opponents().len(),
        }
    }
}

/// Compute partner, opponent and games-played counts.
///
/// Linear in the number of matches: six pair updates and four increments
/// per match, with ids resolved through a map built once per call.
pub fn compute_matrices(schedule: &TournamentSchedule, roster: &[Player]) -> InteractionStats {
    let index = RosterIndex::new(roster);
    let n = index.len();

    let mut stats = InteractionStats {
        partner: InteractionMatrix::zeros(n),
        opponent: InteractionMatrix::zeros(n),
        games_played: vec![0; n],
    };
    let mut skipped = 0usize;

    for round in &schedule.rounds {
        for m in &round.matches {
            let slots = m.player_ids().map(|id| index.position(id));
            skipped += slots.iter().filter(|s| s.is_none()).count();

            for idx in slots.iter().flatten() {
                stats.games_played[*idx] += 1;
            }

            let [p1, p2, p3, p4] = slots;
            for (a, b) in [(p1, p2), (p3, p4)] {
                if let (Some(i), Some(j)) = (a, b) {
                    stats.partner.record_pair(i, j);
                }
            }
            for (a, b) in [(p1, p3), (p1, p4), (p2, p3), (p2, p4)] {
                if let (Some(i), Some(j)) = (a, b) {
                    stats.opponent.record_pair(i, j);
                }
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "ids outside the roster were excluded from counts");
    }

    stats
}

/// Rounds sat out per player, in roster order
pub fn bye_counts(schedule: &TournamentSchedule, roster: &[Player]) -> Vec<u32> {
    let index = RosterIndex::new(roster);
    let mut counts = vec![0; index.len()];
    for round in &schedule.rounds {
        for id in &round.byes {
            if let Some(i) = index.position(id) {
                counts[i] += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::raw::RawAssignment;

    fn roster(n: usize) -> Vec<Player> {
        (1..=n)
            .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), 3.5))
            .collect()
    }

    fn schedule(players: &[Player], json: &str) -> TournamentSchedule {
        build(&RawAssignment::from_json(json).unwrap(), players)
    }

    #[test]
    fn test_single_match_counts() {
        let players = roster(4);
        let stats = compute_matrices(&schedule(&players, r#"[[["p1","p2","p3","p4"]]]"#), &players);

        assert_eq!(stats.partner.get(0, 1), 1);
        assert_eq!(stats.partner.get(2, 3), 1);
        assert_eq!(stats.partner.get(0, 2), 0);
        for (i, j) in [(0, 2), (0, 3), (1, 2), (1, 3)] {
            assert_eq!(stats.opponent.get(i, j), 1);
        }
        assert_eq!(stats.opponent.get(0, 1), 0);
        assert_eq!(stats.games_played, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_matrices_symmetric_with_zero_diagonal() {
        let players = roster(8);
        let stats = compute_matrices(
            &schedule(
                &players,
                r#"[[["p1","p2","p3","p4"],["p5","p6","p7","p8"]],
                    [["p1","p5","p2","p6"],["p3","p7","p4","p8"]],
                    [["p1","p8","p2","p7"],["p3","p6","p4","p5"]]]"#,
            ),
            &players,
        );
        assert!(stats.partner.is_symmetric());
        assert!(stats.opponent.is_symmetric());
        for i in 0..8 {
            assert_eq!(stats.partner.get(i, i), 0);
            assert_eq!(stats.opponent.get(i, i), 0);
        }
        assert_eq!(stats.games_played.iter().sum::<u32>(), 4 * 6);
    }

    #[test]
    fn test_unknown_id_excluded() {
        let players = roster(4);
        let stats = compute_matrices(&schedule(&players, r#"[[["p1","p2","p3","pX"]]]"#), &players);

        assert_eq!(stats.games_played, vec![1, 1, 1, 0]);
        assert_eq!(stats.partner.get(0, 1), 1);
        assert_eq!(stats.partner.get(2, 3), 0);
        assert_eq!(stats.opponent.get(0, 2), 1);
        assert_eq!(stats.opponent.get(1, 2), 1);
        assert_eq!(stats.opponent.get(0, 3), 0);
        assert_eq!(stats.opponent.get(1, 3), 0);
    }

    #[test]
    fn test_repeat_partner_is_warning() {
        let players = roster(4);
        let stats = compute_matrices(
            &schedule(&players, r#"[[["p1","p2","p3","p4"]],[["p1","p2","p4","p3"]]]"#),
            &players,
        );
        assert_eq!(stats.partner.get(0, 1), 2);
        assert_eq!(stats.partner_band(0, 1), PartnerBand::Warning);

        let flagged = stats.partner_violations();
        assert_eq!(flagged.len(), 2);
        assert_eq!(
            flagged[0],
            PairCount {
                first: 0,
                second: 1,
                count: 2
            }
        );
    }

    #[test]
    fn test_frequent_opponents() {
        let players = roster(4);
        let stats = compute_matrices(
            &schedule(
                &players,
                r#"[[["p1","p2","p3","p4"]],[["p1","p3","p2","p4"]],[["p1","p4","p2","p3"]]]"#,
            ),
            &players,
        );
        // Every pair met twice as opponents, once as partners
        assert!(stats.frequent_opponents().is_empty());
        assert_eq!(stats.opponent.get(0, 1), 2);
        assert_eq!(stats.opponent_band(0, 1), OpponentBand::Normal);

        let summary = stats.summary();
        assert_eq!(summary.appearances, 12);
        assert_eq!(summary.max_partner_repeat, 1);
        assert_eq!(summary.max_opponent_repeat, 2);
        assert_eq!(summary.partner_warnings, 0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(PartnerBand::classify(0), PartnerBand::Ideal);
        assert_eq!(PartnerBand::classify(1), PartnerBand::Acceptable);
        assert_eq!(PartnerBand::classify(2), PartnerBand::Warning);
        assert_eq!(PartnerBand::classify(5), PartnerBand::Violation);
        assert_eq!(OpponentBand::classify(2), OpponentBand::Normal);
        assert_eq!(OpponentBand::classify(3), OpponentBand::Frequent);
    }

    #[test]
    fn test_duplicate_in_team_skips_diagonal() {
        let players = roster(4);
        let stats = compute_matrices(&schedule(&players, r#"[[["p1","p1","p3","p4"]]]"#), &players);
        assert_eq!(stats.partner.get(0, 0), 0);
        assert_eq!(stats.games_played[0], 2);
        assert_eq!(stats.opponent.get(0, 2), 2);
    }

    #[test]
    fn test_empty_inputs() {
        let stats = compute_matrices(&TournamentSchedule::default(), &roster(3));
        assert_eq!(stats.games_played, vec![0, 0, 0]);
        assert_eq!(stats.partner.size(), 3);
        assert_eq!(stats.summary().max_partner_repeat, 0);

        let stats = compute_matrices(&TournamentSchedule::default(), &[]);
        assert_eq!(stats.partner.size(), 0);
        assert!(stats.games_played.is_empty());
    }

    #[test]
    fn test_bye_counts() {
        let players = roster(6);
        let s = schedule(
            &players,
            r#"[[["p1","p2","p3","p4"]],[["p3","p4","p5","p6"]],[["p1","p2","p5","p6"]]]"#,
        );
        assert_eq!(bye_counts(&s, &players), vec![1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_stats_serialize_as_rows() {
        let players = roster(4);
        let stats = compute_matrices(&schedule(&players, r#"[[["p1","p2","p3","p4"]]]"#), &players);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["partner"][0][1], 1);
        assert_eq!(json["gamesPlayed"][3], 1);
    }
}
