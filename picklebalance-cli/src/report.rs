//! Plain-text rendering for terminal output
//!
//! Level 4 - Formatting utilities

use std::fmt::Write;

use picklebalance_core::{
    BalanceBand, InteractionMatrix, Match, PlayerView, RosterIndex, RoundSlot, TournamentSchedule,
};

/// Player name for display, falling back to the raw id
fn display_name(index: &RosterIndex<'_>, id: &str) -> String {
    index
        .player(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn format_match(index: &RosterIndex<'_>, m: &Match) -> String {
    let [a, b, c, d] = m.player_ids().map(|id| display_name(index, id));
    let mut line = format!("Court {}: {} & {} vs {} & {}", m.court_number, a, b, c, d);
    if let Some(diagnostic) = &m.diagnostic {
        let band = m.rating_diff(index).map(BalanceBand::classify);
        let marker = match band {
            Some(BalanceBand::Even) => "even",
            Some(BalanceBand::Uneven) => "uneven",
            None => "unrated",
        };
        let _ = write!(line, "  ({}, {})", diagnostic, marker);
    }
    line
}

pub fn format_schedule(schedule: &TournamentSchedule, index: &RosterIndex<'_>) -> String {
    let mut out = String::new();
    for round in &schedule.rounds {
        let _ = writeln!(out, "=== Round {} ===", round.round_number);
        for m in &round.matches {
            let _ = writeln!(out, "  {}", format_match(index, m));
        }
        if !round.byes.is_empty() {
            let names: Vec<String> = round
                .byes
                .iter()
                .map(|id| display_name(index, id))
                .collect();
            let _ = writeln!(out, "  Byes: {}", names.join(", "));
        }
    }
    out
}

/// Square matrix with 1..N row and column labels
pub fn format_matrix(title: &str, matrix: &InteractionMatrix) -> String {
    let n = matrix.size();
    let mut out = format!("{}\n    ", title);
    for j in 0..n {
        let _ = write!(out, "{:>3}", j + 1);
    }
    out.push('\n');
    for (i, row) in matrix.rows().iter().enumerate() {
        let _ = write!(out, "{:>3} ", i + 1);
        for (j, count) in row.iter().enumerate() {
            if i == j {
                let _ = write!(out, "{:>3}", "-");
            } else {
                let _ = write!(out, "{:>3}", count);
            }
        }
        out.push('\n');
    }
    out
}

pub fn format_player_view(view: &PlayerView, index: &RosterIndex<'_>) -> String {
    let mut out = String::new();
    if let Some(id) = &view.player_id {
        let _ = writeln!(
            out,
            "Schedule for {} ({} matches, {} byes)",
            display_name(index, id),
            view.match_count(),
            view.bye_count()
        );
    }
    for round in &view.rounds {
        match round.slot {
            RoundSlot::Bye => {
                let _ = writeln!(out, "Round {}: BYE", round.round_number);
            }
            RoundSlot::Unaccounted => {
                let _ = writeln!(out, "Round {}: not scheduled", round.round_number);
            }
            RoundSlot::Playing | RoundSlot::All => {
                let _ = writeln!(out, "Round {}:", round.round_number);
                for m in &round.matches {
                    let _ = writeln!(out, "  {}", format_match(index, m));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklebalance_core::{
        build, compute_matrices, demo_roster, filter_for_player, RawAssignment,
    };

    fn sample() -> (Vec<picklebalance_core::Player>, TournamentSchedule) {
        let players: Vec<_> = demo_roster().into_iter().take(5).collect();
        let raw = RawAssignment::from_json(r#"[[["p1","p2","p3","p4"]]]"#).unwrap();
        let schedule = build(&raw, &players);
        (players, schedule)
    }

    #[test]
    fn test_format_schedule_names_and_byes() {
        let (players, schedule) = sample();
        let index = RosterIndex::new(&players);
        let text = format_schedule(&schedule, &index);

        assert!(text.contains("=== Round 1 ==="));
        assert!(text.contains("Court 1: Mark & Ricky vs Guil & Colin P"));
        assert!(text.contains("Diff: 0.60, uneven"));
        assert!(text.contains("Byes: Olive"));
    }

    #[test]
    fn test_format_matrix_labels() {
        let (players, schedule) = sample();
        let stats = compute_matrices(&schedule, &players);
        let text = format_matrix("Partners", &stats.partner);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Partners");
        assert_eq!(lines[1], "      1  2  3  4  5");
        assert_eq!(lines[2], "  1   -  1  0  0  0");
    }

    #[test]
    fn test_format_player_view_bye() {
        let (players, schedule) = sample();
        let index = RosterIndex::new(&players);
        let view = filter_for_player(&schedule, Some("p5"));
        let text = format_player_view(&view, &index);

        assert!(text.contains("Schedule for Olive (0 matches, 1 byes)"));
        assert!(text.contains("Round 1: BYE"));
    }
}
