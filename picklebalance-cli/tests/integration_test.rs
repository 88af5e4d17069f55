//! Integration tests for the PickleBalance engine
//!
//! Tests the full stack: raw parsing, reconstruction, statistics, filtering,
//! and local generation

use picklebalance_core::{
    build, compute_matrices, demo_roster, filter_for_player, PartnerBand, Player, RawAssignment,
    RoundSlot, TournamentSchedule,
};
use picklebalance_solver::{generate_schedule, GenerationConfig, GreedyGenerator};
use std::collections::BTreeSet;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn roster(n: usize) -> Vec<Player> {
    (1..=n)
        .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), 3.0 + i as f64 * 0.1))
        .collect()
}

fn schedule_from(json: &str, players: &[Player]) -> TournamentSchedule {
    build(&RawAssignment::from_json(json).unwrap(), players)
}

fn generated_demo(seed: u64) -> (Vec<Player>, TournamentSchedule) {
    let players = demo_roster();
    let config = GenerationConfig::new(3, 10).with_seed(seed).with_attempts(8);
    let generated = generate_schedule(&GreedyGenerator::new(&config), &players, &config).unwrap();
    (players, generated.schedule)
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_single_match_scenario() {
    let players = roster(4);
    let schedule = schedule_from(r#"{"rawRounds": [[["p1","p2","p3","p4"]]]}"#, &players);

    assert_eq!(schedule.round_count(), 1);
    assert_eq!(schedule.rounds[0].matches.len(), 1);
    assert_eq!(schedule.rounds[0].matches[0].court_number, 1);
    assert!(schedule.rounds[0].byes.is_empty());

    let stats = compute_matrices(&schedule, &players);
    assert_eq!(stats.partner.get(0, 1), 1);
    assert_eq!(stats.partner.get(2, 3), 1);
    for (i, j) in [(0, 2), (0, 3), (1, 2), (1, 3)] {
        assert_eq!(stats.opponent.get(i, j), 1);
    }
    assert_eq!(stats.games_played, vec![1, 1, 1, 1]);
}

#[test]
fn test_bye_scenario() {
    let players = roster(5);
    let schedule = schedule_from(r#"[[["p1","p2","p3","p4"]]]"#, &players);
    assert_eq!(schedule.rounds[0].byes, vec!["p5"]);

    let view = filter_for_player(&schedule, Some("p5"));
    assert_eq!(view.rounds.len(), 1);
    assert_eq!(view.rounds[0].slot, RoundSlot::Bye);
    assert!(view.rounds[0].matches.is_empty());
}

#[test]
fn test_unknown_player_scenario() {
    let players = roster(4);
    let schedule = schedule_from(r#"[[["p1","p2","p3","pX"]]]"#, &players);
    assert_eq!(schedule.rounds[0].matches[0].team2.player2_id, "pX");
    assert_eq!(schedule.rounds[0].byes, vec!["p4"]);
    assert!(schedule.rounds[0].matches[0].diagnostic.is_none());

    let stats = compute_matrices(&schedule, &players);
    assert_eq!(stats.partner.get(0, 1), 1);
    assert_eq!(stats.opponent.get(0, 2), 1);
    assert_eq!(stats.opponent.get(1, 2), 1);
    assert_eq!(stats.games_played, vec![1, 1, 1, 0]);
    assert_eq!(stats.partner.row(3), &[0, 0, 0, 0]);
}

#[test]
fn test_repeat_partner_scenario() {
    let players = roster(4);
    let schedule = schedule_from(
        r#"[[["p1","p2","p3","p4"]], [["p2","p1","p4","p3"]]]"#,
        &players,
    );
    let stats = compute_matrices(&schedule, &players);
    assert_eq!(stats.partner.get(0, 1), 2);
    assert_eq!(stats.partner_band(0, 1), PartnerBand::Warning);
}

// ============================================================================
// GENERATED SCHEDULE PROPERTIES
// ============================================================================

#[test]
fn test_generated_rounds_cover_roster() {
    let (players, schedule) = generated_demo(3);
    let roster_ids: BTreeSet<&str> = players.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(schedule.round_count(), 10);
    for round in &schedule.rounds {
        let mut seen: BTreeSet<&str> = round.playing_ids().into_iter().collect();
        seen.extend(round.byes.iter().map(String::as_str));
        assert_eq!(seen, roster_ids);
        assert!(round.unaccounted(&players).is_empty());
    }
}

#[test]
fn test_generated_matrices_consistent() {
    let (players, schedule) = generated_demo(17);
    let stats = compute_matrices(&schedule, &players);

    assert!(stats.partner.is_symmetric());
    assert!(stats.opponent.is_symmetric());
    let total: u32 = stats.games_played.iter().sum();
    assert_eq!(total as usize, 4 * schedule.total_matches());
}

#[test]
fn test_filter_every_player_of_generated_schedule() {
    let (players, schedule) = generated_demo(23);

    let all = filter_for_player(&schedule, None);
    assert_eq!(all.rounds.len(), schedule.round_count());
    for (view, round) in all.rounds.iter().zip(&schedule.rounds) {
        assert_eq!(view.matches, round.matches);
        assert_eq!(view.byes, round.byes);
    }

    for player in &players {
        let view = filter_for_player(&schedule, Some(&player.id));
        assert!(view.anomalies().is_empty());
        assert_eq!(view.match_count() + view.bye_count(), schedule.round_count());
        for round in &view.rounds {
            match round.slot {
                RoundSlot::Playing => assert_eq!(round.matches.len(), 1),
                RoundSlot::Bye => assert!(round.matches.is_empty()),
                other => panic!("unexpected slot {:?}", other),
            }
        }
    }
}
