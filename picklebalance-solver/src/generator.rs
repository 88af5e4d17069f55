//! Generator seam and generation orchestration
//!
//! Level 1 - Orchestration and Level 2 - Phases

use picklebalance_core::{build, DuplicateSlot, Player, RawAssignment, TournamentSchedule};

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::request::GenerationRequest;

/// Anything that can turn a request into raw pairings.
///
/// The response is the generator's raw text; it must decode to a
/// `rawRounds` array of 4-id tuples or the whole generation fails.
pub trait ScheduleGenerator: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &str;

    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError>;
}

/// A reconstructed schedule together with its raw-input report
#[derive(Clone, Debug)]
pub struct Generated {
    pub schedule: TournamentSchedule,
    /// Ids repeated within one match, passed through unchanged
    pub duplicates: Vec<DuplicateSlot>,
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run one generation request end to end.
///
/// 1. Validate configuration
/// 2. Ask the generator for raw pairings
/// 3. Parse and validate the raw text
/// 4. Reconstruct the schedule
///
/// Any failure aborts the attempt; nothing partial is returned.
pub fn generate_schedule(
    generator: &dyn ScheduleGenerator,
    players: &[Player],
    config: &GenerationConfig,
) -> Result<Generated, GenerateError> {
    config.validate()?;

    let request = GenerationRequest::new(players, config);
    tracing::debug!(
        generator = generator.name(),
        players = players.len(),
        courts = config.courts,
        rounds = config.rounds,
        "requesting schedule"
    );

    let response = generator.generate(&request)?;
    let raw = RawAssignment::from_json(&response)?;

    if raw.round_count() != config.rounds as usize {
        tracing::warn!(
            expected = config.rounds,
            received = raw.round_count(),
            "generator returned a different number of rounds"
        );
    }

    let duplicates = raw.duplicate_slots();
    let schedule = build(&raw, players);

    tracing::info!(
        generator = generator.name(),
        rounds = schedule.round_count(),
        matches = schedule.total_matches(),
        "schedule generated"
    );

    Ok(Generated {
        schedule,
        duplicates,
    })
}
