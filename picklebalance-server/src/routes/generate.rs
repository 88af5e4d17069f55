//! Schedule generation endpoint

use axum::{extract::State, Json};
use picklebalance_core::{DuplicateSlot, Player, TournamentSchedule};
use picklebalance_solver::{generate_schedule, GenerateError, GenerationConfig, GreedyGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::schedule::StatsReport;
use super::{bad_request, internal_error, ApiError};
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    /// Defaults to the demo roster
    #[serde(default)]
    pub roster: Option<Vec<Player>>,
    pub courts: u32,
    pub rounds: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub attempts: Option<usize>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub schedule: TournamentSchedule,
    pub stats: StatsReport,
    pub duplicates: Vec<DuplicateSlot>,
}

/// Generate, reconstruct and analyse a schedule.
///
/// Requests are serialized; the generator itself runs on the blocking pool.
pub async fn generate(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let mut config = GenerationConfig::new(req.courts, req.rounds);
    if let Some(seed) = req.seed {
        config = config.with_seed(seed);
    }
    if let Some(attempts) = req.attempts {
        config = config.with_attempts(attempts);
    }
    config.validate().map_err(bad_request)?;

    let roster = req.roster.unwrap_or_else(|| state.demo_roster.clone());

    let _guard = state.generation.lock().await;
    let generated = tokio::task::spawn_blocking({
        let roster = roster.clone();
        move || {
            let generator = GreedyGenerator::new(&config);
            generate_schedule(&generator, &roster, &config)
        }
    })
    .await
    .map_err(internal_error)?
    .map_err(|err| match err {
        GenerateError::InvalidConfig(_) => bad_request(err),
        other => {
            tracing::warn!(error = %other, "generation failed");
            internal_error(other)
        }
    })?;

    Ok(Json(GenerateResponse {
        stats: StatsReport::new(&generated.schedule, &roster),
        schedule: generated.schedule,
        duplicates: generated.duplicates,
    }))
}
