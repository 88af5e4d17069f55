//! Schedule post-processing endpoints
//!
//! Each handler is a thin wrapper over one pure engine call.

use axum::Json;
use picklebalance_core::{
    build, bye_counts, compute_matrices, filter_for_player, DuplicateSlot, InteractionStats,
    OpponentBand, PairCount, PartnerBand, Player, PlayerView, RawAssignment, StatsSummary,
    TournamentSchedule,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{bad_request, ApiError};

/// Build request: roster plus the generator's raw pairings
#[derive(Deserialize)]
pub struct BuildRequest {
    pub roster: Vec<Player>,
    /// `{"rawRounds": [...]}` or the bare rounds array
    pub raw: Value,
}

#[derive(Serialize)]
pub struct BuildResponse {
    #[serde(flatten)]
    pub schedule: TournamentSchedule,
    pub duplicates: Vec<DuplicateSlot>,
}

/// Reconstruct a schedule from raw pairings
pub async fn build_schedule(
    Json(req): Json<BuildRequest>,
) -> Result<Json<BuildResponse>, ApiError> {
    let raw = RawAssignment::from_value(&req.raw).map_err(bad_request)?;
    Ok(Json(BuildResponse {
        duplicates: raw.duplicate_slots(),
        schedule: build(&raw, &req.roster),
    }))
}

#[derive(Deserialize)]
pub struct StatsRequest {
    pub roster: Vec<Player>,
    pub schedule: TournamentSchedule,
}

/// Interaction matrices with their display bands
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: InteractionStats,
    pub partner_bands: Vec<Vec<PartnerBand>>,
    pub opponent_bands: Vec<Vec<OpponentBand>>,
    pub bye_counts: Vec<u32>,
    pub partner_violations: Vec<PairCount>,
    pub frequent_opponents: Vec<PairCount>,
    pub summary: StatsSummary,
}

impl StatsReport {
    pub fn new(schedule: &TournamentSchedule, roster: &[Player]) -> Self {
        let stats = compute_matrices(schedule, roster);
        let n = stats.games_played.len();

        Self {
            partner_bands: (0..n)
                .map(|i| (0..n).map(|j| stats.partner_band(i, j)).collect())
                .collect(),
            opponent_bands: (0..n)
                .map(|i| (0..n).map(|j| stats.opponent_band(i, j)).collect())
                .collect(),
            bye_counts: bye_counts(schedule, roster),
            partner_violations: stats.partner_violations(),
            frequent_opponents: stats.frequent_opponents(),
            summary: stats.summary(),
            stats,
        }
    }
}

/// Partner/opponent statistics for a reconstructed schedule
pub async fn schedule_stats(Json(req): Json<StatsRequest>) -> Json<StatsReport> {
    Json(StatsReport::new(&req.schedule, &req.roster))
}

#[derive(Deserialize)]
pub struct FilterRequest {
    pub schedule: TournamentSchedule,
    #[serde(default, alias = "playerId")]
    pub player_id: Option<String>,
}

/// Project a schedule onto one player
pub async fn filter_schedule(Json(req): Json<FilterRequest>) -> Json<PlayerView> {
    Json(filter_for_player(&req.schedule, req.player_id.as_deref()))
}
