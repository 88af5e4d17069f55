//! Status endpoint
//!
//! Besides liveness, tells a client which generator answers
//! `/api/generate` and which budgets it will accept.

use axum::Json;
use picklebalance_solver::{
    GenerationConfig, GreedyGenerator, ScheduleGenerator, MAX_ATTEMPTS, MAX_COURTS, MAX_ROUNDS,
    MIN_ATTEMPTS, MIN_COURTS, MIN_ROUNDS,
};
use serde::Serialize;

/// Inclusive bounds plus the value used when a request omits it
#[derive(Serialize)]
pub struct Bound<T> {
    pub min: T,
    pub max: T,
    pub default: T,
}

#[derive(Serialize)]
pub struct GenerationLimits {
    pub courts: Bound<u32>,
    pub rounds: Bound<u32>,
    pub attempts: Bound<usize>,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub generator: String,
    pub limits: GenerationLimits,
}

pub async fn status_handler() -> Json<StatusResponse> {
    let defaults = GenerationConfig::default();

    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        generator: GreedyGenerator::default().name().to_string(),
        limits: GenerationLimits {
            courts: Bound {
                min: MIN_COURTS,
                max: MAX_COURTS,
                default: defaults.courts,
            },
            rounds: Bound {
                min: MIN_ROUNDS,
                max: MAX_ROUNDS,
                default: defaults.rounds,
            },
            attempts: Bound {
                min: MIN_ATTEMPTS,
                max: MAX_ATTEMPTS,
                default: defaults.attempts,
            },
        },
    })
}
