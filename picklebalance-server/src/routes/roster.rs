//! Demo roster endpoint

use axum::{extract::State, Json};
use picklebalance_core::Player;
use std::sync::Arc;

use crate::state::ServerState;

pub async fn get_demo_roster(State(state): State<Arc<ServerState>>) -> Json<Vec<Player>> {
    Json(state.demo_roster.clone())
}
