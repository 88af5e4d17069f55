//! PickleBalance Core - Schedule reconstruction and fairness analytics
//!
//! This crate provides the deterministic post-processing engine for
//! doubles round-robin schedules:
//! - Data model (players, teams, matches, rounds, schedules)
//! - Raw assignment parsing and validation
//! - Schedule reconstruction with byes and balance diagnostics
//! - Partner/opponent interaction matrices
//! - Player-scoped schedule projection
//!
//! Every operation is a pure function over immutable inputs.

pub mod builder;
pub mod error;
pub mod filter;
pub mod matrix;
pub mod model;
pub mod raw;
pub mod roster;

// Re-exports for convenient access
pub use builder::{build, BalanceBand};
pub use error::{Result, ScheduleError};
pub use filter::{filter_for_player, PlayerView, RoundSlot, RoundView};
pub use matrix::{
    bye_counts, compute_matrices, InteractionMatrix, InteractionStats, OpponentBand, PairCount,
    PartnerBand, StatsSummary,
};
pub use model::{Match, Player, Round, Team, TournamentSchedule, UNKNOWN_PLAYER_ID};
pub use raw::{DuplicateSlot, RawAssignment, RawMatch};
pub use roster::{demo_roster, RosterIndex};
