//! PickleBalance Solver - Schedule generation boundary
//!
//! This crate sits between a pairing generator and the core engine:
//! - Generation configuration and its bounds
//! - The request handed to a generator (roster summary and instructions)
//! - The `ScheduleGenerator` seam
//! - A local greedy generator
//! - Orchestration: generate, validate raw output, reconstruct
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_schedule (orchestration)
//! - Level 2: ScheduleGenerator::generate (phases)
//! - Level 3: greedy round construction (steps)
//! - Level 4: configuration, request rendering

mod config;
mod error;
mod generator;
mod greedy;
mod request;

pub use config::{
    GenerationConfig, MAX_ATTEMPTS, MAX_COURTS, MAX_ROUNDS, MIN_ATTEMPTS, MIN_COURTS, MIN_ROUNDS,
};
pub use error::GenerateError;
pub use generator::{generate_schedule, Generated, ScheduleGenerator};
pub use greedy::GreedyGenerator;
pub use request::{render_instructions, roster_summary, GenerationRequest, RosterEntry};
