//! Configuration types for schedule generation
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

pub const MIN_COURTS: u32 = 1;
pub const MAX_COURTS: u32 = 10;
pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 20;
pub const MIN_ATTEMPTS: usize = 1;
pub const MAX_ATTEMPTS: usize = 256;

/// Players on court per match
const PLAYERS_PER_MATCH: u32 = 4;

/// Generation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Courts available each round
    pub courts: u32,
    /// Rounds to schedule
    pub rounds: u32,
    /// Independent seeded attempts; the best one is kept
    #[serde(default = "default_attempts")]
    pub attempts: usize,
    /// Random seed for reproducibility (None = random)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whether to run attempts in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_attempts() -> usize {
    16
}

fn default_parallel() -> bool {
    true
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            courts: 3,
            rounds: 10,
            attempts: default_attempts(),
            seed: None,
            parallel: default_parallel(),
        }
    }
}

impl GenerationConfig {
    /// Create config for the given court and round budget
    pub fn new(courts: u32, rounds: u32) -> Self {
        Self {
            courts,
            rounds,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set number of attempts
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Run attempts on the calling thread
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the court and round budget against the supported bounds
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(MIN_COURTS..=MAX_COURTS).contains(&self.courts) {
            return Err(GenerateError::InvalidConfig(format!(
                "courts must be between {} and {}, got {}",
                MIN_COURTS, MAX_COURTS, self.courts
            )));
        }
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&self.rounds) {
            return Err(GenerateError::InvalidConfig(format!(
                "rounds must be between {} and {}, got {}",
                MIN_ROUNDS, MAX_ROUNDS, self.rounds
            )));
        }
        if !(MIN_ATTEMPTS..=MAX_ATTEMPTS).contains(&self.attempts) {
            return Err(GenerateError::InvalidConfig(format!(
                "attempts must be between {} and {}, got {}",
                MIN_ATTEMPTS, MAX_ATTEMPTS, self.attempts
            )));
        }
        Ok(())
    }

    /// Players on court each round when every court is filled
    pub fn active_per_round(&self) -> u32 {
        self.courts * PLAYERS_PER_MATCH
    }

    /// Players sitting out each round for a roster of `players`
    pub fn byes_per_round(&self, players: usize) -> u32 {
        (players as u32).saturating_sub(self.active_per_round())
    }
}
