//! Server state management
//!
//! The engine itself is stateless; the server only holds the demo roster
//! and a gate that keeps one generation in flight at a time.

use picklebalance_core::{demo_roster, Player};
use tokio::sync::Mutex;

/// Server-wide shared state
pub struct ServerState {
    pub demo_roster: Vec<Player>,
    /// Held for the duration of a generation request
    pub generation: Mutex<()>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            demo_roster: demo_roster(),
            generation: Mutex::new(()),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
