//! Stable roster indexing

use rustc_hash::FxHashMap;

use crate::model::Player;

/// Lookup from player id to its position in roster order.
///
/// Built once per operation in O(N). Position `i` is the row/column of the
/// player in every interaction matrix and is displayed as label `i + 1`.
#[derive(Clone, Debug)]
pub struct RosterIndex<'a> {
    players: &'a [Player],
    positions: FxHashMap<&'a str, usize>,
}

impl<'a> RosterIndex<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(players.len());
        for (i, player) in players.iter().enumerate() {
            // First occurrence wins if an id is repeated
            positions.entry(player.id.as_str()).or_insert(i);
        }
        Self { players, positions }
    }

    pub fn position(&self, player_id: &str) -> Option<usize> {
        self.positions.get(player_id).copied()
    }

    pub fn player(&self, player_id: &str) -> Option<&'a Player> {
        self.position(player_id).map(|i| &self.players[i])
    }

    pub fn rating(&self, player_id: &str) -> Option<f64> {
        self.player(player_id).map(|p| p.rating)
    }

    pub fn players(&self) -> &'a [Player] {
        self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Fifteen-player sample roster for demos and smoke tests
pub fn demo_roster() -> Vec<Player> {
    [
        ("p1", "Mark", 4.157),
        ("p2", "Ricky", 3.575),
        ("p3", "Guil", 3.714),
        ("p4", "Colin P", 3.42),
        ("p5", "Olive", 3.149),
        ("p6", "CT", 3.445),
        ("p7", "KG", 3.193),
        ("p8", "Bunjan", 3.383),
        ("p9", "Samsung", 4.219),
        ("p10", "Sylvia", 3.66),
        ("p11", "Kimmy Pemberton", 2.916),
        ("p12", "Reid", 4.012),
        ("p13", "Jason", 3.54),
        ("p14", "India", 3.7),
        ("p15", "Tee", 3.28),
    ]
    .into_iter()
    .map(|(id, name, rating)| Player::new(id, name, rating))
    .collect()
}
