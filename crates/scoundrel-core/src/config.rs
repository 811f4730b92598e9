//! Game configuration and the fixed room-sizing constants.

use serde::{Deserialize, Serialize};

/// Cards in a freshly drawn room.
pub const ROOM_SIZE: usize = 4;

/// Cards added to a room that still holds its one leftover card.
pub const ROOM_REFILL: usize = 3;

/// Below this many cards in the dungeon, drawing ends the game.
pub const MIN_DUNGEON_TO_DRAW: usize = 3;

/// Per-game settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Starting health and the healing cap.
    pub max_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_health: 20 }
    }
}
