//! The game state aggregate.
//!
//! [`GameState`] is a plain value. The engine never mutates the state it is
//! given; every transition clones it, edits the clone and returns that.
//! Callers can therefore keep any number of past states around for replay,
//! undo or snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Card, GameConfig, Monster, Weapon};

// ---------------------------------------------------------------------------
// RoomPhase
// ---------------------------------------------------------------------------

/// Where the current room is in its lifecycle.
///
/// ```text
/// Empty → Untouched → InProgress → Leftover → (replenish) → Untouched → …
/// ```
///
/// - **Empty**: nothing drawn yet, or the room was just avoided.
/// - **Untouched**: no card has been resolved since the draw.
/// - **InProgress**: at least one card resolved, two or more remain.
/// - **Leftover**: one card remains and will carry into the next room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomPhase {
    Empty,
    Untouched,
    InProgress,
    Leftover,
}

impl RoomPhase {
    /// Returns `true` when a new room may be drawn.
    pub fn accepts_draw(&self) -> bool {
        matches!(self, Self::Empty | Self::Leftover)
    }
}

impl fmt::Display for RoomPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Untouched => write!(f, "Untouched"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Leftover => write!(f, "Leftover"),
        }
    }
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// Everything there is to know about one game in progress.
///
/// Field names serialize in camelCase, matching the shape clients already
/// consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Current health. Drops to zero or below only on the fatal transition.
    pub health: i32,
    pub max_health: i32,

    /// Undealt draw pile. Index 0 is drawn next.
    pub dungeon: Vec<Card>,
    /// Cards currently on the table.
    pub room: Vec<Card>,
    /// Resolved cards, oldest first.
    pub discard_pile: Vec<Card>,
    /// `None` means bare-handed.
    pub equipped_weapon: Option<Weapon>,

    /// Whether the room may be skipped right now.
    pub can_avoid_room: bool,
    /// Size the current room was drawn at.
    pub original_room_size: usize,
    /// 1 straight after a draw, 0 once the room is touched or avoided.
    pub remaining_avoids: u8,
    /// Set by an avoid, cleared by anything else. Blocks a second avoid.
    pub last_action_was_avoid: bool,

    /// Terminal flag. Once set, nothing changes.
    pub game_over: bool,
    /// Final score; meaningful only once `game_over` is set.
    pub score: i32,

    /// Carried for an external ordering layer; not interpreted here.
    pub last_action_timestamp: i64,
    /// Carried for an external ordering layer; not interpreted here.
    pub last_action_sequence: u64,
    /// Carried for an external integrity layer; not interpreted here.
    pub state_checksum: String,
}

impl GameState {
    /// Creates the starting state for a game dealt from `dungeon`.
    ///
    /// Full health, nothing in the room or discard pile, no weapon, and a
    /// room that may be avoided once drawn.
    pub fn new(config: &GameConfig, dungeon: Vec<Card>) -> Self {
        Self {
            health: config.max_health,
            max_health: config.max_health,
            dungeon,
            room: Vec::new(),
            discard_pile: Vec::new(),
            equipped_weapon: None,
            can_avoid_room: true,
            original_room_size: 0,
            remaining_avoids: 1,
            last_action_was_avoid: false,
            game_over: false,
            score: 0,
            last_action_timestamp: 0,
            last_action_sequence: 0,
            state_checksum: String::new(),
        }
    }

    /// Sets the initial pass-through ordering fields.
    #[must_use]
    pub fn with_stamp(
        mut self,
        timestamp: i64,
        sequence: u64,
        checksum: impl Into<String>,
    ) -> Self {
        self.last_action_timestamp = timestamp;
        self.last_action_sequence = sequence;
        self.state_checksum = checksum.into();
        self
    }

    /// Where the current room stands.
    pub fn room_phase(&self) -> RoomPhase {
        match self.room.len() {
            0 => RoomPhase::Empty,
            1 => RoomPhase::Leftover,
            n if n == self.original_room_size => RoomPhase::Untouched,
            _ => RoomPhase::InProgress,
        }
    }

    /// Returns `true` if drawing a room is a legal move.
    ///
    /// The draw handler itself does not check this; whoever dispatches
    /// actions must.
    pub fn can_draw_room(&self) -> bool {
        !self.game_over && self.room_phase().accepts_draw()
    }

    /// Returns `true` if an avoid dispatched now would take effect.
    pub fn can_avoid_now(&self) -> bool {
        !self.game_over
            && self.can_avoid_room
            && !self.last_action_was_avoid
            && !self.room.is_empty()
    }

    /// Returns `true` if the equipped weapon is strong enough to take on
    /// `monster` without the monster being stronger than the weapon.
    pub fn weapon_can_engage(&self, monster: &Monster) -> bool {
        self.equipped_weapon
            .as_ref()
            .is_some_and(|weapon| weapon.damage >= monster.damage)
    }

    /// Monsters still waiting in the draw pile.
    pub fn dungeon_monsters(&self) -> impl Iterator<Item = &Monster> {
        self.dungeon.iter().filter_map(Card::as_monster)
    }

    /// Total number of cards held anywhere in the state.
    ///
    /// Constant across every transition that only touches cards which are
    /// actually in the room.
    pub fn card_count(&self) -> usize {
        let weapon = self
            .equipped_weapon
            .as_ref()
            .map_or(0, |w| 1 + w.monsters_slain.len());
        self.dungeon.len() + self.room.len() + self.discard_pile.len() + weapon
    }

    /// Returns `true` if the game ended with the player alive.
    pub fn is_victory(&self) -> bool {
        self.game_over && self.health > 0
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default(), Vec::new())
    }
}
