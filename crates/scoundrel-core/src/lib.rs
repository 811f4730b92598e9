//! Game-state transition engine for Scoundrel, a solitaire dungeon crawl
//! played with a deck of cards.
//!
//! The deck is the dungeon. Cards are dealt into rooms of four; monsters
//! hurt, weapons blunt the hurt, potions heal. The player either clears a
//! room down to its last card or avoids it, though never twice running.
//!
//! Everything here is pure: [`reduce`] maps a [`GameState`] and an
//! [`Action`] to the next [`GameState`] without touching its input, doing
//! I/O, or logging. Ordering actions, shuffling decks and showing cards to
//! a player are jobs for the layers above.
//!
//! # Key types
//!
//! - [`Card`]: monster, weapon or health potion, identified by [`CardKey`]
//! - [`GameState`]: the whole game as one value
//! - [`Action`]: a tagged player action, possibly malformed
//! - [`reduce`]: the transition function
//! - [`InvalidActionError`]: the only error [`reduce`] can return

mod action;
mod card;
mod config;
mod engine;
mod error;
mod intent;
mod state;

pub use action::{Action, ActionKind};
pub use card::{
    Card, CardKey, HealthPotion, Monster, Rank, Suit, Weapon, cards_equal, normalize_suit,
    rank_value,
};
pub use config::{GameConfig, MIN_DUNGEON_TO_DRAW, ROOM_REFILL, ROOM_SIZE};
pub use engine::{dungeon_penalty, exhaustion_score, reduce};
pub use error::{CardError, InvalidActionError};
pub use state::{GameState, RoomPhase};
