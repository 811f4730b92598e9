//! Deck population for Scoundrel.
//!
//! The engine starts from a dungeon it is handed; this crate builds one.
//! The standard deck is a 52-card pack with the red face cards and red aces
//! removed, leaving 44 cards:
//!
//! - ♣ and ♠, 2 through A → monsters
//! - ♦ 2 through 10 → weapons
//! - ♥ 2 through 10 → health potions

mod deck;
mod error;

pub use deck::{Deck, DeckConfig, card_for};
pub use error::DeckError;
