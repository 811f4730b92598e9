//! # Scoundrel
//!
//! The Scoundrel solitaire dungeon crawler.
//!
//! The rules live in a pure reducer ([`reduce`]) that takes a [`GameState`]
//! and an [`Action`] and returns the next state. Around it sit a 44-card
//! [`Deck`] to deal games from and [`TableManager`], which hosts games as
//! Tokio actors so their actions are applied one at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scoundrel::prelude::*;
//!
//! # async fn run() -> Result<(), ScoundrelError> {
//! let game = Deck::shuffled(&DeckConfig::seeded(7)).deal(&GameConfig::default());
//!
//! let mut tables = TableManager::new();
//! let table = tables.create_table(game, TableConfig::default());
//! tables.dispatch(table, Action::draw_room()).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod logging;

pub use error::ScoundrelError;
pub use logging::init_tracing;

pub use scoundrel_core::*;
pub use scoundrel_deck::{Deck, DeckConfig, DeckError, card_for};
pub use scoundrel_table::{
    Dispatch, TableConfig, TableError, TableHandle, TableId, TableInfo, TableManager, TableStatus,
};

/// The types most programs need, in one import.
pub mod prelude {
    pub use crate::ScoundrelError;
    pub use scoundrel_core::{
        Action, ActionKind, Card, GameConfig, GameState, HealthPotion, Monster, Rank, Suit, Weapon,
        reduce,
    };
    pub use scoundrel_deck::{Deck, DeckConfig};
    pub use scoundrel_table::{Dispatch, TableConfig, TableHandle, TableId, TableManager, TableStatus};
}
