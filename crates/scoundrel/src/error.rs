//! Unified error type for the Scoundrel crates.

use scoundrel_core::{CardError, InvalidActionError};
use scoundrel_deck::DeckError;
use scoundrel_table::TableError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates the `From` impls, so
/// `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ScoundrelError {
    /// A card failed to parse.
    #[error(transparent)]
    Card(#[from] CardError),

    /// An action was missing its payload.
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    /// A deck could not be built.
    #[error(transparent)]
    Deck(#[from] DeckError),

    /// A table was missing, closed or in the wrong state.
    #[error(transparent)]
    Table(#[from] TableError),
}
