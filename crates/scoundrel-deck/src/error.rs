//! Error types for deck construction.

use scoundrel_core::{CardError, CardKey};

/// Errors that can occur while building a deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// A token was not of the form `suit:rank`.
    #[error("malformed card token {0:?}, expected suit:rank")]
    MalformedToken(String),

    /// The suit or rank inside a token did not parse.
    #[error(transparent)]
    Card(#[from] CardError),

    /// The card is not part of a Scoundrel deck (a red face card or red ace).
    #[error("{0} is not a Scoundrel card")]
    NotInDeck(CardKey),

    /// The same card appears twice.
    #[error("duplicate card {0}")]
    Duplicate(CardKey),
}
