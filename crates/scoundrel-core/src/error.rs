//! Error types for the engine.
//!
//! Only two things can go wrong at this layer. A suit or rank string that
//! does not name a card is a [`CardError`]. An action that is missing the
//! payload its kind requires is an [`InvalidActionError`]. Everything else
//! the player might try that the rules forbid is not an error at all: the
//! reducer hands back the state unchanged.

use crate::ActionKind;

/// Errors raised while parsing card identities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// Neither a letter code nor a suit glyph.
    #[error("unrecognized suit {0:?}")]
    UnknownSuit(String),

    /// Not one of the 13 rank symbols.
    #[error("unrecognized rank {0:?}")]
    UnknownRank(String),
}

/// An action arrived without the payload its kind requires.
///
/// This is a protocol error on the producer's side, not a rule rejection,
/// and callers are expected to surface it rather than ignore it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidActionError {
    #[error("monster is required for {0} action")]
    MissingMonster(ActionKind),

    #[error("weapon is required for {0} action")]
    MissingWeapon(ActionKind),

    #[error("healing amount is required for {0} action")]
    MissingHealing(ActionKind),
}

impl InvalidActionError {
    /// The kind of the offending action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::MissingMonster(kind) | Self::MissingWeapon(kind) | Self::MissingHealing(kind) => {
                *kind
            }
        }
    }
}
