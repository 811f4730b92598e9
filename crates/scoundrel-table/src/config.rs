//! Table configuration and lifecycle state machine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TableConfig
// ---------------------------------------------------------------------------

/// Configuration for a table instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Capacity of the table's command channel. Senders wait when it is full.
    pub channel_size: usize,

    /// How many past states are kept for undo. 0 disables undo.
    pub history_limit: usize,

    /// Drop `DrawRoom` actions unless the room is down to 0 or 1 cards.
    ///
    /// The engine draws unconditionally when asked, so this is the only
    /// thing standing between a misbehaving client and a room being dealt
    /// over the top of unplayed cards.
    pub gate_draws: bool,

    /// Drop `FightMonster`, `UseWeapon` and `EquipWeapon` actions whose card
    /// is not in the room.
    ///
    /// The engine resolves whatever card an action names, dealt or not.
    pub gate_cards: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            channel_size: 64,
            history_limit: 256,
            gate_draws: true,
            gate_cards: true,
        }
    }
}

// ---------------------------------------------------------------------------
// TableStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a table.
///
/// Transitions are strictly ordered, with no skipped states:
///
/// ```text
/// Ready → InProgress → Finished → Closing
/// ```
///
/// - **Ready**: Deck dealt, no action applied yet.
/// - **InProgress**: At least one action changed the state.
/// - **Finished**: The game is over. The final state stays readable.
/// - **Closing**: The table is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    Ready,
    InProgress,
    Finished,
    Closing,
}

impl TableStatus {
    /// Returns `true` if the table still takes game actions.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Ready | Self::InProgress)
    }

    /// The next state in the lifecycle, or `None` at the end.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Ready => Some(Self::InProgress),
            Self::InProgress => Some(Self::Finished),
            Self::Finished => Some(Self::Closing),
            Self::Closing => None,
        }
    }

    /// Returns `true` if transitioning to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Finished => write!(f, "Finished"),
            Self::Closing => write!(f, "Closing"),
        }
    }
}
