//! Error types for the table layer.

use scoundrel_core::InvalidActionError;

use crate::TableId;

/// Errors that can occur during table operations.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The table does not exist.
    #[error("table {0} not found")]
    NotFound(TableId),

    /// The action was missing its payload. Passed through from the engine.
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    /// Undo was requested with no earlier state on record.
    #[error("nothing to undo at table {0}")]
    NothingToUndo(TableId),

    /// The table is in a state that doesn't allow this operation.
    #[error("invalid table state for this operation: {0}")]
    InvalidState(String),

    /// The table's command channel is full or closed.
    #[error("table {0} is unavailable")]
    Unavailable(TableId),
}
