//! Table actor: an isolated Tokio task that owns one game.
//!
//! Each table runs in its own task, communicating with the outside world
//! through an mpsc channel. The engine has no notion of ordering, so the
//! channel is what gives every action a single, total order.

use std::collections::VecDeque;
use std::fmt;

use scoundrel_core::{Action, ActionKind, CardKey, GameState, reduce};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot, watch};

use crate::{TableConfig, TableError, TableStatus};

// ---------------------------------------------------------------------------
// TableId
// ---------------------------------------------------------------------------

/// A unique identifier for a table (one game in progress).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub u64);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Commands and replies
// ---------------------------------------------------------------------------

/// Commands sent to a table actor through its channel.
///
/// The `oneshot::Sender` in each variant is the reply channel: the caller
/// sends a command and waits for the answer on it.
pub(crate) enum TableCommand {
    /// Run an action through the engine.
    Dispatch {
        action: Action,
        reply: oneshot::Sender<Result<Dispatch, TableError>>,
    },

    /// Request the current game state.
    Snapshot { reply: oneshot::Sender<GameState> },

    /// Request table metadata.
    Info { reply: oneshot::Sender<TableInfo> },

    /// Roll back to the state before the last applied action.
    Undo {
        reply: oneshot::Sender<Result<GameState, TableError>>,
    },

    /// Request the recorded past states, oldest first.
    History { reply: oneshot::Sender<Vec<GameState>> },

    /// Shut down the table.
    Shutdown,
}

/// What became of a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The action changed the game. Carries the new state.
    Applied(GameState),
    /// The action was dropped by the table or ignored by the rules.
    Unchanged,
}

impl Dispatch {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// A snapshot of table metadata (not the full game state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub table_id: TableId,
    pub status: TableStatus,
    pub health: i32,
    /// Final score once the game is over, 0 before.
    pub score: i32,
    pub dungeon_remaining: usize,
    pub room_size: usize,
    /// Actions that changed the state, undone ones included.
    pub actions_applied: u64,
    /// Number of states currently available to undo.
    pub history_len: usize,
}

// ---------------------------------------------------------------------------
// TableHandle
// ---------------------------------------------------------------------------

/// Handle to a running table actor. Used to send commands to it.
///
/// Cheap to clone: an `mpsc::Sender` plus a `watch::Receiver`.
#[derive(Clone)]
pub struct TableHandle {
    table_id: TableId,
    sender: mpsc::Sender<TableCommand>,
    updates: watch::Receiver<GameState>,
}

impl TableHandle {
    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    /// Sends an action to the table and waits for the outcome.
    ///
    /// # Errors
    /// [`TableError::InvalidAction`] if the action is missing its payload,
    /// [`TableError::Unavailable`] if the table is gone.
    pub async fn dispatch(&self, action: Action) -> Result<Dispatch, TableError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(TableCommand::Dispatch {
            action,
            reply: reply_tx,
        })
        .await?;
        reply_rx
            .await
            .map_err(|_| TableError::Unavailable(self.table_id))?
    }

    /// Requests the current game state.
    pub async fn snapshot(&self) -> Result<GameState, TableError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(TableCommand::Snapshot { reply: reply_tx }).await?;
        reply_rx
            .await
            .map_err(|_| TableError::Unavailable(self.table_id))
    }

    /// Requests the current table info.
    pub async fn info(&self) -> Result<TableInfo, TableError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(TableCommand::Info { reply: reply_tx }).await?;
        reply_rx
            .await
            .map_err(|_| TableError::Unavailable(self.table_id))
    }

    /// Restores the state from before the last applied action and returns
    /// it.
    ///
    /// The table status is left as it is, so a table undone all the way back
    /// to its dealt state still reports `InProgress`.
    ///
    /// # Errors
    /// [`TableError::NothingToUndo`] with no history left,
    /// [`TableError::InvalidState`] once the game has finished.
    pub async fn undo(&self) -> Result<GameState, TableError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(TableCommand::Undo { reply: reply_tx }).await?;
        reply_rx
            .await
            .map_err(|_| TableError::Unavailable(self.table_id))?
    }

    /// Requests the states that can still be undone to, oldest first.
    pub async fn history(&self) -> Result<Vec<GameState>, TableError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(TableCommand::History { reply: reply_tx }).await?;
        reply_rx
            .await
            .map_err(|_| TableError::Unavailable(self.table_id))
    }

    /// Returns a receiver that always holds the latest game state.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.updates.clone()
    }

    /// Tells the table to shut down.
    pub async fn shutdown(&self) -> Result<(), TableError> {
        self.send(TableCommand::Shutdown).await
    }

    async fn send(&self, command: TableCommand) -> Result<(), TableError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| TableError::Unavailable(self.table_id))
    }
}

// ---------------------------------------------------------------------------
// TableActor
// ---------------------------------------------------------------------------

/// The internal table actor state. Runs inside a Tokio task.
struct TableActor {
    table_id: TableId,
    status: TableStatus,
    config: TableConfig,
    game: GameState,
    /// Previous states, oldest first. Never longer than `history_limit`.
    history: VecDeque<GameState>,
    actions_applied: u64,
    receiver: mpsc::Receiver<TableCommand>,
    publisher: watch::Sender<GameState>,
}

impl TableActor {
    /// Runs the actor loop, processing commands until shutdown.
    async fn run(mut self) {
        tracing::info!(table_id = %self.table_id, "table actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                TableCommand::Dispatch { action, reply } => {
                    let result = self.handle_dispatch(action);
                    let _ = reply.send(result);
                }
                TableCommand::Snapshot { reply } => {
                    let _ = reply.send(self.game.clone());
                }
                TableCommand::Info { reply } => {
                    let _ = reply.send(self.info());
                }
                TableCommand::Undo { reply } => {
                    let result = self.handle_undo();
                    let _ = reply.send(result);
                }
                TableCommand::History { reply } => {
                    let _ = reply.send(self.history.iter().cloned().collect());
                }
                TableCommand::Shutdown => {
                    tracing::info!(table_id = %self.table_id, "table shutting down");
                    self.status = TableStatus::Closing;
                    break;
                }
            }
        }

        tracing::info!(table_id = %self.table_id, "table actor stopped");
    }

    fn handle_dispatch(&mut self, action: Action) -> Result<Dispatch, TableError> {
        if self.config.gate_draws
            && action.kind == ActionKind::DrawRoom
            && !self.game.can_draw_room()
        {
            tracing::debug!(
                table_id = %self.table_id,
                room = self.game.room.len(),
                "draw dropped while room is still in play"
            );
            return Ok(Dispatch::Unchanged);
        }

        if self.config.gate_cards {
            if let Some(key) = target_card(&action) {
                if !self.game.room.iter().any(|card| card.key() == key) {
                    tracing::debug!(
                        table_id = %self.table_id,
                        %action,
                        "action names a card that is not in the room"
                    );
                    return Ok(Dispatch::Unchanged);
                }
            }
        }

        let next = reduce(&self.game, &action).inspect_err(|err| {
            tracing::warn!(table_id = %self.table_id, %err, "malformed action");
        })?;

        if next == self.game {
            tracing::debug!(table_id = %self.table_id, %action, "action had no effect");
            return Ok(Dispatch::Unchanged);
        }

        let previous = std::mem::replace(&mut self.game, next);
        self.record(previous);
        self.actions_applied += 1;
        tracing::debug!(
            table_id = %self.table_id,
            %action,
            health = self.game.health,
            room = self.game.room.len(),
            "action applied"
        );

        if self.status == TableStatus::Ready {
            self.transition(TableStatus::InProgress);
        }
        if self.game.game_over {
            self.transition(TableStatus::Finished);
            tracing::info!(
                table_id = %self.table_id,
                score = self.game.score,
                victory = self.game.is_victory(),
                "game finished"
            );
        }

        self.publisher.send_replace(self.game.clone());
        Ok(Dispatch::Applied(self.game.clone()))
    }

    /// Undo never moves the status backward: `Ready` means no action was
    /// ever applied, not that the game is back at its dealt state.
    fn handle_undo(&mut self) -> Result<GameState, TableError> {
        if !self.status.is_active() {
            return Err(TableError::InvalidState(format!(
                "cannot undo at a table in state {}",
                self.status
            )));
        }
        let previous = self
            .history
            .pop_back()
            .ok_or(TableError::NothingToUndo(self.table_id))?;
        self.game = previous;
        tracing::info!(
            table_id = %self.table_id,
            remaining = self.history.len(),
            "action undone"
        );
        self.publisher.send_replace(self.game.clone());
        Ok(self.game.clone())
    }

    fn record(&mut self, previous: GameState) {
        if self.config.history_limit == 0 {
            return;
        }
        if self.history.len() == self.config.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(previous);
    }

    fn transition(&mut self, target: TableStatus) {
        if self.status.can_transition_to(target) {
            self.status = target;
        } else {
            tracing::warn!(
                table_id = %self.table_id,
                from = %self.status,
                to = %target,
                "refused status transition"
            );
        }
    }

    fn info(&self) -> TableInfo {
        TableInfo {
            table_id: self.table_id,
            status: self.status,
            health: self.game.health,
            score: self.game.score,
            dungeon_remaining: self.game.dungeon.len(),
            room_size: self.game.room.len(),
            actions_applied: self.actions_applied,
            history_len: self.history.len(),
        }
    }
}

/// The room card an action acts on, if its kind names one and the payload
/// is present.
fn target_card(action: &Action) -> Option<CardKey> {
    match action.kind {
        ActionKind::FightMonster | ActionKind::UseWeapon => {
            action.monster.as_ref().map(|monster| monster.key())
        }
        ActionKind::EquipWeapon => action.weapon.as_ref().map(|weapon| weapon.key()),
        _ => None,
    }
}

/// Spawns a new table actor task and returns a handle to communicate with
/// it.
///
/// `config.channel_size` controls backpressure: if the channel fills up,
/// senders wait.
pub(crate) fn spawn_table(table_id: TableId, game: GameState, config: TableConfig) -> TableHandle {
    let (tx, rx) = mpsc::channel(config.channel_size.max(1));
    let (publisher, updates) = watch::channel(game.clone());

    let actor = TableActor {
        table_id,
        status: TableStatus::Ready,
        history: VecDeque::with_capacity(config.history_limit.min(64)),
        config,
        game,
        actions_applied: 0,
        receiver: rx,
        publisher,
    };

    tokio::spawn(actor.run());

    TableHandle {
        table_id,
        sender: tx,
        updates,
    }
}
