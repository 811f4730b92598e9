//! The transition engine.
//!
//! [`reduce`] is the single entry point: it checks the terminal flag,
//! validates the action's payload, and routes it to the handler for its
//! kind. Each handler takes the current state by reference and returns the
//! next state by value.
//!
//! ```text
//! reduce ─┬─ DrawRoom / AvoidRoom ───────── flow
//!         ├─ FightMonster / UseWeapon ───── combat ──┐
//!         ├─ UseHealthPotion / EquipWeapon ─ resources│
//!         └─ unknown kind → unchanged                 └─ scoring (on death / exhaustion)
//! ```

mod combat;
mod flow;
mod resources;
mod scoring;

pub use scoring::{dungeon_penalty, exhaustion_score};

use crate::action::Command;
use crate::{Action, GameState, InvalidActionError};

/// Computes the state that follows `action`.
///
/// Rule violations (avoiding twice, drinking a potion that is not in the
/// room, swinging a weapon you do not hold, acting after the game ended,
/// unknown action kinds) are not errors: they return a clone of `state`.
///
/// # Errors
/// [`InvalidActionError`] if the action lacks the payload its kind requires.
/// A finished game never errors, whatever the action.
pub fn reduce(state: &GameState, action: &Action) -> Result<GameState, InvalidActionError> {
    if state.game_over {
        return Ok(state.clone());
    }

    let Some(command) = action.command()? else {
        return Ok(state.clone());
    };

    let next = match command {
        Command::DrawRoom => flow::draw_room(state),
        Command::AvoidRoom => flow::avoid_room(state),
        Command::FightMonster(monster) => combat::fight_monster(state, monster),
        Command::UseWeapon(monster) => combat::use_weapon(state, monster),
        Command::UseHealthPotion {
            healing,
            timestamp,
            sequence,
        } => resources::use_health_potion(state, healing, timestamp, sequence),
        Command::EquipWeapon(weapon) => resources::equip_weapon(state, weapon),
    };
    Ok(next)
}

impl GameState {
    /// Method form of [`reduce`].
    ///
    /// # Errors
    /// See [`reduce`].
    pub fn apply(&self, action: &Action) -> Result<GameState, InvalidActionError> {
        reduce(self, action)
    }
}

/// Post-resolution avoid bookkeeping shared by every card-resolving handler.
///
/// The room may be avoided again only while it is still at the size it was
/// drawn at.
fn settle_room(next: &mut GameState) {
    next.can_avoid_room = next.room.len() == next.original_room_size;
    next.remaining_avoids = 0;
    next.last_action_was_avoid = false;
}
