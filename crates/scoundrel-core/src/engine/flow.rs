//! Room and dungeon flow: drawing and avoiding rooms.

use crate::config::{MIN_DUNGEON_TO_DRAW, ROOM_REFILL, ROOM_SIZE};
use crate::GameState;

use super::scoring;

/// Deals the next room.
///
/// With fewer than [`MIN_DUNGEON_TO_DRAW`] cards left the dungeon is
/// exhausted and the game ends. A room holding its single leftover card is
/// topped up with [`ROOM_REFILL`] cards; any other room is replaced
/// wholesale by up to [`ROOM_SIZE`] fresh cards. Callers gate this on
/// [`GameState::can_draw_room`].
pub(super) fn draw_room(state: &GameState) -> GameState {
    let mut next = state.clone();

    if state.dungeon.len() < MIN_DUNGEON_TO_DRAW {
        next.game_over = true;
        next.score = scoring::exhaustion_score(state);
        return next;
    }

    if state.room.len() == 1 {
        let take = ROOM_REFILL.min(next.dungeon.len());
        next.room.extend(next.dungeon.drain(..take));
    } else {
        let take = ROOM_SIZE.min(next.dungeon.len());
        next.room = next.dungeon.drain(..take).collect();
    }

    next.original_room_size = ROOM_SIZE;
    next.remaining_avoids = 1;
    next.can_avoid_room = !state.last_action_was_avoid;
    next.last_action_was_avoid = false;
    next
}

/// Sends the whole room to the bottom of the dungeon.
///
/// No-op unless avoiding is currently allowed and the previous action was
/// not itself an avoid.
pub(super) fn avoid_room(state: &GameState) -> GameState {
    if !state.can_avoid_room || state.last_action_was_avoid {
        return state.clone();
    }

    let mut next = state.clone();
    let room = std::mem::take(&mut next.room);
    next.dungeon.extend(room);
    next.original_room_size = 0;
    next.remaining_avoids = 0;
    next.last_action_was_avoid = true;
    next
}
