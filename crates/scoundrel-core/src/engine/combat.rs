//! Combat resolution, bare-handed and armed.

use crate::{Card, GameState, Monster};

use super::{scoring, settle_room};

/// Fights `monster` with bare hands, taking its full damage.
///
/// The monster leaves the room and goes to the discard pile.
pub(super) fn fight_monster(state: &GameState, monster: &Monster) -> GameState {
    let mut next = state.clone();
    remove_from_room(&mut next, monster);
    next.discard_pile.push(Card::Monster(monster.clone()));
    take_damage(&mut next, monster.damage);
    next
}

/// Fights `monster` with the equipped weapon. No-op when bare-handed.
///
/// The weapon absorbs up to its own damage. Afterwards its damage is
/// overwritten with the monster's, and the monster joins the weapon's slain
/// stack instead of the discard pile.
pub(super) fn use_weapon(state: &GameState, monster: &Monster) -> GameState {
    let Some(weapon) = &state.equipped_weapon else {
        return state.clone();
    };
    let damage = monster.damage.saturating_sub(weapon.damage);

    let mut next = state.clone();
    if let Some(weapon) = next.equipped_weapon.as_mut() {
        weapon.monsters_slain.push(monster.clone());
        weapon.damage = monster.damage;
    }
    remove_from_room(&mut next, monster);
    take_damage(&mut next, damage);
    next
}

fn remove_from_room(next: &mut GameState, monster: &Monster) {
    let key = monster.key();
    next.room.retain(|card| card.key() != key);
}

fn take_damage(next: &mut GameState, damage: u8) {
    next.health -= i32::from(damage);
    if next.health <= 0 {
        scoring::end_in_death(next);
    } else {
        settle_room(next);
    }
}
