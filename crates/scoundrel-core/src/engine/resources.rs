//! Healing and re-arming.

use crate::{Card, GameState, Weapon};

use super::settle_room;

/// Drinks a potion from the room that heals exactly `healing`.
///
/// No-op if the room holds no such potion. Health is capped at the maximum;
/// any excess is lost. The action's timestamp and sequence are copied into
/// the state.
pub(super) fn use_health_potion(
    state: &GameState,
    healing: u8,
    timestamp: i64,
    sequence: u64,
) -> GameState {
    let Some(potion) = state.room.iter().find(|card| match card {
        Card::HealthPotion(potion) => potion.healing == healing,
        Card::Monster(_) | Card::Weapon(_) => false,
    }) else {
        return state.clone();
    };
    let key = potion.key();

    let mut next = state.clone();
    next.health = (state.health + i32::from(healing)).min(state.max_health);
    next.room.retain(|card| card.key() != key);
    next.discard_pile.push(potion.clone());
    settle_room(&mut next);
    next.last_action_timestamp = timestamp;
    next.last_action_sequence = sequence;
    next
}

/// Equips `weapon`, discarding the previous one along with everything it
/// killed.
pub(super) fn equip_weapon(state: &GameState, weapon: &Weapon) -> GameState {
    let mut next = state.clone();

    if let Some(old) = next.equipped_weapon.take() {
        let Weapon {
            suit,
            rank,
            damage,
            monsters_slain,
        } = old;
        next.discard_pile.push(Card::Weapon(Weapon {
            suit,
            rank,
            damage,
            monsters_slain: Vec::new(),
        }));
        next.discard_pile
            .extend(monsters_slain.into_iter().map(Card::Monster));
    }

    let key = weapon.key();
    next.room.retain(|card| card.key() != key);
    next.equipped_weapon = Some(weapon.clone());
    settle_room(&mut next);
    next
}
