//! Turning "the player picked this card" into an action.
//!
//! A room card does not say how it should be played. A monster can be
//! fought bare-handed or with the weapon, and the weapon is only worth
//! using when it is at least as strong as the monster. These helpers make
//! that choice the same way for every front end.

use crate::{Action, Card, GameState};

impl Action {
    /// The action that playing `card` in `state` amounts to.
    pub fn for_card(state: &GameState, card: &Card) -> Action {
        match card {
            Card::Monster(monster) if state.weapon_can_engage(monster) => {
                Action::use_weapon(monster.clone())
            }
            Card::Monster(monster) => Action::fight_monster(monster.clone()),
            Card::Weapon(weapon) => Action::equip_weapon(weapon.clone()),
            Card::HealthPotion(potion) => Action::use_health_potion(potion.healing),
        }
    }
}

impl GameState {
    /// Every action that would change this state right now.
    ///
    /// Empty once the game is over.
    pub fn available_actions(&self) -> Vec<Action> {
        if self.game_over {
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(self.room.len() + 2);
        if self.can_draw_room() {
            actions.push(Action::draw_room());
        }
        if self.can_avoid_now() {
            actions.push(Action::avoid_room());
        }
        actions.extend(self.room.iter().map(|card| Action::for_card(self, card)));
        actions
    }
}
