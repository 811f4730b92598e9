//! Termination and scoring.
//!
//! A surviving player scores their remaining health. A dead player scores
//! minus the combined rank strength of the monsters still in the dungeon.
//! Monsters in the room or the discard pile do not count, on either path.

use crate::GameState;

/// Minus the sum of rank strengths of every monster left in the dungeon.
pub fn dungeon_penalty(state: &GameState) -> i32 {
    let total: i32 = state
        .dungeon_monsters()
        .map(|monster| i32::from(monster.rank.value()))
        .sum();
    -total
}

/// Score when the dungeon runs out: health if alive, otherwise the penalty.
pub fn exhaustion_score(state: &GameState) -> i32 {
    if state.health > 0 {
        state.health
    } else {
        dungeon_penalty(state)
    }
}

/// Marks `next` as lost.
pub(super) fn end_in_death(next: &mut GameState) {
    next.game_over = true;
    next.score = dungeon_penalty(next);
    next.can_avoid_room = false;
    next.remaining_avoids = 0;
    next.last_action_was_avoid = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, HealthPotion, Monster, Rank, Suit, Weapon};

    #[test]
    fn test_penalty_counts_only_dungeon_monsters() {
        let mut state = GameState::default();
        state.dungeon = vec![
            Card::from(Monster::new(Suit::Spades, Rank::Ace)),
            Card::from(Weapon::new(Suit::Diamonds, Rank::Ten)),
            Card::from(Monster::new(Suit::Clubs, Rank::Three)),
            Card::from(HealthPotion::new(Suit::Hearts, Rank::Nine)),
        ];
        state.room = vec![Card::from(Monster::new(Suit::Clubs, Rank::King))];
        state.discard_pile = vec![Card::from(Monster::new(Suit::Spades, Rank::Queen))];

        assert_eq!(dungeon_penalty(&state), -17);
    }

    #[test]
    fn test_penalty_uses_rank_not_damage() {
        let mut state = GameState::default();
        let mut weakened = Monster::new(Suit::Spades, Rank::Jack);
        weakened.damage = 1;
        state.dungeon = vec![Card::from(weakened)];

        assert_eq!(dungeon_penalty(&state), -11);
    }

    #[test]
    fn test_exhaustion_score_sign() {
        let mut state = GameState::default();
        state.dungeon = vec![Card::from(Monster::new(Suit::Clubs, Rank::Five))];
        state.health = 4;
        assert_eq!(exhaustion_score(&state), 4);

        state.health = 0;
        assert_eq!(exhaustion_score(&state), -5);
    }

    #[test]
    fn test_empty_dungeon_penalty_is_zero() {
        assert_eq!(dungeon_penalty(&GameState::default()), 0);
    }
}
