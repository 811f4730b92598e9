//! The deck: composition, shuffling and dealing.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use scoundrel_core::{
    Card, CardKey, GameConfig, GameState, HealthPotion, Monster, Rank, Suit, Weapon,
    normalize_suit,
};
use serde::{Deserialize, Serialize};

use crate::DeckError;

// ---------------------------------------------------------------------------
// DeckConfig
// ---------------------------------------------------------------------------

/// How to shuffle a new deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Fixed seed for a reproducible order. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl DeckConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

// ---------------------------------------------------------------------------
// Card roles
// ---------------------------------------------------------------------------

/// The Scoundrel card for `suit` and `rank`, or `None` if the pair is
/// left out of the deck.
///
/// Black cards are monsters, diamonds are weapons and hearts are potions;
/// every value equals the rank strength. Red face cards and red aces are
/// not used.
pub fn card_for(suit: Suit, rank: Rank) -> Option<Card> {
    match suit {
        Suit::Clubs | Suit::Spades => Some(Card::from(Monster::new(suit, rank))),
        _ if rank.is_face() || rank == Rank::Ace => None,
        Suit::Diamonds => Some(Card::from(Weapon::new(suit, rank))),
        Suit::Hearts => Some(Card::from(HealthPotion::new(suit, rank))),
    }
}

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// An ordered pile of distinct cards. The first card is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 44-card Scoundrel deck in suit-then-rank order.
    pub fn standard() -> Self {
        let cards = Suit::all()
            .into_iter()
            .flat_map(|suit| {
                Rank::all()
                    .into_iter()
                    .filter_map(move |rank| card_for(suit, rank))
            })
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled according to `config`.
    pub fn shuffled(config: &DeckConfig) -> Self {
        let mut deck = Self::standard();
        match config.seed {
            Some(seed) => deck.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => deck.shuffle(&mut rand::rng()),
        }
        deck
    }

    /// Builds a deck from an explicit card list, top card first.
    ///
    /// # Errors
    /// [`DeckError::Duplicate`] if two cards share a suit and rank.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.key()) {
                return Err(DeckError::Duplicate(card.key()));
            }
        }
        Ok(Self { cards })
    }

    /// Parses a whitespace-separated list of `suit:rank` tokens, top card
    /// first, e.g. `"S:10 ♥:5 d:7"`. Each card takes its standard role.
    ///
    /// # Errors
    /// [`DeckError`] if a token is malformed, names an unknown suit or rank,
    /// names a card outside the Scoundrel deck, or repeats a card.
    pub fn parse(text: &str) -> Result<Self, DeckError> {
        let cards = text
            .split_whitespace()
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards)
    }

    /// Shuffles in place with the given generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Starts a game with this deck as the dungeon.
    pub fn deal(self, config: &GameConfig) -> GameState {
        GameState::new(config, self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_token(token: &str) -> Result<Card, DeckError> {
    let (suit, rank) = token
        .split_once(':')
        .ok_or_else(|| DeckError::MalformedToken(token.to_string()))?;
    let suit = normalize_suit(suit)?;
    let rank: Rank = rank.parse()?;
    card_for(suit, rank).ok_or(DeckError::NotInDeck(CardKey::new(suit, rank)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_composition() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 44);

        let monsters = deck.cards().iter().filter(|c| matches!(c, Card::Monster(_))).count();
        let weapons = deck.cards().iter().filter(|c| matches!(c, Card::Weapon(_))).count();
        let potions = deck.cards().iter().filter(|c| matches!(c, Card::HealthPotion(_))).count();
        assert_eq!((monsters, weapons, potions), (26, 9, 9));
    }

    #[test]
    fn test_card_for_excludes_red_faces_and_aces() {
        assert!(card_for(Suit::Hearts, Rank::Queen).is_none());
        assert!(card_for(Suit::Diamonds, Rank::Ace).is_none());
        assert!(card_for(Suit::Spades, Rank::Ace).is_some());
        assert!(matches!(card_for(Suit::Diamonds, Rank::Ten), Some(Card::Weapon(_))));
        assert!(matches!(card_for(Suit::Hearts, Rank::Two), Some(Card::HealthPotion(_))));
    }

    #[test]
    fn test_parse_tokens() {
        let deck = Deck::parse("S:10 ♥:5 d:7").unwrap();
        let keys: Vec<_> = deck.cards().iter().map(Card::key).collect();
        assert_eq!(
            keys,
            vec![
                CardKey::new(Suit::Spades, Rank::Ten),
                CardKey::new(Suit::Hearts, Rank::Five),
                CardKey::new(Suit::Diamonds, Rank::Seven),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Deck::parse("S10"), Err(DeckError::MalformedToken(_))));
        assert!(matches!(Deck::parse("X:10"), Err(DeckError::Card(_))));
        assert!(matches!(Deck::parse("S:1"), Err(DeckError::Card(_))));
        assert!(matches!(Deck::parse("H:K"), Err(DeckError::NotInDeck(_))));
        assert!(matches!(Deck::parse("S:2 s:2"), Err(DeckError::Duplicate(_))));
    }
}
