//! Card identity and ranking.
//!
//! Every card in the dungeon is a [`Monster`], a [`Weapon`] or a
//! [`HealthPotion`], wrapped in the [`Card`] sum type. All three share a
//! [`Suit`] and a [`Rank`]; two cards are the same card when their
//! [`CardKey`]s match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CardError;

// ---------------------------------------------------------------------------
// Suit
// ---------------------------------------------------------------------------

/// One of the four canonical suits.
///
/// Suits arrive from the outside world either as a letter code (`S`, `H`,
/// `D`, `C`, any case) or as the glyph (`♠`, `♥`, `♦`, `♣`). Both forms are
/// folded into this enum at the parsing boundary.
///
/// Serialized as the upper-case letter; deserialization accepts every form
/// [`normalize_suit`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "S", alias = "s", alias = "♠")]
    Spades,
    #[serde(rename = "H", alias = "h", alias = "♥")]
    Hearts,
    #[serde(rename = "D", alias = "d", alias = "♦")]
    Diamonds,
    #[serde(rename = "C", alias = "c", alias = "♣")]
    Clubs,
}

impl Suit {
    /// All four suits.
    pub const fn all() -> [Suit; 4] {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
    }

    /// Upper-case letter code.
    pub const fn letter(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    /// Unicode suit symbol.
    pub const fn glyph(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub const fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Canonicalizes a textual suit.
///
/// Accepts a single letter code (case-insensitive) or a suit glyph,
/// surrounding whitespace ignored.
///
/// # Errors
/// Returns [`CardError::UnknownSuit`] for anything else.
pub fn normalize_suit(input: &str) -> Result<Suit, CardError> {
    match input.trim() {
        "S" | "s" | "♠" => Ok(Suit::Spades),
        "H" | "h" | "♥" => Ok(Suit::Hearts),
        "D" | "d" | "♦" => Ok(Suit::Diamonds),
        "C" | "c" | "♣" => Ok(Suit::Clubs),
        _ => Err(CardError::UnknownSuit(input.to_string())),
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_suit(s)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// One of the 13 rank symbols, ordered by strength.
///
/// The discriminant is the numeric strength used for both combat and
/// scoring: `2..10` map to themselves, then `J = 11`, `Q = 12`, `K = 13`,
/// `A = 14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two = 2,
    #[serde(rename = "3")]
    Three = 3,
    #[serde(rename = "4")]
    Four = 4,
    #[serde(rename = "5")]
    Five = 5,
    #[serde(rename = "6")]
    Six = 6,
    #[serde(rename = "7")]
    Seven = 7,
    #[serde(rename = "8")]
    Eight = 8,
    #[serde(rename = "9")]
    Nine = 9,
    #[serde(rename = "10")]
    Ten = 10,
    #[serde(rename = "J")]
    Jack = 11,
    #[serde(rename = "Q")]
    Queen = 12,
    #[serde(rename = "K")]
    King = 13,
    #[serde(rename = "A")]
    Ace = 14,
}

impl Rank {
    /// All ranks, weakest first.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }

    /// Numeric strength, 2 through 14.
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    pub const fn is_face(&self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// The printed symbol (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    pub const fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::all()
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::all()
            .into_iter()
            .find(|rank| rank.value() == value)
            .ok_or_else(|| CardError::UnknownRank(value.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Strength of a rank symbol; `0` for anything unrecognized.
pub fn rank_value(symbol: &str) -> u8 {
    symbol.parse::<Rank>().map_or(0, |rank| rank.value())
}

// ---------------------------------------------------------------------------
// CardKey
// ---------------------------------------------------------------------------

/// The identity of a card: its suit and rank.
///
/// Used to locate and remove a specific card from the room. Two cards with
/// the same key are the same card even if their other fields differ (a
/// weapon's damage drops as it is used, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKey {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardKey {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

// ---------------------------------------------------------------------------
// Card variants
// ---------------------------------------------------------------------------

/// A monster lurking in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub suit: Suit,
    pub rank: Rank,
    /// Damage dealt when fought bare-handed.
    pub damage: u8,
}

impl Monster {
    /// A monster whose damage equals its rank strength.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            damage: rank.value(),
        }
    }

    pub fn key(&self) -> CardKey {
        CardKey::new(self.suit, self.rank)
    }
}

/// A weapon, together with the monsters it has slain since being equipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub suit: Suit,
    pub rank: Rank,
    /// Current fighting strength. Overwritten by the damage of every monster
    /// this weapon kills.
    pub damage: u8,
    /// Kills since equipped, oldest first. Append-only.
    pub monsters_slain: Vec<Monster>,
}

impl Weapon {
    /// A fresh weapon whose strength equals its rank and with no kills.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            damage: rank.value(),
            monsters_slain: Vec::new(),
        }
    }

    pub fn key(&self) -> CardKey {
        CardKey::new(self.suit, self.rank)
    }

    /// The last monster this weapon killed, if any.
    pub fn last_slain(&self) -> Option<&Monster> {
        self.monsters_slain.last()
    }
}

/// A potion that restores health when drunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPotion {
    pub suit: Suit,
    pub rank: Rank,
    pub healing: u8,
}

impl HealthPotion {
    /// A potion whose healing equals its rank strength.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            healing: rank.value(),
        }
    }

    pub fn key(&self) -> CardKey {
        CardKey::new(self.suit, self.rank)
    }
}

/// Any card in the game.
///
/// Internally tagged on the wire: `{"type":"MONSTER","suit":"S","rank":"10","damage":10}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Card {
    Monster(Monster),
    Weapon(Weapon),
    HealthPotion(HealthPotion),
}

impl Card {
    pub fn key(&self) -> CardKey {
        match self {
            Card::Monster(monster) => monster.key(),
            Card::Weapon(weapon) => weapon.key(),
            Card::HealthPotion(potion) => potion.key(),
        }
    }

    pub fn suit(&self) -> Suit {
        self.key().suit
    }

    pub fn rank(&self) -> Rank {
        self.key().rank
    }

    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Card::Monster(monster) => Some(monster),
            Card::Weapon(_) | Card::HealthPotion(_) => None,
        }
    }

    pub fn is_monster(&self) -> bool {
        self.as_monster().is_some()
    }
}

impl From<Monster> for Card {
    fn from(monster: Monster) -> Self {
        Card::Monster(monster)
    }
}

impl From<Weapon> for Card {
    fn from(weapon: Weapon) -> Self {
        Card::Weapon(weapon)
    }
}

impl From<HealthPotion> for Card {
    fn from(potion: HealthPotion) -> Self {
        Card::HealthPotion(potion)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Monster(m) => write!(f, "monster {} ({} dmg)", m.key(), m.damage),
            Card::Weapon(w) => write!(f, "weapon {} ({} dmg)", w.key(), w.damage),
            Card::HealthPotion(p) => write!(f, "potion {} (+{})", p.key(), p.healing),
        }
    }
}

/// True when both cards have the same suit and rank.
pub fn cards_equal(a: &Card, b: &Card) -> bool {
    a.key() == b.key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_suit_accepts_letters_and_glyphs() {
        assert_eq!(normalize_suit("S").unwrap(), Suit::Spades);
        assert_eq!(normalize_suit("s").unwrap(), Suit::Spades);
        assert_eq!(normalize_suit("♠").unwrap(), Suit::Spades);
        assert_eq!(normalize_suit("h").unwrap(), Suit::Hearts);
        assert_eq!(normalize_suit("♦").unwrap(), Suit::Diamonds);
        assert_eq!(normalize_suit(" C ").unwrap(), Suit::Clubs);
    }

    #[test]
    fn test_normalize_suit_rejects_unknown_input() {
        let err = normalize_suit("X").unwrap_err();
        assert!(matches!(err, CardError::UnknownSuit(ref s) if s == "X"));
        assert!(normalize_suit("spades").is_err());
        assert!(normalize_suit("").is_err());
    }

    #[test]
    fn test_suit_letter_and_color() {
        let letters: String = Suit::all().iter().map(Suit::letter).collect();
        assert_eq!(letters, "SHDC");
        for suit in Suit::all() {
            assert_eq!(normalize_suit(&suit.letter().to_string()).unwrap(), suit);
        }
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_rank_value_table() {
        assert_eq!(rank_value("2"), 2);
        assert_eq!(rank_value("10"), 10);
        assert_eq!(rank_value("J"), 11);
        assert_eq!(rank_value("Q"), 12);
        assert_eq!(rank_value("K"), 13);
        assert_eq!(rank_value("A"), 14);
    }

    #[test]
    fn test_rank_value_unknown_is_zero() {
        assert_eq!(rank_value("1"), 0);
        assert_eq!(rank_value("Z"), 0);
        assert_eq!(rank_value(""), 0);
    }

    #[test]
    fn test_rank_ordering_follows_strength() {
        let ranks = Rank::all();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Rank::try_from(12).unwrap(), Rank::Queen);
        assert!(Rank::try_from(15).is_err());
    }

    #[test]
    fn test_cards_equal_ignores_variant_fields() {
        let fresh = Card::from(Weapon::new(Suit::Diamonds, Rank::Seven));
        let mut used = Weapon::new(Suit::Diamonds, Rank::Seven);
        used.damage = 3;
        assert!(cards_equal(&fresh, &Card::from(used)));

        let other = Card::from(Weapon::new(Suit::Diamonds, Rank::Eight));
        assert!(!cards_equal(&fresh, &other));
    }

    #[test]
    fn test_card_kind_accessors() {
        let monster = Card::from(Monster::new(Suit::Clubs, Rank::Jack));
        assert!(monster.is_monster());
        assert_eq!(monster.as_monster().map(|m| m.damage), Some(11));

        let weapon = Card::from(Weapon::new(Suit::Diamonds, Rank::Two));
        assert!(!weapon.is_monster());
        assert_eq!(weapon.suit(), Suit::Diamonds);
        assert_eq!(weapon.rank(), Rank::Two);
    }

    #[test]
    fn test_card_serializes_with_type_tag() {
        let card = Card::from(Monster::new(Suit::Spades, Rank::Ten));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["type"], "MONSTER");
        assert_eq!(json["suit"], "S");
        assert_eq!(json["rank"], "10");
        assert_eq!(json["damage"], 10);
    }

    #[test]
    fn test_card_deserializes_glyph_suits() {
        let card: Card =
            serde_json::from_str(r#"{"type":"HEALTH_POTION","suit":"♥","rank":"5","healing":5}"#)
                .unwrap();
        assert_eq!(card.key(), CardKey::new(Suit::Hearts, Rank::Five));
    }

    #[test]
    fn test_display() {
        assert_eq!(CardKey::new(Suit::Clubs, Rank::King).to_string(), "♣K");
        let card = Card::from(HealthPotion::new(Suit::Hearts, Rank::Four));
        assert_eq!(card.to_string(), "potion ♥4 (+4)");
    }
}
