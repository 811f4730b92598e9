//! Player actions.
//!
//! An [`Action`] is a tagged record: a [`ActionKind`] plus whichever payload
//! fields that kind needs. The loose shape is what external producers send,
//! so an action may be missing its payload or name a kind this engine does
//! not know. In-process callers should use the typed constructors
//! ([`Action::fight_monster`] and friends), which cannot produce either.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{InvalidActionError, Monster, Weapon};

/// The tag on an action.
///
/// Any tag not listed here deserializes as [`ActionKind::Unknown`], which
/// the reducer ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    DrawRoom,
    AvoidRoom,
    FightMonster,
    UseWeapon,
    UseHealthPotion,
    EquipWeapon,
    #[serde(other)]
    Unknown,
}

impl ActionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DrawRoom => "DRAW_ROOM",
            Self::AvoidRoom => "AVOID_ROOM",
            Self::FightMonster => "FIGHT_MONSTER",
            Self::UseWeapon => "USE_WEAPON",
            Self::UseHealthPotion => "USE_HEALTH_POTION",
            Self::EquipWeapon => "EQUIP_WEAPON",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single player action as dispatched to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,

    /// Target of `FIGHT_MONSTER` and `USE_WEAPON`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster: Option<Monster>,

    /// Card to pick up for `EQUIP_WEAPON`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<Weapon>,

    /// Amount the potion restores for `USE_HEALTH_POTION`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<u8>,

    /// Producer's clock when the action was issued.
    #[serde(default)]
    pub timestamp: i64,

    /// Producer's sequence number for the action.
    #[serde(default)]
    pub sequence: u64,
}

impl Action {
    fn bare(kind: ActionKind) -> Self {
        Self {
            kind,
            monster: None,
            weapon: None,
            healing: None,
            timestamp: 0,
            sequence: 0,
        }
    }

    pub fn draw_room() -> Self {
        Self::bare(ActionKind::DrawRoom)
    }

    pub fn avoid_room() -> Self {
        Self::bare(ActionKind::AvoidRoom)
    }

    pub fn fight_monster(monster: Monster) -> Self {
        Self {
            monster: Some(monster),
            ..Self::bare(ActionKind::FightMonster)
        }
    }

    pub fn use_weapon(monster: Monster) -> Self {
        Self {
            monster: Some(monster),
            ..Self::bare(ActionKind::UseWeapon)
        }
    }

    pub fn use_health_potion(healing: u8) -> Self {
        Self {
            healing: Some(healing),
            ..Self::bare(ActionKind::UseHealthPotion)
        }
    }

    pub fn equip_weapon(weapon: Weapon) -> Self {
        Self {
            weapon: Some(weapon),
            ..Self::bare(ActionKind::EquipWeapon)
        }
    }

    /// An action of the given kind with no payload at all.
    ///
    /// Mostly useful for exercising the missing-payload path.
    pub fn empty(kind: ActionKind) -> Self {
        Self::bare(kind)
    }

    /// Attaches the producer's timestamp and sequence number.
    #[must_use]
    pub fn stamped(mut self, timestamp: i64, sequence: u64) -> Self {
        self.timestamp = timestamp;
        self.sequence = sequence;
        self
    }

    /// Validates the payload against the kind.
    ///
    /// Returns `Ok(None)` for an unknown kind.
    ///
    /// # Errors
    /// [`InvalidActionError`] when the kind's required payload is absent.
    pub(crate) fn command(&self) -> Result<Option<Command<'_>>, InvalidActionError> {
        let command = match self.kind {
            ActionKind::DrawRoom => Command::DrawRoom,
            ActionKind::AvoidRoom => Command::AvoidRoom,
            ActionKind::FightMonster => Command::FightMonster(
                self.monster
                    .as_ref()
                    .ok_or(InvalidActionError::MissingMonster(self.kind))?,
            ),
            ActionKind::UseWeapon => Command::UseWeapon(
                self.monster
                    .as_ref()
                    .ok_or(InvalidActionError::MissingMonster(self.kind))?,
            ),
            ActionKind::UseHealthPotion => Command::UseHealthPotion {
                healing: self
                    .healing
                    .ok_or(InvalidActionError::MissingHealing(self.kind))?,
                timestamp: self.timestamp,
                sequence: self.sequence,
            },
            ActionKind::EquipWeapon => Command::EquipWeapon(
                self.weapon
                    .as_ref()
                    .ok_or(InvalidActionError::MissingWeapon(self.kind))?,
            ),
            ActionKind::Unknown => return Ok(None),
        };
        Ok(Some(command))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.monster, &self.weapon, self.healing) {
            (Some(monster), _, _) => write!(f, "{} {}", self.kind, monster.key()),
            (_, Some(weapon), _) => write!(f, "{} {}", self.kind, weapon.key()),
            (_, _, Some(healing)) => write!(f, "{} +{healing}", self.kind),
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// A payload-checked action, borrowed from the [`Action`] it came from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Command<'a> {
    DrawRoom,
    AvoidRoom,
    FightMonster(&'a Monster),
    UseWeapon(&'a Monster),
    UseHealthPotion {
        healing: u8,
        timestamp: i64,
        sequence: u64,
    },
    EquipWeapon(&'a Weapon),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn test_constructors_fill_payload() {
        let monster = Monster::new(Suit::Spades, Rank::Four);
        let action = Action::fight_monster(monster.clone());
        assert_eq!(action.kind, ActionKind::FightMonster);
        assert_eq!(action.monster, Some(monster));
        assert!(matches!(action.command(), Ok(Some(Command::FightMonster(_)))));
    }

    #[test]
    fn test_missing_payloads_are_invalid() {
        for (kind, expected) in [
            (ActionKind::FightMonster, InvalidActionError::MissingMonster(ActionKind::FightMonster)),
            (ActionKind::UseWeapon, InvalidActionError::MissingMonster(ActionKind::UseWeapon)),
            (ActionKind::UseHealthPotion, InvalidActionError::MissingHealing(ActionKind::UseHealthPotion)),
            (ActionKind::EquipWeapon, InvalidActionError::MissingWeapon(ActionKind::EquipWeapon)),
        ] {
            assert_eq!(Action::empty(kind).command().unwrap_err(), expected);
        }
    }

    #[test]
    fn test_payload_free_kinds_are_valid() {
        assert!(matches!(Action::draw_room().command(), Ok(Some(Command::DrawRoom))));
        assert!(matches!(Action::avoid_room().command(), Ok(Some(Command::AvoidRoom))));
        assert!(matches!(Action::empty(ActionKind::Unknown).command(), Ok(None)));
    }

    #[test]
    fn test_potion_command_carries_stamp() {
        let action = Action::use_health_potion(6).stamped(1234, 9);
        match action.command() {
            Ok(Some(Command::UseHealthPotion { healing, timestamp, sequence })) => {
                assert_eq!((healing, timestamp, sequence), (6, 1234, 9));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let action: Action = serde_json::from_str(
            r#"{"type":"USE_WEAPON","monster":{"suit":"♣","rank":"8","damage":8},"timestamp":5,"sequence":2}"#,
        )
        .unwrap();
        assert_eq!(action.kind, ActionKind::UseWeapon);
        assert_eq!(action.monster, Some(Monster::new(Suit::Clubs, Rank::Eight)));
        assert_eq!(action.sequence, 2);
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        let action: Action = serde_json::from_str(r#"{"type":"CAST_SPELL"}"#).unwrap();
        assert_eq!(action.kind, ActionKind::Unknown);
    }

    #[test]
    fn test_deserialize_missing_payload_is_allowed() {
        let action: Action = serde_json::from_str(r#"{"type":"EQUIP_WEAPON"}"#).unwrap();
        assert!(action.weapon.is_none());
        assert!(action.command().is_err());
    }

    #[test]
    fn test_display() {
        let action = Action::use_weapon(Monster::new(Suit::Spades, Rank::Queen));
        assert_eq!(action.to_string(), "USE_WEAPON ♠Q");
        assert_eq!(Action::use_health_potion(3).to_string(), "USE_HEALTH_POTION +3");
        assert_eq!(Action::draw_room().to_string(), "DRAW_ROOM");
    }
}
