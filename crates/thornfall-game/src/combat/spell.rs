//! Spells: mana-gated damage-event factories
//!
//! A spell's effectiveness can mean anything its kind makes of it — a
//! `Heal` spell restores, a `Fire` spell burns. Casting is resolved by the
//! combatant, which pays the mana cost.

use serde::{Deserialize, Serialize};

use super::damage::DamageKind;

/// Static configuration of a spell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub description: String,
    pub mana_cost: i32,
    /// Magnitude of the produced effect
    pub effectiveness: i32,
    pub kind: DamageKind,
}

impl Spell {
    pub fn new(
        name: impl Into<String>,
        mana_cost: i32,
        effectiveness: i32,
        kind: DamageKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            mana_cost,
            effectiveness,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_fields() {
        let bolt = Spell::new("Ember Bolt", 12, 30, DamageKind::Fire);
        assert_eq!(bolt.mana_cost, 12);
        assert_eq!(bolt.effectiveness, 30);
        assert_eq!(bolt.kind, DamageKind::Fire);
    }
}
