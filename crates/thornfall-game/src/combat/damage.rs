//! Damage kinds and the incoming damage event
//!
//! Healing is modeled as a damage kind that adds instead of subtracts;
//! True damage ignores defense entirely. Everything else is mitigated by
//! the target's [`super::defense::DefenseProfile`].

use serde::{Deserialize, Serialize};
use thornfall_core::EntityId;

/// The closed set of damage kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    /// Adds health instead of removing it; never mitigated
    Heal,
    Physical,
    Fire,
    Ice,
    Elec,
    Light,
    Dark,
    Arcane,
    /// Ignores all defense
    True,
}

impl DamageKind {
    /// Whether this kind is mitigated by an elemental defense rating
    pub fn is_elemental(self) -> bool {
        matches!(
            self,
            Self::Fire | Self::Ice | Self::Elec | Self::Light | Self::Dark | Self::Arcane
        )
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Heal => "Heal",
            Self::Physical => "Physical",
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Elec => "Elec",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Arcane => "Arcane",
            Self::True => "True",
        }
    }

    /// All damage kind variants
    pub fn all() -> &'static [DamageKind] {
        &[
            Self::Heal,
            Self::Physical,
            Self::Fire,
            Self::Ice,
            Self::Elec,
            Self::Light,
            Self::Dark,
            Self::Arcane,
            Self::True,
        ]
    }
}

/// One incoming effect delivered to a combatant.
///
/// `magnitude` is always positive; whether it heals or harms is decided by
/// `kind`. `source` is the non-owning handle of whoever caused the effect,
/// used to credit XP on a killing blow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageEvent {
    pub magnitude: i32,
    pub kind: DamageKind,
    pub source: Option<EntityId>,
}

impl DamageEvent {
    /// An effect with no attributed source
    pub fn new(magnitude: i32, kind: DamageKind) -> Self {
        Self {
            magnitude,
            kind,
            source: None,
        }
    }

    /// An effect attributed to the given actor
    pub fn from_source(magnitude: i32, kind: DamageKind, source: EntityId) -> Self {
        Self {
            magnitude,
            kind,
            source: Some(source),
        }
    }
}
