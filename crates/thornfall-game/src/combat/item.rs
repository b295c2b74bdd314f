//! Item data model
//!
//! Armor pieces, consumables, and weapon specs form a closed variant set;
//! there is no item inheritance. Equipped items are owned by their slot
//! and destroyed on unequip, so inventories hold item *configurations*,
//! never live equipment.

use serde::{Deserialize, Serialize};

use super::defense::DefenseProfile;
use super::weapon::WeaponSpec;

/// Name and flavor text shared by every item category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub name: String,
    pub description: String,
}

impl ItemDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
}

/// The five armor attachment points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorSlot {
    Head,
    Chest,
    Arms,
    Legs,
    Boots,
}

impl ArmorSlot {
    /// All armor slot variants
    pub fn all() -> &'static [ArmorSlot] {
        &[Self::Head, Self::Chest, Self::Arms, Self::Legs, Self::Boots]
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Chest => "Chest",
            Self::Arms => "Arms",
            Self::Legs => "Legs",
            Self::Boots => "Boots",
        }
    }
}

/// A piece of armor: one slot, seven additive defense ratings.
///
/// Ratings may be negative (cursed pieces).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorPiece {
    pub descriptor: ItemDescriptor,
    pub slot: ArmorSlot,
    pub ratings: DefenseProfile,
}

impl ArmorPiece {
    /// Apply this piece's ratings to the wearer's defense
    pub fn on_equip(&self, defense: &mut DefenseProfile) {
        defense.add(&self.ratings);
    }

    /// Reverse exactly what [`on_equip`](Self::on_equip) applied
    pub fn on_dequip(&self, defense: &mut DefenseProfile) {
        defense.subtract(&self.ratings);
    }
}

/// What a consumable does when used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    RestoreHealth(i32),
    RestoreMana(i32),
    RestoreStamina(f32),
}

/// A single-use item consumed from the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    pub descriptor: ItemDescriptor,
    pub effect: ConsumableEffect,
}

/// A game item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Weapon(WeaponSpec),
    Armor(ArmorPiece),
    Consumable(Consumable),
}

impl Item {
    /// Which category this item belongs to
    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Weapon(_) => ItemCategory::Weapon,
            Self::Armor(_) => ItemCategory::Armor,
            Self::Consumable(_) => ItemCategory::Consumable,
        }
    }

    /// The item's display name
    pub fn name(&self) -> &str {
        match self {
            Self::Weapon(spec) => &spec.descriptor.name,
            Self::Armor(piece) => &piece.descriptor.name,
            Self::Consumable(c) => &c.descriptor.name,
        }
    }
}
