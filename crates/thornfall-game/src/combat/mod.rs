//! Combat system module
//!
//! Provides damage kinds and mitigation, stat blocks, the item model,
//! weapons and their readiness state machine, equipment slots, inventory,
//! and spells.

pub mod damage;
pub mod defense;
pub mod equipment;
pub mod inventory;
pub mod item;
pub mod spell;
pub mod stats;
pub mod weapon;

pub use damage::{DamageEvent, DamageKind};
pub use defense::DefenseProfile;
pub use equipment::EquipmentSet;
pub use inventory::{Inventory, InventoryEntry};
pub use item::{ArmorPiece, ArmorSlot, Consumable, ConsumableEffect, Item, ItemCategory, ItemDescriptor};
pub use spell::Spell;
pub use stats::{Attribute, StatBlock};
pub use weapon::{AttackProfile, DamageOutput, GoverningStat, Weapon, WeaponClass, WeaponSpec, WeaponState};
