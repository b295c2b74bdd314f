//! Thornfall Game - combat resolution and character progression
//!
//! The in-process core of the action RPG: stat blocks and resource pools,
//! elemental mitigation, slot-based equipment with reversible deltas, the
//! weapon readiness state machine, and the XP/leveling loop. Rendering,
//! animation, input, and spatial queries are host concerns reached through
//! [`CombatHooks`] and opaque [`thornfall_core::EntityId`] handles.

pub mod actor;
pub mod combat;
pub mod progression;

pub use actor::{
    Arena, CombatHooks, Combatant, CombatantKind, Loadout, NoopHooks, StaminaConfig,
};
pub use combat::{
    ArmorPiece, ArmorSlot, AttackProfile, Attribute, Consumable, ConsumableEffect, DamageEvent,
    DamageKind, DamageOutput, DefenseProfile, EquipmentSet, GoverningStat, Inventory,
    InventoryEntry, Item, ItemCategory, ItemDescriptor, Spell, StatBlock, Weapon, WeaponClass,
    WeaponSpec, WeaponState,
};
pub use progression::{LevelRow, LevelTable, LevelUpPool, ProgressionTrack, TableError, MAX_LEVEL};
