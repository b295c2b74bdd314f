//! Equipment slots and the equip/unequip protocol
//!
//! Five armor slots plus one weapon slot, each owning its occupant
//! exclusively. Swapping always reverses the old occupant's deltas before
//! the new occupant's are applied, so the wearer's defense never carries a
//! half-applied swap. Unequipped items are destroyed, not returned.

use serde::{Deserialize, Serialize};

use super::defense::DefenseProfile;
use super::item::{ArmorPiece, ArmorSlot};
use super::weapon::Weapon;

/// The full set of equipped items for one combatant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSet {
    pub head: Option<ArmorPiece>,
    pub chest: Option<ArmorPiece>,
    pub arms: Option<ArmorPiece>,
    pub legs: Option<ArmorPiece>,
    pub boots: Option<ArmorPiece>,
    pub weapon: Option<Weapon>,
}

impl EquipmentSet {
    /// Create an empty equipment set
    pub fn new() -> Self {
        Self::default()
    }

    /// The armor piece occupying a slot, if any
    pub fn armor_in(&self, slot: ArmorSlot) -> Option<&ArmorPiece> {
        self.slot(slot).as_ref()
    }

    /// The equipped weapon, if any
    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    /// Mutable access to the equipped weapon, if any
    pub fn weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapon.as_mut()
    }

    fn slot(&self, slot: ArmorSlot) -> &Option<ArmorPiece> {
        match slot {
            ArmorSlot::Head => &self.head,
            ArmorSlot::Chest => &self.chest,
            ArmorSlot::Arms => &self.arms,
            ArmorSlot::Legs => &self.legs,
            ArmorSlot::Boots => &self.boots,
        }
    }

    fn slot_mut(&mut self, slot: ArmorSlot) -> &mut Option<ArmorPiece> {
        match slot {
            ArmorSlot::Head => &mut self.head,
            ArmorSlot::Chest => &mut self.chest,
            ArmorSlot::Arms => &mut self.arms,
            ArmorSlot::Legs => &mut self.legs,
            ArmorSlot::Boots => &mut self.boots,
        }
    }

    /// Equip an armor piece into the slot it is configured for.
    ///
    /// An existing occupant has its deltas reversed and is destroyed
    /// before the new piece's deltas are applied.
    pub fn equip_armor(&mut self, piece: ArmorPiece, defense: &mut DefenseProfile) {
        let slot = piece.slot;
        if let Some(previous) = self.slot_mut(slot).take() {
            tracing::debug!(
                "replacing {} in {} slot with {}",
                previous.descriptor.name,
                slot.name(),
                piece.descriptor.name
            );
            previous.on_dequip(defense);
        }
        piece.on_equip(defense);
        *self.slot_mut(slot) = Some(piece);
    }

    /// Remove and destroy the occupant of a slot, reversing its deltas.
    /// No-op on an empty slot.
    pub fn unequip_armor(&mut self, slot: ArmorSlot, defense: &mut DefenseProfile) {
        if let Some(piece) = self.slot_mut(slot).take() {
            piece.on_dequip(defense);
        }
    }

    /// Equip a weapon, destroying any previous one.
    ///
    /// Weapons carry no passive defense, so no deltas move here.
    pub fn set_weapon(&mut self, weapon: Weapon) {
        self.weapon = Some(weapon);
    }

    /// Remove and destroy the equipped weapon, if any
    pub fn clear_weapon(&mut self) {
        self.weapon = None;
    }

    /// Death cleanup: every occupied slot is emptied and its item
    /// destroyed, with armor deltas reversed.
    pub fn teardown(&mut self, defense: &mut DefenseProfile) {
        for &slot in ArmorSlot::all() {
            self.unequip_armor(slot, defense);
        }
        self.clear_weapon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::item::ItemDescriptor;
    use crate::combat::weapon::{GoverningStat, WeaponSpec};

    fn make_piece(name: &str, slot: ArmorSlot, armor: i32, fire: i32) -> ArmorPiece {
        ArmorPiece {
            descriptor: ItemDescriptor::new(name, ""),
            slot,
            ratings: DefenseProfile {
                armor_rating: armor,
                fire_defense: fire,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_equip_applies_deltas() {
        let mut set = EquipmentSet::new();
        let mut defense = DefenseProfile::new();
        set.equip_armor(make_piece("Helm", ArmorSlot::Head, 5, 2), &mut defense);
        assert_eq!(defense.armor_rating, 5);
        assert_eq!(defense.fire_defense, 2);
        assert!(set.armor_in(ArmorSlot::Head).is_some());
    }

    #[test]
    fn test_equip_unequip_restores_exact_profile() {
        let mut set = EquipmentSet::new();
        let mut defense = DefenseProfile {
            armor_rating: 3,
            dark_defense: -1,
            ..Default::default()
        };
        let before = defense;

        set.equip_armor(make_piece("Cursed Helm", ArmorSlot::Head, -7, 4), &mut defense);
        set.unequip_armor(ArmorSlot::Head, &mut defense);

        assert_eq!(defense, before);
        assert!(set.armor_in(ArmorSlot::Head).is_none());
    }

    #[test]
    fn test_swap_never_double_counts() {
        let mut set = EquipmentSet::new();
        let mut defense = DefenseProfile::new();
        set.equip_armor(make_piece("Old Helm", ArmorSlot::Head, 5, 0), &mut defense);
        set.equip_armor(make_piece("New Helm", ArmorSlot::Head, 9, 1), &mut defense);

        // Only the new occupant's deltas remain.
        assert_eq!(defense.armor_rating, 9);
        assert_eq!(defense.fire_defense, 1);
        assert_eq!(
            set.armor_in(ArmorSlot::Head).unwrap().descriptor.name,
            "New Helm"
        );
    }

    #[test]
    fn test_slots_are_independent() {
        let mut set = EquipmentSet::new();
        let mut defense = DefenseProfile::new();
        set.equip_armor(make_piece("Helm", ArmorSlot::Head, 2, 0), &mut defense);
        set.equip_armor(make_piece("Plate", ArmorSlot::Chest, 8, 0), &mut defense);
        assert_eq!(defense.armor_rating, 10);

        set.unequip_armor(ArmorSlot::Head, &mut defense);
        assert_eq!(defense.armor_rating, 8);
        assert!(set.armor_in(ArmorSlot::Chest).is_some());
    }

    #[test]
    fn test_unequip_empty_slot_is_noop() {
        let mut set = EquipmentSet::new();
        let mut defense = DefenseProfile {
            armor_rating: 4,
            ..Default::default()
        };
        set.unequip_armor(ArmorSlot::Legs, &mut defense);
        assert_eq!(defense.armor_rating, 4);
    }

    #[test]
    fn test_weapon_swap_moves_no_deltas() {
        let mut set = EquipmentSet::new();
        let mut defense = DefenseProfile::new();
        set.equip_armor(make_piece("Helm", ArmorSlot::Head, 5, 0), &mut defense);

        set.set_weapon(Weapon::new(WeaponSpec::new("Blade", 10, GoverningStat::Strength)));
        set.set_weapon(Weapon::new(WeaponSpec::new("Axe", 14, GoverningStat::Strength)));

        assert_eq!(defense.armor_rating, 5);
        assert_eq!(set.weapon().unwrap().spec.descriptor.name, "Axe");
    }

    #[test]
    fn test_teardown_empties_everything() {
        let mut set = EquipmentSet::new();
        let mut defense = DefenseProfile::new();
        set.equip_armor(make_piece("Helm", ArmorSlot::Head, 5, 1), &mut defense);
        set.equip_armor(make_piece("Boots", ArmorSlot::Boots, 2, 0), &mut defense);
        set.set_weapon(Weapon::new(WeaponSpec::new("Blade", 10, GoverningStat::Strength)));

        set.teardown(&mut defense);

        assert_eq!(defense, DefenseProfile::new());
        for &slot in ArmorSlot::all() {
            assert!(set.armor_in(slot).is_none());
        }
        assert!(set.weapon().is_none());
    }
}
