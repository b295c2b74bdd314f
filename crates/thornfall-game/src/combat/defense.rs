//! Defense ratings and the mitigation formula
//!
//! A hit is either fully absorbed or fully penetrates after defense is
//! subtracted; there is no partial absorption. Ratings may go negative
//! (cursed equipment), which turns mitigation into amplification.

use serde::{Deserialize, Serialize};

use super::damage::DamageKind;

/// Per-element defense ratings for one combatant.
///
/// Only equipment deltas mutate this, through [`add`](Self::add) /
/// [`subtract`](Self::subtract), so every equip is exactly reversible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseProfile {
    /// Blocks incoming Physical damage; half of it backs every element
    pub armor_rating: i32,
    pub fire_defense: i32,
    pub ice_defense: i32,
    pub elec_defense: i32,
    pub light_defense: i32,
    pub dark_defense: i32,
    pub arcane_defense: i32,
}

impl DefenseProfile {
    /// Create a profile with no ratings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another set of ratings onto this one
    pub fn add(&mut self, other: &DefenseProfile) {
        self.armor_rating += other.armor_rating;
        self.fire_defense += other.fire_defense;
        self.ice_defense += other.ice_defense;
        self.elec_defense += other.elec_defense;
        self.light_defense += other.light_defense;
        self.dark_defense += other.dark_defense;
        self.arcane_defense += other.arcane_defense;
    }

    /// Remove a previously added set of ratings
    pub fn subtract(&mut self, other: &DefenseProfile) {
        self.armor_rating -= other.armor_rating;
        self.fire_defense -= other.fire_defense;
        self.ice_defense -= other.ice_defense;
        self.elec_defense -= other.elec_defense;
        self.light_defense -= other.light_defense;
        self.dark_defense -= other.dark_defense;
        self.arcane_defense -= other.arcane_defense;
    }

    /// The defense value applied against the given damage kind.
    ///
    /// Physical uses the armor rating alone; each element uses half the
    /// armor rating (integer division) plus its own rating. Heal and True
    /// are never mitigated.
    pub fn defense_against(&self, kind: DamageKind) -> i32 {
        match kind {
            DamageKind::Physical => self.armor_rating,
            DamageKind::Fire => self.armor_rating / 2 + self.fire_defense,
            DamageKind::Ice => self.armor_rating / 2 + self.ice_defense,
            DamageKind::Elec => self.armor_rating / 2 + self.elec_defense,
            DamageKind::Light => self.armor_rating / 2 + self.light_defense,
            DamageKind::Dark => self.armor_rating / 2 + self.dark_defense,
            DamageKind::Arcane => self.armor_rating / 2 + self.arcane_defense,
            DamageKind::Heal | DamageKind::True => 0,
        }
    }

    /// Resolve an incoming magnitude to the health delta it applies.
    ///
    /// Heal passes through as `+magnitude`, True as `-magnitude`. For all
    /// other kinds the hit lands only if it beats defense outright: a
    /// non-negative result after subtracting defense means no health
    /// change at all.
    pub fn mitigate(&self, magnitude: i32, kind: DamageKind) -> i32 {
        match kind {
            DamageKind::Heal => magnitude,
            DamageKind::True => -magnitude,
            _ => {
                let raw = -magnitude + self.defense_against(kind);
                if raw < 0 {
                    raw
                } else {
                    0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(armor: i32, fire: i32) -> DefenseProfile {
        DefenseProfile {
            armor_rating: armor,
            fire_defense: fire,
            ..Default::default()
        }
    }

    #[test]
    fn test_physical_full_absorption() {
        // Armor >= magnitude blocks the hit completely, no partial damage.
        let def = profile(10, 0);
        assert_eq!(def.mitigate(10, DamageKind::Physical), 0);
        assert_eq!(def.mitigate(7, DamageKind::Physical), 0);
    }

    #[test]
    fn test_physical_penetration() {
        let def = profile(3, 0);
        assert_eq!(def.mitigate(10, DamageKind::Physical), -7);
    }

    #[test]
    fn test_elemental_floor_division() {
        // armor 5 contributes 2 (floor), not 2.5
        let def = profile(5, 1);
        assert_eq!(def.defense_against(DamageKind::Fire), 3);
        assert_eq!(def.mitigate(10, DamageKind::Fire), -7);
    }

    #[test]
    fn test_each_element_uses_own_rating() {
        let def = DefenseProfile {
            armor_rating: 4,
            fire_defense: 1,
            ice_defense: 2,
            elec_defense: 3,
            light_defense: 4,
            dark_defense: 5,
            arcane_defense: 6,
            ..Default::default()
        };
        assert_eq!(def.defense_against(DamageKind::Fire), 3);
        assert_eq!(def.defense_against(DamageKind::Ice), 4);
        assert_eq!(def.defense_against(DamageKind::Elec), 5);
        assert_eq!(def.defense_against(DamageKind::Light), 6);
        assert_eq!(def.defense_against(DamageKind::Dark), 7);
        assert_eq!(def.defense_against(DamageKind::Arcane), 8);
    }

    #[test]
    fn test_true_ignores_defense() {
        let def = profile(1000, 1000);
        assert_eq!(def.mitigate(25, DamageKind::True), -25);
    }

    #[test]
    fn test_heal_passes_through() {
        let def = profile(1000, 0);
        assert_eq!(def.mitigate(40, DamageKind::Heal), 40);
    }

    #[test]
    fn test_negative_defense_amplifies() {
        // Cursed gear: -5 armor turns a 10 hit into 15.
        let def = profile(-5, 0);
        assert_eq!(def.mitigate(10, DamageKind::Physical), -15);
    }

    #[test]
    fn test_add_subtract_roundtrip() {
        let base = profile(7, 2);
        let bonus = DefenseProfile {
            armor_rating: 3,
            fire_defense: -4,
            dark_defense: 9,
            ..Default::default()
        };
        let mut def = base;
        def.add(&bonus);
        def.subtract(&bonus);
        assert_eq!(def, base);
    }
}
