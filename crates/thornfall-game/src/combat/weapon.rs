//! Weapons: configuration, readiness state machine, and damage output
//!
//! A weapon only deals damage during the `Active` phase of its readiness
//! cycle. Phase transitions are driven by the host's animation notifies
//! through [`Weapon::set_state`]; attack inputs are funneled through
//! [`Weapon::press_attack`], which enforces the combo rules.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::damage::DamageKind;
use super::item::ItemDescriptor;
use super::stats::StatBlock;

/// Weapon class, used by the host to pick animation sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    OneHand,
    TwoHand,
    Staff,
    Bow,
    Crossbow,
}

impl WeaponClass {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::OneHand => "One-Handed",
            Self::TwoHand => "Two-Handed",
            Self::Staff => "Staff",
            Self::Bow => "Bow",
            Self::Crossbow => "Crossbow",
        }
    }

    /// All weapon class variants
    pub fn all() -> &'static [WeaponClass] {
        &[
            Self::OneHand,
            Self::TwoHand,
            Self::Staff,
            Self::Bow,
            Self::Crossbow,
        ]
    }
}

/// Which wielder attribute feeds the weapon's bonus damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoverningStat {
    Strength,
    Dexterity,
    Magic,
    Luck,
}

/// Readiness phase of an attack sequence.
///
/// `Idle → Startup → Active → Recovery → Idle` is the normal cycle; only
/// `Active` can deal damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponState {
    #[default]
    Idle,
    Startup,
    Active,
    Recovery,
}

/// Host-side playback parameters for one attack in the two-slot combo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackProfile {
    pub play_rate: f32,
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self { play_rate: 1.0 }
    }
}

/// Static configuration of a weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub descriptor: ItemDescriptor,
    /// Flat damage before the governing-stat bonus
    pub damage: i32,
    /// Mana gate for casting through this weapon (staves)
    pub required_mana: i32,
    /// Crit chance in [0, 100]; 0 never crits
    pub crit_chance: f32,
    /// Damage multiplier applied on a crit
    pub crit_bonus: f32,
    pub class: WeaponClass,
    pub governing: GoverningStat,
    /// Damage kind carried by every hit from this weapon
    pub kind: DamageKind,
    /// Slot 0 opens the combo, slot 1 is the follow-up; inputs alternate
    pub attacks: [AttackProfile; 2],
}

impl WeaponSpec {
    /// A plain physical weapon with default combo timing
    pub fn new(name: impl Into<String>, damage: i32, governing: GoverningStat) -> Self {
        Self {
            descriptor: ItemDescriptor::new(name, ""),
            damage,
            required_mana: 0,
            crit_chance: 0.0,
            crit_bonus: 1.5,
            class: WeaponClass::OneHand,
            governing,
            kind: DamageKind::Physical,
            attacks: [AttackProfile::default(); 2],
        }
    }
}

/// One resolved hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageOutput {
    pub amount: i32,
    pub was_crit: bool,
    pub kind: DamageKind,
}

/// A weapon in a combatant's hands: spec plus readiness state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub spec: WeaponSpec,
    state: WeaponState,
    combo_slot: usize,
}

impl Weapon {
    /// Wrap a spec into an idle, combo-reset weapon
    pub fn new(spec: WeaponSpec) -> Self {
        Self {
            spec,
            state: WeaponState::Idle,
            combo_slot: 0,
        }
    }

    /// Current readiness phase
    pub fn state(&self) -> WeaponState {
        self.state
    }

    /// Which combo slot the current/last attack used
    pub fn combo_slot(&self) -> usize {
        self.combo_slot
    }

    /// Host-driven phase notification (animation notify)
    pub fn set_state(&mut self, state: WeaponState) {
        self.state = state;
    }

    /// Whether the weapon may deal damage right now
    pub fn can_damage(&self) -> bool {
        self.state == WeaponState::Active
    }

    /// Whether a dodge may interrupt the current attack
    pub fn can_dodge_cancel(&self) -> bool {
        self.state == WeaponState::Startup || self.state == WeaponState::Recovery
    }

    /// Whether an attack input may chain into the follow-up
    pub fn can_attack_cancel(&self) -> bool {
        self.state == WeaponState::Recovery
    }

    /// Whether an attack sequence is in progress
    pub fn is_attacking(&self) -> bool {
        self.state != WeaponState::Idle
    }

    /// Handle an attack input.
    ///
    /// From `Idle` a new sequence starts on slot 0. Mid-sequence the input
    /// only lands during `Recovery`, alternating to the other slot. Returns
    /// the slot of the attack that started, or `None` if the input was
    /// dropped.
    pub fn press_attack(&mut self) -> Option<usize> {
        if self.state == WeaponState::Idle {
            self.combo_slot = 0;
            self.state = WeaponState::Startup;
            Some(0)
        } else if self.can_attack_cancel() {
            self.combo_slot = 1 - self.combo_slot;
            self.state = WeaponState::Startup;
            Some(self.combo_slot)
        } else {
            None
        }
    }

    /// Interrupt the attack sequence (dodge cancel), returning to `Idle`
    pub fn interrupt(&mut self) {
        self.state = WeaponState::Idle;
        self.combo_slot = 0;
    }

    /// Playback parameters for the attack in the given slot
    pub fn attack_profile(&self, slot: usize) -> AttackProfile {
        self.spec.attacks[slot.min(1)]
    }

    /// Flat damage plus the wielder's governing-stat bonus.
    ///
    /// With no wielder bound the bonus falls back to 1.
    pub fn base_damage(&self, wielder: Option<&StatBlock>) -> i32 {
        self.spec.damage + self.stat_multiplier(wielder)
    }

    fn stat_multiplier(&self, wielder: Option<&StatBlock>) -> i32 {
        match wielder {
            Some(stats) => match self.spec.governing {
                GoverningStat::Strength => stats.strength,
                GoverningStat::Dexterity => stats.dexterity,
                GoverningStat::Magic => stats.magic,
                GoverningStat::Luck => stats.luck,
            },
            None => 1,
        }
    }

    /// Resolve one hit: base damage, then the crit roll.
    ///
    /// Callers are responsible for only emitting damage while
    /// [`can_damage`](Self::can_damage) holds.
    pub fn damage_output(&self, wielder: Option<&StatBlock>, rng: &mut impl Rng) -> DamageOutput {
        let roll = rng.gen_range(0..=100);
        let luck = wielder.map(|s| s.luck).unwrap_or(0);
        let was_crit = crit_check(roll, luck, self.spec.crit_chance);

        let base = self.base_damage(wielder);
        let amount = if was_crit {
            (base as f32 * self.spec.crit_bonus) as i32
        } else {
            base
        };

        DamageOutput {
            amount,
            was_crit,
            kind: self.spec.kind,
        }
    }
}

/// Luck shaves a tenth of itself (integer division) off the roll before
/// the threshold comparison.
fn crit_check(roll: i32, luck: i32, crit_chance: f32) -> bool {
    ((roll - luck / 10) as f32) < crit_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_weapon(governing: GoverningStat) -> Weapon {
        Weapon::new(WeaponSpec::new("Worn Blade", 10, governing))
    }

    fn make_stats() -> StatBlock {
        let mut stats = StatBlock::default();
        stats.strength = 8;
        stats.dexterity = 6;
        stats.magic = 4;
        stats.luck = 50;
        stats
    }

    #[test]
    fn test_can_damage_only_when_active() {
        let mut weapon = make_weapon(GoverningStat::Strength);
        for state in [
            WeaponState::Idle,
            WeaponState::Startup,
            WeaponState::Active,
            WeaponState::Recovery,
        ] {
            weapon.set_state(state);
            assert_eq!(weapon.can_damage(), state == WeaponState::Active);
        }
    }

    #[test]
    fn test_cancel_windows() {
        let mut weapon = make_weapon(GoverningStat::Strength);
        weapon.set_state(WeaponState::Startup);
        assert!(weapon.can_dodge_cancel());
        assert!(!weapon.can_attack_cancel());

        weapon.set_state(WeaponState::Recovery);
        assert!(weapon.can_dodge_cancel());
        assert!(weapon.can_attack_cancel());

        weapon.set_state(WeaponState::Active);
        assert!(!weapon.can_dodge_cancel());
        assert!(!weapon.can_attack_cancel());
    }

    #[test]
    fn test_attack_starts_from_idle_only() {
        let mut weapon = make_weapon(GoverningStat::Strength);
        assert_eq!(weapon.press_attack(), Some(0));
        assert_eq!(weapon.state(), WeaponState::Startup);

        // Startup and Active both drop the input.
        assert_eq!(weapon.press_attack(), None);
        weapon.set_state(WeaponState::Active);
        assert_eq!(weapon.press_attack(), None);
    }

    #[test]
    fn test_combo_alternates_in_recovery() {
        let mut weapon = make_weapon(GoverningStat::Strength);
        assert_eq!(weapon.press_attack(), Some(0));

        weapon.set_state(WeaponState::Recovery);
        assert_eq!(weapon.press_attack(), Some(1));

        weapon.set_state(WeaponState::Recovery);
        assert_eq!(weapon.press_attack(), Some(0));
    }

    #[test]
    fn test_interrupt_resets_combo() {
        let mut weapon = make_weapon(GoverningStat::Strength);
        weapon.press_attack();
        weapon.set_state(WeaponState::Recovery);
        weapon.press_attack();

        weapon.interrupt();
        assert_eq!(weapon.state(), WeaponState::Idle);
        assert!(!weapon.is_attacking());
        // Next sequence opens on slot 0 again.
        assert_eq!(weapon.press_attack(), Some(0));
    }

    #[test]
    fn test_base_damage_per_governing_stat() {
        let stats = make_stats();
        assert_eq!(
            make_weapon(GoverningStat::Strength).base_damage(Some(&stats)),
            18
        );
        assert_eq!(
            make_weapon(GoverningStat::Dexterity).base_damage(Some(&stats)),
            16
        );
        assert_eq!(
            make_weapon(GoverningStat::Magic).base_damage(Some(&stats)),
            14
        );
        assert_eq!(
            make_weapon(GoverningStat::Luck).base_damage(Some(&stats)),
            60
        );
    }

    #[test]
    fn test_base_damage_without_wielder() {
        let weapon = make_weapon(GoverningStat::Strength);
        assert_eq!(weapon.base_damage(None), 11);
    }

    #[test]
    fn test_crit_check_luck_shaving() {
        // roll 40, luck 50, chance 10: 40 - 5 = 35, not < 10.
        assert!(!crit_check(40, 50, 10.0));
        // roll 12, luck 50, chance 10: 12 - 5 = 7, < 10.
        assert!(crit_check(12, 50, 10.0));
        // luck 19 shaves only 1 (integer division).
        assert!(!crit_check(11, 19, 10.0));
    }

    #[test]
    fn test_damage_output_no_crit_at_zero_chance() {
        let mut weapon = make_weapon(GoverningStat::Strength);
        weapon.spec.crit_chance = 0.0;
        let stats = make_stats();
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let out = weapon.damage_output(Some(&stats), &mut rng);
            assert!(!out.was_crit);
            assert_eq!(out.amount, 18);
            assert_eq!(out.kind, DamageKind::Physical);
        }
    }

    #[test]
    fn test_damage_output_crit_multiplies() {
        let mut weapon = make_weapon(GoverningStat::Strength);
        // Above any possible shaved roll, so every hit crits.
        weapon.spec.crit_chance = 200.0;
        weapon.spec.crit_bonus = 2.0;
        let stats = make_stats();
        let mut rng = rand::thread_rng();
        let out = weapon.damage_output(Some(&stats), &mut rng);
        assert!(out.was_crit);
        assert_eq!(out.amount, 36);
    }
}
