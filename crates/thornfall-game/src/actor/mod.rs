//! Combatants: composed stats, defense, equipment, and progression
//!
//! A [`Combatant`] is the unit everything else in the crate serves. It is
//! built by composition — there is no actor inheritance — and player and
//! enemy behavior differ only through [`CombatantKind`]. Presentation
//! side effects (sounds, particles, montage stops, collision flips,
//! despawns) leave the core through [`CombatHooks`], injected at
//! construction with a no-op default.

pub mod arena;

pub use arena::Arena;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thornfall_core::{Cooldown, EntityId};

use crate::combat::damage::{DamageEvent, DamageKind};
use crate::combat::defense::DefenseProfile;
use crate::combat::equipment::EquipmentSet;
use crate::combat::inventory::Inventory;
use crate::combat::item::{ArmorPiece, ArmorSlot, ConsumableEffect, Item, ItemCategory};
use crate::combat::spell::Spell;
use crate::combat::stats::{Attribute, StatBlock};
use crate::combat::weapon::{DamageOutput, Weapon, WeaponSpec, WeaponState};
use crate::progression::{LevelTable, LevelUpPool, ProgressionTrack};

/// Seconds a defeated enemy lingers before the host despawns it
const ENEMY_DESPAWN_SECONDS: f32 = 3.0;

/// Host-side presentation and lifecycle callbacks.
///
/// Every method is fire-and-forget with a no-op default; the core never
/// waits on a hook.
pub trait CombatHooks {
    /// The combatant's death transition ran
    fn on_death(&mut self, _id: EntityId) {}

    /// Hostile collision response should be disabled for this actor
    fn on_hostile_collision_disabled(&mut self, _id: EntityId) {}

    /// The host should remove this actor after the given delay
    fn on_despawn_scheduled(&mut self, _id: EntityId, _seconds: f32) {}

    /// A level was gained (sound / particle cue)
    fn on_level_up(&mut self, _id: EntityId, _new_level: u32) {}

    /// An attack began on the given combo slot
    fn on_attack_started(&mut self, _id: EntityId, _slot: usize, _play_rate: f32) {}

    /// A dodge interrupted the running attack (stop the montage)
    fn on_attack_interrupted(&mut self, _id: EntityId) {}

    /// A spell was cast
    fn on_spell_cast(&mut self, _id: EntityId, _spell: &str) {}

    /// A consumable was used
    fn on_consumed(&mut self, _id: EntityId, _item: &str) {}
}

/// The default hooks: every callback is a no-op
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl CombatHooks for NoopHooks {}

/// Player or enemy specialization of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatantKind {
    Player,
    /// Defeating this combatant awards `xp_worth` to its killer
    Enemy { xp_worth: i32 },
}

impl CombatantKind {
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, Self::Enemy { .. })
    }
}

/// Tuning for the stamina economy.
///
/// Drain and regen are per-second rates applied from the host tick; the
/// two cooldown durations cover the "ran dry" and "still had some"
/// recovery cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaminaConfig {
    pub sprint_drain_per_sec: f32,
    pub regen_per_sec: f32,
    pub dodge_cost: f32,
    pub nonempty_cooldown_secs: f32,
    pub empty_cooldown_secs: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            sprint_drain_per_sec: 6.0,
            regen_per_sec: 6.0,
            dodge_cost: 20.0,
            nonempty_cooldown_secs: 1.0,
            empty_cooldown_secs: 3.0,
        }
    }
}

/// Startup equipment applied when a combatant is built
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub weapon: Option<WeaponSpec>,
    pub armor: Vec<ArmorPiece>,
}

/// One fighting actor: stat block, defense, equipment, inventory, and
/// progression, plus the terminal dead flag.
///
/// All resource mutation goes through the `affect_*` operations; once the
/// death transition has run, every affect becomes a no-op.
pub struct Combatant {
    id: EntityId,
    name: String,
    kind: CombatantKind,
    stats: StatBlock,
    defense: DefenseProfile,
    equipment: EquipmentSet,
    inventory: Inventory,
    progression: ProgressionTrack,
    stamina_config: StaminaConfig,
    stamina_cooldown: Cooldown,
    sprinting: bool,
    dead: bool,
    current_target: Option<EntityId>,
    hooks: Box<dyn CombatHooks>,
}

impl Combatant {
    /// Create a living combatant with empty equipment and no-op hooks
    pub fn new(name: impl Into<String>, kind: CombatantKind, stats: StatBlock) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            kind,
            stats,
            defense: DefenseProfile::new(),
            equipment: EquipmentSet::new(),
            inventory: Inventory::new(),
            progression: ProgressionTrack::new(),
            stamina_config: StaminaConfig::default(),
            stamina_cooldown: Cooldown::ready(),
            sprinting: false,
            dead: false,
            current_target: None,
            hooks: Box::new(NoopHooks),
        }
    }

    /// Replace the presentation hooks
    pub fn with_hooks(mut self, hooks: Box<dyn CombatHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Override the stamina tuning
    pub fn with_stamina_config(mut self, config: StaminaConfig) -> Self {
        self.stamina_config = config;
        self
    }

    /// Equip startup gear
    pub fn with_loadout(mut self, loadout: Loadout) -> Self {
        if let Some(spec) = loadout.weapon {
            self.set_weapon(spec);
        }
        for piece in loadout.armor {
            self.equip_armor(piece);
        }
        self
    }

    // --- getters -----------------------------------------------------

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &CombatantKind {
        &self.kind
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn defense(&self) -> &DefenseProfile {
        &self.defense
    }

    pub fn equipment(&self) -> &EquipmentSet {
        &self.equipment
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable inventory access (loot pickup, shop transactions)
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn progression(&self) -> &ProgressionTrack {
        &self.progression
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Whether an attack sequence is in progress
    pub fn is_attacking(&self) -> bool {
        self.equipment.weapon().is_some_and(Weapon::is_attacking)
    }

    /// Non-owning handle of the current lock-on target
    pub fn current_target(&self) -> Option<EntityId> {
        self.current_target
    }

    /// Set or clear the current lock-on target
    pub fn set_current_target(&mut self, target: Option<EntityId>) {
        self.current_target = target;
    }

    // --- resource affects --------------------------------------------

    /// Apply one incoming effect of the given kind and magnitude.
    ///
    /// Heal adds and clamps to the ceiling. Every other kind runs through
    /// mitigation; a fully absorbed hit changes nothing. A lethal hit
    /// runs the death transition exactly once. No-op when already dead.
    pub fn affect_health(&mut self, magnitude: i32, kind: DamageKind) {
        if self.dead {
            return;
        }
        if kind == DamageKind::Heal {
            self.stats.affect_health(magnitude);
            return;
        }
        let applied = self.defense.mitigate(magnitude, kind);
        if applied < 0 {
            self.stats.affect_health(applied);
            self.check_dead();
        }
    }

    /// Additive stamina change, clamped. No mitigation, no-op when dead.
    pub fn affect_stamina(&mut self, delta: f32) {
        if self.dead {
            return;
        }
        self.stats.affect_stamina(delta);
    }

    /// Additive mana change, clamped. No mitigation, no-op when dead.
    pub fn affect_mana(&mut self, delta: i32) {
        if self.dead {
            return;
        }
        self.stats.affect_mana(delta);
    }

    /// Bank XP and resolve level-ups. Returns the levels gained.
    pub fn affect_xp(&mut self, delta: i32, table: &LevelTable) -> Vec<u32> {
        if self.dead {
            return Vec::new();
        }
        let gained = self.progression.affect_xp(delta, table);
        for &level in &gained {
            tracing::info!("{} reached level {}", self.name, level);
            self.hooks.on_level_up(self.id, level);
        }
        gained
    }

    fn check_dead(&mut self) {
        if self.dead || self.stats.health() > 0 {
            return;
        }
        self.dead = true;
        tracing::info!("{} died", self.name);
        self.hooks.on_hostile_collision_disabled(self.id);
        self.equipment.teardown(&mut self.defense);
        self.hooks.on_death(self.id);
        if self.kind.is_enemy() {
            self.hooks.on_despawn_scheduled(self.id, ENEMY_DESPAWN_SECONDS);
        }
    }

    // --- equipment ---------------------------------------------------

    /// Equip an armor piece into its configured slot, swapping out (and
    /// destroying) any occupant. No-op when dead.
    pub fn equip_armor(&mut self, piece: ArmorPiece) {
        if self.dead {
            return;
        }
        self.equipment.equip_armor(piece, &mut self.defense);
    }

    /// Remove and destroy the armor in a slot. No-op on an empty slot or
    /// when dead.
    pub fn unequip_armor(&mut self, slot: ArmorSlot) {
        if self.dead {
            return;
        }
        self.equipment.unequip_armor(slot, &mut self.defense);
    }

    /// Equip a weapon, destroying any previous one. No-op when dead.
    pub fn set_weapon(&mut self, spec: WeaponSpec) {
        if self.dead {
            return;
        }
        self.equipment.set_weapon(Weapon::new(spec));
    }

    /// Host-driven animation-phase notification for the equipped weapon
    pub fn set_weapon_state(&mut self, state: WeaponState) {
        if let Some(weapon) = self.equipment.weapon_mut() {
            weapon.set_state(state);
        }
    }

    // --- combat inputs -----------------------------------------------

    /// Handle an attack input. Returns the combo slot that started, or
    /// `None` if the input was dropped (no weapon, dead, or outside the
    /// cancel window).
    pub fn press_attack(&mut self) -> Option<usize> {
        if self.dead {
            return None;
        }
        let weapon = self.equipment.weapon_mut()?;
        let slot = weapon.press_attack()?;
        let profile = weapon.attack_profile(slot);
        self.hooks.on_attack_started(self.id, slot, profile.play_rate);
        Some(slot)
    }

    /// Handle a dodge input.
    ///
    /// Dodging needs stamina; mid-attack it is only legal in a
    /// dodge-cancel window, where it resets the weapon to idle. Costs
    /// stamina and starts the stamina cooldown.
    pub fn press_dodge(&mut self) -> bool {
        if self.dead || self.stats.stamina() <= 0.0 {
            return false;
        }
        if let Some(weapon) = self.equipment.weapon_mut() {
            if weapon.is_attacking() {
                if !weapon.can_dodge_cancel() {
                    return false;
                }
                weapon.interrupt();
                self.hooks.on_attack_interrupted(self.id);
            }
        }
        self.stats.affect_stamina(-self.stamina_config.dodge_cost);
        self.restart_stamina_cooldown();
        true
    }

    /// Start sprinting. Fails when dead, drained, or mid-attack.
    pub fn begin_sprint(&mut self) -> bool {
        if self.dead || self.sprinting || self.stats.stamina() <= 0.0 || self.is_attacking() {
            return false;
        }
        self.sprinting = true;
        self.stamina_cooldown.clear();
        true
    }

    /// Stop sprinting and start the stamina cooldown. Safe to call twice.
    pub fn stop_sprint(&mut self) {
        if self.sprinting {
            self.sprinting = false;
            self.restart_stamina_cooldown();
        }
    }

    fn restart_stamina_cooldown(&mut self) {
        let seconds = if self.stats.stamina() <= 0.0 {
            self.stamina_config.empty_cooldown_secs
        } else {
            self.stamina_config.nonempty_cooldown_secs
        };
        self.stamina_cooldown.start(seconds);
    }

    /// Resolve one hit from the equipped weapon against this combatant's
    /// own stats. Callers must hold the `can_damage` guard.
    pub fn damage_output(&self, rng: &mut impl Rng) -> Option<DamageOutput> {
        self.equipment
            .weapon()
            .map(|weapon| weapon.damage_output(Some(&self.stats), rng))
    }

    /// Cast a spell, paying its mana cost. Returns the produced effect,
    /// or `None` when dead or out of mana.
    pub fn cast_spell(&mut self, spell: &Spell) -> Option<DamageEvent> {
        if self.dead {
            return None;
        }
        if !self.stats.use_mana(spell.mana_cost) {
            return None;
        }
        self.hooks.on_spell_cast(self.id, &spell.name);
        Some(DamageEvent::from_source(
            spell.effectiveness,
            spell.kind,
            self.id,
        ))
    }

    /// Use the consumable at the given inventory index. One-way: the
    /// stack is decremented even if the pool was already full.
    pub fn consume(&mut self, index: usize) -> bool {
        if self.dead {
            return false;
        }
        let is_consumable = self
            .inventory
            .get(index)
            .is_some_and(|entry| entry.item.category() == ItemCategory::Consumable);
        if !is_consumable {
            return false;
        }
        let Some(Item::Consumable(consumable)) = self.inventory.remove_one(index) else {
            return false;
        };
        match consumable.effect {
            ConsumableEffect::RestoreHealth(amount) => self.affect_health(amount, DamageKind::Heal),
            ConsumableEffect::RestoreMana(amount) => self.affect_mana(amount),
            ConsumableEffect::RestoreStamina(amount) => self.affect_stamina(amount),
        }
        self.hooks.on_consumed(self.id, &consumable.descriptor.name);
        true
    }

    // --- progression spending ----------------------------------------

    /// Spend one stat point on +1 to the given attribute
    pub fn spend_stat_point(&mut self, attr: Attribute) -> bool {
        if self.dead || !self.progression.try_spend_stat_point() {
            return false;
        }
        self.stats.raise_attribute(attr, 1);
        true
    }

    /// Spend one level-up point on +50 max health or mana
    pub fn spend_level_up_point(&mut self, pool: LevelUpPool) -> bool {
        if self.dead || !self.progression.try_spend_level_up_point() {
            return false;
        }
        let bonus = ProgressionTrack::pool_bonus();
        match pool {
            LevelUpPool::Health => self.stats.set_max_health(self.stats.max_health + bonus),
            LevelUpPool::Mana => self.stats.set_max_mana(self.stats.max_mana + bonus),
        }
        true
    }

    // --- tick --------------------------------------------------------

    /// Host tick: sprint drain, stamina cooldown countdown, and regen
    /// once the cooldown has elapsed.
    pub fn tick(&mut self, delta: f32) {
        if self.dead {
            return;
        }
        if self.sprinting {
            self.stats
                .affect_stamina(-self.stamina_config.sprint_drain_per_sec * delta);
            if self.stats.stamina() <= 0.0 {
                self.stop_sprint();
            }
        }
        self.stamina_cooldown.tick(delta);
        if !self.sprinting
            && self.stamina_cooldown.is_ready()
            && self.stats.stamina() < self.stats.max_stamina
        {
            self.stats
                .affect_stamina(self.stamina_config.regen_per_sec * delta);
        }
    }
}
