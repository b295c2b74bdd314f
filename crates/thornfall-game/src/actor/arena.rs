//! Arena — the id-keyed roster of live combatants
//!
//! The arena is the single place damage events enter the model. Delivery
//! is atomic per event: mitigation, pool mutation, and the death check run
//! to completion before anything else observes the target, and a killing
//! blow credits the source's progression in the same delivery.

use std::collections::HashMap;

use rand::Rng;
use thornfall_core::EntityId;

use super::{Combatant, CombatantKind};
use crate::combat::damage::DamageEvent;
use crate::combat::weapon::DamageOutput;
use crate::progression::LevelTable;

/// Owns every live combatant and routes damage between them
pub struct Arena {
    combatants: HashMap<EntityId, Combatant>,
    level_table: LevelTable,
}

impl Arena {
    /// Create an empty arena with the given level requirement table
    pub fn new(level_table: LevelTable) -> Self {
        Self {
            combatants: HashMap::new(),
            level_table,
        }
    }

    /// The level requirement table XP awards resolve against
    pub fn level_table(&self) -> &LevelTable {
        &self.level_table
    }

    /// Add a combatant, returning its handle
    pub fn insert(&mut self, combatant: Combatant) -> EntityId {
        let id = combatant.id();
        self.combatants.insert(id, combatant);
        id
    }

    /// Remove a combatant (host despawn), returning it if present
    pub fn remove(&mut self, id: EntityId) -> Option<Combatant> {
        self.combatants.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        self.combatants.get_mut(&id)
    }

    /// Number of combatants in the roster
    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Iterate over every combatant
    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.values()
    }

    /// Deliver one damage event to a target.
    ///
    /// Returns false if the target is unknown. If the event kills an
    /// enemy, the source (when it names a live combatant) is awarded the
    /// enemy's XP worth before this call returns.
    pub fn deliver(&mut self, target: EntityId, event: DamageEvent) -> bool {
        let Some(combatant) = self.combatants.get_mut(&target) else {
            return false;
        };

        let was_dead = combatant.is_dead();
        combatant.affect_health(event.magnitude, event.kind);
        let died = !was_dead && combatant.is_dead();
        let xp_worth = match combatant.kind() {
            CombatantKind::Enemy { xp_worth } => *xp_worth,
            CombatantKind::Player => 0,
        };

        if died && xp_worth > 0 {
            if let Some(source) = event.source {
                if let Some(killer) = self.combatants.get_mut(&source) {
                    killer.affect_xp(xp_worth, &self.level_table);
                }
            }
        }
        true
    }

    /// Resolve a weapon hit from attacker to target.
    ///
    /// Enforces the damage window: nothing happens unless the attacker's
    /// weapon is in its `Active` phase. Returns what was rolled.
    pub fn strike(
        &mut self,
        attacker: EntityId,
        target: EntityId,
        rng: &mut impl Rng,
    ) -> Option<DamageOutput> {
        let attacker_ref = self.combatants.get(&attacker)?;
        let weapon = attacker_ref.equipment().weapon()?;
        if !weapon.can_damage() {
            return None;
        }
        let output = attacker_ref.damage_output(rng)?;

        self.deliver(
            target,
            DamageEvent::from_source(output.amount, output.kind, attacker),
        );
        Some(output)
    }

    /// Host tick fan-out: advances every combatant's polled timers
    pub fn tick(&mut self, delta: f32) {
        for combatant in self.combatants.values_mut() {
            combatant.tick(delta);
        }
    }
}
