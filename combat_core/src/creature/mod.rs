//! Creature - validated combat stats and vitality state
//!
//! A `Creature` owns the stats shared by both variants (attack,
//! protection, health, damage range) and is the only place those fields
//! mutate. Every constructor and setter validates before committing, so
//! a creature that exists always satisfies the stat invariants.

mod monster;
mod player;

pub use monster::Monster;
pub use player::Player;

use crate::combat::{self, StrikeOutcome};
use crate::error::{CombatError, InvalidArgument};
use rand::Rng;
use serde::Serialize;

/// Lower bound for both attack and protection
pub const MIN_ATTACK_PROTECTION: i32 = 1;
/// Upper bound for both attack and protection
pub const MAX_ATTACK_PROTECTION: i32 = 30;
/// Health floor; a creature at this value is dead
pub const MIN_HEALTH: i32 = 0;
/// Smallest permitted minimum damage
pub const MIN_DAMAGE: i32 = 1;

/// The combat record shared by every creature variant
///
/// Fields are private; reads go through getters and writes through the
/// validating setters. `is_dead` is derived from `health` and is
/// recomputed on every health mutation, never set directly.
#[derive(Debug, Clone, Serialize)]
pub struct Creature {
    attack: i32,
    protection: i32,
    max_health: i32,
    health: i32,
    is_dead: bool,
    min_damage: i32,
    max_damage: i32,
}

impl Creature {
    /// Create a creature, validating every parameter
    ///
    /// Max health is initialised to `health`. The three checks (stats,
    /// health, damage range) are independent; any one failing aborts
    /// construction, so no partially valid creature is ever observable.
    pub fn new(
        attack: i32,
        protection: i32,
        health: i32,
        min_damage: i32,
        max_damage: i32,
    ) -> Result<Self, CombatError> {
        check_attack_protection(attack)?;
        check_attack_protection(protection)?;
        check_health(health)?;
        check_damage_range(min_damage, max_damage)?;

        Ok(Creature {
            attack,
            protection,
            max_health: health,
            health,
            is_dead: health == MIN_HEALTH,
            min_damage,
            max_damage,
        })
    }

    /// Strike a target, resolving the hit with a thread-local RNG
    ///
    /// Fails with [`CombatError::FailedAttack`] if this creature is
    /// dead; see [`combat::resolve_strike`] for the resolution rules.
    pub fn hit(&self, target: &mut Creature) -> Result<StrikeOutcome, CombatError> {
        combat::resolve_strike(self, target)
    }

    /// Strike a target with a provided RNG (for deterministic testing)
    pub fn hit_with_rng(
        &self,
        target: &mut Creature,
        rng: &mut impl Rng,
    ) -> Result<StrikeOutcome, CombatError> {
        combat::resolve_strike_with_rng(self, target, rng)
    }

    pub fn set_attack(&mut self, attack: i32) -> Result<(), CombatError> {
        check_attack_protection(attack)?;
        self.attack = attack;
        Ok(())
    }

    pub fn set_protection(&mut self, protection: i32) -> Result<(), CombatError> {
        check_attack_protection(protection)?;
        self.protection = protection;
        Ok(())
    }

    /// Raise or lower the health cap
    ///
    /// Does not clamp the current health, so lowering the cap below the
    /// current value leaves `health > max_health` until the next
    /// `set_health` call.
    pub fn set_max_health(&mut self, max_health: i32) -> Result<(), CombatError> {
        check_health(max_health)?;
        self.max_health = max_health;
        Ok(())
    }

    /// Set the current health and recompute the death flag
    ///
    /// The single mutation point for vitality: both external callers and
    /// strike resolution apply damage through here.
    pub fn set_health(&mut self, health: i32) -> Result<(), CombatError> {
        check_health(health)?;
        self.health = health;
        self.is_dead = health == MIN_HEALTH;
        Ok(())
    }

    /// Set both ends of the damage range together
    pub fn set_min_and_max_damage(
        &mut self,
        min_damage: i32,
        max_damage: i32,
    ) -> Result<(), CombatError> {
        check_damage_range(min_damage, max_damage)?;
        self.min_damage = min_damage;
        self.max_damage = max_damage;
        Ok(())
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn protection(&self) -> i32 {
        self.protection
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn min_damage(&self) -> i32 {
        self.min_damage
    }

    pub fn max_damage(&self) -> i32 {
        self.max_damage
    }
}

/// Uniform access to the shared creature record across variants
///
/// Object-safe so callers can drive a battle over `&mut dyn Combatant`
/// without caring which variant they hold.
pub trait Combatant {
    fn creature(&self) -> &Creature;
    fn creature_mut(&mut self) -> &mut Creature;

    /// Strike another combatant, whatever its variant
    fn hit(&self, target: &mut dyn Combatant) -> Result<StrikeOutcome, CombatError> {
        self.creature().hit(target.creature_mut())
    }
}

impl Combatant for Creature {
    fn creature(&self) -> &Creature {
        self
    }

    fn creature_mut(&mut self) -> &mut Creature {
        self
    }
}

fn check_attack_protection(value: i32) -> Result<(), InvalidArgument> {
    if (MIN_ATTACK_PROTECTION..=MAX_ATTACK_PROTECTION).contains(&value) {
        Ok(())
    } else {
        Err(InvalidArgument::StatOutOfRange { value })
    }
}

fn check_health(value: i32) -> Result<(), InvalidArgument> {
    if value >= MIN_HEALTH {
        Ok(())
    } else {
        Err(InvalidArgument::HealthBelowMinimum { value })
    }
}

fn check_damage_range(min: i32, max: i32) -> Result<(), InvalidArgument> {
    if min >= MIN_DAMAGE && max >= min {
        Ok(())
    } else {
        Err(InvalidArgument::InvalidDamageRange { min, max })
    }
}
