//! Strike resolution - resolve one attacker-vs-target exchange

use super::outcome::StrikeOutcome;
use crate::creature::{Creature, MIN_HEALTH};
use crate::error::CombatError;
use rand::Rng;

/// Number of faces on the hit die
const DICE_SIDES: i32 = 6;
/// Smallest roll that counts as a successful strike
const MIN_WINNING_ROLL: i32 = 5;

/// Resolve a strike from attacker to target (thread-local RNG)
///
/// The resolution rules:
/// 1. A dead attacker cannot strike; nothing is rolled.
/// 2. The attack modifier `attack - protection + 1` grants that many
///    d6 rolls, minimum one; a roll of 5 or 6 lands the strike and
///    stops rolling.
/// 3. A landed strike deals a uniform draw from the attacker's damage
///    range, applied through the target's health setter with a floor
///    of zero, which also updates the target's death flag.
/// 4. A missed strike leaves the target untouched.
pub fn resolve_strike(
    attacker: &Creature,
    target: &mut Creature,
) -> Result<StrikeOutcome, CombatError> {
    resolve_strike_with_rng(attacker, target, &mut rand::thread_rng())
}

/// Resolve a strike with a provided RNG (for deterministic testing)
pub fn resolve_strike_with_rng(
    attacker: &Creature,
    target: &mut Creature,
    rng: &mut impl Rng,
) -> Result<StrikeOutcome, CombatError> {
    if attacker.is_dead() {
        return Err(CombatError::FailedAttack);
    }

    let mut attack_modifier = attacker.attack() - target.protection() + 1;
    let mut strike_landed = false;

    // At least one roll even when the modifier starts at or below zero
    loop {
        let roll = rng.gen_range(1..=DICE_SIDES);
        if roll >= MIN_WINNING_ROLL {
            strike_landed = true;
        }
        attack_modifier -= 1;
        if strike_landed || attack_modifier <= 0 {
            break;
        }
    }

    if !strike_landed {
        return Ok(StrikeOutcome::Miss);
    }

    let damage = rng.gen_range(attacker.min_damage()..=attacker.max_damage());
    let new_health = (target.health() - damage).max(MIN_HEALTH);
    target.set_health(new_health)?;

    Ok(StrikeOutcome::Hit {
        damage,
        target_died: target.is_dead(),
    })
}
