//! Player - a creature with a capped self-heal

use super::{Combatant, Creature, MIN_HEALTH};
use crate::combat::HealOutcome;
use crate::error::{CombatError, FailedHealing};
use serde::Serialize;

/// Heal-count ceiling the counter is checked against before each heal
///
/// The check runs against the count before it is incremented, so a
/// player gets five successful heals in total, not four.
pub const MAX_HEAL_USES: u32 = 4;

/// Fraction of max health restored by a single heal
const HEALING_MODIFIER: f64 = 0.3;

/// The player variant: a creature plus healing uses
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    creature: Creature,
    heals_used: u32,
}

impl Player {
    pub fn new(
        attack: i32,
        protection: i32,
        health: i32,
        min_damage: i32,
        max_damage: i32,
    ) -> Result<Self, CombatError> {
        Ok(Player {
            creature: Creature::new(attack, protection, health, min_damage, max_damage)?,
            heals_used: 0,
        })
    }

    /// Restore `floor(0.3 × max_health)` health, clamped to max health
    ///
    /// Fails with [`FailedHealing::DeadPlayer`] at zero health and with
    /// [`FailedHealing::MaxHealsReached`] once the use cap is spent; in
    /// both cases nothing changes.
    pub fn heal(&mut self) -> Result<HealOutcome, CombatError> {
        if self.creature.health() == MIN_HEALTH {
            return Err(FailedHealing::DeadPlayer.into());
        }
        if self.heals_used > MAX_HEAL_USES {
            return Err(FailedHealing::MaxHealsReached.into());
        }

        let amount = (HEALING_MODIFIER * self.creature.max_health() as f64) as i32;
        let health_before = self.creature.health();
        let health_after = (health_before + amount).min(self.creature.max_health());
        self.creature.set_health(health_after)?;
        self.heals_used += 1;

        Ok(HealOutcome {
            amount,
            health_before,
            health_after,
            // Goes to -1 on the final permitted heal
            remaining_heals: MAX_HEAL_USES as i32 - self.heals_used as i32,
        })
    }

    /// Number of heals already performed
    pub fn heals_used(&self) -> u32 {
        self.heals_used
    }
}

impl Combatant for Player {
    fn creature(&self) -> &Creature {
        &self.creature
    }

    fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }
}
