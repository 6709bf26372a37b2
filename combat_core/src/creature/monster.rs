//! Monster - the plain creature variant
//!
//! Adds nothing beyond the shared record; it exists so battles can be
//! driven over [`Combatant`] with more than one concrete type.

use super::{Combatant, Creature};
use crate::error::CombatError;
use serde::Serialize;

/// The monster variant: a creature with no extra capability
#[derive(Debug, Clone, Serialize)]
pub struct Monster {
    creature: Creature,
}

impl Monster {
    pub fn new(
        attack: i32,
        protection: i32,
        health: i32,
        min_damage: i32,
        max_damage: i32,
    ) -> Result<Self, CombatError> {
        Ok(Monster {
            creature: Creature::new(attack, protection, health, min_damage, max_damage)?,
        })
    }
}

impl Combatant for Monster {
    fn creature(&self) -> &Creature {
        &self.creature
    }

    fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::StrikeOutcome;
    use crate::creature::Player;

    #[test]
    fn test_monster_validates_like_creature() {
        assert!(Monster::new(20, 5, 20, 50, 70).is_ok());
        assert!(Monster::new(35, 35, -5, 100, 50).is_err());
    }

    #[test]
    fn test_hit_dispatches_across_variants() {
        let monster = Monster::new(30, 5, 20, 10, 10).unwrap();
        let mut player = Player::new(15, 30, 100, 20, 50).unwrap();

        let target: &mut dyn Combatant = &mut player;
        let outcome = monster.hit(target).unwrap();
        match outcome {
            StrikeOutcome::Hit { damage, .. } => {
                assert_eq!(damage, 10);
                assert_eq!(player.creature().health(), 90);
            }
            StrikeOutcome::Miss => assert_eq!(player.creature().health(), 100),
        }
    }
}
