//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Creatures
pub use crate::creature::{Combatant, Creature, Monster, Player};

// Combat
pub use crate::combat::{resolve_strike, resolve_strike_with_rng, HealOutcome, StrikeOutcome};

// Errors
pub use crate::error::{CombatError, FailedHealing, InvalidArgument};

// Config
pub use crate::config::{default_roster, CreatureConfig, CreatureKind, SpawnedCreature};
