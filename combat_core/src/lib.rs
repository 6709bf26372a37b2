//! combat_core - Core combat and vitality model for turn-based creature battles
//!
//! This library provides:
//! - Creature: validated combat stats and vitality state
//! - Player / Monster: the two concrete creature variants
//! - Strike Resolution: dice-based hit resolution and damage application
//! - Healing: the player's capped self-heal
//! - Roster loading: creature definitions from TOML configuration

pub mod combat;
pub mod config;
pub mod creature;
pub mod error;
pub mod prelude;

// Re-export core types for convenience
pub use combat::{resolve_strike, resolve_strike_with_rng, HealOutcome, StrikeOutcome};
pub use config::{
    default_roster, load_roster, parse_roster, ConfigError, CreatureConfig, CreatureKind,
    SpawnedCreature,
};
pub use creature::{Combatant, Creature, Monster, Player};
pub use error::{CombatError, FailedHealing, InvalidArgument};
