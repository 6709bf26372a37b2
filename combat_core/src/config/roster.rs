//! Creature roster loading

use super::ConfigError;
use crate::creature::{Monster, Player};
use crate::error::CombatError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Which creature variant a roster entry spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    Player,
    Monster,
}

/// One creature definition as written in TOML
///
/// Values are unvalidated here; validation happens in the creature
/// constructors when the entry is spawned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureConfig {
    /// Unique roster name
    pub name: String,
    pub kind: CreatureKind,
    pub attack: i32,
    pub protection: i32,
    pub health: i32,
    pub min_damage: i32,
    pub max_damage: i32,
}

impl CreatureConfig {
    /// Build the configured creature, surfacing any invalid value
    pub fn spawn(&self) -> Result<SpawnedCreature, CombatError> {
        let spawned = match self.kind {
            CreatureKind::Player => SpawnedCreature::Player(Player::new(
                self.attack,
                self.protection,
                self.health,
                self.min_damage,
                self.max_damage,
            )?),
            CreatureKind::Monster => SpawnedCreature::Monster(Monster::new(
                self.attack,
                self.protection,
                self.health,
                self.min_damage,
                self.max_damage,
            )?),
        };
        Ok(spawned)
    }
}

/// A roster entry brought to life
#[derive(Debug, Clone)]
pub enum SpawnedCreature {
    Player(Player),
    Monster(Monster),
}

impl SpawnedCreature {
    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            SpawnedCreature::Player(player) => Some(player),
            SpawnedCreature::Monster(_) => None,
        }
    }
}

impl crate::creature::Combatant for SpawnedCreature {
    fn creature(&self) -> &crate::creature::Creature {
        match self {
            SpawnedCreature::Player(player) => player.creature(),
            SpawnedCreature::Monster(monster) => monster.creature(),
        }
    }

    fn creature_mut(&mut self) -> &mut crate::creature::Creature {
        match self {
            SpawnedCreature::Player(player) => player.creature_mut(),
            SpawnedCreature::Monster(monster) => monster.creature_mut(),
        }
    }
}

/// Container for roster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(rename = "creatures")]
    pub creatures: Vec<CreatureConfig>,
}

/// Load a creature roster from a TOML file
pub fn load_roster(path: &Path) -> Result<HashMap<String, CreatureConfig>, ConfigError> {
    let config: RosterConfig = super::load_toml(path)?;
    Ok(index_by_name(config))
}

/// Load a creature roster from a TOML string
pub fn parse_roster(content: &str) -> Result<HashMap<String, CreatureConfig>, ConfigError> {
    let config: RosterConfig = super::parse_toml(content)?;
    Ok(index_by_name(config))
}

/// Get the built-in demonstration roster
pub fn default_roster() -> Result<HashMap<String, CreatureConfig>, ConfigError> {
    let toml = include_str!("../../config/creatures.toml");
    parse_roster(toml)
}

fn index_by_name(config: RosterConfig) -> HashMap<String, CreatureConfig> {
    let mut map = HashMap::new();
    for creature in config.creatures {
        map.insert(creature.name.clone(), creature);
    }
    map
}
