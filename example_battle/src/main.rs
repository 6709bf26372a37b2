//! Example Battle - a fixed demonstration fight driving combat_core
//!
//! This demo shows:
//! - Spawning the roster from TOML configuration
//! - Strikes in both directions between a player and a monster
//! - Healing the player back to full health
//! - Every error path, caught and reported rather than propagated

use combat_core::prelude::*;
use combat_core::ConfigError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), ConfigError> {
    let mut rng = ChaCha8Rng::from_entropy();
    let roster = default_roster()?;

    let mut player_slot = roster["player"].spawn()?;
    let Some(player) = player_slot.as_player_mut() else {
        unreachable!("roster entry 'player' has kind = player");
    };
    let mut wolf = roster["wolf"].spawn()?;
    let mut ogre = roster["ogre"].spawn()?;

    let mut strike_log = Vec::new();

    // The wolf opens, then the player answers.
    let outcome = wolf.creature().hit_with_rng(player.creature_mut(), &mut rng)?;
    println!("wolf -> player: {}", outcome.summary());
    strike_log.push(outcome);

    let outcome = player.creature().hit_with_rng(wolf.creature_mut(), &mut rng)?;
    println!("player -> wolf: {}", outcome.summary());
    strike_log.push(outcome);

    // Heal back up before facing the ogre.
    while player.creature().health() != player.creature().max_health() {
        let heal = player.heal()?;
        println!("player: {}", heal.summary());
    }

    let outcome = ogre.creature().hit_with_rng(player.creature_mut(), &mut rng)?;
    println!("ogre -> player: {}", outcome.summary());
    if player.creature().is_dead() {
        println!("player died");
    }
    strike_log.push(outcome);

    // A creature that fails validation never comes into existence.
    match Monster::new(35, 35, -5, 100, 50) {
        Ok(_) => println!("unexpected: invalid monster was constructed"),
        Err(err) => println!("spawn rejected: {err}"),
    }

    // Striking from a dead creature is rejected without touching the target.
    if player.creature().is_dead() {
        match player.creature().hit(ogre.creature_mut()) {
            Ok(outcome) => println!("player -> ogre: {}", outcome.summary()),
            Err(err) => println!("attack rejected: {err}"),
        }
    }

    // Healing fails once the cap is spent or the player is dead.
    loop {
        match player.heal() {
            Ok(heal) => println!("player: {}", heal.summary()),
            Err(err) => {
                println!("heal rejected: {err}");
                break;
            }
        }
    }

    println!(
        "strike log: {}",
        serde_json::to_string_pretty(&strike_log).unwrap_or_default()
    );

    Ok(())
}
