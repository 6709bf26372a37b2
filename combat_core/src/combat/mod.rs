//! Strike resolution - dice-based hit checks and damage application

mod outcome;
mod resolution;

pub use outcome::{HealOutcome, StrikeOutcome};
pub use resolution::{resolve_strike, resolve_strike_with_rng};
