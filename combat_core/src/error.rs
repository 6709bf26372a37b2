//! Error taxonomy for the combat core
//!
//! Three kinds of failure, all synchronous and all rejected before any
//! state change: bad numeric input, an attack from a dead creature, and
//! a heal that is not available. None of them is fatal to the caller.

use thiserror::Error;

/// Top-level error for every fallible combat operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatError {
    /// A numeric parameter violated its range or relational constraint
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// `hit` was invoked on an attacker that is already dead
    #[error("a dead creature cannot attack")]
    FailedAttack,
    /// `heal` was invoked on a dead player or past the heal cap
    #[error(transparent)]
    FailedHealing(#[from] FailedHealing),
}

/// Parameter validation failure raised by construction and setters
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Attack or protection outside the 1..=30 range
    #[error("attack and protection must be in the range 1 to 30, got {value}")]
    StatOutOfRange { value: i32 },
    /// Health or max health below zero
    #[error("health must be at least 0, got {value}")]
    HealthBelowMinimum { value: i32 },
    /// Minimum damage below 1, or maximum damage below the minimum
    #[error("minimum damage must be at least 1 and maximum damage must not be less than the minimum, got {min} to {max}")]
    InvalidDamageRange { min: i32, max: i32 },
}

/// Reason a heal was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedHealing {
    #[error("a dead player cannot heal")]
    DeadPlayer,
    #[error("the player has already healed the maximum number of times")]
    MaxHealsReached,
}
