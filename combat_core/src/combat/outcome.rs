//! Structured outcomes returned by combat operations
//!
//! The core never formats log lines itself; callers get these values
//! and decide how to render them. `summary()` offers a default
//! rendering for callers that just want a message.

use serde::{Deserialize, Serialize};

/// Result of one strike resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeOutcome {
    /// The strike landed and dealt damage
    Hit { damage: i32, target_died: bool },
    /// No winning roll; the target is untouched
    Miss,
}

impl StrikeOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, StrikeOutcome::Hit { .. })
    }

    /// Damage dealt, if the strike landed
    pub fn damage(&self) -> Option<i32> {
        match self {
            StrikeOutcome::Hit { damage, .. } => Some(*damage),
            StrikeOutcome::Miss => None,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        match self {
            StrikeOutcome::Hit {
                damage,
                target_died: true,
            } => format!("strike landed for {damage} damage, target died"),
            StrikeOutcome::Hit { damage, .. } => {
                format!("strike landed for {damage} damage")
            }
            StrikeOutcome::Miss => "strike missed".to_string(),
        }
    }
}

/// Result of one successful heal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealOutcome {
    /// Amount the heal attempted to restore
    pub amount: i32,
    /// Health before the heal
    pub health_before: i32,
    /// Health after the heal, clamped to max health
    pub health_after: i32,
    /// Heals left before the cap; -1 once the final one is spent
    pub remaining_heals: i32,
}

impl HealOutcome {
    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "healed {} (health {} -> {}, {} heals remaining)",
            self.amount, self.health_before, self.health_after, self.remaining_heals
        )
    }
}
