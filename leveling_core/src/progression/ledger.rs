//! ProgressionLedger - per-item level and experience state

use super::XpCurve;
use serde::{Deserialize, Serialize};

/// Result of an `add_experience` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpOutcome {
    /// True when at least one level was gained in this call
    pub leveled_up: bool,
    /// Level after the call
    pub new_level: u32,
    /// Number of levels gained in this call
    pub levels_gained: u32,
}

impl LevelUpOutcome {
    fn unchanged(level: u32) -> Self {
        LevelUpOutcome {
            leveled_up: false,
            new_level: level,
            levels_gained: 0,
        }
    }
}

/// Level and experience of one item instance
///
/// Invariant: `experience < curve.required_xp(level)` after every add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionLedger {
    level: u32,
    experience: i64,
}

impl ProgressionLedger {
    /// Fresh ledger at level 0
    pub fn new() -> Self {
        ProgressionLedger::default()
    }

    /// Restore a ledger from persisted values, negative experience becomes 0
    pub fn restore(level: u32, experience: i64) -> Self {
        ProgressionLedger {
            level,
            experience: experience.max(0),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> i64 {
        self.experience
    }

    /// Whether `max_level` (0 = unbounded) has been reached
    pub fn is_max_level(&self, max_level: u32) -> bool {
        max_level > 0 && self.level >= max_level
    }

    /// Add experience and apply every level-up it pays for
    ///
    /// Non-positive amounts and XP at max level are ignored. Several levels
    /// can be gained in one call; `leveled_up` is reported once.
    pub fn add_experience(&mut self, amount: i64, max_level: u32, curve: &XpCurve) -> LevelUpOutcome {
        if amount <= 0 || self.is_max_level(max_level) {
            return LevelUpOutcome::unchanged(self.level);
        }

        self.experience = self.experience.saturating_add(amount);

        let start_level = self.level;
        let mut required = curve.required_xp(self.level);
        while self.experience >= required && !self.is_max_level(max_level) {
            let Some(next_level) = self.level.checked_add(1) else {
                break;
            };
            self.experience -= required;
            self.level = next_level;
            required = curve.required_xp(self.level);
        }

        // Top of the level range behaves like a max level
        if self.level == u32::MAX && self.experience >= required {
            self.experience = required - 1;
        }

        if self.is_max_level(max_level) && self.experience >= required {
            self.experience = required - 1;
        }

        let levels_gained = self.level - start_level;
        if levels_gained > 0 {
            tracing::debug!(
                from = start_level,
                to = self.level,
                experience = self.experience,
                "ledger leveled up"
            );
        }

        LevelUpOutcome {
            leveled_up: levels_gained > 0,
            new_level: self.level,
            levels_gained,
        }
    }

    /// Fraction of the way to the next level, in `[0, 1)`
    pub fn progress_fraction(&self, curve: &XpCurve) -> f64 {
        let required = curve.required_xp(self.level);
        (self.experience as f64 / required as f64).clamp(0.0, 1.0)
    }

    /// Experience still missing for the next level
    pub fn remaining_xp(&self, curve: &XpCurve) -> i64 {
        (curve.required_xp(self.level) - self.experience).max(0)
    }
}
