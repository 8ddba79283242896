//! Per-stat scaling configuration

use crate::scaling::{duplicate_start_levels, ScalingMode, ScalingTier};
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Item-specific ceiling that overrides the global max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardCap {
    /// Maximum raw value
    pub max: i32,
    /// +1 keeps the bonus, -1 turns it into a penalty
    #[serde(default = "default_sign")]
    pub sign: i32,
}

fn default_sign() -> i32 {
    1
}

impl HardCap {
    pub fn new(max: i32, sign: i32) -> Self {
        HardCap { max, sign }
    }
}

/// Scaling configuration for one stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatConfig {
    #[serde(default)]
    pub mode: ScalingMode,
    #[serde(default)]
    pub tiers: Vec<ScalingTier>,
    /// Per-level increment used by `Legacy` and the fallback path
    #[serde(default)]
    pub legacy_per_level: f64,
    #[serde(default = "default_legacy_mult")]
    pub legacy_per_level_mult: i32,
    /// Global ceiling, 0 means unbounded
    #[serde(default)]
    pub global_max: i32,
    #[serde(default)]
    pub hard_caps: BTreeMap<ItemId, HardCap>,
    #[serde(default)]
    pub blacklist: BTreeSet<ItemId>,
}

fn default_legacy_mult() -> i32 {
    1
}

impl Default for StatConfig {
    fn default() -> Self {
        StatConfig {
            mode: ScalingMode::Legacy,
            tiers: Vec::new(),
            legacy_per_level: 0.0,
            legacy_per_level_mult: 1,
            global_max: 0,
            hard_caps: BTreeMap::new(),
            blacklist: BTreeSet::new(),
        }
    }
}

impl StatConfig {
    /// Create a legacy-mode config growing by `per_level` each level
    pub fn legacy(per_level: f64, per_level_mult: i32) -> Self {
        StatConfig {
            legacy_per_level: per_level,
            legacy_per_level_mult: per_level_mult,
            ..Default::default()
        }
    }

    /// Create a tiered config
    pub fn tiered(mode: ScalingMode, tiers: Vec<ScalingTier>) -> Self {
        StatConfig {
            mode,
            tiers,
            ..Default::default()
        }
    }

    pub fn with_global_max(mut self, global_max: i32) -> Self {
        self.global_max = global_max;
        self
    }

    pub fn with_hard_cap(mut self, item: impl Into<ItemId>, cap: HardCap) -> Self {
        self.hard_caps.insert(item.into(), cap);
        self
    }

    pub fn with_blacklisted(mut self, item: impl Into<ItemId>) -> Self {
        self.blacklist.insert(item.into());
        self
    }

    pub fn is_blacklisted(&self, item: &ItemId) -> bool {
        self.blacklist.contains(item)
    }

    pub fn hard_cap(&self, item: &ItemId) -> Option<&HardCap> {
        self.hard_caps.get(item)
    }

    /// Check the config for problems
    ///
    /// Returns a description of the first hard error. Duplicate tier start
    /// levels are only warned about since the calculator tolerates them.
    pub fn check(&self, label: &str) -> Result<(), String> {
        for (item, cap) in &self.hard_caps {
            if cap.sign != 1 && cap.sign != -1 {
                return Err(format!(
                    "{}: hard cap for '{}' has sign {}, expected 1 or -1",
                    label, item, cap.sign
                ));
            }
        }
        if self.global_max < 0 {
            return Err(format!("{}: global_max must be >= 0, got {}", label, self.global_max));
        }
        let dups = duplicate_start_levels(&self.tiers);
        if !dups.is_empty() {
            tracing::warn!(stat = label, start_levels = ?dups, "duplicate tier start levels, last entry wins");
        }
        Ok(())
    }
}
