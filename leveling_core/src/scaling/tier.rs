//! Scaling tier and mode definitions

use serde::{Deserialize, Serialize};

/// How the tiers of a stat combine into a single value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingMode {
    /// Flat `level * per_level * per_level_mult`, tiers ignored
    #[default]
    Legacy,
    /// Each tier contributes for the levels inside its range
    Cumulative,
    /// Highest reached tier re-bases the whole level
    CurrentTierOnly,
    /// Same combination rule as `Cumulative`
    AccumulativePerTier,
}

/// A level-range-scoped growth rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingTier {
    /// First level this tier applies to
    pub start_level: u32,
    /// Increment per level inside this tier
    pub per_level: f64,
    /// Integer multiplier applied to the increment
    #[serde(default = "default_per_level_mult")]
    pub per_level_mult: i32,
}

fn default_per_level_mult() -> i32 {
    1
}

impl ScalingTier {
    pub fn new(start_level: u32, per_level: f64, per_level_mult: i32) -> Self {
        ScalingTier {
            start_level,
            per_level,
            per_level_mult,
        }
    }

    /// Value gained per level while this tier is active
    pub fn rate(&self) -> f64 {
        self.per_level * self.per_level_mult as f64
    }
}

/// Return the start levels that appear more than once in `tiers`
///
/// Duplicates are tolerated by the calculator (last one wins), this is only
/// used to report them when a config is loaded.
pub fn duplicate_start_levels(tiers: &[ScalingTier]) -> Vec<u32> {
    let mut starts: Vec<u32> = tiers.iter().map(|t| t.start_level).collect();
    starts.sort_unstable();
    let mut dups: Vec<u32> = starts
        .windows(2)
        .filter(|w| w[0] == w[1])
        .map(|w| w[0])
        .collect();
    dups.dedup();
    dups
}
