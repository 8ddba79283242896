//! Pre-split single-stat settings and their one-time migration
//!
//! Older configs had one damage/defense/crit setting shared by every item
//! class. They are copied into the per-class stat tables when a config is
//! loaded and then dropped.

use super::LevelingConfig;
use crate::stat::StatConfig;
use crate::types::{ItemClass, StatKind};
use serde::{Deserialize, Serialize};

/// Old top-level `[legacy]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyStatFields {
    pub damage_per_level: Option<f64>,
    pub damage_per_level_mult: Option<i32>,
    pub max_damage: Option<i32>,
    pub defense_per_level: Option<f64>,
    pub defense_per_level_mult: Option<i32>,
    pub max_defense: Option<i32>,
    pub crit_per_level: Option<f64>,
    pub max_crit: Option<i32>,
}

/// Targets each legacy group was aliased to
const DAMAGE_TARGETS: &[ItemClass] = &[ItemClass::Weapon, ItemClass::Accessory];
const DEFENSE_TARGETS: &[ItemClass] = &[ItemClass::Armor, ItemClass::Accessory];
const CRIT_TARGETS: &[ItemClass] = &[ItemClass::Weapon];

impl LegacyStatFields {
    pub fn is_empty(&self) -> bool {
        *self == LegacyStatFields::default()
    }
}

/// Move the `[legacy]` section into the per-class tables
///
/// A stat that already has an explicit per-class entry keeps it. Returns the
/// number of stat entries written.
pub(super) fn migrate(config: &mut LevelingConfig) -> usize {
    let Some(legacy) = config.legacy.take() else {
        return 0;
    };
    if legacy.is_empty() {
        return 0;
    }

    let mut written = 0;
    if let Some(per_level) = legacy.damage_per_level {
        let stat = legacy_stat(per_level, legacy.damage_per_level_mult, legacy.max_damage);
        written += install(config, StatKind::Damage, DAMAGE_TARGETS, &stat);
    }
    if let Some(per_level) = legacy.defense_per_level {
        let stat = legacy_stat(per_level, legacy.defense_per_level_mult, legacy.max_defense);
        written += install(config, StatKind::Defense, DEFENSE_TARGETS, &stat);
    }
    if let Some(per_level) = legacy.crit_per_level {
        let stat = legacy_stat(per_level, None, legacy.max_crit);
        written += install(config, StatKind::CritChance, CRIT_TARGETS, &stat);
    }

    tracing::info!(entries = written, "migrated legacy stat settings");
    written
}

fn legacy_stat(per_level: f64, mult: Option<i32>, max: Option<i32>) -> StatConfig {
    StatConfig::legacy(per_level, mult.unwrap_or(1)).with_global_max(max.unwrap_or(0))
}

fn install(config: &mut LevelingConfig, stat: StatKind, classes: &[ItemClass], value: &StatConfig) -> usize {
    let mut written = 0;
    for &class in classes {
        let stats = &mut config.class_mut(class).stats;
        if stats.contains_key(&stat) {
            tracing::warn!(?class, ?stat, "legacy setting ignored, per-class entry already present");
            continue;
        }
        stats.insert(stat, value.clone());
        written += 1;
    }
    written
}
