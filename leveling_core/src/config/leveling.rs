//! Leveling configuration tree

use super::legacy::{self, LegacyStatFields};
use super::ConfigError;
use crate::event::EventConfig;
use crate::progression::XpCurve;
use crate::scaling::{ScalingMode, ScalingTier};
use crate::stat::StatConfig;
use crate::types::{ItemClass, StatKind};
use crate::xp::XpGainConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Settings for one item class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Highest reachable level, 0 means unbounded
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub curve: XpCurve,
    #[serde(default)]
    pub stats: BTreeMap<StatKind, StatConfig>,
}

impl ClassConfig {
    /// Unbounded class with the default curve and no stats
    pub fn empty() -> Self {
        ClassConfig {
            max_level: 0,
            curve: XpCurve::default(),
            stats: BTreeMap::new(),
        }
    }

    pub fn default_weapon() -> Self {
        let mut stats = BTreeMap::new();
        stats.insert(
            StatKind::Damage,
            StatConfig::tiered(
                ScalingMode::Cumulative,
                vec![ScalingTier::new(1, 1.0, 1), ScalingTier::new(50, 2.0, 1)],
            ),
        );
        stats.insert(StatKind::CritChance, StatConfig::legacy(0.25, 1).with_global_max(20));
        stats.insert(StatKind::AttackSpeed, StatConfig::legacy(0.5, 1).with_global_max(25));
        stats.insert(StatKind::Knockback, StatConfig::legacy(0.1, 1).with_global_max(5));
        ClassConfig {
            max_level: 100,
            curve: XpCurve::default(),
            stats,
        }
    }

    pub fn default_armor() -> Self {
        let mut stats = BTreeMap::new();
        stats.insert(StatKind::Defense, StatConfig::legacy(0.5, 1));
        stats.insert(StatKind::MaxLife, StatConfig::legacy(2.0, 1).with_global_max(200));
        ClassConfig {
            max_level: 100,
            curve: XpCurve::default(),
            stats,
        }
    }

    pub fn default_accessory() -> Self {
        let mut stats = BTreeMap::new();
        stats.insert(StatKind::MoveSpeed, StatConfig::legacy(0.5, 1).with_global_max(30));
        stats.insert(StatKind::LifeRegen, StatConfig::legacy(0.1, 1).with_global_max(10));
        ClassConfig {
            max_level: 50,
            curve: XpCurve::default(),
            stats,
        }
    }

    fn check(&self, class: ItemClass) -> Result<(), String> {
        let label = format!("{:?}", class).to_lowercase();
        self.curve.check(&label)?;
        for (stat, stat_config) in &self.stats {
            stat_config.check(&format!("{}.{:?}", label, stat).to_lowercase())?;
        }
        Ok(())
    }
}

/// Full leveling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelingConfig {
    #[serde(default = "ClassConfig::default_weapon")]
    pub weapon: ClassConfig,
    #[serde(default = "ClassConfig::default_armor")]
    pub armor: ClassConfig,
    #[serde(default = "ClassConfig::default_accessory")]
    pub accessory: ClassConfig,
    #[serde(default)]
    pub events: EventConfig,
    #[serde(default)]
    pub xp_gain: XpGainConfig,
    /// Old shared settings, consumed by the migration on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacyStatFields>,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        LevelingConfig {
            weapon: ClassConfig::default_weapon(),
            armor: ClassConfig::default_armor(),
            accessory: ClassConfig::default_accessory(),
            events: EventConfig::default(),
            xp_gain: XpGainConfig::default(),
            legacy: None,
        }
    }
}

impl LevelingConfig {
    pub fn class(&self, class: ItemClass) -> &ClassConfig {
        match class {
            ItemClass::Weapon => &self.weapon,
            ItemClass::Armor => &self.armor,
            ItemClass::Accessory => &self.accessory,
        }
    }

    pub fn class_mut(&mut self, class: ItemClass) -> &mut ClassConfig {
        match class {
            ItemClass::Weapon => &mut self.weapon,
            ItemClass::Armor => &mut self.armor,
            ItemClass::Accessory => &mut self.accessory,
        }
    }

    /// Check every class for configuration errors
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &class in ItemClass::all() {
            self.class(class).check(class).map_err(ConfigError::Invalid)?;
        }
        Ok(())
    }

    /// Migrate legacy fields, then validate
    fn finish(mut self) -> Result<Self, ConfigError> {
        legacy::migrate(&mut self);
        self.validate()?;
        Ok(self)
    }
}

/// Load the leveling configuration from a TOML file
pub fn load_config(path: &Path) -> Result<LevelingConfig, ConfigError> {
    let config: LevelingConfig = super::load_toml(path)?;
    let config = config.finish()?;
    tracing::info!(path = %path.display(), "loaded leveling config");
    Ok(config)
}

/// Load the leveling configuration from a TOML string
pub fn parse_config(content: &str) -> Result<LevelingConfig, ConfigError> {
    let config: LevelingConfig = super::parse_toml(content)?;
    config.finish()
}

/// Get the bundled leveling configuration
pub fn default_config() -> LevelingConfig {
    let toml = include_str!("../../config/leveling.toml");
    parse_config(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled leveling config invalid, using built-in defaults");
        LevelingConfig::default()
    })
}
