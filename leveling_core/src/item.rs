//! LeveledItem - an item instance carrying its own ledger

use crate::config::ClassConfig;
use crate::progression::{LevelUpOutcome, ProgressionLedger};
use crate::stat::{resolve_stat, StatBonuses};
use crate::types::{ItemClass, ItemId, StatKind};
use serde::{Deserialize, Serialize};

/// An item instance that levels up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveledItem {
    /// Item type, used for caps and blacklists
    pub id: ItemId,
    pub class: ItemClass,
    #[serde(default)]
    pub ledger: ProgressionLedger,
}

impl LeveledItem {
    /// New item at level 0
    pub fn new(id: impl Into<ItemId>, class: ItemClass) -> Self {
        LeveledItem {
            id: id.into(),
            class,
            ledger: ProgressionLedger::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.ledger.level()
    }

    /// Feed experience into the ledger using the class's curve and max level
    pub fn gain_experience(&mut self, amount: i64, config: &ClassConfig) -> LevelUpOutcome {
        let outcome = self.ledger.add_experience(amount, config.max_level, &config.curve);
        if outcome.leveled_up {
            tracing::info!(
                item = %self.id,
                class = ?self.class,
                level = outcome.new_level,
                gained = outcome.levels_gained,
                "item leveled up"
            );
        }
        outcome
    }

    /// Capped bonus for one stat, 0 when the class has no config for it
    pub fn stat_bonus(&self, stat: StatKind, config: &ClassConfig) -> f64 {
        config
            .stats
            .get(&stat)
            .map(|stat_config| resolve_stat(&self.id, self.level(), stat_config, true))
            .unwrap_or(0.0)
    }

    /// Every non-zero bonus of this item at its current level
    pub fn bonuses(&self, config: &ClassConfig) -> StatBonuses {
        let mut bonuses = StatBonuses::new();
        for (&stat, stat_config) in &config.stats {
            bonuses.insert(stat, resolve_stat(&self.id, self.level(), stat_config, true));
        }
        bonuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::XpCurve;
    use crate::stat::StatConfig;

    fn weapon_config() -> ClassConfig {
        let mut config = ClassConfig {
            max_level: 10,
            curve: XpCurve::new(100.0, 0.0, 0.0, 1.0),
            stats: Default::default(),
        };
        config.stats.insert(StatKind::Damage, StatConfig::legacy(2.0, 1));
        config
            .stats
            .insert(StatKind::CritChance, StatConfig::legacy(0.5, 1).with_global_max(3));
        config
    }

    #[test]
    fn test_new_item_has_no_bonus() {
        let item = LeveledItem::new("night_edge", ItemClass::Weapon);
        assert!(item.bonuses(&weapon_config()).is_empty());
    }

    #[test]
    fn test_gain_experience_and_bonuses() {
        let config = weapon_config();
        let mut item = LeveledItem::new("night_edge", ItemClass::Weapon);
        let outcome = item.gain_experience(850, &config);
        assert!(outcome.leveled_up);
        assert_eq!(item.level(), 8);

        let bonuses = item.bonuses(&config);
        assert!((bonuses.get(StatKind::Damage) - 16.0).abs() < f64::EPSILON);
        assert!((bonuses.get(StatKind::CritChance) - 3.0).abs() < f64::EPSILON);
        assert_eq!(item.stat_bonus(StatKind::Defense, &config), 0.0);
    }

    #[test]
    fn test_class_max_level() {
        let config = weapon_config();
        let mut item = LeveledItem::new("night_edge", ItemClass::Weapon);
        item.gain_experience(1_000_000, &config);
        assert_eq!(item.level(), 10);
        assert!(!item.gain_experience(100, &config).leveled_up);
    }
}
