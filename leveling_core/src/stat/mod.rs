//! Stat configuration and resolution

mod config;
mod resolver;

pub use config::{HardCap, StatConfig};
pub use resolver::{resolve_stat, resolve_stat_int};

use crate::types::StatKind;
use std::collections::BTreeMap;

/// Resolved bonuses of one item, keyed by stat
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatBonuses {
    values: BTreeMap<StatKind, f64>,
}

impl StatBonuses {
    pub fn new() -> Self {
        StatBonuses::default()
    }

    /// Record a bonus, zero values are skipped
    pub fn insert(&mut self, stat: StatKind, value: f64) {
        if value != 0.0 {
            self.values.insert(stat, value);
        }
    }

    /// Bonus for `stat`, 0 when the item has none
    pub fn get(&self, stat: StatKind) -> f64 {
        self.values.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
