//! Core identifiers shared by the scaling, progression and item modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item class, each with its own max level, XP curve and stat table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    Weapon,
    Armor,
    Accessory,
}

impl ItemClass {
    /// Get all item classes
    pub fn all() -> &'static [ItemClass] {
        &[ItemClass::Weapon, ItemClass::Armor, ItemClass::Accessory]
    }
}

/// Stats that a level can grant a bonus to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    // Offense
    Damage,
    CritChance,
    AttackSpeed,
    Knockback,
    // Defense
    Defense,
    MaxLife,
    LifeRegen,
    // Utility
    MoveSpeed,
}

impl StatKind {
    /// Get all stat kinds
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Damage,
            StatKind::CritChance,
            StatKind::AttackSpeed,
            StatKind::Knockback,
            StatKind::Defense,
            StatKind::MaxLife,
            StatKind::LifeRegen,
            StatKind::MoveSpeed,
        ]
    }
}

/// Identifier of an item type, used for hard caps and blacklists
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}
