//! Event catalog - base XP multipliers and penalty toggles from config

use super::{EventCategory, EventId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configurable strength of an event's XP bonus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpMultiplierTier {
    #[default]
    None,
    Low,
    Medium,
    High,
    VeryHigh,
    Extreme,
}

impl XpMultiplierTier {
    /// Multiplier applied to XP while the event is active
    pub fn value(self) -> f64 {
        match self {
            XpMultiplierTier::None => 1.0,
            XpMultiplierTier::Low => 1.15,
            XpMultiplierTier::Medium => 1.35,
            XpMultiplierTier::High => 1.60,
            XpMultiplierTier::VeryHigh => 1.90,
            XpMultiplierTier::Extreme => 2.50,
        }
    }

    /// Tier used for a category when the config names none
    pub fn default_for(category: EventCategory) -> Self {
        match category {
            EventCategory::BossPreHardmode => XpMultiplierTier::Medium,
            EventCategory::BossHardmode => XpMultiplierTier::High,
            EventCategory::Moon => XpMultiplierTier::High,
            EventCategory::Invasion => XpMultiplierTier::Medium,
            EventCategory::Time => XpMultiplierTier::None,
            EventCategory::Weather => XpMultiplierTier::Low,
            EventCategory::Special => XpMultiplierTier::Low,
        }
    }
}

/// Which categories suffer repeat penalties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySettings {
    /// Applies to both boss categories
    #[serde(default = "enabled")]
    pub bosses: bool,
    #[serde(default = "enabled")]
    pub moons: bool,
    #[serde(default = "enabled")]
    pub invasions: bool,
    #[serde(default)]
    pub time: bool,
    #[serde(default)]
    pub weather: bool,
    #[serde(default = "enabled")]
    pub special: bool,
}

fn enabled() -> bool {
    true
}

impl Default for PenaltySettings {
    fn default() -> Self {
        PenaltySettings {
            bosses: true,
            moons: true,
            invasions: true,
            time: false,
            weather: false,
            special: true,
        }
    }
}

impl PenaltySettings {
    /// Every category penalized
    pub fn all_enabled() -> Self {
        PenaltySettings {
            bosses: true,
            moons: true,
            invasions: true,
            time: true,
            weather: true,
            special: true,
        }
    }

    /// No category penalized
    pub fn all_disabled() -> Self {
        PenaltySettings {
            bosses: false,
            moons: false,
            invasions: false,
            time: false,
            weather: false,
            special: false,
        }
    }

    pub fn is_enabled(&self, category: EventCategory) -> bool {
        match category {
            EventCategory::BossPreHardmode | EventCategory::BossHardmode => self.bosses,
            EventCategory::Moon => self.moons,
            EventCategory::Invasion => self.invasions,
            EventCategory::Time => self.time,
            EventCategory::Weather => self.weather,
            EventCategory::Special => self.special,
        }
    }
}

/// Event section of the leveling config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default)]
    pub penalties: PenaltySettings,
    /// Per-category tier, overrides the built-in default
    #[serde(default)]
    pub category_tiers: BTreeMap<EventCategory, XpMultiplierTier>,
    /// Per-event tier, overrides the category tier
    #[serde(default)]
    pub event_tiers: BTreeMap<EventId, XpMultiplierTier>,
}

/// Resolved base multiplier for every event
#[derive(Debug, Clone, PartialEq)]
pub struct EventCatalog {
    multipliers: BTreeMap<EventId, f64>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        EventCatalog::from_config(&EventConfig::default())
    }
}

impl EventCatalog {
    /// Build the catalog, event tier > category tier > built-in default
    pub fn from_config(config: &EventConfig) -> Self {
        let multipliers = EventId::all()
            .iter()
            .map(|&event| {
                let category = event.category();
                let tier = config
                    .event_tiers
                    .get(&event)
                    .or_else(|| config.category_tiers.get(&category))
                    .copied()
                    .unwrap_or_else(|| XpMultiplierTier::default_for(category));
                (event, tier.value())
            })
            .collect();
        EventCatalog { multipliers }
    }

    /// Override one event with an exact multiplier
    pub fn with_base_multiplier(mut self, event: EventId, multiplier: f64) -> Self {
        self.multipliers.insert(event, multiplier);
        self
    }

    pub fn category(&self, event: EventId) -> EventCategory {
        event.category()
    }

    /// Base XP multiplier while `event` is active
    pub fn base_multiplier(&self, event: EventId) -> f64 {
        self.multipliers.get(&event).copied().unwrap_or(1.0)
    }
}
