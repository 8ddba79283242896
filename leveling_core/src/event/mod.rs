//! World events - classification, repeat penalties and the combined XP multiplier
//!
//! Which events are active is decided by the host through [`EventSource`].
//! The [`EventPenaltyTracker`] turns the stream of active sets into per-event
//! repeat counters, and [`combined_multiplier`] folds the active events into
//! one XP multiplier.

mod aggregate;
mod catalog;
mod tracker;

pub use aggregate::combined_multiplier;
pub use catalog::{EventCatalog, EventConfig, PenaltySettings, XpMultiplierTier};
pub use tracker::{EventPenaltyTracker, HISTORY_CAPACITY};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Event category, drives penalty toggles and default multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    BossPreHardmode,
    BossHardmode,
    Moon,
    Invasion,
    Time,
    Weather,
    Special,
}

impl EventCategory {
    pub fn all() -> &'static [EventCategory] {
        &[
            EventCategory::BossPreHardmode,
            EventCategory::BossHardmode,
            EventCategory::Moon,
            EventCategory::Invasion,
            EventCategory::Time,
            EventCategory::Weather,
            EventCategory::Special,
        ]
    }

    pub fn is_boss(self) -> bool {
        matches!(self, EventCategory::BossPreHardmode | EventCategory::BossHardmode)
    }
}

/// A tracked world event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventId {
    // Pre-hardmode bosses
    KingSlime,
    EyeOfCthulhu,
    EaterOfWorlds,
    BrainOfCthulhu,
    QueenBee,
    Deerclops,
    Skeletron,
    WallOfFlesh,
    // Hardmode bosses
    QueenSlime,
    TheTwins,
    TheDestroyer,
    SkeletronPrime,
    Plantera,
    Golem,
    DukeFishron,
    EmpressOfLight,
    LunaticCultist,
    MoonLord,
    // Moons
    BloodMoon,
    PumpkinMoon,
    FrostMoon,
    // Invasions
    GoblinArmy,
    FrostLegion,
    PirateInvasion,
    MartianMadness,
    OldOnesArmy,
    LunarPillars,
    // Time of day
    Daytime,
    Nighttime,
    // Weather
    Rain,
    Thunderstorm,
    Sandstorm,
    WindyDay,
    // Special
    SolarEclipse,
    SlimeRain,
    Party,
    LanternNight,
    MeteorShower,
}

impl EventId {
    /// Category of this event
    pub fn category(self) -> EventCategory {
        use EventId::*;
        match self {
            KingSlime | EyeOfCthulhu | EaterOfWorlds | BrainOfCthulhu | QueenBee | Deerclops
            | Skeletron | WallOfFlesh => EventCategory::BossPreHardmode,
            QueenSlime | TheTwins | TheDestroyer | SkeletronPrime | Plantera | Golem
            | DukeFishron | EmpressOfLight | LunaticCultist | MoonLord => EventCategory::BossHardmode,
            BloodMoon | PumpkinMoon | FrostMoon => EventCategory::Moon,
            GoblinArmy | FrostLegion | PirateInvasion | MartianMadness | OldOnesArmy
            | LunarPillars => EventCategory::Invasion,
            Daytime | Nighttime => EventCategory::Time,
            Rain | Thunderstorm | Sandstorm | WindyDay => EventCategory::Weather,
            SolarEclipse | SlimeRain | Party | LanternNight | MeteorShower => EventCategory::Special,
        }
    }

    pub fn is_boss(self) -> bool {
        self.category().is_boss()
    }

    /// Get all tracked events
    pub fn all() -> &'static [EventId] {
        use EventId::*;
        &[
            KingSlime,
            EyeOfCthulhu,
            EaterOfWorlds,
            BrainOfCthulhu,
            QueenBee,
            Deerclops,
            Skeletron,
            WallOfFlesh,
            QueenSlime,
            TheTwins,
            TheDestroyer,
            SkeletronPrime,
            Plantera,
            Golem,
            DukeFishron,
            EmpressOfLight,
            LunaticCultist,
            MoonLord,
            BloodMoon,
            PumpkinMoon,
            FrostMoon,
            GoblinArmy,
            FrostLegion,
            PirateInvasion,
            MartianMadness,
            OldOnesArmy,
            LunarPillars,
            Daytime,
            Nighttime,
            Rain,
            Thunderstorm,
            Sandstorm,
            WindyDay,
            SolarEclipse,
            SlimeRain,
            Party,
            LanternNight,
            MeteorShower,
        ]
    }
}

/// Host-side predicate evaluation: which events are active right now
pub trait EventSource {
    fn active_events(&self) -> BTreeSet<EventId>;
}

impl EventSource for BTreeSet<EventId> {
    fn active_events(&self) -> BTreeSet<EventId> {
        self.clone()
    }
}
