//! leveling_core - Item leveling rules for game entities
//!
//! This library provides:
//! - Scaling: tiered conversion of an item level into a raw stat value
//! - Stat resolution: blacklists, hard caps and global caps on top of scaling
//! - Progression: the XP curve and the per-item level/experience ledger
//! - Events: repeat penalties for recurring world events and the combined XP multiplier
//! - Session: the per-world owner of event state, polled from the game loop

pub mod config;
pub mod event;
pub mod item;
pub mod progression;
pub mod scaling;
pub mod session;
pub mod stat;
pub mod types;
pub mod xp;

pub mod prelude;

// Re-export core types for convenience
pub use config::{default_config, load_config, parse_config, ClassConfig, ConfigError, LevelingConfig};
pub use event::{
    combined_multiplier, EventCatalog, EventCategory, EventId, EventPenaltyTracker, EventSource,
    PenaltySettings, XpMultiplierTier,
};
pub use item::LeveledItem;
pub use progression::{LevelUpOutcome, ProgressionLedger, XpCurve};
pub use scaling::{calculate, calculate_int, ScalingMode, ScalingTier};
pub use session::LevelingSession;
pub use stat::{resolve_stat, resolve_stat_int, HardCap, StatBonuses, StatConfig};
pub use types::{ItemClass, ItemId, StatKind};
pub use xp::{scale_experience, XpGainConfig};
