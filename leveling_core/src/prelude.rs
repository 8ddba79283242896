//! Prelude module for convenient imports
//!
//! ```rust
//! use leveling_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ItemClass, ItemId, StatKind};

// Scaling and stats
pub use crate::scaling::{ScalingMode, ScalingTier};
pub use crate::stat::{resolve_stat, HardCap, StatBonuses, StatConfig};

// Progression
pub use crate::item::LeveledItem;
pub use crate::progression::{LevelUpOutcome, ProgressionLedger, XpCurve};

// Events
pub use crate::event::{EventId, EventSource, PenaltySettings};
pub use crate::session::LevelingSession;

// Config
pub use crate::config::{default_config, LevelingConfig};
