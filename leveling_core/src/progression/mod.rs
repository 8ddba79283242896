//! Progression - XP curve and per-item ledger

mod curve;
mod ledger;

pub use curve::XpCurve;
pub use ledger::{LevelUpOutcome, ProgressionLedger};
