//! LevelingSession - per-world owner of the event penalty state
//!
//! The host creates one session when a world loads, calls [`LevelingSession::tick`]
//! every simulation tick and [`LevelingSession::end`] when the world unloads.
//! Penalty state lives only as long as the session and is never persisted.

use crate::config::LevelingConfig;
use crate::event::{
    combined_multiplier, EventCatalog, EventConfig, EventPenaltyTracker, EventSource, PenaltySettings,
};
use crate::item::LeveledItem;
use crate::progression::LevelUpOutcome;
use crate::xp::scale_experience;

/// Ticks between two event polls (one second at 60 Hz)
pub const TICKS_PER_POLL: u32 = 60;

#[derive(Debug, Clone)]
pub struct LevelingSession {
    tracker: EventPenaltyTracker,
    catalog: EventCatalog,
    penalties: PenaltySettings,
    poll_interval: u32,
    ticks: u64,
    multiplier: f64,
}

impl LevelingSession {
    pub fn new(events: &EventConfig) -> Self {
        LevelingSession {
            tracker: EventPenaltyTracker::new(),
            catalog: EventCatalog::from_config(events),
            penalties: events.penalties,
            poll_interval: TICKS_PER_POLL,
            ticks: 0,
            multiplier: 1.0,
        }
    }

    /// Poll every `interval` ticks instead of every 60, minimum 1
    pub fn with_poll_interval(mut self, interval: u32) -> Self {
        self.poll_interval = interval.max(1);
        self
    }

    /// Advance one tick, polling `source` when the interval comes around
    ///
    /// The first tick always polls. Returns true if a poll happened.
    pub fn tick(&mut self, source: &dyn EventSource) -> bool {
        let due = self.ticks % u64::from(self.poll_interval) == 0;
        self.ticks += 1;
        if due {
            self.poll(source);
        }
        due
    }

    /// Update the tracker and recompute the multiplier from the same snapshot
    pub fn poll(&mut self, source: &dyn EventSource) -> f64 {
        let active = source.active_events();
        self.tracker.update(&active);
        self.multiplier = combined_multiplier(&active, &self.catalog, &self.tracker, &self.penalties);
        tracing::trace!(active = active.len(), multiplier = self.multiplier, "event poll");
        self.multiplier
    }

    /// Multiplier committed by the last poll
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Scale `raw_xp` by the current multiplier and feed it to `item`
    pub fn award(&self, item: &mut LeveledItem, raw_xp: f64, config: &LevelingConfig) -> LevelUpOutcome {
        let amount = scale_experience(raw_xp, self.multiplier);
        item.gain_experience(amount, config.class(item.class))
    }

    pub fn tracker(&self) -> &EventPenaltyTracker {
        &self.tracker
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// World unload: drop all penalty state
    pub fn end(&mut self) {
        self.tracker.clear();
        self.multiplier = 1.0;
        self.ticks = 0;
        tracing::debug!("leveling session ended, event penalties cleared");
    }
}
