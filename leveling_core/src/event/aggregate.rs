//! Combined XP multiplier of all active events

use super::{EventCatalog, EventId, EventPenaltyTracker, PenaltySettings};
use std::collections::BTreeSet;

/// Fold the active events into one XP multiplier
///
/// Bonuses stack additively: two +50% events give 2.0, not 2.25. Each
/// event's bonus is scaled by its repeat penalty when its category has
/// penalties enabled.
pub fn combined_multiplier(
    active_now: &BTreeSet<EventId>,
    catalog: &EventCatalog,
    tracker: &EventPenaltyTracker,
    penalties: &PenaltySettings,
) -> f64 {
    let bonus: f64 = active_now
        .iter()
        .map(|&event| {
            let base_bonus = catalog.base_multiplier(event) - 1.0;
            if penalties.is_enabled(event.category()) {
                base_bonus * tracker.penalty_multiplier(event)
            } else {
                base_bonus
            }
        })
        .sum();

    1.0 + bonus
}
