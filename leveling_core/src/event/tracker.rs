//! EventPenaltyTracker - repeat counters for recurring events
//!
//! Each time an event goes from inactive to active its consecutive count
//! grows, halving its XP bonus per repetition. Ended events go into a short
//! history; once three other distinct events have ended, a penalized event's
//! counter is reset and the history starts over.

use super::EventId;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Number of ended events remembered
pub const HISTORY_CAPACITY: usize = 10;

/// Distinct other events that must end before a penalty resets
const DISTINCT_ENDINGS_FOR_RESET: usize = 3;

/// Count forced on every active boss while two or more bosses are up
const MULTI_BOSS_MIN_COUNT: u32 = 2;

/// Per-world repeat-penalty state
#[derive(Debug, Clone, Default)]
pub struct EventPenaltyTracker {
    active_events: BTreeSet<EventId>,
    consecutive_count: BTreeMap<EventId, u32>,
    ended_history: VecDeque<EventId>,
    multi_boss_penalty: bool,
}

impl EventPenaltyTracker {
    pub fn new() -> Self {
        EventPenaltyTracker {
            active_events: BTreeSet::new(),
            consecutive_count: BTreeMap::new(),
            ended_history: VecDeque::with_capacity(HISTORY_CAPACITY),
            multi_boss_penalty: false,
        }
    }

    /// Feed the set of events active right now
    pub fn update(&mut self, active_now: &BTreeSet<EventId>) {
        let started: Vec<EventId> = active_now.difference(&self.active_events).copied().collect();
        let ended: Vec<EventId> = self.active_events.difference(active_now).copied().collect();

        for event in started {
            let count = self.consecutive_count.entry(event).or_insert(0);
            *count += 1;
            tracing::debug!(?event, count = *count, "event started");
        }

        for event in ended {
            if self.ended_history.len() == HISTORY_CAPACITY {
                self.ended_history.pop_front();
            }
            self.ended_history.push_back(event);
            tracing::debug!(?event, "event ended");
            self.check_resets();
        }

        self.apply_multi_boss_rule(active_now);
        self.active_events = active_now.clone();
    }

    /// Two or more bosses at once count as a repetition for each of them
    fn apply_multi_boss_rule(&mut self, active_now: &BTreeSet<EventId>) {
        let bosses: Vec<EventId> = active_now.iter().copied().filter(|e| e.is_boss()).collect();

        if bosses.len() >= 2 {
            if !self.multi_boss_penalty {
                for boss in &bosses {
                    let count = self.consecutive_count.entry(*boss).or_insert(0);
                    *count = (*count).max(MULTI_BOSS_MIN_COUNT);
                }
                self.multi_boss_penalty = true;
                tracing::info!(?bosses, "multiple bosses active, applying repeat penalty");
            }
        } else {
            self.multi_boss_penalty = false;
        }
    }

    /// Reset penalized events that have seen enough distinct other endings
    fn check_resets(&mut self) {
        let penalized: Vec<EventId> = self
            .consecutive_count
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(&event, _)| event)
            .collect();

        for event in penalized {
            let distinct_others: BTreeSet<EventId> = self
                .ended_history
                .iter()
                .copied()
                .filter(|&e| e != event)
                .collect();

            if distinct_others.len() >= DISTINCT_ENDINGS_FOR_RESET {
                self.consecutive_count.insert(event, 0);
                self.ended_history.clear();
                tracing::info!(?event, "event penalty reset after other events ended");
            }
        }
    }

    /// XP bonus scale for `event`: 1.0, then halved per repetition
    pub fn penalty_multiplier(&self, event: EventId) -> f64 {
        let count = self.consecutive_count(event);
        if count <= 1 {
            return 1.0;
        }
        let exponent = i32::try_from(count - 1).unwrap_or(i32::MAX);
        0.5f64.powi(exponent)
    }

    pub fn consecutive_count(&self, event: EventId) -> u32 {
        self.consecutive_count.get(&event).copied().unwrap_or(0)
    }

    pub fn active_events(&self) -> &BTreeSet<EventId> {
        &self.active_events
    }

    pub fn is_active(&self, event: EventId) -> bool {
        self.active_events.contains(&event)
    }

    /// Ended events, oldest first
    pub fn ended_history(&self) -> impl Iterator<Item = EventId> + '_ {
        self.ended_history.iter().copied()
    }

    pub fn multi_boss_penalty(&self) -> bool {
        self.multi_boss_penalty
    }

    /// Forget everything, used when the world unloads
    pub fn clear(&mut self) {
        self.active_events.clear();
        self.consecutive_count.clear();
        self.ended_history.clear();
        self.multi_boss_penalty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EventId::*;

    fn set(events: &[EventId]) -> BTreeSet<EventId> {
        events.iter().copied().collect()
    }

    /// Start `event` then end it
    fn run_once(tracker: &mut EventPenaltyTracker, event: EventId) {
        tracker.update(&set(&[event]));
        tracker.update(&set(&[]));
    }

    #[test]
    fn test_decay_sequence() {
        let mut tracker = EventPenaltyTracker::new();
        let mut observed = Vec::new();
        for _ in 0..3 {
            tracker.update(&set(&[KingSlime]));
            observed.push(tracker.penalty_multiplier(KingSlime));
            tracker.update(&set(&[]));
        }
        assert_eq!(observed, vec![1.0, 0.5, 0.25]);
        assert_eq!(tracker.consecutive_count(KingSlime), 3);
    }

    #[test]
    fn test_staying_active_does_not_count() {
        let mut tracker = EventPenaltyTracker::new();
        for _ in 0..5 {
            tracker.update(&set(&[BloodMoon]));
        }
        assert_eq!(tracker.consecutive_count(BloodMoon), 1);
        assert_eq!(tracker.penalty_multiplier(BloodMoon), 1.0);
    }

    #[test]
    fn test_reset_after_three_distinct_others() {
        let mut tracker = EventPenaltyTracker::new();
        run_once(&mut tracker, EyeOfCthulhu);
        run_once(&mut tracker, EyeOfCthulhu);
        assert_eq!(tracker.penalty_multiplier(EyeOfCthulhu), 0.5);

        run_once(&mut tracker, Rain);
        run_once(&mut tracker, GoblinArmy);
        assert_eq!(tracker.penalty_multiplier(EyeOfCthulhu), 0.5);

        run_once(&mut tracker, BloodMoon);
        assert_eq!(tracker.penalty_multiplier(EyeOfCthulhu), 1.0);
        assert_eq!(tracker.consecutive_count(EyeOfCthulhu), 0);
        assert_eq!(tracker.ended_history().count(), 0);
    }

    #[test]
    fn test_same_other_event_repeating_does_not_reset() {
        let mut tracker = EventPenaltyTracker::new();
        run_once(&mut tracker, Skeletron);
        run_once(&mut tracker, Skeletron);
        for _ in 0..6 {
            run_once(&mut tracker, Rain);
            run_once(&mut tracker, Daytime);
        }
        assert_eq!(tracker.penalty_multiplier(Skeletron), 0.5);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut tracker = EventPenaltyTracker::new();
        for _ in 0..8 {
            run_once(&mut tracker, Rain);
            run_once(&mut tracker, Daytime);
        }
        assert_eq!(tracker.ended_history().count(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_multi_boss_forces_second_repetition() {
        let mut tracker = EventPenaltyTracker::new();
        tracker.update(&set(&[TheTwins, TheDestroyer]));
        assert!(tracker.multi_boss_penalty());
        assert_eq!(tracker.penalty_multiplier(TheTwins), 0.5);
        assert_eq!(tracker.penalty_multiplier(TheDestroyer), 0.5);

        // Flag set, staying up does not push counts further
        tracker.update(&set(&[TheTwins, TheDestroyer]));
        assert_eq!(tracker.consecutive_count(TheTwins), 2);

        tracker.update(&set(&[TheTwins]));
        assert!(!tracker.multi_boss_penalty());
    }

    #[test]
    fn test_multi_boss_rearms_after_dropping_to_one_boss() {
        let mut tracker = EventPenaltyTracker::new();
        tracker.update(&set(&[TheTwins, TheDestroyer]));
        tracker.update(&set(&[TheTwins]));
        assert!(!tracker.multi_boss_penalty());
        assert_eq!(tracker.consecutive_count(SkeletronPrime), 0);

        // A fresh boss joining re-applies the floor to every active boss
        tracker.update(&set(&[TheTwins, SkeletronPrime]));
        assert!(tracker.multi_boss_penalty());
        assert_eq!(tracker.consecutive_count(SkeletronPrime), 2);
        assert_eq!(tracker.consecutive_count(TheTwins), 2);
        assert_eq!(tracker.penalty_multiplier(SkeletronPrime), 0.5);
    }

    #[test]
    fn test_multi_boss_keeps_higher_count() {
        let mut tracker = EventPenaltyTracker::new();
        run_once(&mut tracker, KingSlime);
        run_once(&mut tracker, KingSlime);
        tracker.update(&set(&[KingSlime, QueenBee]));
        assert_eq!(tracker.consecutive_count(KingSlime), 3);
        assert_eq!(tracker.consecutive_count(QueenBee), 2);
    }

    #[test]
    fn test_boss_and_non_boss_not_multi() {
        let mut tracker = EventPenaltyTracker::new();
        tracker.update(&set(&[Plantera, BloodMoon]));
        assert!(!tracker.multi_boss_penalty());
        assert_eq!(tracker.penalty_multiplier(Plantera), 1.0);
    }

    #[test]
    fn test_clear_wipes_state() {
        let mut tracker = EventPenaltyTracker::new();
        run_once(&mut tracker, KingSlime);
        tracker.update(&set(&[KingSlime, Golem]));
        tracker.clear();
        assert!(tracker.active_events().is_empty());
        assert_eq!(tracker.consecutive_count(KingSlime), 0);
        assert_eq!(tracker.ended_history().count(), 0);
        assert!(!tracker.multi_boss_penalty());
    }

    #[test]
    fn test_unknown_event_multiplier() {
        let tracker = EventPenaltyTracker::new();
        assert_eq!(tracker.penalty_multiplier(MoonLord), 1.0);
    }
}
