//! Session simulation - random events and combat against a leveling session

use leveling_core::{
    EventId, EventSource, ItemClass, LeveledItem, LevelingConfig, LevelingSession, StatKind,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Chance per poll that an active event ends
const END_CHANCE: f64 = 0.3;
/// Chance per poll that a new event starts
const START_CHANCE: f64 = 0.15;
/// Chance per tick of landing a hit
const HIT_CHANCE: f64 = 0.2;
/// Chance per tick of killing something
const KILL_CHANCE: f64 = 0.01;
/// Chance per tick of getting hurt
const HURT_CHANCE: f64 = 0.08;

/// Randomly evolving set of world events
#[derive(Debug, Clone, Default)]
pub struct SimulatedWorld {
    active: BTreeSet<EventId>,
}

impl SimulatedWorld {
    /// Let events end and start, called once per poll
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.active.retain(|_| !rng.gen_bool(END_CHANCE));
        if rng.gen_bool(START_CHANCE) {
            if let Some(&event) = EventId::all().choose(rng) {
                self.active.insert(event);
            }
        }
    }
}

impl EventSource for SimulatedWorld {
    fn active_events(&self) -> BTreeSet<EventId> {
        self.active.clone()
    }
}

/// Final state of one simulated item
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub id: String,
    pub class: ItemClass,
    pub level: u32,
    pub experience: i64,
    pub bonuses: BTreeMap<StatKind, f64>,
}

/// Outcome of a simulated session
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub ticks: u64,
    pub polls: u64,
    pub level_ups: u32,
    pub final_multiplier: f64,
    pub penalized_events: BTreeMap<EventId, f64>,
    pub items: Vec<ItemReport>,
}

/// Plays a session tick by tick
pub struct SessionSimulation {
    session: LevelingSession,
    world: SimulatedWorld,
    items: Vec<LeveledItem>,
    polls: u64,
    level_ups: u32,
}

impl SessionSimulation {
    /// Simulation with one item of each class
    pub fn new(config: &LevelingConfig) -> Self {
        SessionSimulation {
            session: LevelingSession::new(&config.events),
            world: SimulatedWorld::default(),
            items: vec![
                LeveledItem::new("nights_edge", ItemClass::Weapon),
                LeveledItem::new("molten_breastplate", ItemClass::Armor),
                LeveledItem::new("hermes_boots", ItemClass::Accessory),
            ],
            polls: 0,
            level_ups: 0,
        }
    }

    /// Run `ticks` simulation ticks and report
    pub fn run(mut self, config: &LevelingConfig, ticks: u64, rng: &mut impl Rng) -> SimulationReport {
        for _ in 0..ticks {
            self.step(config, rng);
        }
        let report = self.report(config, ticks);
        self.session.end();
        report
    }

    fn step(&mut self, config: &LevelingConfig, rng: &mut impl Rng) {
        if self.session.ticks() % u64::from(leveling_core::session::TICKS_PER_POLL) == 0 {
            self.world.advance(rng);
        }
        if self.session.tick(&self.world) {
            self.polls += 1;
        }

        let gain = &config.xp_gain;
        let mut awards: Vec<(ItemClass, f64)> = Vec::new();
        if rng.gen_bool(HIT_CHANCE) {
            awards.push((ItemClass::Weapon, gain.hit_experience(rng.gen_range(20.0..80.0))));
        }
        if rng.gen_bool(KILL_CHANCE) {
            awards.push((ItemClass::Weapon, gain.kill_experience(rng.gen_range(50.0..500.0))));
        }
        if rng.gen_bool(HURT_CHANCE) {
            let raw = gain.hurt_experience(rng.gen_range(5.0..40.0));
            awards.push((ItemClass::Armor, raw));
            awards.push((ItemClass::Accessory, raw));
        }

        for (class, raw) in awards {
            for item in self.items.iter_mut().filter(|item| item.class == class) {
                if self.session.award(item, raw, config).leveled_up {
                    self.level_ups += 1;
                }
            }
        }
    }

    fn report(&self, config: &LevelingConfig, ticks: u64) -> SimulationReport {
        let tracker = self.session.tracker();
        let penalized_events = EventId::all()
            .iter()
            .map(|&event| (event, tracker.penalty_multiplier(event)))
            .filter(|(_, multiplier)| *multiplier < 1.0)
            .collect();

        let items = self
            .items
            .iter()
            .map(|item| ItemReport {
                id: item.id.to_string(),
                class: item.class,
                level: item.level(),
                experience: item.ledger.experience(),
                bonuses: item.bonuses(config.class(item.class)).iter().collect(),
            })
            .collect();

        SimulationReport {
            ticks,
            polls: self.polls,
            level_ups: self.level_ups,
            final_multiplier: self.session.multiplier(),
            penalized_events,
            items,
        }
    }
}

impl SimulationReport {
    /// Human-readable summary
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Simulated {} ticks ({} polls), {} level-ups, final XP multiplier {:.2}\n",
            self.ticks, self.polls, self.level_ups, self.final_multiplier
        ));
        for item in &self.items {
            out.push_str(&format!(
                "  {} ({:?}): level {} ({} xp)\n",
                item.id, item.class, item.level, item.experience
            ));
            for (stat, value) in &item.bonuses {
                out.push_str(&format!("    {:?}: {:+.2}\n", stat, value));
            }
        }
        if !self.penalized_events.is_empty() {
            out.push_str("  Penalized events:\n");
            for (event, multiplier) in &self.penalized_events {
                out.push_str(&format!("    {:?}: x{:.3}\n", event, multiplier));
            }
        }
        out
    }
}
