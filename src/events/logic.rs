//! Event scheduler and mission bookkeeping.
//!
//! The scheduler checks every 5 seconds: an expired event is cleared, and
//! when nothing is running there is a 5% chance to start one. At most one
//! event runs at a time.

use super::types::{ActiveEvent, EventChange, EventKind, Mission, MissionProgress};
use crate::core::constants::{
    CAST_DISTANCE_BASE_MAX, CAST_DISTANCE_PER_ROD_LEVEL, EVENT_CHECK_INTERVAL_MS,
    EVENT_START_CHANCE, MISSION_DIFFICULTY_HEADROOM, MISSION_EARLY_REWARD_MULT,
    MISSION_EARLY_ROD_LEVEL, MISSION_MAX_DIFFICULTY_CAP, MISSION_REQUIRED, MISSION_REWARD_MULT,
    MISSION_STARTER_MAX_DIFFICULTY, MISSION_STARTER_REQUIRED,
};
use crate::fishing::{Species, SpeciesCatalog};
use rand::Rng;
use tracing::info;

/// Owns the single in-flight event and the check cadence.
#[derive(Debug, Clone)]
pub struct EventScheduler {
    active: Option<ActiveEvent>,
    until_next_check_ms: f64,
}

impl Default for EventScheduler {
    fn default() -> Self {
        Self {
            active: None,
            until_next_check_ms: EVENT_CHECK_INTERVAL_MS,
        }
    }
}

impl EventScheduler {
    /// Restores a saved event, discarding it if it already expired.
    pub fn resume(saved: Option<ActiveEvent>, now_ms: i64) -> Self {
        Self {
            active: saved.filter(|e| !e.is_expired(now_ms)),
            ..Self::default()
        }
    }

    pub fn active(&self) -> Option<&ActiveEvent> {
        self.active.as_ref()
    }

    pub fn active_kind(&self) -> Option<EventKind> {
        self.active.as_ref().map(|e| e.kind)
    }

    /// Forces an event (debug menus and tests). Replaces any running one.
    pub fn force_start(&mut self, kind: EventKind, now_ms: i64) -> ActiveEvent {
        let event = ActiveEvent::start(kind, now_ms);
        self.active = Some(event.clone());
        event
    }

    /// Advances the check timer and runs every check that came due.
    pub fn tick(&mut self, dt_ms: f64, now_ms: i64, rng: &mut impl Rng) -> Vec<EventChange> {
        let mut changes = Vec::new();
        if !(dt_ms > 0.0) {
            return changes;
        }
        self.until_next_check_ms -= dt_ms;
        while self.until_next_check_ms <= 0.0 {
            self.until_next_check_ms += EVENT_CHECK_INTERVAL_MS;
            if let Some(change) = self.check(now_ms, rng) {
                changes.push(change);
            }
        }
        changes
    }

    /// One scheduler check.
    pub fn check(&mut self, now_ms: i64, rng: &mut impl Rng) -> Option<EventChange> {
        if let Some(event) = &self.active {
            if event.is_expired(now_ms) {
                let kind = event.kind;
                self.active = None;
                info!(event = kind.display_name(), "event ended");
                return Some(EventChange::Ended(kind));
            }
            return None;
        }

        if rng.gen::<f64>() >= EVENT_START_CHANCE {
            return None;
        }

        let kind = EventKind::ALL[rng.gen_range(0..EventKind::ALL.len())];
        let event = ActiveEvent::start(kind, now_ms);
        info!(event = kind.display_name(), ends_at_ms = event.ends_at_ms, "event started");
        self.active = Some(event.clone());
        Some(EventChange::Started(event))
    }
}

/// Records a successful catch against the mission.
pub fn record_mission_catch(mission: &mut Mission, species_id: &str) -> MissionProgress {
    if mission.target_species_id != species_id || mission.is_complete() {
        return MissionProgress::Unaffected;
    }
    mission.count += 1;
    if mission.is_complete() {
        MissionProgress::Completed {
            reward_gold: mission.reward_gold,
        }
    } else {
        MissionProgress::Advanced {
            count: mission.count,
            required: mission.required,
        }
    }
}

/// Highest species difficulty a generated mission may target.
pub fn mission_max_difficulty(rod_level: u32) -> u8 {
    if rod_level <= 1 {
        MISSION_STARTER_MAX_DIFFICULTY
    } else {
        rod_level
            .saturating_add(MISSION_DIFFICULTY_HEADROOM)
            .min(MISSION_MAX_DIFFICULTY_CAP as u32) as u8
    }
}

/// Farthest cast reachable at this rod level.
pub fn max_cast_distance(rod_level: u32) -> f64 {
    CAST_DISTANCE_BASE_MAX + rod_level as f64 * CAST_DISTANCE_PER_ROD_LEVEL
}

/// Species a mission may target at this rod level.
pub fn mission_candidates(catalog: &SpeciesCatalog, rod_level: u32) -> Vec<&Species> {
    let max_difficulty = mission_max_difficulty(rod_level);
    let reach = max_cast_distance(rod_level);
    let pool: Vec<&Species> = catalog
        .all()
        .iter()
        .filter(|s| s.difficulty <= max_difficulty && s.min_cast_distance as f64 <= reach)
        .collect();
    if pool.is_empty() {
        vec![catalog.fallback()]
    } else {
        pool
    }
}

/// Builds a fresh mission scaled to the rod level.
///
/// Required count is drawn from `[2, 4)` at rod level 1 and `[3, 6)` after.
/// Early rods get a 2.0x reward multiplier to bootstrap the economy, later
/// ones 1.2x.
pub fn generate_mission(catalog: &SpeciesCatalog, rod_level: u32, rng: &mut impl Rng) -> Mission {
    let pool = mission_candidates(catalog, rod_level);
    let species = pool[rng.gen_range(0..pool.len())];

    let (min_req, max_req) = if rod_level <= 1 {
        MISSION_STARTER_REQUIRED
    } else {
        MISSION_REQUIRED
    };
    let required = rng.gen_range(min_req..max_req);

    let multiplier = if rod_level <= MISSION_EARLY_ROD_LEVEL {
        MISSION_EARLY_REWARD_MULT
    } else {
        MISSION_REWARD_MULT
    };
    let reward_gold = (species.base_value as f64 * required as f64 * multiplier).floor() as u64;

    Mission {
        target_species_id: species.id.to_string(),
        target_name: species.display_name.to_string(),
        required,
        count: 0,
        reward_gold,
    }
}
