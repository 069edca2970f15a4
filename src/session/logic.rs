//! The session orchestrator: Idle -> Casting -> Floating -> Bite -> Pulling.
//!
//! Single-threaded and tick-driven. Every delay is a countdown stored in the
//! current [`SessionPhase`] and advanced by [`Session::tick`], so leaving a
//! phase cancels its timer. Operations return the events they produced.

use super::autoplay::{next_auto_action, AutoAction};
use super::rig::Rig;
use super::types::{SessionEvent, SessionPhase, SessionState};
use crate::core::constants::{
    AUTOSAVE_INTERVAL_SECONDS, CAST_ANIMATION_MS, CAST_DISTANCE_MIN, CATCH_VALUE_JITTER,
    CATCH_VALUE_PER_ROD_LEVEL, GOLD_RUSH_VALUE_MULT, NOTHING_BIT_RETURN_MS,
};
use crate::core::persistence::{ProfileStore, StoreError};
use crate::core::profile::PlayerProfile;
use crate::events::{
    generate_mission, max_cast_distance, record_mission_catch, ActiveEvent, EventChange,
    EventKind, EventScheduler, MissionProgress,
};
use crate::fishing::{
    resolve_bite, roll_bite_delay_ms, BiteOutcome, CatchConditions, Species, SpeciesCatalog,
};
use crate::reel::{set_holding, tick_reel, ReelGame, ReelParams, ReelResult, ReelSnapshot};
use crate::shop::{apply_shop_action, ShopAction};
use crate::world::{WeatherClock, WeatherState};
use rand::Rng;
use tracing::{debug, info};

/// Samples a cast distance: `floor(U(40, 320 + 40*rod_level))`.
pub fn roll_cast_distance(rod_level: u32, rng: &mut impl Rng) -> u32 {
    rng.gen_range(CAST_DISTANCE_MIN..max_cast_distance(rod_level)).floor() as u32
}

/// Sale value of a landed fish:
/// `floor(base * (1 + 0.2*rod_level) + U(0,20))`, then x1.5 under Gold Rush.
pub fn catch_value(
    species: &Species,
    rod_level: u32,
    event: Option<EventKind>,
    rng: &mut impl Rng,
) -> u64 {
    let scaled = species.base_value as f64 * (1.0 + rod_level as f64 * CATCH_VALUE_PER_ROD_LEVEL);
    let value = (scaled + rng.gen_range(0.0..CATCH_VALUE_JITTER)).floor();
    if event == Some(EventKind::GoldRush) {
        (value * GOLD_RUSH_VALUE_MULT).floor() as u64
    } else {
        value as u64
    }
}

/// Reel tuning read from the live profile, so upgrades apply mid-fight.
pub fn reel_params(profile: &PlayerProfile, species: &Species, auto: bool) -> ReelParams {
    ReelParams {
        difficulty: species.difficulty,
        rod_level: profile.rod_level,
        enchant: profile.equipped_enchant,
        auto,
    }
}

pub struct Session {
    profile: PlayerProfile,
    catalog: SpeciesCatalog,
    clock: WeatherClock,
    events: EventScheduler,
    phase: SessionPhase,
    auto_play: bool,
    /// Time spent in the current phase, for auto-play delays.
    phase_elapsed_ms: f64,
    now_ms: i64,
    dirty: bool,
    since_save_secs: f64,
    lights_on: bool,
}

impl Session {
    /// Starts a session on a loaded profile. A saved event is resumed only
    /// if it has not expired by `now_ms`.
    pub fn new(mut profile: PlayerProfile, catalog: SpeciesCatalog, now_ms: i64) -> Self {
        let events = EventScheduler::resume(profile.active_event.take(), now_ms);
        profile.active_event = events.active().cloned();
        profile.repair_mission(&catalog);
        Self {
            profile,
            catalog,
            clock: WeatherClock::default(),
            events,
            phase: SessionPhase::Idle,
            auto_play: false,
            phase_elapsed_ms: 0.0,
            now_ms,
            dirty: false,
            since_save_secs: 0.0,
            lights_on: false,
        }
    }

    /// Loads the saved profile from `store`, or starts fresh.
    pub fn load(
        store: &impl ProfileStore,
        catalog: SpeciesCatalog,
        now_ms: i64,
    ) -> Result<Self, StoreError> {
        let profile = store.load()?.unwrap_or_default();
        Ok(Self::new(profile, catalog, now_ms))
    }

    // ── Queries ──────────────────────────────────────────────────

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    pub fn state(&self) -> SessionState {
        self.phase.state()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn weather(&self) -> WeatherState {
        self.clock.snapshot()
    }

    pub fn clock_mut(&mut self) -> &mut WeatherClock {
        &mut self.clock
    }

    pub fn active_event(&self) -> Option<&ActiveEvent> {
        self.events.active()
    }

    pub fn is_auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn lights_on(&self) -> bool {
        self.lights_on
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Conditions a bite would be resolved under right now.
    pub fn conditions(&self) -> CatchConditions {
        let weather = self.clock.snapshot();
        CatchConditions {
            weather: weather.weather,
            day_phase: weather.day_phase(),
            rod_level: self.profile.rod_level,
            enchant: self.profile.equipped_enchant,
            event: self.events.active_kind(),
        }
    }

    /// Live reel-in view while Pulling.
    pub fn reel_snapshot(&self) -> Option<ReelSnapshot> {
        match &self.phase {
            SessionPhase::Pulling { species, game } => {
                Some(game.snapshot(&reel_params(&self.profile, species, self.auto_play)))
            }
            _ => None,
        }
    }

    fn set_phase(&mut self, phase: SessionPhase, out: &mut Vec<SessionEvent>) {
        let before = self.phase.state();
        self.phase = phase;
        self.phase_elapsed_ms = 0.0;
        let after = self.phase.state();
        if before != after {
            debug!(from = before.label(), to = after.label(), "session state");
            out.push(SessionEvent::StateChanged(after));
        }
    }

    /// Chatter toasts are muted during auto-play.
    fn chatter(&self, out: &mut Vec<SessionEvent>, message: impl Into<String>) {
        if !self.auto_play {
            out.push(SessionEvent::toast(message));
        }
    }

    // ── Player actions ───────────────────────────────────────────

    /// Casts the line. Only valid in Idle.
    pub fn cast(&mut self, rng: &mut impl Rng) -> Vec<SessionEvent> {
        let mut out = Vec::new();
        if !matches!(self.phase, SessionPhase::Idle) {
            return out;
        }

        let distance = roll_cast_distance(self.profile.rod_level, rng);
        if distance > self.profile.max_distance {
            self.profile.max_distance = distance;
            self.dirty = true;
        }

        self.set_phase(
            SessionPhase::Casting {
                distance,
                remaining_ms: CAST_ANIMATION_MS,
            },
            &mut out,
        );
        self.chatter(&mut out, format!("Casted {}ft!", distance));
        out.push(SessionEvent::CastAnimation { distance });
        out
    }

    /// Strikes on a bite, or reels in early while floating.
    pub fn pull(&mut self, rng: &mut impl Rng) -> Vec<SessionEvent> {
        let mut out = Vec::new();
        match &self.phase {
            SessionPhase::Floating { .. } | SessionPhase::Retrieving { .. } => {
                out.push(SessionEvent::toast("Pulled too early!"));
                self.set_phase(SessionPhase::Idle, &mut out);
                out.push(SessionEvent::RigReset);
            }
            SessionPhase::Bite { species } => {
                let species = *species;
                let game = ReelGame::new(species.difficulty, rng);
                self.set_phase(
                    SessionPhase::Pulling {
                        species,
                        game: Box::new(game),
                    },
                    &mut out,
                );
                out.push(SessionEvent::ReelingVisual(true));
            }
            _ => {}
        }
        out
    }

    /// Press/release of the reel input. Ignored outside the reel-in.
    pub fn minigame_input(&mut self, held: bool) {
        if let SessionPhase::Pulling { game, .. } = &mut self.phase {
            set_holding(game, held);
        }
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        if self.auto_play != enabled {
            self.auto_play = enabled;
            self.phase_elapsed_ms = 0.0;
            info!(enabled, "auto-play toggled");
        }
    }

    /// Abandons whatever is in flight. Timers and the reel game are dropped
    /// without emitting anything.
    pub fn leave(&mut self) {
        self.phase = SessionPhase::Idle;
        self.phase_elapsed_ms = 0.0;
    }

    pub fn toggle_lights(&mut self, rig: &mut impl Rig) -> Vec<SessionEvent> {
        self.lights_on = rig.toggle_lights();
        let message = if self.lights_on { "Lights ON" } else { "Lights OFF" };
        vec![SessionEvent::toast(message)]
    }

    /// Runs a shop action. Refusals come back as toasts.
    pub fn purchase(&mut self, action: ShopAction, rng: &mut impl Rng) -> Vec<SessionEvent> {
        match apply_shop_action(&mut self.profile, action, rng) {
            Ok(outcome) => {
                self.dirty = true;
                vec![SessionEvent::Toast(outcome.toast())]
            }
            Err(e) => vec![SessionEvent::Toast(e.to_string())],
        }
    }

    /// Starts an event immediately, replacing any running one.
    pub fn force_event(&mut self, kind: EventKind) -> Vec<SessionEvent> {
        let event = self.events.force_start(kind, self.now_ms);
        self.profile.active_event = Some(event.clone());
        self.dirty = true;
        vec![
            SessionEvent::toast(format!("EVENT STARTED: {}!", event.name)),
            SessionEvent::EventStarted(event),
        ]
    }

    // ── Persistence ──────────────────────────────────────────────

    /// Saves when something changed since the last save. Returns whether a
    /// save happened.
    pub fn save_if_dirty(&mut self, store: &mut impl ProfileStore) -> Result<bool, StoreError> {
        if !self.dirty {
            return Ok(false);
        }
        store.save(&self.profile)?;
        self.dirty = false;
        self.since_save_secs = 0.0;
        Ok(true)
    }

    /// True once the autosave interval has passed with unsaved changes.
    pub fn autosave_due(&self) -> bool {
        self.dirty && self.since_save_secs >= AUTOSAVE_INTERVAL_SECONDS as f64
    }

    // ── Tick ─────────────────────────────────────────────────────

    /// Advances the whole simulation by `dt_secs`. `now_ms` is wall-clock
    /// Unix milliseconds, used for event expiry and catch timestamps.
    pub fn tick(&mut self, dt_secs: f64, now_ms: i64, rng: &mut impl Rng) -> Vec<SessionEvent> {
        let mut out = Vec::new();
        self.now_ms = now_ms;
        if !(dt_secs > 0.0) {
            return out;
        }
        let dt_ms = dt_secs * 1000.0;
        self.since_save_secs += dt_secs;

        let report = self.clock.advance(dt_secs, rng);
        if report.hour_changed() {
            let weather = self.clock.snapshot();
            out.push(SessionEvent::WeatherUpdated {
                weather: weather.weather,
                time_of_day: weather.time_of_day,
            });
        }

        for change in self.events.tick(dt_ms, now_ms, rng) {
            self.apply_event_change(change, &mut out);
        }

        self.phase_elapsed_ms += dt_ms;
        self.advance_phase(dt_secs, dt_ms, rng, &mut out);

        if self.auto_play {
            match next_auto_action(self.phase.state(), self.phase_elapsed_ms) {
                Some(AutoAction::Cast) => out.extend(self.cast(rng)),
                Some(AutoAction::Pull) => out.extend(self.pull(rng)),
                None => {}
            }
        }

        out
    }

    fn apply_event_change(&mut self, change: EventChange, out: &mut Vec<SessionEvent>) {
        match change {
            EventChange::Started(event) => {
                out.push(SessionEvent::toast(format!("EVENT STARTED: {}!", event.name)));
                self.profile.active_event = Some(event.clone());
                out.push(SessionEvent::EventStarted(event));
            }
            EventChange::Ended(kind) => {
                out.push(SessionEvent::toast("Event Ended"));
                self.profile.active_event = None;
                out.push(SessionEvent::EventEnded(kind));
            }
        }
        self.dirty = true;
    }

    fn advance_phase(
        &mut self,
        dt_secs: f64,
        dt_ms: f64,
        rng: &mut impl Rng,
        out: &mut Vec<SessionEvent>,
    ) {
        match &mut self.phase {
            SessionPhase::Idle | SessionPhase::Bite { .. } => {}
            SessionPhase::Casting {
                distance,
                remaining_ms,
            } => {
                *remaining_ms -= dt_ms;
                if *remaining_ms <= 0.0 {
                    let distance = *distance;
                    let conditions = self.conditions();
                    let bite_in_ms = roll_bite_delay_ms(conditions.weather, conditions.event, rng);
                    self.set_phase(
                        SessionPhase::Floating {
                            distance,
                            bite_in_ms,
                        },
                        out,
                    );
                }
            }
            SessionPhase::Floating {
                distance,
                bite_in_ms,
            } => {
                *bite_in_ms -= dt_ms;
                if *bite_in_ms <= 0.0 {
                    let distance = *distance;
                    self.on_bite_timer(distance, rng, out);
                }
            }
            SessionPhase::Retrieving { remaining_ms } => {
                *remaining_ms -= dt_ms;
                if *remaining_ms <= 0.0 {
                    self.set_phase(SessionPhase::Idle, out);
                    out.push(SessionEvent::RigReset);
                }
            }
            SessionPhase::Pulling { species, game } => {
                let species = *species;
                let params = reel_params(&self.profile, &species, self.auto_play);
                if let Some(result) = tick_reel(game, dt_secs, &params, rng) {
                    self.finish_reel(species, result, rng, out);
                }
            }
        }
    }

    fn on_bite_timer(&mut self, distance: u32, rng: &mut impl Rng, out: &mut Vec<SessionEvent>) {
        let conditions = self.conditions();
        match resolve_bite(&self.catalog, distance, &conditions, rng) {
            BiteOutcome::Hooked(species) => {
                debug!(species = species.id, distance, "bite");
                self.set_phase(SessionPhase::Bite { species }, out);
                self.chatter(out, "Something's biting!");
            }
            BiteOutcome::Nothing => {
                self.set_phase(
                    SessionPhase::Retrieving {
                        remaining_ms: NOTHING_BIT_RETURN_MS,
                    },
                    out,
                );
                self.chatter(out, "Nothing bit...");
            }
        }
    }

    fn finish_reel(
        &mut self,
        species: Species,
        result: ReelResult,
        rng: &mut impl Rng,
        out: &mut Vec<SessionEvent>,
    ) {
        out.push(SessionEvent::ReelingVisual(false));

        match result {
            ReelResult::Landed => {
                let value = catch_value(
                    &species,
                    self.profile.rod_level,
                    self.events.active_kind(),
                    rng,
                );
                self.profile.record_catch(&species, value, self.now_ms);
                self.dirty = true;
                info!(species = species.id, value, "fish landed");

                let progress = record_mission_catch(&mut self.profile.current_mission, species.id);
                if let MissionProgress::Completed { reward_gold } = progress {
                    self.profile.gold += reward_gold;
                    let next = generate_mission(&self.catalog, self.profile.rod_level, rng);
                    info!(reward_gold, next = %next.summary(), "mission complete");
                    self.profile.current_mission = next.clone();
                    out.push(SessionEvent::toast(format!(
                        "Mission Complete! +{} Gold",
                        reward_gold
                    )));
                    out.push(SessionEvent::MissionCompleted { reward_gold, next });
                }

                if self.auto_play {
                    out.push(SessionEvent::toast(format!(
                        "Caught {} (+{}G)",
                        species.display_name, value
                    )));
                }
                out.push(SessionEvent::CatchResult {
                    species: Some(species),
                    value,
                });
            }
            ReelResult::Escaped => {
                debug!(species = species.id, "fish escaped");
                out.push(SessionEvent::toast("The fish got away..."));
                out.push(SessionEvent::CatchResult {
                    species: None,
                    value: 0,
                });
            }
        }

        self.set_phase(SessionPhase::Idle, out);
        out.push(SessionEvent::RigReset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::MemoryStore;
    use crate::session::rig::HeadlessRig;
    use crate::shop::BoatType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn new_session() -> Session {
        Session::new(PlayerProfile::default(), SpeciesCatalog::default(), 0)
    }

    fn goldfish() -> Species {
        *SpeciesCatalog::default().fallback()
    }

    #[test]
    fn test_reel_params_follow_live_profile() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        let species = goldfish();
        session.phase = SessionPhase::Pulling {
            species,
            game: Box::new(ReelGame::new(species.difficulty, &mut rng)),
        };

        let plain = session.reel_snapshot().unwrap();
        assert_eq!(
            plain.player_top - plain.player_bottom,
            reel_params(&session.profile, &species, false).bar_height()
        );

        // Equipping Steady mid-fight widens the bar on the next read
        session.profile.equipped_enchant = Some(crate::fishing::EnchantId::Steady);
        let params = reel_params(&session.profile, &species, session.auto_play);
        assert!(params.steady());
        let steady = session.reel_snapshot().unwrap();
        assert_eq!(steady.player_top - steady.player_bottom, params.bar_height());
        assert!(params.bar_height() > plain.player_top - plain.player_bottom);
    }

    #[test]
    fn test_cast_distance_bounds() {
        let mut rng = create_test_rng();
        for rod_level in [1, 5, 10] {
            for _ in 0..500 {
                let d = roll_cast_distance(rod_level, &mut rng);
                assert!(d >= 40);
                assert!((d as f64) < 320.0 + 40.0 * rod_level as f64);
            }
        }
    }

    #[test]
    fn test_catch_value_formula() {
        let mut rng = create_test_rng();
        let fish = goldfish();
        for _ in 0..200 {
            let v = catch_value(&fish, 1, None, &mut rng);
            // 20 * 1.2 = 24, plus [0, 20)
            assert!((24..44).contains(&v));
            let rush = catch_value(&fish, 1, Some(EventKind::GoldRush), &mut rng);
            assert!((36..66).contains(&rush));
        }
    }

    #[test]
    fn test_cast_only_from_idle() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        let events = session.cast(&mut rng);
        assert_eq!(session.state(), SessionState::Casting);
        assert!(events.iter().any(|e| matches!(e, SessionEvent::CastAnimation { .. })));
        assert!(session.profile().max_distance >= 40);

        assert!(session.cast(&mut rng).is_empty());
        assert_eq!(session.state(), SessionState::Casting);
    }

    #[test]
    fn test_casting_becomes_floating_after_animation() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.cast(&mut rng);
        session.tick(0.85, 850, &mut rng);
        assert_eq!(session.state(), SessionState::Casting);
        let events = session.tick(0.1, 950, &mut rng);
        assert!(events.contains(&SessionEvent::StateChanged(SessionState::Floating)));
    }

    #[test]
    fn test_pull_while_floating_is_too_early() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.cast(&mut rng);
        session.tick(0.9, 900, &mut rng);
        assert_eq!(session.state(), SessionState::Floating);

        let events = session.pull(&mut rng);
        assert!(events.contains(&SessionEvent::toast("Pulled too early!")));
        assert!(events.contains(&SessionEvent::RigReset));
        assert_eq!(session.state(), SessionState::Idle);

        // The cancelled bite timer never fires
        for i in 0..100 {
            assert!(session
                .tick(0.1, 1_000 + i * 100, &mut rng)
                .iter()
                .all(|e| !matches!(e, SessionEvent::StateChanged(_))));
        }
    }

    #[test]
    fn test_pull_elsewhere_is_noop() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        assert!(session.pull(&mut rng).is_empty());
        session.cast(&mut rng);
        assert!(session.pull(&mut rng).is_empty());
        assert_eq!(session.state(), SessionState::Casting);
    }

    #[test]
    fn test_bite_then_pull_starts_reel() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.phase = SessionPhase::Bite { species: goldfish() };

        let events = session.pull(&mut rng);
        assert!(events.contains(&SessionEvent::ReelingVisual(true)));
        assert_eq!(session.state(), SessionState::Pulling);
        let snapshot = session.reel_snapshot().unwrap();
        assert_eq!(snapshot.progress, 30.0);
    }

    #[test]
    fn test_landed_catch_updates_profile() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.set_auto_play(true);
        session.phase = SessionPhase::Bite { species: goldfish() };
        session.pull(&mut rng);

        let mut all = Vec::new();
        let mut now = 0;
        while session.state() == SessionState::Pulling {
            now += 16;
            all.extend(session.tick(0.016, now, &mut rng));
        }

        let value = all
            .iter()
            .find_map(|e| match e {
                SessionEvent::CatchResult {
                    species: Some(_),
                    value,
                } => Some(*value),
                _ => None,
            })
            .expect("auto reel always lands");
        let profile = session.profile();
        assert_eq!(profile.total_catches, 1);
        assert_eq!(profile.inventory.len(), 1);
        assert_eq!(profile.inventory[0].value, value);
        assert_eq!(profile.current_mission.count, 1);
        assert!(all.contains(&SessionEvent::ReelingVisual(false)));
        assert!(all.contains(&SessionEvent::RigReset));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_mission_completion_pays_once_and_rotates() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.set_auto_play(true);
        session.profile.current_mission.count = 2;

        session.phase = SessionPhase::Bite { species: goldfish() };
        session.pull(&mut rng);
        let mut all = Vec::new();
        let mut now = 0;
        while session.state() == SessionState::Pulling {
            now += 16;
            all.extend(session.tick(0.016, now, &mut rng));
        }

        let completed = all
            .iter()
            .filter(|e| matches!(e, SessionEvent::MissionCompleted { .. }))
            .count();
        assert_eq!(completed, 1);
        assert_eq!(session.profile().gold, 250 + 300);
        assert_eq!(session.profile().current_mission.count, 0);
    }

    #[test]
    fn test_escape_announces_loss() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.phase = SessionPhase::Bite { species: goldfish() };
        session.pull(&mut rng);
        if let SessionPhase::Pulling { game, .. } = &mut session.phase {
            game.time_remaining = 0.001;
        }
        let events = session.tick(0.016, 16, &mut rng);
        assert!(events.contains(&SessionEvent::toast("The fish got away...")));
        assert!(events.contains(&SessionEvent::CatchResult {
            species: None,
            value: 0
        }));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.profile().total_catches, 0);
    }

    #[test]
    fn test_minigame_input_reaches_reel() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.minigame_input(true);
        session.phase = SessionPhase::Bite { species: goldfish() };
        session.pull(&mut rng);
        session.minigame_input(true);
        match &session.phase {
            SessionPhase::Pulling { game, .. } => assert!(game.holding),
            other => panic!("expected Pulling, got {:?}", other),
        }
    }

    #[test]
    fn test_leave_is_silent() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.phase = SessionPhase::Bite { species: goldfish() };
        session.pull(&mut rng);
        session.leave();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.reel_snapshot().is_none());
    }

    #[test]
    fn test_toggle_lights() {
        let mut session = new_session();
        let mut rig = HeadlessRig::default();
        assert_eq!(session.toggle_lights(&mut rig), vec![SessionEvent::toast("Lights ON")]);
        assert!(session.lights_on());
        assert_eq!(session.toggle_lights(&mut rig), vec![SessionEvent::toast("Lights OFF")]);
    }

    #[test]
    fn test_purchase_refusal_is_toast() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        let events = session.purchase(ShopAction::Boat(BoatType::Yacht), &mut rng);
        assert_eq!(events, vec![SessionEvent::toast("Not enough gold! (need 8000G)")]);
        assert!(!session.is_dirty());

        let events = session.purchase(ShopAction::UpgradeRod, &mut rng);
        assert_eq!(events, vec![SessionEvent::toast("Upgraded to Lvl 2")]);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_save_if_dirty() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        let mut store = MemoryStore::new();
        assert!(!session.save_if_dirty(&mut store).unwrap());

        session.purchase(ShopAction::UpgradeRod, &mut rng);
        assert!(session.save_if_dirty(&mut store).unwrap());
        assert!(!session.is_dirty());
        assert_eq!(store.load().unwrap().unwrap().rod_level, 2);
    }

    #[test]
    fn test_autosave_due_after_interval() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        session.purchase(ShopAction::UpgradeRod, &mut rng);
        assert!(!session.autosave_due());
        for i in 0..31 {
            session.tick(1.0, i * 1000, &mut rng);
        }
        assert!(session.autosave_due());
    }

    #[test]
    fn test_expired_saved_event_is_dropped() {
        let profile = PlayerProfile {
            active_event: Some(ActiveEvent::start(EventKind::GoldRush, 0)),
            ..PlayerProfile::default()
        };
        let session = Session::new(profile.clone(), SpeciesCatalog::default(), 500_000);
        assert!(session.active_event().is_none());
        assert!(session.profile().active_event.is_none());

        let session = Session::new(profile, SpeciesCatalog::default(), 60_000);
        assert_eq!(session.active_event().map(|e| e.kind), Some(EventKind::GoldRush));
    }

    #[test]
    fn test_weather_update_on_hour_change() {
        let mut rng = create_test_rng();
        let mut session = new_session();
        // One in-game hour is 50 real seconds
        let events = session.tick(49.0, 49_000, &mut rng);
        assert!(!events
            .iter()
            .any(|e| matches!(e, SessionEvent::WeatherUpdated { .. })));
        let events = session.tick(2.0, 51_000, &mut rng);
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::WeatherUpdated { .. })));
    }
}
