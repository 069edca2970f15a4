//! World and event integration tests
//!
//! Tests the clock, weather, and event scheduler as the session drives them:
//! - Hour boundaries surface as weather updates
//! - Time of day wraps at midnight
//! - Events start and end one at a time
//! - The profile mirrors the running event

use driftline::core::PlayerProfile;
use driftline::events::{EventChange, EventKind, EventScheduler};
use driftline::fishing::SpeciesCatalog;
use driftline::session::{Session, SessionEvent};
use driftline::world::{Weather, WeatherClock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

// ============================================================================
// Clock & Weather
// ============================================================================

#[test]
fn test_session_reports_each_game_hour() {
    let mut rng = create_test_rng();
    let mut session = Session::new(PlayerProfile::default(), SpeciesCatalog::default(), 0);

    // 610 real seconds is just over 12 game hours
    let mut updates = Vec::new();
    for step in 1..=6_100i64 {
        for event in session.tick(0.1, step * 100, &mut rng) {
            if let SessionEvent::WeatherUpdated { time_of_day, .. } = event {
                updates.push(time_of_day);
            }
        }
    }

    assert_eq!(updates.len(), 12);
    for pair in updates.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    let now = session.weather();
    assert!((now.time_of_day - 20.2).abs() < 1e-6);
}

#[test]
fn test_clock_wraps_past_midnight() {
    let mut rng = create_test_rng();
    let mut clock = WeatherClock::new(23.9, Weather::Rain);
    let report = clock.advance(10.0, &mut rng);
    assert_eq!(report.hours_crossed, 1);
    assert!((clock.time_of_day() - 0.1).abs() < 1e-9);
    assert!(clock.snapshot().is_night());
}

// ============================================================================
// Event Scheduler
// ============================================================================

#[test]
fn test_events_alternate_and_end_on_time() {
    let mut rng = create_test_rng();
    let mut scheduler = EventScheduler::default();
    let mut running: Option<i64> = None;
    let mut started = 0;

    // Two simulated hours of 5 second checks
    let mut now = 0;
    for _ in 0..1_440 {
        now += 5_000;
        for change in scheduler.tick(5_000.0, now, &mut rng) {
            match change {
                EventChange::Started(event) => {
                    assert!(running.is_none(), "two events at once");
                    running = Some(event.ends_at_ms);
                    started += 1;
                }
                EventChange::Ended(_) => {
                    let ends_at = running.take().expect("ended without a running event");
                    assert!(now > ends_at);
                    assert!(now - ends_at <= 5_000);
                }
            }
        }
        assert_eq!(scheduler.active().is_some(), running.is_some());
    }
    assert!(started > 0);
}

#[test]
fn test_forced_event_expires_in_session() {
    let mut rng = create_test_rng();
    let mut session = Session::new(PlayerProfile::default(), SpeciesCatalog::default(), 0);
    session.force_event(EventKind::GoldRush);

    let mut ended = 0;
    for step in 1..=1_300i64 {
        for event in session.tick(0.1, step * 100, &mut rng) {
            if event == SessionEvent::EventEnded(EventKind::GoldRush) {
                ended += 1;
                assert!(step * 100 > EventKind::GoldRush.duration_ms());
            }
        }
        assert_eq!(session.active_event(), session.profile().active_event.as_ref());
    }
    assert_eq!(ended, 1);
}

#[test]
fn test_expired_saved_event_is_dropped_on_start() {
    let mut rng = create_test_rng();
    let mut first = Session::new(PlayerProfile::default(), SpeciesCatalog::default(), 0);
    first.force_event(EventKind::FeedingFrenzy);
    first.tick(0.1, 100, &mut rng);
    let saved = first.profile().clone();
    assert!(saved.active_event.is_some());

    let resumed = Session::new(saved.clone(), SpeciesCatalog::default(), 1_000);
    assert_eq!(resumed.active_event().map(|e| e.kind), Some(EventKind::FeedingFrenzy));

    let stale = Session::new(saved, SpeciesCatalog::default(), 24 * 60 * 60 * 1000);
    assert!(stale.active_event().is_none());
    assert!(stale.profile().active_event.is_none());
}
