//! Simulation runner built on the real session.
//!
//! Each run is one auto-play session. Statistics are tracked externally from
//! the `SessionEvent` stream, the same way a UI would consume it.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::persistence::MemoryStore;
use crate::core::profile::PlayerProfile;
use crate::fishing::SpeciesCatalog;
use crate::session::{apply_rig_events, HeadlessRig, Session, SessionEvent, SessionState};
use crate::shop::{rod_upgrade_price, ShopAction};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Catches {}, Escapes {}, Gold {}, Rod {}, Missions {}",
                run_idx + 1,
                config.num_runs,
                stats.catches,
                stats.escapes,
                stats.final_gold,
                stats.final_rod_level,
                stats.missions_completed
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Plays one auto-play session to the configured length.
pub fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let profile = PlayerProfile {
        rod_level: config.starting_rod_level.max(1),
        ..PlayerProfile::default()
    };
    let starting_gold = profile.gold;
    let mut session = Session::new(profile, SpeciesCatalog::default(), config.start_ms);
    session.set_auto_play(true);

    let mut rig = HeadlessRig::default();
    let mut store = MemoryStore::new();
    let mut stats = RunStats::default();

    let tick_ms = config.tick_ms.max(1);
    let dt_secs = tick_ms as f64 / 1000.0;
    let total_ticks = config.session_seconds.saturating_mul(1000) / tick_ms;

    for tick in 1..=total_ticks {
        let now_ms = config.start_ms + (tick * tick_ms) as i64;
        let events = session.tick(dt_secs, now_ms, rng);
        apply_rig_events(&mut rig, &events);

        for event in &events {
            stats.record_event(event);
            if let SessionEvent::CatchResult {
                species: Some(_), ..
            } = event
            {
                if config.sell_catches {
                    sell_latest_catch(&mut session, rng);
                }
            }
        }

        if config.buy_upgrades && session.state() == SessionState::Idle {
            while session.profile().gold >= rod_upgrade_price(session.profile().rod_level) {
                session.purchase(ShopAction::UpgradeRod, rng);
                stats.rod_upgrades += 1;
            }
        }

        if session.autosave_due() {
            if let Err(e) = session.save_if_dirty(&mut store) {
                warn!(error = %e, "autosave failed");
            }
        }
    }

    let profile = session.profile();
    stats.final_gold = profile.gold;
    stats.final_rod_level = profile.rod_level;
    stats.max_distance = profile.max_distance;
    stats.bucket_value = profile.inventory_value();
    stats.casts = rig.casts;
    stats.autosaves = store.save_count();
    stats.gold_spent_on_upgrades = (1..profile.rod_level)
        .filter(|level| *level >= config.starting_rod_level.max(1))
        .map(rod_upgrade_price)
        .sum();
    stats.net_gold = profile.gold as i64 - starting_gold as i64;

    info!(
        catches = stats.catches,
        escapes = stats.escapes,
        gold = stats.final_gold,
        "simulated session finished"
    );
    stats
}

fn sell_latest_catch(session: &mut Session, rng: &mut ChaCha8Rng) {
    if let Some(item) = session.profile().inventory.last() {
        let id = item.id;
        session.purchase(ShopAction::SellFish(id), rng);
    }
}
