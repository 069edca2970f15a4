//! Catch resolution integration tests
//!
//! End-to-end tests for what bites and when:
//! - Weighted species selection frequencies
//! - Eligibility filtering and the fallback species
//! - Enchant and event modifiers
//! - Bite delay under events

use driftline::events::EventKind;
use driftline::fishing::{
    choose_species, eligible_species, max_bite_delay_ms, pick_weighted, resolve_bite,
    roll_bite_delay_ms, BiteOutcome, CatchConditions, EnchantId, Species, SpeciesCatalog,
};
use driftline::world::{DayPhase, Weather, WeatherState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn plain_species(id: &'static str, rarity_weight: f64, min_cast_distance: u32) -> Species {
    Species {
        id,
        display_name: id,
        base_value: 10,
        rarity_weight,
        difficulty: 1,
        min_cast_distance,
        required_weather: None,
        required_time: None,
        required_enchant: None,
    }
}

fn conditions(weather: Weather, time_of_day: f64) -> CatchConditions {
    let state = WeatherState {
        time_of_day,
        weather,
    };
    CatchConditions {
        weather,
        day_phase: state.day_phase(),
        rod_level: 1,
        enchant: None,
        event: None,
    }
}

// ============================================================================
// Weighted Selection
// ============================================================================

#[test]
fn test_selection_frequency_converges_to_weights() {
    let mut rng = create_test_rng();
    let catalog = SpeciesCatalog::new(vec![
        plain_species("a", 100.0, 0),
        plain_species("b", 15.0, 0),
        plain_species("c", 5.0, 0),
    ])
    .unwrap();
    let cond = conditions(Weather::Clear, 12.0);

    let draws = 20_000;
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for _ in 0..draws {
        *counts.entry(choose_species(&catalog, 100, &cond, &mut rng).id).or_default() += 1;
    }

    for (id, weight) in [("a", 100.0), ("b", 15.0), ("c", 5.0)] {
        let observed = counts.get(id).copied().unwrap_or(0) as f64 / draws as f64;
        let expected = weight / 120.0;
        assert!(
            (observed - expected).abs() < 0.015,
            "{}: observed {:.4}, expected {:.4}",
            id,
            observed,
            expected
        );
    }
}

#[test]
fn test_roll_fifty_selects_first_band() {
    let a = plain_species("a", 100.0, 0);
    let b = plain_species("b", 15.0, 0);
    let weighted = vec![(&a, 100.0), (&b, 15.0)];
    assert_eq!(pick_weighted(&weighted, 50.0).map(|s| s.id), Some("a"));
    assert_eq!(pick_weighted(&weighted, 100.0).map(|s| s.id), Some("b"));
}

#[test]
fn test_clear_afternoon_short_cast_scenario() {
    let catalog = SpeciesCatalog::default();
    let cond = conditions(Weather::Clear, 14.0);
    assert_eq!(cond.day_phase, DayPhase::Day);

    let eligible = eligible_species(&catalog, 50, &cond);
    assert!(eligible
        .iter()
        .all(|s| s.required_time != Some(DayPhase::Night)));
    // Goldfish and Neon Tetra are the only reachable species
    let ids: Vec<&str> = eligible.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["common", "blue"]);
}

// ============================================================================
// Eligibility & Fallback
// ============================================================================

#[test]
fn test_fallback_chosen_when_every_species_is_out_of_reach() {
    let mut rng = create_test_rng();
    let catalog = SpeciesCatalog::new(vec![
        plain_species("far", 10.0, 200),
        plain_species("farther", 50.0, 300),
    ])
    .unwrap();
    let cond = conditions(Weather::Storm, 2.0);

    for distance in [0, 50, 199] {
        for _ in 0..200 {
            let species = choose_species(&catalog, distance, &cond, &mut rng);
            assert_eq!(species.id, "far");
        }
    }
}

#[test]
fn test_hooked_outcome_always_has_species() {
    let mut rng = create_test_rng();
    let catalog = SpeciesCatalog::default();
    let mut hooked = 0;
    for _ in 0..5_000 {
        let distance = rng.gen_range(0..400);
        let weather = Weather::ALL[rng.gen_range(0..4)];
        let cond = conditions(weather, rng.gen_range(0.0..24.0));
        if let BiteOutcome::Hooked(species) = resolve_bite(&catalog, distance, &cond, &mut rng) {
            assert!(species.min_cast_distance <= distance || species.id == "common");
            hooked += 1;
        }
    }
    assert!(hooked > 0);
}

#[test]
fn test_enchant_gated_species_need_enchant() {
    let mut rng = create_test_rng();
    let catalog = SpeciesCatalog::default();
    let mut cond = conditions(Weather::Storm, 2.0);

    for _ in 0..3_000 {
        let species = choose_species(&catalog, 400, &cond, &mut rng);
        assert!(species.required_enchant.is_none());
    }

    cond.enchant = Some(EnchantId::Ancient);
    let eligible = eligible_species(&catalog, 400, &cond);
    assert!(eligible.iter().any(|s| s.id == "dragon_mutant"));
    assert!(eligible.iter().any(|s| s.id == "dragon"));
}

#[test]
fn test_lucky_waters_shifts_mix_toward_hard_species() {
    let catalog = SpeciesCatalog::default();
    let base = conditions(Weather::Clear, 12.0);
    let lucky = CatchConditions {
        event: Some(EventKind::LuckyWaters),
        ..base
    };

    let hard_share = |cond: &CatchConditions| {
        let mut rng = create_test_rng();
        let hard = (0..10_000)
            .filter(|_| choose_species(&catalog, 300, cond, &mut rng).difficulty >= 5)
            .count();
        hard as f64 / 10_000.0
    };

    assert!(hard_share(&lucky) > hard_share(&base));
}

// ============================================================================
// Bite Timing
// ============================================================================

#[test]
fn test_feeding_frenzy_halves_max_delay() {
    for weather in Weather::ALL {
        assert_eq!(
            max_bite_delay_ms(weather, Some(EventKind::FeedingFrenzy)),
            max_bite_delay_ms(weather, None) * 0.5
        );
    }
}

#[test]
fn test_bite_delay_bounds_under_frenzy_storm() {
    let mut rng = create_test_rng();
    // 1500ms halved is 750ms, below the 1000ms floor
    for _ in 0..1_000 {
        let delay =
            roll_bite_delay_ms(Weather::Storm, Some(EventKind::FeedingFrenzy), &mut rng);
        assert!((750.0..=1000.0).contains(&delay));
    }
}
