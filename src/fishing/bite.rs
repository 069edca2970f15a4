//! Catch resolution: bite timing, bite odds, eligibility and weighted species
//! selection.
//!
//! Neither "nothing bit" nor "nothing eligible" is an error. The first ends
//! the cast, the second falls back to the catalog's first species so a bite
//! always produces a fish.

use super::catalog::{EnchantId, Species, SpeciesCatalog};
use crate::core::constants::{
    BITE_BASE_CHANCE, BITE_CHANCE_PER_ROD_LEVEL, BITE_DELAY_MAX_CALM_MS, BITE_DELAY_MAX_RAIN_MS,
    BITE_DELAY_MAX_STORM_MS, BITE_DELAY_MIN_MS, DEEP_ENCHANT_DISTANCE_ABOVE,
    DEEP_ENCHANT_WEIGHT_MULT, DISTANCE_PENALTY_FREE_RANGE, DISTANCE_PENALTY_PER_UNIT,
    FEEDING_FRENZY_DELAY_FACTOR, LUCKY_ENCHANT_DIFFICULTY_ABOVE, LUCKY_ENCHANT_WEIGHT_MULT,
    LUCKY_WATERS_MIN_DIFFICULTY, LUCKY_WATERS_WEIGHT_MULT,
};
use crate::events::EventKind;
use crate::world::{DayPhase, Weather};
use rand::Rng;

/// Everything the catch engine reads from the live game, captured at the
/// moment of the roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchConditions {
    pub weather: Weather,
    pub day_phase: DayPhase,
    pub rod_level: u32,
    pub enchant: Option<EnchantId>,
    pub event: Option<EventKind>,
}

/// Result of a resolved bite timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BiteOutcome {
    /// Nothing took the hook; the cast ends.
    Nothing,
    Hooked(Species),
}

/// Upper bound of the bite delay in milliseconds.
///
/// Rain and storms make fish bolder; Feeding Frenzy halves whatever the
/// weather gives.
pub fn max_bite_delay_ms(weather: Weather, event: Option<EventKind>) -> f64 {
    let base = match weather {
        Weather::Clear | Weather::Cloudy => BITE_DELAY_MAX_CALM_MS,
        Weather::Rain => BITE_DELAY_MAX_RAIN_MS,
        Weather::Storm => BITE_DELAY_MAX_STORM_MS,
    };
    if event == Some(EventKind::FeedingFrenzy) {
        base * FEEDING_FRENZY_DELAY_FACTOR
    } else {
        base
    }
}

/// Samples a bite delay uniformly between the 1s floor and the weather cap.
///
/// When the cap drops below the floor (storm + frenzy) the range runs the
/// other way, between the cap and the floor.
pub fn roll_bite_delay_ms(
    weather: Weather,
    event: Option<EventKind>,
    rng: &mut impl Rng,
) -> f64 {
    let max = max_bite_delay_ms(weather, event);
    let (lo, hi) = if max >= BITE_DELAY_MIN_MS {
        (BITE_DELAY_MIN_MS, max)
    } else {
        (max, BITE_DELAY_MIN_MS)
    };
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Probability (0-1) that something bites at the given cast distance.
pub fn bite_chance(rod_level: u32, cast_distance: u32) -> f64 {
    let base = BITE_BASE_CHANCE + rod_level as f64 * BITE_CHANCE_PER_ROD_LEVEL;
    let penalty =
        ((cast_distance as f64 - DISTANCE_PENALTY_FREE_RANGE) * DISTANCE_PENALTY_PER_UNIT).max(0.0);
    (base - penalty).clamp(0.0, 1.0)
}

/// Species that can bite at this distance under these conditions, in catalog
/// order. Never empty: falls back to the catalog's first species.
pub fn eligible_species<'a>(
    catalog: &'a SpeciesCatalog,
    cast_distance: u32,
    conditions: &CatchConditions,
) -> Vec<&'a Species> {
    let candidates: Vec<&Species> = catalog
        .all()
        .iter()
        .filter(|s| s.min_cast_distance <= cast_distance)
        .filter(|s| s.conditions_met(conditions.weather, conditions.day_phase, conditions.enchant))
        .collect();

    if candidates.is_empty() {
        vec![catalog.fallback()]
    } else {
        candidates
    }
}

/// Rarity weight after enchant and event multipliers.
pub fn effective_weight(species: &Species, conditions: &CatchConditions) -> f64 {
    let mut weight = species.rarity_weight;
    match conditions.enchant {
        Some(EnchantId::Lucky) if species.difficulty > LUCKY_ENCHANT_DIFFICULTY_ABOVE => {
            weight *= LUCKY_ENCHANT_WEIGHT_MULT;
        }
        Some(EnchantId::Deep) if species.min_cast_distance > DEEP_ENCHANT_DISTANCE_ABOVE => {
            weight *= DEEP_ENCHANT_WEIGHT_MULT;
        }
        _ => {}
    }
    if conditions.event == Some(EventKind::LuckyWaters)
        && species.difficulty >= LUCKY_WATERS_MIN_DIFFICULTY
    {
        weight *= LUCKY_WATERS_WEIGHT_MULT;
    }
    weight
}

/// Picks the species whose cumulative weight band contains `roll`.
///
/// `roll` is expected in `[0, total_weight)`. Bands are laid out in slice
/// order and the first band containing the roll wins. Out-of-range rolls
/// land on the first entry, matching an empty walk.
pub fn pick_weighted<'a>(weighted: &[(&'a Species, f64)], roll: f64) -> Option<&'a Species> {
    let (first, _) = weighted.first()?;
    let mut remaining = roll;
    for (species, weight) in weighted {
        if remaining < *weight {
            return Some(*species);
        }
        remaining -= weight;
    }
    Some(*first)
}

/// Weighted random choice over the eligible species.
pub fn choose_species(
    catalog: &SpeciesCatalog,
    cast_distance: u32,
    conditions: &CatchConditions,
    rng: &mut impl Rng,
) -> Species {
    let weighted: Vec<(&Species, f64)> = eligible_species(catalog, cast_distance, conditions)
        .into_iter()
        .map(|s| (s, effective_weight(s, conditions)))
        .collect();

    let total: f64 = weighted.iter().map(|(_, w)| w).sum();
    let roll = if total > 0.0 {
        rng.gen_range(0.0..total)
    } else {
        0.0
    };

    pick_weighted(&weighted, roll)
        .copied()
        .unwrap_or(*catalog.fallback())
}

/// Rolls the bite and, on success, the species.
pub fn resolve_bite(
    catalog: &SpeciesCatalog,
    cast_distance: u32,
    conditions: &CatchConditions,
    rng: &mut impl Rng,
) -> BiteOutcome {
    let chance = bite_chance(conditions.rod_level, cast_distance);
    if rng.gen::<f64>() >= chance {
        return BiteOutcome::Nothing;
    }
    BiteOutcome::Hooked(choose_species(catalog, cast_distance, conditions, rng))
}
