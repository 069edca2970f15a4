//! Static species table and enchant pool.
//!
//! Species are declared rarest-last within each tier. Declaration order
//! matters: weighted selection walks the list in this order, and the first
//! entry is the fallback species when nothing else is eligible.

use crate::world::{DayPhase, Weather};
use serde::{Deserialize, Serialize};

/// Rod enchant identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnchantId {
    /// Boosts weight of harder species.
    Lucky,
    /// Boosts weight of far-water species.
    Deep,
    /// Wider, calmer reel bar.
    Steady,
    Golden,
    Ancient,
}

/// An entry in the enchant gacha pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enchant {
    pub id: EnchantId,
    pub display_name: &'static str,
    pub rarity_weight: f64,
}

pub const ENCHANT_POOL: [Enchant; 5] = [
    Enchant {
        id: EnchantId::Lucky,
        display_name: "Lucky",
        rarity_weight: 30.0,
    },
    Enchant {
        id: EnchantId::Deep,
        display_name: "Deep",
        rarity_weight: 25.0,
    },
    Enchant {
        id: EnchantId::Steady,
        display_name: "Steady",
        rarity_weight: 25.0,
    },
    Enchant {
        id: EnchantId::Golden,
        display_name: "Golden",
        rarity_weight: 15.0,
    },
    Enchant {
        id: EnchantId::Ancient,
        display_name: "Ancient",
        rarity_weight: 5.0,
    },
];

impl EnchantId {
    pub fn display_name(&self) -> &'static str {
        ENCHANT_POOL
            .iter()
            .find(|e| e.id == *self)
            .map(|e| e.display_name)
            .unwrap_or("Unknown")
    }
}

/// An immutable species definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    pub id: &'static str,
    pub display_name: &'static str,
    pub base_value: u32,
    /// Relative selection weight; lower is rarer.
    pub rarity_weight: f64,
    /// 1 (trivial) to 10 (brutal).
    pub difficulty: u8,
    pub min_cast_distance: u32,
    pub required_weather: Option<&'static [Weather]>,
    pub required_time: Option<DayPhase>,
    pub required_enchant: Option<&'static [EnchantId]>,
}

impl Species {
    /// True if the species' weather/time/enchant predicates all hold.
    /// Distance is checked separately by the catch engine.
    pub fn conditions_met(
        &self,
        weather: Weather,
        day_phase: DayPhase,
        enchant: Option<EnchantId>,
    ) -> bool {
        if let Some(required) = self.required_weather {
            if !required.contains(&weather) {
                return false;
            }
        }
        if let Some(required) = self.required_time {
            if required != day_phase {
                return false;
            }
        }
        if let Some(required) = self.required_enchant {
            match enchant {
                Some(id) if required.contains(&id) => {}
                _ => return false,
            }
        }
        true
    }
}

const fn species(
    id: &'static str,
    display_name: &'static str,
    base_value: u32,
    rarity_weight: f64,
    difficulty: u8,
    min_cast_distance: u32,
) -> Species {
    Species {
        id,
        display_name,
        base_value,
        rarity_weight,
        difficulty,
        min_cast_distance,
        required_weather: None,
        required_time: None,
        required_enchant: None,
    }
}

/// The default species table.
pub const SPECIES: [Species; 16] = [
    // Tier 1: common
    species("common", "Goldfish", 20, 100.0, 1, 0),
    Species {
        required_weather: Some(&[Weather::Rain, Weather::Storm]),
        ..species("common_mutant", "Toxic Goldfish", 50, 15.0, 3, 20)
    },
    // Tier 2: uncommon
    species("blue", "Neon Tetra", 60, 60.0, 2, 50),
    Species {
        required_time: Some(DayPhase::Night),
        ..species("blue_mutant", "Plasma Tetra", 120, 10.0, 4, 60)
    },
    // Tier 3: rare
    Species {
        required_time: Some(DayPhase::Day),
        ..species("rare", "Arowana", 180, 25.0, 4, 100)
    },
    Species {
        required_weather: Some(&[Weather::Cloudy, Weather::Storm]),
        ..species("rare_mutant", "Ghost Arowana", 350, 5.0, 6, 120)
    },
    // Tier 4: legendary
    Species {
        required_time: Some(DayPhase::Night),
        ..species("legend", "Coelacanth", 500, 10.0, 7, 200)
    },
    Species {
        required_enchant: Some(&[EnchantId::Lucky, EnchantId::Ancient, EnchantId::Deep]),
        ..species("legend_mutant", "Cursed Coelacanth", 900, 3.0, 8, 210)
    },
    // Tier 5: ancient
    Species {
        required_weather: Some(&[Weather::Rain, Weather::Storm]),
        ..species("ancient", "Dunkleosteus", 300, 8.0, 5, 180)
    },
    Species {
        required_time: Some(DayPhase::Day),
        ..species("ancient_mutant", "Magma Dunkleosteus", 700, 4.0, 7, 190)
    },
    // Tier 6: mythical
    Species {
        required_weather: Some(&[Weather::Cloudy, Weather::Rain]),
        ..species("mythical", "Leedsichthys", 400, 5.0, 6, 220)
    },
    // Tier 7: cosmic
    Species {
        required_time: Some(DayPhase::Night),
        ..species("cosmic", "Megalodon", 800, 3.0, 8, 280)
    },
    Species {
        required_enchant: Some(&[EnchantId::Deep, EnchantId::Ancient]),
        ..species("cosmic_mutant", "Abyssal Megalodon", 1500, 1.0, 9, 300)
    },
    // Tier 8: special
    Species {
        required_weather: Some(&[Weather::Clear]),
        ..species("rainbow", "Rainbow Trout", 1000, 2.0, 9, 150)
    },
    // Tier 9: dragon
    Species {
        required_weather: Some(&[Weather::Storm]),
        required_enchant: Some(&[EnchantId::Ancient, EnchantId::Lucky]),
        ..species("dragon", "Sea Dragon", 2500, 0.5, 10, 320)
    },
    Species {
        required_weather: Some(&[Weather::Storm]),
        required_enchant: Some(&[EnchantId::Ancient]),
        ..species("dragon_mutant", "Void Dragon", 5000, 0.1, 10, 350)
    },
];

/// Ordered, immutable list of species. The first entry is the fallback.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    species: Vec<Species>,
}

impl Default for SpeciesCatalog {
    fn default() -> Self {
        Self {
            species: SPECIES.to_vec(),
        }
    }
}

impl SpeciesCatalog {
    /// Builds a catalog from an explicit list. Returns `None` for an empty
    /// list, since the catch engine needs a fallback species.
    pub fn new(species: Vec<Species>) -> Option<Self> {
        if species.is_empty() {
            None
        } else {
            Some(Self { species })
        }
    }

    pub fn all(&self) -> &[Species] {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// The species used when nothing else qualifies.
    pub fn fallback(&self) -> &Species {
        &self.species[0]
    }

    pub fn get(&self, id: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }
}
