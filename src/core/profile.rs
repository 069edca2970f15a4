//! The durable player aggregate and its lenient JSON loader.

use crate::core::constants::{STARTING_GOLD, STARTING_ROD_LEVEL};
use crate::events::{ActiveEvent, Mission};
use crate::fishing::{EnchantId, Species, SpeciesCatalog};
use crate::shop::{BoatType, RodSkin};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;
use uuid::Uuid;

/// One landed fish in the bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub species_id: String,
    pub name: String,
    pub value: u64,
    pub caught_at_ms: i64,
}

impl InventoryItem {
    pub fn new(species_id: &str, name: &str, value: u64, caught_at_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            species_id: species_id.to_string(),
            name: name.to_string(),
            value,
            caught_at_ms,
        }
    }
}

/// Highest value seen for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestCatch {
    pub name: String,
    pub value: u64,
}

/// Highest value seen across all species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiggestCatch {
    pub name: String,
    pub value: u64,
    pub species_id: String,
}

/// Everything that survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerProfile {
    pub gold: u64,
    pub rod_level: u32,
    /// Farthest cast so far.
    pub max_distance: u32,
    pub inventory: Vec<InventoryItem>,
    pub equipped_enchant: Option<EnchantId>,
    /// Keyed by species id.
    pub best_catch: BTreeMap<String, BestCatch>,
    pub total_catches: u64,
    pub biggest_catch: Option<BiggestCatch>,
    pub current_mission: Mission,
    pub boat: BoatType,
    pub owned_boats: Vec<BoatType>,
    pub rod_skin: RodSkin,
    pub owned_skins: Vec<RodSkin>,
    pub active_event: Option<ActiveEvent>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            gold: STARTING_GOLD,
            rod_level: STARTING_ROD_LEVEL,
            max_distance: 0,
            inventory: Vec::new(),
            equipped_enchant: None,
            best_catch: BTreeMap::new(),
            total_catches: 0,
            biggest_catch: None,
            current_mission: Mission::default(),
            boat: BoatType::default(),
            owned_boats: vec![BoatType::default()],
            rod_skin: RodSkin::default(),
            owned_skins: vec![RodSkin::default()],
            active_event: None,
        }
    }
}

impl PlayerProfile {
    /// Parses a saved profile, keeping every well-formed field and falling
    /// back to defaults for the rest. Never fails: unreadable input yields
    /// the default profile.
    pub fn from_json_lenient(text: &str) -> Self {
        let input = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warn!("saved profile is not a JSON object, starting fresh");
                return Self::default();
            }
            Err(e) => {
                warn!(error = %e, "saved profile is not valid JSON, starting fresh");
                return Self::default();
            }
        };

        let mut merged = match serde_json::to_value(Self::default()) {
            Ok(Value::Object(map)) => map,
            _ => return Self::default(),
        };

        for (key, value) in input {
            if !merged.contains_key(&key) {
                continue;
            }
            let value = match key.as_str() {
                "inventory" => keep_valid_entries::<InventoryItem>(&key, value),
                "ownedBoats" => keep_valid_entries::<BoatType>(&key, value),
                "ownedSkins" => keep_valid_entries::<RodSkin>(&key, value),
                "bestCatch" => keep_valid_entries::<BestCatch>(&key, value),
                _ => value,
            };
            let mut candidate = merged.clone();
            candidate.insert(key.clone(), value);
            if Self::parse_map(candidate.clone()).is_some() {
                merged = candidate;
            } else {
                warn!(field = %key, "dropping malformed profile field");
            }
        }

        let mut profile = Self::parse_map(merged).unwrap_or_default();
        profile.normalize();
        profile
    }

    fn parse_map(map: Map<String, Value>) -> Option<Self> {
        serde_json::from_value(Value::Object(map)).ok()
    }

    /// Repairs values that parse but break invariants.
    fn normalize(&mut self) {
        self.rod_level = self.rod_level.max(STARTING_ROD_LEVEL);
        let mission = &self.current_mission;
        if mission.required == 0 || mission.is_complete() {
            warn!(mission = %mission.summary(), "saved mission can never pay out, resetting");
            self.current_mission = Mission::default();
        }
        for boat in [BoatType::default(), self.boat] {
            if !self.owned_boats.contains(&boat) {
                self.owned_boats.push(boat);
            }
        }
        for skin in [RodSkin::default(), self.rod_skin] {
            if !self.owned_skins.contains(&skin) {
                self.owned_skins.push(skin);
            }
        }
    }

    /// Replaces a mission whose target species is not in `catalog` with the
    /// starter mission for the catalog's fallback species.
    pub fn repair_mission(&mut self, catalog: &SpeciesCatalog) {
        if catalog.get(&self.current_mission.target_species_id).is_none() {
            warn!(
                target = %self.current_mission.target_species_id,
                "mission targets an unknown species, resetting"
            );
            self.current_mission = Mission::starter(catalog.fallback());
        }
    }

    /// Adds a landed fish and updates the catch records.
    pub fn record_catch(&mut self, species: &Species, value: u64, now_ms: i64) -> &InventoryItem {
        let is_best = self
            .best_catch
            .get(species.id)
            .map_or(true, |best| value > best.value);
        if is_best {
            self.best_catch.insert(
                species.id.to_string(),
                BestCatch {
                    name: species.display_name.to_string(),
                    value,
                },
            );
        }

        let is_biggest = self
            .biggest_catch
            .as_ref()
            .map_or(true, |biggest| value > biggest.value);
        if is_biggest {
            self.biggest_catch = Some(BiggestCatch {
                name: species.display_name.to_string(),
                value,
                species_id: species.id.to_string(),
            });
        }

        self.total_catches += 1;
        self.inventory
            .push(InventoryItem::new(species.id, species.display_name, value, now_ms));
        &self.inventory[self.inventory.len() - 1]
    }

    /// Total sale value of the bucket.
    pub fn inventory_value(&self) -> u64 {
        self.inventory.iter().map(|item| item.value).sum()
    }
}

/// Keeps the array elements (or object values) that parse as `T`.
fn keep_valid_entries<T: DeserializeOwned>(field: &str, value: Value) -> Value {
    let parses = |entry: &Value| serde_json::from_value::<T>(entry.clone()).is_ok();
    match value {
        Value::Array(items) => {
            let total = items.len();
            let kept: Vec<Value> = items.into_iter().filter(|item| parses(item)).collect();
            if kept.len() < total {
                warn!(field, dropped = total - kept.len(), "dropping malformed profile entries");
            }
            Value::Array(kept)
        }
        Value::Object(entries) => {
            let total = entries.len();
            let kept: Map<String, Value> =
                entries.into_iter().filter(|(_, entry)| parses(entry)).collect();
            if kept.len() < total {
                warn!(field, dropped = total - kept.len(), "dropping malformed profile entries");
            }
            Value::Object(kept)
        }
        other => other,
    }
}
