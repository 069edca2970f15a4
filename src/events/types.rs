//! Timed global events and the rotating fetch mission.

use crate::core::constants::{
    FEEDING_FRENZY_DURATION_MS, GOLD_RUSH_DURATION_MS, LUCKY_WATERS_DURATION_MS,
    STARTING_MISSION_REQUIRED, STARTING_MISSION_REWARD,
};
use crate::fishing::Species;
use serde::{Deserialize, Serialize};

/// The fixed event catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// Catch value x1.5.
    GoldRush,
    /// Weight x2.5 for difficulty 5+ species.
    LuckyWaters,
    /// Bite delay cap halved.
    FeedingFrenzy,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [
        EventKind::GoldRush,
        EventKind::LuckyWaters,
        EventKind::FeedingFrenzy,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EventKind::GoldRush => "Gold Rush",
            EventKind::LuckyWaters => "Lucky Waters",
            EventKind::FeedingFrenzy => "Feeding Frenzy",
        }
    }

    pub fn duration_ms(&self) -> i64 {
        match self {
            EventKind::GoldRush => GOLD_RUSH_DURATION_MS,
            EventKind::LuckyWaters => LUCKY_WATERS_DURATION_MS,
            EventKind::FeedingFrenzy => FEEDING_FRENZY_DURATION_MS,
        }
    }
}

/// An in-flight event. Expires once `now > ends_at_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEvent {
    pub kind: EventKind,
    pub name: String,
    /// Unix milliseconds.
    pub ends_at_ms: i64,
}

impl ActiveEvent {
    pub fn start(kind: EventKind, now_ms: i64) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            ends_at_ms: now_ms + kind.duration_ms(),
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.ends_at_ms
    }

    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        (self.ends_at_ms - now_ms).max(0)
    }
}

/// What an event check did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventChange {
    Started(ActiveEvent),
    Ended(EventKind),
}

/// A fetch goal: catch `required` of one species for a lump reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub target_species_id: String,
    pub target_name: String,
    pub required: u32,
    pub count: u32,
    pub reward_gold: u64,
}

impl Default for Mission {
    /// The first mission every new profile starts with.
    fn default() -> Self {
        Self {
            target_species_id: "common".to_string(),
            target_name: "Goldfish".to_string(),
            required: STARTING_MISSION_REQUIRED,
            count: 0,
            reward_gold: STARTING_MISSION_REWARD,
        }
    }
}

impl Mission {
    /// The opening mission aimed at `species`.
    pub fn starter(species: &Species) -> Self {
        Self {
            target_species_id: species.id.to_string(),
            target_name: species.display_name.to_string(),
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.count >= self.required
    }

    /// Short status line, e.g. `Catch Goldfish (1/3) - 300g`.
    pub fn summary(&self) -> String {
        format!(
            "Catch {} ({}/{}) - {}g",
            self.target_name, self.count, self.required, self.reward_gold
        )
    }
}

/// Effect of a successful catch on the current mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionProgress {
    /// The catch was not the mission's target.
    Unaffected,
    Advanced { count: u32, required: u32 },
    /// Requirement reached; the caller grants the reward and replaces the
    /// mission.
    Completed { reward_gold: u64 },
}
