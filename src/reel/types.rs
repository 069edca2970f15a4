//! Reel-in skill check data structures.
//!
//! A 1-D track of height 200. The player's bar rises while the input is
//! held and sinks when released; the fish's target zone wanders on its own.
//! Keeping the bar over the fish fills the progress meter.

use crate::core::constants::{
    REEL_BAR_BASE_HEIGHT, REEL_BAR_MIN_HEIGHT, REEL_BAR_SHRINK_PER_DIFFICULTY,
    REEL_BAR_STEADY_HEIGHT, REEL_BOOST, REEL_BOOST_PER_ROD_LEVEL, REEL_CATCH_RATE_BASE,
    REEL_CATCH_RATE_PER_ROD_LEVEL, REEL_DECAY_RATE_BASE, REEL_DECAY_RATE_PER_DIFFICULTY,
    REEL_GRAVITY, REEL_STARTING_PROGRESS, REEL_STEADY_BOOST, REEL_STEADY_GRAVITY,
    REEL_TARGET_HEIGHT, REEL_TIME_LIMIT_BASE_SECS, REEL_TIME_LIMIT_JITTER_SECS,
    REEL_TIME_LIMIT_MIN_SECS, REEL_TIME_LIMIT_PER_DIFFICULTY, REEL_TRACK_HEIGHT,
};
use crate::fishing::EnchantId;
use rand::Rng;

/// Outcome of a finished reel-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelResult {
    Landed,
    Escaped,
}

/// Tuning re-derived from the live profile every tick, so a rod upgrade or
/// enchant swap mid-fight applies on the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelParams {
    pub difficulty: u8,
    pub rod_level: u32,
    pub enchant: Option<EnchantId>,
    /// Auto-play: the bar tracks the fish instead of following physics.
    pub auto: bool,
}

impl ReelParams {
    pub fn steady(&self) -> bool {
        self.enchant == Some(EnchantId::Steady)
    }

    pub fn bar_height(&self) -> f64 {
        let base = if self.steady() {
            REEL_BAR_STEADY_HEIGHT
        } else {
            REEL_BAR_BASE_HEIGHT
        };
        (base - self.difficulty as f64 * REEL_BAR_SHRINK_PER_DIFFICULTY).max(REEL_BAR_MIN_HEIGHT)
    }

    /// Downward pull per 60 Hz frame while released.
    pub fn gravity(&self) -> f64 {
        if self.steady() {
            REEL_STEADY_GRAVITY
        } else {
            REEL_GRAVITY
        }
    }

    /// Upward push per 60 Hz frame while held.
    pub fn boost(&self) -> f64 {
        let base = if self.steady() {
            REEL_STEADY_BOOST
        } else {
            REEL_BOOST
        };
        base + self.rod_level as f64 * REEL_BOOST_PER_ROD_LEVEL
    }

    /// Progress gained per second of overlap.
    pub fn catch_rate(&self) -> f64 {
        REEL_CATCH_RATE_BASE + self.rod_level as f64 * REEL_CATCH_RATE_PER_ROD_LEVEL
    }

    /// Progress lost per second off target.
    pub fn decay_rate(&self) -> f64 {
        REEL_DECAY_RATE_BASE + self.difficulty as f64 * REEL_DECAY_RATE_PER_DIFFICULTY
    }
}

/// Samples the time limit: `max(8, 12 - 0.4*difficulty + U(0,2))` seconds.
pub fn roll_time_limit(difficulty: u8, rng: &mut impl Rng) -> f64 {
    let jitter = rng.gen_range(0.0..REEL_TIME_LIMIT_JITTER_SECS);
    (REEL_TIME_LIMIT_BASE_SECS - difficulty as f64 * REEL_TIME_LIMIT_PER_DIFFICULTY + jitter)
        .max(REEL_TIME_LIMIT_MIN_SECS)
}

/// Live state of one reel-in.
#[derive(Debug, Clone)]
pub struct ReelGame {
    pub game_result: Option<ReelResult>,

    // Player bar (bottom edge, track units; 0 = bottom)
    pub player_position: f64,
    pub player_velocity: f64,
    pub holding: bool,

    // Fish target zone (bottom edge)
    pub target_position: f64,
    /// Where the fish is currently gliding to.
    pub target_goal: f64,
    /// Frames (at 60 Hz) until the fish picks a new goal.
    pub target_timer: f64,
    pub target_speed: f64,

    /// 0-100. Starts at 30.
    pub progress: f64,
    pub time_limit: f64,
    pub time_remaining: f64,
    /// Seconds since start, drives the fish wobble.
    pub elapsed: f64,
    pub overlapping: bool,
}

impl ReelGame {
    pub fn new(difficulty: u8, rng: &mut impl Rng) -> Self {
        let time_limit = roll_time_limit(difficulty, rng);
        let center = REEL_TRACK_HEIGHT / 2.0;
        Self {
            game_result: None,
            player_position: 0.0,
            player_velocity: 0.0,
            holding: false,
            target_position: center,
            target_goal: center,
            target_timer: 0.0,
            target_speed: 0.0,
            progress: REEL_STARTING_PROGRESS,
            time_limit,
            time_remaining: time_limit,
            elapsed: 0.0,
            overlapping: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_result.is_some()
    }

    pub fn snapshot(&self, params: &ReelParams) -> ReelSnapshot {
        let bar_height = params.bar_height();
        ReelSnapshot {
            player_bottom: self.player_position,
            player_top: self.player_position + bar_height,
            target_position: self.target_position,
            target_height: REEL_TARGET_HEIGHT,
            track_height: REEL_TRACK_HEIGHT,
            progress: self.progress,
            time_remaining: self.time_remaining.max(0.0),
            overlapping: self.overlapping,
        }
    }
}

/// Read-only view for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelSnapshot {
    pub player_bottom: f64,
    pub player_top: f64,
    pub target_position: f64,
    pub target_height: f64,
    pub track_height: f64,
    pub progress: f64,
    pub time_remaining: f64,
    /// Drives the "on fish" feedback cue.
    pub overlapping: bool,
}
