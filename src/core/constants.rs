// Clock and weather
pub const REAL_SECONDS_PER_GAME_DAY: f64 = 1200.0;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const STARTING_TIME_OF_DAY: f64 = 8.0;
pub const WEATHER_CHANGE_CHANCE: f64 = 0.2;
pub const NIGHT_ENDS_HOUR: f64 = 6.0;
pub const NIGHT_STARTS_HOUR: f64 = 18.0;

// Casting
pub const CAST_DISTANCE_MIN: f64 = 40.0;
pub const CAST_DISTANCE_BASE_MAX: f64 = 320.0;
pub const CAST_DISTANCE_PER_ROD_LEVEL: f64 = 40.0;
pub const CAST_ANIMATION_MS: f64 = 900.0;
pub const NOTHING_BIT_RETURN_MS: f64 = 1000.0;

// Bite timing (milliseconds)
pub const BITE_DELAY_MIN_MS: f64 = 1000.0;
pub const BITE_DELAY_MAX_CALM_MS: f64 = 4000.0;
pub const BITE_DELAY_MAX_RAIN_MS: f64 = 2500.0;
pub const BITE_DELAY_MAX_STORM_MS: f64 = 1500.0;
pub const FEEDING_FRENZY_DELAY_FACTOR: f64 = 0.5;

// Bite chance
pub const BITE_BASE_CHANCE: f64 = 0.2;
pub const BITE_CHANCE_PER_ROD_LEVEL: f64 = 0.05;
pub const DISTANCE_PENALTY_FREE_RANGE: f64 = 100.0;
pub const DISTANCE_PENALTY_PER_UNIT: f64 = 0.001;

// Species weighting
pub const LUCKY_ENCHANT_DIFFICULTY_ABOVE: u8 = 3;
pub const LUCKY_ENCHANT_WEIGHT_MULT: f64 = 1.5;
pub const DEEP_ENCHANT_DISTANCE_ABOVE: u32 = 150;
pub const DEEP_ENCHANT_WEIGHT_MULT: f64 = 1.8;
pub const LUCKY_WATERS_MIN_DIFFICULTY: u8 = 5;
pub const LUCKY_WATERS_WEIGHT_MULT: f64 = 2.5;

// Skill-check track
pub const REEL_TRACK_HEIGHT: f64 = 200.0;
pub const REEL_TARGET_HEIGHT: f64 = 24.0;
pub const REEL_MAX_FRAME_SECS: f64 = 0.05;
pub const REEL_FRAMES_PER_SECOND: f64 = 60.0;
pub const REEL_OVERLAP_TOLERANCE: f64 = 4.0;
pub const REEL_STARTING_PROGRESS: f64 = 30.0;
pub const REEL_BAR_BASE_HEIGHT: f64 = 65.0;
pub const REEL_BAR_STEADY_HEIGHT: f64 = 85.0;
pub const REEL_BAR_MIN_HEIGHT: f64 = 40.0;
pub const REEL_BAR_SHRINK_PER_DIFFICULTY: f64 = 2.0;

// Skill-check player physics (per 60 Hz frame)
pub const REEL_GRAVITY: f64 = 0.9;
pub const REEL_BOOST: f64 = 1.5;
pub const REEL_STEADY_GRAVITY: f64 = 0.7;
pub const REEL_STEADY_BOOST: f64 = 1.2;
pub const REEL_BOOST_PER_ROD_LEVEL: f64 = 0.05;
pub const REEL_FRICTION: f64 = 0.93;
pub const REEL_BOUNCE_DAMPING: f64 = 0.5;
pub const REEL_AUTO_SMOOTHING: f64 = 0.15;

// Skill-check progress and time limit
pub const REEL_CATCH_RATE_BASE: f64 = 25.0;
pub const REEL_CATCH_RATE_PER_ROD_LEVEL: f64 = 3.0;
pub const REEL_DECAY_RATE_BASE: f64 = 5.0;
pub const REEL_DECAY_RATE_PER_DIFFICULTY: f64 = 1.8;
pub const REEL_TIME_LIMIT_BASE_SECS: f64 = 12.0;
pub const REEL_TIME_LIMIT_MIN_SECS: f64 = 8.0;
pub const REEL_TIME_LIMIT_PER_DIFFICULTY: f64 = 0.4;
pub const REEL_TIME_LIMIT_JITTER_SECS: f64 = 2.0;

// Target AI (timer counted in 60 Hz frames)
pub const TARGET_RETARGET_BASE_FRAMES: f64 = 40.0;
pub const TARGET_RETARGET_SPREAD_FRAMES: f64 = 100.0;
pub const TARGET_RETARGET_SPREAD_PER_DIFFICULTY: f64 = 7.0;
pub const TARGET_SPEED_BASE: f64 = 0.5;
pub const TARGET_SPEED_PER_DIFFICULTY: f64 = 0.25;
pub const TARGET_SPEED_JITTER: f64 = 0.4;
pub const TARGET_GLIDE_FACTOR: f64 = 2.0;
pub const TARGET_WOBBLE_FREQUENCY: f64 = 0.008;
pub const TARGET_WOBBLE_BASE: f64 = 1.5;
pub const TARGET_WOBBLE_PER_DIFFICULTY: f64 = 0.2;

// Catch value
pub const CATCH_VALUE_PER_ROD_LEVEL: f64 = 0.2;
pub const CATCH_VALUE_JITTER: f64 = 20.0;
pub const GOLD_RUSH_VALUE_MULT: f64 = 1.5;

// Events
pub const EVENT_CHECK_INTERVAL_MS: f64 = 5000.0;
pub const EVENT_START_CHANCE: f64 = 0.05;
pub const GOLD_RUSH_DURATION_MS: i64 = 2 * 60_000;
pub const LUCKY_WATERS_DURATION_MS: i64 = 3 * 60_000;
pub const FEEDING_FRENZY_DURATION_MS: i64 = 2 * 60_000;

// Missions (tuned constants, kept as-is)
pub const MISSION_MAX_DIFFICULTY_CAP: u8 = 10;
pub const MISSION_DIFFICULTY_HEADROOM: u32 = 2;
pub const MISSION_STARTER_MAX_DIFFICULTY: u8 = 1;
pub const MISSION_STARTER_REQUIRED: (u32, u32) = (2, 4);
pub const MISSION_REQUIRED: (u32, u32) = (3, 6);
pub const MISSION_EARLY_ROD_LEVEL: u32 = 3;
pub const MISSION_EARLY_REWARD_MULT: f64 = 2.0;
pub const MISSION_REWARD_MULT: f64 = 1.2;
pub const STARTING_MISSION_REQUIRED: u32 = 3;
pub const STARTING_MISSION_REWARD: u64 = 300;

// Auto-play driver
pub const AUTO_CAST_DELAY_MS: f64 = 1500.0;
pub const AUTO_PULL_DELAY_MS: f64 = 400.0;

// Economy
pub const STARTING_GOLD: u64 = 250;
pub const STARTING_ROD_LEVEL: u32 = 1;
pub const ROD_UPGRADE_BASE_PRICE: u64 = 100;
pub const ROD_UPGRADE_PRICE_PER_LEVEL: u64 = 120;
pub const ENCHANT_ROLL_PRICE: u64 = 250;

// Save system
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
pub const SAVE_FILE_NAME: &str = "profile.json";
