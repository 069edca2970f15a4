//! Day/night clock and weather transitions.
//!
//! The clock runs one in-game day per 1200 real seconds. Each whole-hour
//! boundary rolls a weather-transition check; lighting, fog and particles are
//! derived from the snapshot by the renderer.

use super::types::{ClockReport, Weather, WeatherState};
use crate::core::constants::{
    HOURS_PER_DAY, REAL_SECONDS_PER_GAME_DAY, STARTING_TIME_OF_DAY, WEATHER_CHANGE_CHANCE,
};
use rand::Rng;
use tracing::debug;

/// Hours of in-game time that pass per real second.
pub const HOURS_PER_REAL_SECOND: f64 = HOURS_PER_DAY / REAL_SECONDS_PER_GAME_DAY;

/// Owns the in-game time of day and the current weather.
#[derive(Debug, Clone)]
pub struct WeatherClock {
    time_of_day: f64,
    weather: Weather,
}

impl Default for WeatherClock {
    fn default() -> Self {
        Self::new(STARTING_TIME_OF_DAY, Weather::Clear)
    }
}

impl WeatherClock {
    /// Creates a clock at the given hour (wrapped into `[0, 24)`).
    pub fn new(time_of_day: f64, weather: Weather) -> Self {
        Self {
            time_of_day: wrap_hours(time_of_day),
            weather,
        }
    }

    pub fn snapshot(&self) -> WeatherState {
        WeatherState {
            time_of_day: self.time_of_day,
            weather: self.weather,
        }
    }

    pub fn time_of_day(&self) -> f64 {
        self.time_of_day
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    /// Forces the weather (debug menus and tests).
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
    }

    /// Advances the clock by `dt_secs` real seconds.
    ///
    /// Every whole-hour boundary crossed gets its own transition roll, so a
    /// large delta behaves the same as many small ones. Negative deltas are
    /// ignored.
    pub fn advance(&mut self, dt_secs: f64, rng: &mut impl Rng) -> ClockReport {
        let mut report = ClockReport::default();
        if !(dt_secs > 0.0) {
            return report;
        }

        let unwrapped = self.time_of_day + dt_secs * HOURS_PER_REAL_SECOND;
        let crossed = (unwrapped.floor() - self.time_of_day.floor()).max(0.0);
        report.hours_crossed = crossed.min(u32::MAX as f64) as u32;
        self.time_of_day = wrap_hours(unwrapped);

        for _ in 0..report.hours_crossed {
            if rng.gen::<f64>() < WEATHER_CHANGE_CHANCE {
                let previous = self.weather;
                self.weather = roll_weather(rng);
                if self.weather != previous {
                    report.weather_changed = true;
                }
            }
        }

        if report.weather_changed {
            debug!(weather = self.weather.name(), hour = self.time_of_day, "weather changed");
        }

        report
    }
}

/// Wraps an hour value into `[0, 24)`. Exactly 24.0 maps to 0.0.
pub fn wrap_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(HOURS_PER_DAY);
    if wrapped >= HOURS_PER_DAY || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

/// Samples a weather kind: Clear 50%, Cloudy 30%, Rain 15%, Storm 5%.
pub fn roll_weather(rng: &mut impl Rng) -> Weather {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for weather in Weather::ALL {
        cumulative += weather.transition_weight();
        if roll < cumulative {
            return weather;
        }
    }
    Weather::Storm
}
