//! Weather and day-cycle data structures.

use crate::core::constants::{NIGHT_ENDS_HOUR, NIGHT_STARTS_HOUR};
use serde::{Deserialize, Serialize};

/// Discrete weather kinds, in order of increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weather {
    Clear,
    Cloudy,
    Rain,
    Storm,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Clear,
        Weather::Cloudy,
        Weather::Rain,
        Weather::Storm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Cloudy => "Cloudy",
            Weather::Rain => "Rain",
            Weather::Storm => "Storm",
        }
    }

    /// Chance (0-1) of this weather being picked on a transition roll.
    pub fn transition_weight(&self) -> f64 {
        match self {
            Weather::Clear => 0.50,
            Weather::Cloudy => 0.30,
            Weather::Rain => 0.15,
            Weather::Storm => 0.05,
        }
    }
}

/// Coarse time-of-day used by species eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    /// Night runs from 18:00 (exclusive) to 06:00 (exclusive).
    pub fn from_hour(time_of_day: f64) -> Self {
        if time_of_day < NIGHT_ENDS_HOUR || time_of_day > NIGHT_STARTS_HOUR {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }
}

/// Read-only snapshot of the clock, handed to the renderer and to the
/// catch engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherState {
    /// Hours in `[0, 24)`.
    pub time_of_day: f64,
    pub weather: Weather,
}

impl WeatherState {
    pub fn day_phase(&self) -> DayPhase {
        DayPhase::from_hour(self.time_of_day)
    }

    pub fn is_night(&self) -> bool {
        self.day_phase() == DayPhase::Night
    }

    /// 12-hour clock label, e.g. `8:30 AM`.
    pub fn clock_label(&self) -> String {
        let hours = self.time_of_day.floor() as u32;
        let minutes = ((self.time_of_day - hours as f64) * 60.0).floor() as u32;
        let suffix = if hours >= 12 { "PM" } else { "AM" };
        let display = match hours % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display, minutes, suffix)
    }
}

/// What changed during one clock advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockReport {
    /// Number of whole-hour boundaries crossed.
    pub hours_crossed: u32,
    pub weather_changed: bool,
}

impl ClockReport {
    pub fn hour_changed(&self) -> bool {
        self.hours_crossed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_phase_boundaries() {
        assert_eq!(DayPhase::from_hour(0.0), DayPhase::Night);
        assert_eq!(DayPhase::from_hour(5.99), DayPhase::Night);
        assert_eq!(DayPhase::from_hour(6.0), DayPhase::Day);
        assert_eq!(DayPhase::from_hour(14.0), DayPhase::Day);
        assert_eq!(DayPhase::from_hour(18.0), DayPhase::Day);
        assert_eq!(DayPhase::from_hour(18.01), DayPhase::Night);
    }

    #[test]
    fn test_transition_weights_sum_to_one() {
        let total: f64 = Weather::ALL.iter().map(|w| w.transition_weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clock_label() {
        let state = WeatherState {
            time_of_day: 8.5,
            weather: Weather::Clear,
        };
        assert_eq!(state.clock_label(), "8:30 AM");

        let state = WeatherState {
            time_of_day: 0.25,
            weather: Weather::Rain,
        };
        assert_eq!(state.clock_label(), "12:15 AM");

        let state = WeatherState {
            time_of_day: 13.0,
            weather: Weather::Storm,
        };
        assert_eq!(state.clock_label(), "1:00 PM");
    }

    #[test]
    fn test_weather_serializes_screaming_case() {
        let json = serde_json::to_string(&Weather::Storm).unwrap();
        assert_eq!(json, "\"STORM\"");
    }
}
