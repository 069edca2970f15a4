//! Session state machine data and the outbound event stream.

use crate::events::{ActiveEvent, EventKind, Mission};
use crate::fishing::Species;
use crate::reel::ReelGame;
use crate::world::Weather;

/// Coarse session status, as the UI shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Idle,
    Casting,
    Floating,
    Bite,
    Pulling,
}

impl SessionState {
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Casting => "Casting",
            SessionState::Floating => "Floating",
            SessionState::Bite => "Bite",
            SessionState::Pulling => "Pulling",
        }
    }
}

/// The session state together with the data and countdowns it owns.
/// Leaving a phase drops its timers, so a stale timer can never fire.
#[derive(Debug, Clone)]
pub enum SessionPhase {
    Idle,
    /// Line in the air.
    Casting { distance: u32, remaining_ms: f64 },
    /// Bobber in the water, waiting on the bite roll.
    Floating { distance: u32, bite_in_ms: f64 },
    /// Nothing bit; the line comes back in before returning to Idle.
    Retrieving { remaining_ms: f64 },
    Bite { species: Species },
    Pulling { species: Species, game: Box<ReelGame> },
}

impl SessionPhase {
    pub fn state(&self) -> SessionState {
        match self {
            SessionPhase::Idle => SessionState::Idle,
            SessionPhase::Casting { .. } => SessionState::Casting,
            SessionPhase::Floating { .. } | SessionPhase::Retrieving { .. } => {
                SessionState::Floating
            }
            SessionPhase::Bite { .. } => SessionState::Bite,
            SessionPhase::Pulling { .. } => SessionState::Pulling,
        }
    }
}

/// Everything the session tells the outside world. The presentation layer
/// maps these to panels, toasts, and rig commands; game logic never touches
/// UI types.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Emitted whenever the in-game hour changes.
    WeatherUpdated { weather: Weather, time_of_day: f64 },
    StateChanged(SessionState),
    /// Landed (`Some`) or escaped (`None`, value 0).
    CatchResult { species: Option<Species>, value: u64 },
    Toast(String),

    // Rig commands
    CastAnimation { distance: u32 },
    RigReset,
    ReelingVisual(bool),

    EventStarted(ActiveEvent),
    EventEnded(EventKind),
    /// Reward already credited; `next` is the replacement mission.
    MissionCompleted { reward_gold: u64, next: Mission },
}

impl SessionEvent {
    pub fn toast(message: impl Into<String>) -> Self {
        SessionEvent::Toast(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieving_reports_floating() {
        let phase = SessionPhase::Retrieving { remaining_ms: 10.0 };
        assert_eq!(phase.state(), SessionState::Floating);
        assert_eq!(SessionPhase::Idle.state().label(), "Idle");
    }
}
