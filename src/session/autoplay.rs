//! Auto-play: casts after a pause in Idle and strikes shortly after a bite.
//! The reel game runs in auto mode while this is on.

use super::types::SessionState;
use crate::core::constants::{AUTO_CAST_DELAY_MS, AUTO_PULL_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAction {
    Cast,
    Pull,
}

/// What auto-play should do after waiting `waited_ms` in `state`.
pub fn next_auto_action(state: SessionState, waited_ms: f64) -> Option<AutoAction> {
    match state {
        SessionState::Idle if waited_ms >= AUTO_CAST_DELAY_MS => Some(AutoAction::Cast),
        SessionState::Bite if waited_ms >= AUTO_PULL_DELAY_MS => Some(AutoAction::Pull),
        _ => None,
    }
}
