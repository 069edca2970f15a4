//! Renderer seam. The session emits rig commands as events; a dispatcher
//! forwards them to whatever draws the rod and bobber.

use super::types::SessionEvent;

pub trait Rig {
    fn trigger_cast_animation(&mut self, distance: u32);
    fn reset_rig(&mut self);
    fn set_reeling_visual(&mut self, reeling: bool);
    /// Flips the boat lights and returns the new state.
    fn toggle_lights(&mut self) -> bool;
}

/// Forwards every rig command in `events` to `rig`, in order. Other events
/// are ignored.
pub fn apply_rig_events(rig: &mut impl Rig, events: &[SessionEvent]) {
    for event in events {
        match event {
            SessionEvent::CastAnimation { distance } => rig.trigger_cast_animation(*distance),
            SessionEvent::RigReset => rig.reset_rig(),
            SessionEvent::ReelingVisual(on) => rig.set_reeling_visual(*on),
            _ => {}
        }
    }
}

/// A rig with nothing to draw. Counts commands so headless runs can be
/// checked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessRig {
    pub lights_on: bool,
    pub reeling: bool,
    pub last_cast: Option<u32>,
    pub casts: u32,
    pub resets: u32,
}

impl Rig for HeadlessRig {
    fn trigger_cast_animation(&mut self, distance: u32) {
        self.casts += 1;
        self.last_cast = Some(distance);
    }

    fn reset_rig(&mut self) {
        self.resets += 1;
        self.reeling = false;
    }

    fn set_reeling_visual(&mut self, reeling: bool) {
        self.reeling = reeling;
    }

    fn toggle_lights(&mut self) -> bool {
        self.lights_on = !self.lights_on;
        self.lights_on
    }
}
