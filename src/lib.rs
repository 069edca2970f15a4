//! Driftline - Casual Fishing Simulation Library
//!
//! A day/weather cycle decides which fish are about, a weighted catch engine
//! decides what bites, and a real-time reel-in decides whether it is landed.
//! The session state machine ties these together and reports what happened
//! as plain events, so any front end can drive it.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod core;
pub mod events;
pub mod fishing;
pub mod reel;
pub mod session;
pub mod shop;
pub mod simulator;
pub mod world;
