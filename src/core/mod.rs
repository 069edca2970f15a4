//! Core: tuning constants, the player profile, and profile storage.

#![allow(unused_imports)]

pub mod constants;
pub mod persistence;
pub mod profile;

pub use constants::*;
pub use persistence::*;
pub use profile::*;
