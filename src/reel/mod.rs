//! Reel-in skill check: keep the bar over the fish until the meter fills.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
