//! Timed global events (Gold Rush, Lucky Waters, Feeding Frenzy) and the
//! rotating fetch mission.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
