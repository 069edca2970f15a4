//! Session orchestration: the cast/bite/reel state machine, reward
//! application, auto-play, and the renderer seam.

#![allow(unused_imports)]

pub mod autoplay;
pub mod logic;
pub mod rig;
pub mod types;

pub use autoplay::*;
pub use logic::*;
pub use rig::*;
pub use types::*;
