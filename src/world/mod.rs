//! Clock & weather: the 24-hour day cycle and discrete weather state that
//! every other system reads.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
