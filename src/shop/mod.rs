//! Shop: rod upgrades, enchant rolls, boats, rod skins, and selling fish.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
