//! Fishing: the species catalog, enchant pool, and catch resolution engine.

#![allow(unused_imports)]

pub mod bite;
pub mod catalog;

pub use bite::*;
pub use catalog::*;
