//! Balance simulator for Monte Carlo analysis.
//!
//! Runs headless auto-play sessions to analyze:
//! - Catch rates and the species mix
//! - Skill-check landing rates
//! - Gold income, rod upgrade pacing, and mission payouts
//!
//! The simulator drives the real `Session`, so results match gameplay.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
