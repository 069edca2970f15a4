//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Real seconds of auto-play per session
    pub session_seconds: u64,

    /// Frame length fed to the session tick
    pub tick_ms: u64,

    /// Rod level each session starts at
    pub starting_rod_level: u32,

    /// Sell every landed fish straight away
    pub sell_catches: bool,

    /// Spend gold on rod upgrades whenever affordable
    pub buy_upgrades: bool,

    /// Wall-clock start of each session, Unix milliseconds
    pub start_ms: i64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            session_seconds: 60 * 60,
            tick_ms: 16,
            starting_rod_level: 1,
            sell_catches: true,
            buy_upgrades: true,
            start_ms: 0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// A short, seeded config for smoke tests
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 3,
            seed: Some(seed),
            session_seconds: 5 * 60,
            tick_ms: 50,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Idle economy: keep every fish, never upgrade
    pub fn hoarder() -> Self {
        Self {
            sell_catches: false,
            buy_upgrades: false,
            ..Default::default()
        }
    }
}
