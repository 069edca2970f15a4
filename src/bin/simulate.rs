//! Fishing balance simulator CLI.
//!
//! Runs headless auto-play sessions and reports catch and economy stats.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 100 one-hour sessions
//!   cargo run --bin simulate -- -n 20 -m 10       # 20 ten-minute sessions
//!   cargo run --bin simulate -- --seed 42 --json  # Reproducible, JSON saved
//!
//! Set `RUST_LOG=driftline=debug` to watch state transitions.

use driftline::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              DRIFTLINE BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Session:        {} min", config.session_seconds / 60);
    println!("  Tick:           {} ms", config.tick_ms);
    println!("  Starting Rod:   {}", config.starting_rod_level);
    println!("  Sell Catches:   {}", config.sell_catches);
    println!("  Buy Upgrades:   {}", config.buy_upgrades);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig {
        start_ms: chrono::Utc::now().timestamp_millis(),
        ..SimConfig::default()
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-m" | "--minutes" => {
                if i + 1 < args.len() {
                    let minutes: u64 = args[i + 1].parse().unwrap_or(60);
                    config.session_seconds = minutes.saturating_mul(60);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    // Pin the clock too so seeded runs repeat exactly
                    config.start_ms = 0;
                    i += 1;
                }
            }
            "-t" | "--tick" => {
                if i + 1 < args.len() {
                    config.tick_ms = args[i + 1].parse().unwrap_or(16);
                    i += 1;
                }
            }
            "-r" | "--rod" => {
                if i + 1 < args.len() {
                    config.starting_rod_level = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--keep-fish" => {
                config.sell_catches = false;
            }
            "--no-upgrades" => {
                config.buy_upgrades = false;
            }
            "--hoard" => {
                let start_ms = config.start_ms;
                config = SimConfig {
                    start_ms,
                    ..SimConfig::hoarder()
                };
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Driftline Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated sessions (default: 100)");
    println!("    -m, --minutes <M>   Real minutes per session (default: 60)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --tick <MS>     Frame length in milliseconds (default: 16)");
    println!("    -r, --rod <L>       Starting rod level (default: 1)");
    println!("    --keep-fish         Keep catches instead of selling them");
    println!("    --no-upgrades       Never buy rod upgrades");
    println!("    --hoard             Keep fish and never upgrade");
    println!("    --json              Save the report as JSON");
    println!("    -v, --verbose       Print every run");
    println!("    -h, --help          Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_minutes_and_seed() {
        let config = parse_args(&args(&["-m", "5", "-s", "9"]));
        assert_eq!(config.session_seconds, 300);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.start_ms, 0);
    }

    #[test]
    fn test_huge_minutes_saturate() {
        let huge = u64::MAX.to_string();
        let config = parse_args(&args(&["-m", huge.as_str()]));
        assert_eq!(config.session_seconds, u64::MAX);
    }
}
