//! Simulation report generation.

use crate::session::{SessionEvent, SessionState};
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics from one simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub casts: u32,
    pub bites: u32,
    pub catches: u32,
    pub escapes: u32,
    pub species_counts: BTreeMap<String, u32>,
    pub catch_value_total: u64,
    pub biggest_catch_value: u64,
    pub missions_completed: u32,
    pub mission_gold: u64,
    pub events_started: u32,
    pub rod_upgrades: u32,
    pub gold_spent_on_upgrades: u64,
    pub final_gold: u64,
    pub net_gold: i64,
    pub final_rod_level: u32,
    pub max_distance: u32,
    /// Value of unsold fish left in the bucket
    pub bucket_value: u64,
    pub autosaves: u32,
}

impl RunStats {
    /// Folds one session event into the counters.
    pub fn record_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::CatchResult {
                species: Some(species),
                value,
            } => {
                self.catches += 1;
                *self.species_counts.entry(species.id.to_string()).or_insert(0) += 1;
                self.catch_value_total += value;
                self.biggest_catch_value = self.biggest_catch_value.max(*value);
            }
            SessionEvent::CatchResult { species: None, .. } => self.escapes += 1,
            SessionEvent::StateChanged(SessionState::Bite) => self.bites += 1,
            SessionEvent::MissionCompleted { reward_gold, .. } => {
                self.missions_completed += 1;
                self.mission_gold += reward_gold;
            }
            SessionEvent::EventStarted(_) => self.events_started += 1,
            _ => {}
        }
    }
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    // Fishing
    pub avg_casts: f64,
    pub avg_catches: f64,
    pub avg_escapes: f64,
    /// Bites per cast
    pub bite_rate: f64,
    /// Landed fish per reel-in
    pub landing_rate: f64,
    pub avg_catch_value: f64,
    pub avg_max_distance: f64,

    // Economy
    pub avg_final_gold: f64,
    pub avg_net_gold: f64,
    pub avg_final_rod_level: f64,
    pub avg_missions_completed: f64,
    pub avg_mission_gold: f64,
    pub avg_events_started: f64,

    /// Share of all catches per species id
    pub species_share: BTreeMap<String, f64>,

    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;

        let total_casts: u32 = runs.iter().map(|r| r.casts).sum();
        let total_bites: u32 = runs.iter().map(|r| r.bites).sum();
        let total_catches: u32 = runs.iter().map(|r| r.catches).sum();
        let total_escapes: u32 = runs.iter().map(|r| r.escapes).sum();
        let total_value: u64 = runs.iter().map(|r| r.catch_value_total).sum();

        let mut species_totals: BTreeMap<String, u32> = BTreeMap::new();
        for run in &runs {
            for (id, count) in &run.species_counts {
                *species_totals.entry(id.clone()).or_insert(0) += count;
            }
        }
        let species_share = species_totals
            .into_iter()
            .map(|(id, count)| (id, count as f64 / total_catches.max(1) as f64))
            .collect();

        Self {
            num_runs,
            avg_casts: mean(&runs, |r| r.casts as f64),
            avg_catches: mean(&runs, |r| r.catches as f64),
            avg_escapes: mean(&runs, |r| r.escapes as f64),
            bite_rate: total_bites as f64 / total_casts.max(1) as f64,
            landing_rate: total_catches as f64 / (total_catches + total_escapes).max(1) as f64,
            avg_catch_value: total_value as f64 / total_catches.max(1) as f64,
            avg_max_distance: mean(&runs, |r| r.max_distance as f64),
            avg_final_gold: mean(&runs, |r| r.final_gold as f64),
            avg_net_gold: mean(&runs, |r| r.net_gold as f64),
            avg_final_rod_level: mean(&runs, |r| r.final_rod_level as f64),
            avg_missions_completed: mean(&runs, |r| r.missions_completed as f64),
            avg_mission_gold: mean(&runs, |r| r.mission_gold as f64),
            avg_events_started: mean(&runs, |r| r.events_started as f64),
            species_share,
            runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str("── FISHING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Casts:           {:.1}\n", self.avg_casts));
        report.push_str(&format!("  Bite Rate:           {:.1}%\n", self.bite_rate * 100.0));
        report.push_str(&format!("  Avg Catches:         {:.1}\n", self.avg_catches));
        report.push_str(&format!("  Landing Rate:        {:.1}%\n", self.landing_rate * 100.0));
        report.push_str(&format!("  Avg Catch Value:     {:.1}G\n", self.avg_catch_value));
        report.push_str(&format!("  Avg Longest Cast:    {:.0}ft\n\n", self.avg_max_distance));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Gold:      {:.0}\n", self.avg_final_gold));
        report.push_str(&format!("  Avg Net Gold:        {:.0}\n", self.avg_net_gold));
        report.push_str(&format!("  Avg Rod Level:       {:.1}\n", self.avg_final_rod_level));
        report.push_str(&format!("  Avg Missions:        {:.1}\n", self.avg_missions_completed));
        report.push_str(&format!("  Avg Mission Gold:    {:.0}\n", self.avg_mission_gold));
        report.push_str(&format!("  Avg Events Started:  {:.2}\n\n", self.avg_events_started));

        report.push_str("── SPECIES MIX ──────────────────────────────────────────────────\n");
        let mut shares: Vec<(&String, &f64)> = self.species_share.iter().collect();
        shares.sort_by(|a, b| b.1.total_cmp(a.1));
        for (id, share) in shares {
            let bar: String = "█".repeat((share * 40.0) as usize);
            report.push_str(&format!("  {:<16} {:>5.1}% {}\n", id, share * 100.0, bar));
        }

        if self.bite_rate < 0.05 {
            report.push_str("\n  ⚠️  Very few bites - cast penalty too steep?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
