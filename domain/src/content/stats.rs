//! Running counters for the statistics panel

use super::result::GenerationStatus;
use serde::{Deserialize, Serialize};

/// Generation counters for one process lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub total_runs: u64,
    pub successes: u64,
    pub simulations: u64,
    pub failures: u64,
}

impl GenerationStats {
    pub fn record(&mut self, status: GenerationStatus) {
        self.total_runs += 1;
        match status {
            GenerationStatus::Success => self.successes += 1,
            GenerationStatus::Simulation => self.simulations += 1,
        }
    }

    /// A run that ended in an error with no fallback
    pub fn record_failure(&mut self) {
        self.total_runs += 1;
        self.failures += 1;
    }

    /// Percentage of runs that produced real content (0 when nothing ran)
    pub fn success_rate(&self) -> f64 {
        if self.total_runs == 0 {
            return 0.0;
        }
        self.successes as f64 * 100.0 / self.total_runs as f64
    }
}
