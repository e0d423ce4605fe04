//! Progress and result types reported by the search engine.

use serde::{Deserialize, Serialize};

/// Progress update emitted once per generation, after selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation number, starting at 1.
    pub generation: usize,
    /// Fitness of the best candidate.
    pub best_fitness: usize,
    /// Best candidate (population slot 0).
    pub best: Vec<u8>,
}

/// Current phase of the generation loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Population not yet filled with random parents.
    #[default]
    Init,
    /// Producing mutated and crossed offspring.
    Expand,
    /// Scoring every candidate against the target.
    Score,
    /// Keeping the fittest candidates as the next parents.
    Select,
    /// Slot 0 matches the target.
    Converged,
}

/// Reason the search stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// Best candidate equals the target.
    Converged,
    /// Reached the configured generation limit without a match.
    MaxGenerations,
}

/// Statistics from a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total generations run.
    pub generations: usize,
    /// Total fitness evaluations performed.
    pub total_evaluations: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Evaluations per second.
    pub evaluations_per_second: f64,
    /// Reason for stopping.
    pub stop_reason: StopReason,
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best candidate found.
    pub best: Vec<u8>,
    /// Its fitness.
    pub best_fitness: usize,
    /// Statistics from the run.
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn converged(&self) -> bool {
        self.stats.stop_reason == StopReason::Converged
    }
}
