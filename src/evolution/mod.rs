//! Evolutionary search for a target string.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Fitness** (`fitness`): count of positions matching the target
//! - **Candidate Operations** (`genome`): random characters, mutation, crossover
//! - **Search Loop** (`search`): population arena, truncation selection, engine
//!
//! Each generation every parent is mutated `mutations_per_parent` times, every
//! unordered pair of parents is crossed once, the whole pool is scored, and the
//! `beam_width` fittest become the next parents. The loop ends when the best
//! candidate equals the target.
//!
//! # Example
//!
//! ```rust,no_run
//! use string_evolve::evolution::SearchEngine;
//! use string_evolve::schema::{CharacterSet, SearchConfig};
//!
//! let config = SearchConfig {
//!     alphabet: CharacterSet::Uppercase,
//!     ..Default::default()
//! };
//!
//! let mut engine = SearchEngine::new(config, "HELLO").unwrap();
//! let outcome = engine.run_with_callback(|report| {
//!     println!("generation {}: fitness {}", report.generation, report.best_fitness);
//! });
//!
//! println!("{}", outcome.stats.generations);
//! ```

mod fitness;
mod genome;
mod search;

pub use fitness::{FitnessEvaluator, fitness};
pub use genome::{CandidateRng, seed_from_clock};
pub use search::{Population, SearchEngine, SearchError, Slot, select_top};
