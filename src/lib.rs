//! String Evolve - Evolutionary search for a target string.
//!
//! This crate finds a target string by simulated evolution: a small beam of
//! candidate strings is repeatedly mutated and recombined, every candidate is
//! scored by how many positions match the target, and only the fittest
//! survive into the next generation.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and reporting types
//! - `evolution`: Operators, fitness and the generation loop
//!
//! # Example
//!
//! ```rust,no_run
//! use string_evolve::{SearchConfig, SearchEngine};
//!
//! let mut engine = SearchEngine::new(SearchConfig::default(), "hello").unwrap();
//! let outcome = engine.run();
//!
//! println!("Converged after {} generations", outcome.stats.generations);
//! ```

pub mod evolution;
pub mod schema;

// Re-export commonly used types
pub use evolution::{SearchEngine, SearchError};
pub use schema::{CharacterSet, GenerationReport, SearchConfig, SearchOutcome, StopReason};
