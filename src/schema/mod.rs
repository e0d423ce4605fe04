//! Schema module - Configuration and reporting types for the string search.

mod config;
mod progress;

pub use config::*;
pub use progress::*;
