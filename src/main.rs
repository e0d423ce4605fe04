//! String Evolve CLI - Evolve a random string until it matches the argument.

use std::ffi::OsString;

use string_evolve::{SearchConfig, SearchEngine};

fn main() {
    env_logger::init();

    // Targets are arbitrary bytes, so arguments need not be valid UTF-8.
    let args: Vec<OsString> = std::env::args_os().collect();

    if args.len() != 2 {
        let program = args
            .first()
            .map(|arg| arg.to_string_lossy())
            .unwrap_or_else(|| "string-evolve".into());
        eprintln!("usage: {} string_to_search_for", program);
        std::process::exit(1);
    }

    let target = args[1].as_encoded_bytes();

    let mut engine = SearchEngine::new(SearchConfig::default(), target).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let outcome = engine.run_with_callback(|report| {
        println!(
            "generation {}: fitness {}",
            report.generation, report.best_fitness
        );
    });

    if !outcome.converged() {
        eprintln!(
            "Did not converge after {} generations (best fitness {})",
            outcome.stats.generations, outcome.best_fitness
        );
        std::process::exit(1);
    }

    println!("{}", outcome.stats.generations);
}
