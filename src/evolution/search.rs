//! Beam search over candidate strings: expand, score, select, repeat.

use std::iter;
use std::time::Instant;

use log::{debug, info, trace};
use rand::prelude::*;

use crate::schema::{
    ConfigError, GenerationReport, SearchConfig, SearchOutcome, SearchPhase, SearchStats,
    StopReason,
};

use super::fitness::FitnessEvaluator;
use super::genome::{CandidateRng, seed_from_clock};

/// One population slot: a candidate and its most recent fitness.
///
/// Keeping both in one value means selection moves them together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub genes: Vec<u8>,
    pub fitness: usize,
}

/// Move the `count` fittest slots to the front, fitness-descending.
///
/// Partial selection sort: each rank takes the first maximum found among the
/// remaining slots, so ties keep their original order.
pub fn select_top(slots: &mut [Slot], count: usize) {
    let count = count.min(slots.len());
    for rank in 0..count {
        let mut best = rank;
        for (index, slot) in slots.iter().enumerate().skip(rank + 1) {
            if slot.fitness > slots[best].fitness {
                best = index;
            }
        }
        slots.swap(rank, best);
    }
}

/// Fixed-capacity arena of candidate slots.
///
/// Slots `[0, beam_width)` are the parents of the current generation; the rest
/// hold that generation's offspring and are overwritten every step.
#[derive(Debug, Clone)]
pub struct Population {
    slots: Vec<Slot>,
    beam_width: usize,
}

impl Population {
    fn new(config: &SearchConfig) -> Self {
        Self {
            slots: vec![Slot::default(); config.population_size()],
            beam_width: config.beam_width,
        }
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn parents(&self) -> &[Slot] {
        &self.slots[..self.beam_width]
    }

    pub fn offspring(&self) -> &[Slot] {
        &self.slots[self.beam_width..]
    }

    /// Slot 0: the best candidate after selection.
    pub fn best(&self) -> &Slot {
        &self.slots[0]
    }

    fn parents_mut(&mut self) -> &mut [Slot] {
        &mut self.slots[..self.beam_width]
    }

    fn split_mut(&mut self) -> (&mut [Slot], &mut [Slot]) {
        self.slots.split_at_mut(self.beam_width)
    }
}

/// Errors raised when constructing a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Target byte {byte:#04x} at position {position} is not in the alphabet")]
    UnreachableTarget { position: usize, byte: u8 },
}

/// Evolution engine that runs the search.
pub struct SearchEngine<R = StdRng> {
    config: SearchConfig,
    rng: CandidateRng<R>,
    evaluator: FitnessEvaluator,
    population: Population,
    generation: usize,
    phase: SearchPhase,
    seed: Option<u64>,
}

impl SearchEngine<StdRng> {
    /// Create a search for `target`, seeded from `config.random_seed` or the
    /// system clock.
    pub fn new(config: SearchConfig, target: impl Into<Vec<u8>>) -> Result<Self, SearchError> {
        let seed = config.random_seed.unwrap_or_else(seed_from_clock);
        let mut engine = Self::with_rng(config, target, StdRng::seed_from_u64(seed))?;
        engine.seed = Some(seed);
        Ok(engine)
    }
}

impl<R: Rng> SearchEngine<R> {
    /// Create a search driven by an arbitrary generator.
    /// `config.random_seed` is ignored.
    pub fn with_rng(
        config: SearchConfig,
        target: impl Into<Vec<u8>>,
        rng: R,
    ) -> Result<Self, SearchError> {
        config.validate()?;

        let target = target.into();
        if let Some((position, &byte)) = target
            .iter()
            .enumerate()
            .find(|(_, byte)| !config.alphabet.contains(**byte))
        {
            return Err(SearchError::UnreachableTarget { position, byte });
        }

        Ok(Self {
            rng: CandidateRng::from_rng(rng, config.alphabet.clone()),
            evaluator: FitnessEvaluator::new(target),
            population: Population::new(&config),
            generation: 0,
            phase: SearchPhase::Init,
            seed: None,
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn target(&self) -> &[u8] {
        self.evaluator.target()
    }

    /// Seed of the internal generator, when it was created by [`SearchEngine::new`].
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn best(&self) -> &Slot {
        self.population.best()
    }

    /// Fill the parent slots with random candidates and reset the counter.
    ///
    /// An empty target is matched by the empty candidate, so the search is
    /// converged straight away.
    pub fn initialize(&mut self) {
        let length = self.evaluator.max_fitness();
        for slot in self.population.parents_mut() {
            self.rng.fill_random(&mut slot.genes, length);
            slot.fitness = 0;
        }
        self.generation = 0;

        self.phase = if length == 0 {
            SearchPhase::Converged
        } else {
            SearchPhase::Expand
        };
    }

    /// Produce offspring into the scratch slots: mutations of every parent
    /// first, then one crossover per unordered pair of parents.
    fn expand(&mut self) {
        self.phase = SearchPhase::Expand;

        let mutations = self.config.mutations_per_parent;
        let (parents, offspring) = self.population.split_mut();
        let parents: &[Slot] = parents;
        let (mutated, crossed) = offspring.split_at_mut(parents.len() * mutations);

        let mutation_parents = parents
            .iter()
            .flat_map(|parent| iter::repeat_n(parent, mutations));
        for (child, parent) in mutated.iter_mut().zip(mutation_parents) {
            self.rng.mutate_into(&parent.genes, &mut child.genes);
        }

        let pairs = parents.iter().enumerate().flat_map(move |(i, first)| {
            parents[i + 1..].iter().map(move |second| (first, second))
        });
        for (child, (first, second)) in crossed.iter_mut().zip(pairs) {
            self.rng
                .crossover_into(&first.genes, &second.genes, &mut child.genes);
        }
    }

    /// Score every slot, parents included.
    fn score(&mut self) {
        self.phase = SearchPhase::Score;
        for slot in &mut self.population.slots {
            slot.fitness = self.evaluator.evaluate(&slot.genes);
        }
    }

    fn select(&mut self) {
        self.phase = SearchPhase::Select;
        select_top(&mut self.population.slots, self.config.beam_width);
    }

    /// Run one generation and report the best candidate.
    ///
    /// Initializes the population first if needed. Returns `None` without
    /// touching the population once the search has converged, including for
    /// an empty target.
    pub fn step(&mut self) -> Option<GenerationReport> {
        if self.phase == SearchPhase::Init {
            self.initialize();
        }
        if self.phase == SearchPhase::Converged {
            return None;
        }

        self.expand();
        self.score();
        self.select();
        self.generation += 1;

        let best = self.population.best();
        debug!(
            "generation {}: best fitness {}/{}",
            self.generation,
            best.fitness,
            self.evaluator.max_fitness()
        );
        trace!("best candidate: {:?}", String::from_utf8_lossy(&best.genes));

        self.phase = if self.evaluator.is_match(&best.genes) {
            SearchPhase::Converged
        } else {
            SearchPhase::Expand
        };

        Some(GenerationReport {
            generation: self.generation,
            best_fitness: best.fitness,
            best: best.genes.clone(),
        })
    }

    fn should_stop(&self) -> Option<StopReason> {
        if self.phase == SearchPhase::Converged {
            return Some(StopReason::Converged);
        }

        if let Some(limit) = self.config.max_generations
            && self.generation >= limit
        {
            return Some(StopReason::MaxGenerations);
        }

        None
    }

    /// Run the search from a fresh population, calling `callback` after every
    /// generation.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> SearchOutcome
    where
        F: FnMut(&GenerationReport),
    {
        let start_time = Instant::now();

        info!(
            "searching for a {}-byte target: population {} (beam {}), seed {:?}",
            self.evaluator.max_fitness(),
            self.population.len(),
            self.config.beam_width,
            self.seed
        );

        self.initialize();

        let stop_reason = loop {
            if let Some(reason) = self.should_stop() {
                break reason;
            }

            if let Some(report) = self.step() {
                callback(&report);
            }
        };

        let elapsed = start_time.elapsed().as_secs_f64();
        let total_evaluations = self.generation as u64 * self.population.len() as u64;
        let evaluations_per_second = if elapsed > 0.0 {
            total_evaluations as f64 / elapsed
        } else {
            0.0
        };

        let best = self.population.best();
        info!(
            "stopped after {} generations ({:?}), best fitness {}/{}",
            self.generation,
            stop_reason,
            best.fitness,
            self.evaluator.max_fitness()
        );

        SearchOutcome {
            best: best.genes.clone(),
            best_fitness: best.fitness,
            stats: SearchStats {
                generations: self.generation,
                total_evaluations,
                elapsed_seconds: elapsed,
                evaluations_per_second,
                stop_reason,
            },
        }
    }

    /// Run the search (blocking).
    pub fn run(&mut self) -> SearchOutcome {
        self.run_with_callback(|_| {})
    }
}
