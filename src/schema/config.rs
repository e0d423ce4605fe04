//! Configuration types for the evolutionary string search.

use serde::{Deserialize, Serialize};

/// Letters used by the classic uppercase alphabet.
const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// First and last printable ASCII characters.
const PRINTABLE_FIRST: u8 = 0x20;
const PRINTABLE_LAST: u8 = 0x7e;

/// Largest population (parents plus offspring) a search may allocate.
pub const MAX_POPULATION_SIZE: usize = 1 << 24;

fn default_beam_width() -> usize {
    10
}

fn default_mutations_per_parent() -> usize {
    5
}

/// Top-level search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of candidates retained as parents each generation.
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,
    /// Mutated offspring produced from every parent each generation.
    #[serde(default = "default_mutations_per_parent")]
    pub mutations_per_parent: usize,
    /// Characters the random source may draw from.
    #[serde(default)]
    pub alphabet: CharacterSet,
    /// Stop after this many generations even without an exact match.
    #[serde(default)]
    pub max_generations: Option<usize>,
    /// Random seed for reproducibility. Seeded from the clock when absent.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: default_beam_width(),
            mutations_per_parent: default_mutations_per_parent(),
            alphabet: CharacterSet::default(),
            max_generations: None,
            random_seed: None,
        }
    }
}

impl SearchConfig {
    /// Number of crossover offspring: one per unordered pair of parents.
    /// Saturates at `usize::MAX`.
    #[inline]
    pub fn crossover_count(&self) -> usize {
        self.checked_crossover_count().unwrap_or(usize::MAX)
    }

    /// Number of mutated offspring per generation. Saturates at `usize::MAX`.
    #[inline]
    pub fn mutation_count(&self) -> usize {
        self.mutations_per_parent.saturating_mul(self.beam_width)
    }

    /// Total number of slots in the population: parents plus all offspring.
    /// Saturates at `usize::MAX`; see [`SearchConfig::checked_population_size`].
    #[inline]
    pub fn population_size(&self) -> usize {
        self.checked_population_size().unwrap_or(usize::MAX)
    }

    /// Total number of slots, or `None` if it does not fit in `usize`.
    pub fn checked_population_size(&self) -> Option<usize> {
        self.mutations_per_parent
            .checked_mul(self.beam_width)?
            .checked_add(self.checked_crossover_count()?)?
            .checked_add(self.beam_width)
    }

    fn checked_crossover_count(&self) -> Option<usize> {
        self.beam_width
            .checked_mul(self.beam_width.saturating_sub(1))
            .map(|pairs| pairs / 2)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beam_width == 0 {
            return Err(ConfigError::EmptyBeam);
        }
        if self.mutations_per_parent == 0 && self.beam_width < 2 {
            return Err(ConfigError::NoOffspring);
        }
        match self.checked_population_size() {
            Some(size) if size <= MAX_POPULATION_SIZE => {}
            _ => return Err(ConfigError::PopulationTooLarge),
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroGenerationLimit);
        }
        Ok(())
    }
}

/// Set of characters candidates are built from.
///
/// `AllBytes` covers every byte value, unprintable ones included. It is the
/// slowest to converge but can reach any target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSet {
    /// Every byte value `0..=255`.
    #[default]
    AllBytes,
    /// `A` to `Z`.
    Uppercase,
    /// Printable ASCII, space through tilde.
    Printable,
    /// An explicit list of symbols. Duplicates weight the draw.
    Custom(Vec<u8>),
}

impl CharacterSet {
    /// Number of symbols in the set.
    pub fn len(&self) -> usize {
        match self {
            CharacterSet::AllBytes => 256,
            CharacterSet::Uppercase => UPPERCASE.len(),
            CharacterSet::Printable => (PRINTABLE_LAST - PRINTABLE_FIRST) as usize + 1,
            CharacterSet::Custom(symbols) => symbols.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbol at `index`. `index` must be below [`CharacterSet::len`].
    pub fn symbol(&self, index: usize) -> u8 {
        match self {
            CharacterSet::AllBytes => index as u8,
            CharacterSet::Uppercase => UPPERCASE[index],
            CharacterSet::Printable => PRINTABLE_FIRST + index as u8,
            CharacterSet::Custom(symbols) => symbols[index],
        }
    }

    /// Whether the set can ever produce `byte`.
    pub fn contains(&self, byte: u8) -> bool {
        match self {
            CharacterSet::AllBytes => true,
            CharacterSet::Uppercase => byte.is_ascii_uppercase(),
            CharacterSet::Printable => (PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&byte),
            CharacterSet::Custom(symbols) => symbols.contains(&byte),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Beam width must be non-zero")]
    EmptyBeam,
    #[error("Configuration produces no offspring: need mutations or at least two parents")]
    NoOffspring,
    #[error("Population exceeds {} slots", MAX_POPULATION_SIZE)]
    PopulationTooLarge,
    #[error("Alphabet must contain at least one character")]
    EmptyAlphabet,
    #[error("Generation limit must be positive when set")]
    ZeroGenerationLimit,
}
