//! Candidate manipulation utilities for evolutionary search.
//!
//! Provides random generation, crossover, and mutation operations.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::prelude::*;

use crate::schema::CharacterSet;

/// Random number generator wrapper for candidate operations.
///
/// Every random decision of a search goes through one of these, so a run is
/// reproducible from its seed.
pub struct CandidateRng<R = StdRng> {
    rng: R,
    alphabet: CharacterSet,
}

impl CandidateRng<StdRng> {
    /// Create from seed.
    pub fn new(seed: u64, alphabet: CharacterSet) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), alphabet)
    }
}

impl<R: Rng> CandidateRng<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R, alphabet: CharacterSet) -> Self {
        Self { rng, alphabet }
    }

    pub fn alphabet(&self) -> &CharacterSet {
        &self.alphabet
    }

    /// Draw one character uniformly from the alphabet.
    ///
    /// The alphabet must be non-empty; [`crate::schema::SearchConfig::validate`]
    /// rejects empty ones.
    pub fn random_char(&mut self) -> u8 {
        let index = self.rng.gen_range(0..self.alphabet.len());
        self.alphabet.symbol(index)
    }

    /// Generate a random candidate of `length` characters.
    pub fn random_candidate(&mut self, length: usize) -> Vec<u8> {
        let mut candidate = Vec::with_capacity(length);
        self.fill_random(&mut candidate, length);
        candidate
    }

    /// Overwrite `out` with `length` independently drawn characters.
    pub fn fill_random(&mut self, out: &mut Vec<u8>, length: usize) {
        out.clear();
        out.extend((0..length).map(|_| self.random_char()));
    }

    /// Copy `parent` and replace one randomly chosen position with a random
    /// character. The replacement may equal the original character.
    pub fn mutate(&mut self, parent: &[u8]) -> Vec<u8> {
        let mut child = Vec::with_capacity(parent.len());
        self.mutate_into(parent, &mut child);
        child
    }

    /// Like [`CandidateRng::mutate`], writing into an existing buffer.
    pub fn mutate_into(&mut self, parent: &[u8], out: &mut Vec<u8>) {
        out.clear();
        out.extend_from_slice(parent);
        if parent.is_empty() {
            return;
        }

        let symbol = self.random_char();
        let index = self.rng.gen_range(0..parent.len());
        out[index] = symbol;
    }

    /// Build a child taking each position from either parent with equal
    /// probability. Stops at the end of the shorter parent.
    pub fn crossover(&mut self, parent1: &[u8], parent2: &[u8]) -> Vec<u8> {
        let mut child = Vec::with_capacity(parent1.len().min(parent2.len()));
        self.crossover_into(parent1, parent2, &mut child);
        child
    }

    /// Like [`CandidateRng::crossover`], writing into an existing buffer.
    pub fn crossover_into(&mut self, parent1: &[u8], parent2: &[u8], out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            parent1
                .iter()
                .zip(parent2)
                .map(|(&a, &b)| if self.rng.gen_bool(0.5) { a } else { b }),
        );
    }
}

/// Seed derived from the system clock.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_random_candidate() {
        let mut rng = CandidateRng::new(42, CharacterSet::Uppercase);

        let candidate = rng.random_candidate(64);
        assert_eq!(candidate.len(), 64);
        assert!(candidate.iter().all(u8::is_ascii_uppercase));
    }

    #[test]
    fn test_seed_reproducible() {
        let mut a = CandidateRng::new(7, CharacterSet::AllBytes);
        let mut b = CandidateRng::new(7, CharacterSet::AllBytes);

        assert_eq!(a.random_candidate(32), b.random_candidate(32));
        assert_eq!(a.mutate(b"hello"), b.mutate(b"hello"));
        assert_eq!(a.crossover(b"abcd", b"wxyz"), b.crossover(b"abcd", b"wxyz"));
    }

    #[test]
    fn test_scripted_generator() {
        // A generator stuck at zero always picks the first symbol.
        let mut rng =
            CandidateRng::from_rng(StepRng::new(0, 0), CharacterSet::Custom(b"QZ".to_vec()));

        assert_eq!(rng.random_candidate(3), b"QQQ");
        assert_eq!(rng.mutate(b"ZZZ"), b"QZZ");
    }

    #[test]
    fn test_mutation() {
        let mut rng = CandidateRng::new(42, CharacterSet::Printable);
        let parent = rng.random_candidate(20);

        for _ in 0..100 {
            let child = rng.mutate(&parent);
            assert_eq!(child.len(), parent.len());
            let changed = child.iter().zip(&parent).filter(|(a, b)| a != b).count();
            assert!(changed <= 1);
        }
    }

    #[test]
    fn test_mutate_empty_parent() {
        let mut rng = CandidateRng::new(1, CharacterSet::AllBytes);
        assert!(rng.mutate(b"").is_empty());
    }

    #[test]
    fn test_crossover() {
        let mut rng = CandidateRng::new(42, CharacterSet::AllBytes);
        let parent1 = vec![b'a'; 256];
        let parent2 = vec![b'b'; 256];

        let child = rng.crossover(&parent1, &parent2);
        assert_eq!(child.len(), 256);
        assert!(child.iter().all(|&c| c == b'a' || c == b'b'));
        // Per-position coin flips: both parents contribute.
        assert!(child.contains(&b'a'));
        assert!(child.contains(&b'b'));
    }

    #[test]
    fn test_crossover_uneven_parents() {
        let mut rng = CandidateRng::new(3, CharacterSet::AllBytes);
        assert_eq!(rng.crossover(b"abc", b"x").len(), 1);
    }

    #[test]
    fn test_into_reuses_buffer() {
        let mut rng = CandidateRng::new(5, CharacterSet::Uppercase);
        let mut out = b"leftover contents".to_vec();

        rng.crossover_into(b"AAAA", b"AAAA", &mut out);
        assert_eq!(out, b"AAAA");

        rng.fill_random(&mut out, 2);
        assert_eq!(out.len(), 2);
    }
}
