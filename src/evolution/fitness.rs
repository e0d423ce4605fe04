//! Fitness scoring for candidate strings.

/// Count positions where `candidate` and `target` hold the same character.
///
/// Comparison stops at the end of the shorter sequence.
pub fn fitness(candidate: &[u8], target: &[u8]) -> usize {
    candidate
        .iter()
        .zip(target)
        .filter(|(a, b)| a == b)
        .count()
}

/// Scores candidates against a fixed target.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    target: Vec<u8>,
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator.
    pub fn new(target: impl Into<Vec<u8>>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// Highest attainable score: the target length.
    pub fn max_fitness(&self) -> usize {
        self.target.len()
    }

    /// Fitness of `candidate` against the target.
    #[inline]
    pub fn evaluate(&self, candidate: &[u8]) -> usize {
        fitness(candidate, &self.target)
    }

    /// Whether `candidate` is exactly the target.
    pub fn is_match(&self, candidate: &[u8]) -> bool {
        candidate == self.target.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_counts_matches() {
        assert_eq!(fitness(b"HELLO", b"HELLO"), 5);
        assert_eq!(fitness(b"HELPS", b"HELLO"), 3);
        assert_eq!(fitness(b"abcde", b"HELLO"), 0);
    }

    #[test]
    fn test_fitness_shorter_input() {
        assert_eq!(fitness(b"HE", b"HELLO"), 2);
        assert_eq!(fitness(b"HELLO", b""), 0);
    }

    #[test]
    fn test_evaluator() {
        let evaluator = FitnessEvaluator::new("AB");
        assert_eq!(evaluator.max_fitness(), 2);
        assert_eq!(evaluator.evaluate(b"AX"), 1);
        assert!(evaluator.is_match(b"AB"));
        assert!(!evaluator.is_match(b"ABC"));
    }
}
