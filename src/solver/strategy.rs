//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Entry, Feedback, compare};
use rand::{Rng, RngCore};
use rustc_hash::FxHashMap;

/// A strategy for picking the next guess among consistent candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` if `candidates` is empty.
    fn select_guess<'r>(
        &self,
        candidates: &[&'r Entry],
        rng: &mut dyn RngCore,
    ) -> Option<&'r Entry>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Uniform pick among candidates
    Random(RandomStrategy),
    /// Smallest worst-case group of remaining candidates (default)
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'r>(
        &self,
        candidates: &[&'r Entry],
        rng: &mut dyn RngCore,
    ) -> Option<&'r Entry> {
        match self {
            Self::Random(s) => s.select_guess(candidates, rng),
            Self::Minimax(s) => s.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "minimax".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Minimax(_) => "minimax",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// Picks any consistent candidate uniformly at random
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'r>(
        &self,
        candidates: &[&'r Entry],
        rng: &mut dyn RngCore,
    ) -> Option<&'r Entry> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

/// Picks the candidate whose feedback splits the rest into the smallest
/// worst-case group
///
/// Ties go to the earlier candidate in roster order, so the choice is
/// deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Size of the largest group of candidates that would give `guess` the
    /// same feedback
    #[must_use]
    pub fn worst_case(guess: &Entry, candidates: &[&Entry]) -> usize {
        let mut groups: FxHashMap<Feedback, usize> = FxHashMap::default();
        for &candidate in candidates {
            *groups.entry(compare(guess, candidate)).or_insert(0) += 1;
        }
        groups.values().copied().max().unwrap_or(0)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess<'r>(
        &self,
        candidates: &[&'r Entry],
        _rng: &mut dyn RngCore,
    ) -> Option<&'r Entry> {
        candidates
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(i, guess)| (Self::worst_case(guess, candidates), i))
            .map(|(_, guess)| guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("A", "Tennis", 30, "USA", 1, 1),
            Entry::new("B", "Tennis", 30, "USA", 1, 2),
            Entry::new("C", "Tennis", 30, "USA", 1, 3),
            Entry::new("D", "Hockey", 25, "Canada", 2, 4),
        ]
    }

    #[test]
    fn from_name_defaults_to_minimax() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("whatever").name(), "minimax");
    }

    #[test]
    fn strategies_return_none_for_no_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(RandomStrategy.select_guess(&[], &mut rng).is_none());
        assert!(MinimaxStrategy.select_guess(&[], &mut rng).is_none());
    }

    #[test]
    fn random_picks_a_candidate() {
        let entries = entries();
        let candidates: Vec<&Entry> = entries.iter().collect();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            let pick = RandomStrategy.select_guess(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(&pick));
        }
    }

    #[test]
    fn worst_case_groups_identical_feedback() {
        let entries = entries();
        let candidates: Vec<&Entry> = entries.iter().collect();

        // Against A, both B and C only differ by a higher championships count
        assert_eq!(MinimaxStrategy::worst_case(&entries[0], &candidates), 2);
        // Guessing B separates A (lower) from C (higher) and D
        assert_eq!(MinimaxStrategy::worst_case(&entries[1], &candidates), 1);
    }

    #[test]
    fn minimax_prefers_best_split() {
        let entries = entries();
        let candidates: Vec<&Entry> = entries.iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        let pick = MinimaxStrategy.select_guess(&candidates, &mut rng).unwrap();
        assert_eq!(pick.name(), "B");
    }

    #[test]
    fn minimax_single_candidate() {
        let entries = entries();
        let candidates = vec![&entries[3]];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            MinimaxStrategy.select_guess(&candidates, &mut rng).unwrap().name(),
            "D"
        );
    }
}
