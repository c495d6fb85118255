//! Hint solver interface

use super::strategy::Strategy;
use crate::core::{Entry, compare};
use crate::game::GuessRow;
use crate::roster::Roster;
use rand::RngCore;

/// Suggests guesses consistent with the feedback so far
///
/// Coordinates candidate filtering and a guess selection strategy.
pub struct Solver<'r, S: Strategy> {
    strategy: S,
    roster: &'r Roster,
}

impl<'r, S: Strategy> Solver<'r, S> {
    pub const fn new(strategy: S, roster: &'r Roster) -> Self {
        Self { strategy, roster }
    }

    /// Get the next suggested guess given the rows played so far
    ///
    /// Returns `None` if no consistent candidate remains.
    pub fn next_guess(&self, rows: &[GuessRow<'_>], rng: &mut dyn RngCore) -> Option<&'r Entry> {
        let candidates = self.filter_candidates(rows);
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }
        self.strategy.select_guess(&candidates, rng)
    }

    /// Roster entries not yet guessed that would have produced every
    /// observed feedback
    fn filter_candidates(&self, rows: &[GuessRow<'_>]) -> Vec<&'r Entry> {
        self.roster
            .iter()
            .filter(|&candidate| {
                rows.iter().all(|row| {
                    !row.entry.is_named(candidate.name())
                        && compare(row.entry, candidate) == row.feedback
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the rows
    pub fn count_candidates(&self, rows: &[GuessRow<'_>]) -> usize {
        self.filter_candidates(rows).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, rows: &[GuessRow<'_>]) -> Vec<&'r Entry> {
        self.filter_candidates(rows)
    }
}
