//! Simulate command
//!
//! Plays many seeded games with the hint solver to measure how quickly the
//! feedback pins down the mystery athlete.

use crate::error::GameError;
use crate::game::{GameSession, Statistics, Status};
use crate::roster::Roster;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: String,
    pub statistics: Statistics,
    pub duration: Duration,
}

/// Simulation parameters
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub max_guesses: usize,
    /// Game `i` is seeded with `base_seed + i`
    pub base_seed: u64,
    pub show_progress: bool,
}

/// Play `config.games` independent games in parallel
///
/// # Errors
///
/// Returns `GameError::EmptyRoster` if there is nothing to guess.
pub fn run_simulation<S: Strategy + Sync>(
    solver: &Solver<S>,
    roster: &Roster,
    strategy_name: &str,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    if roster.is_empty() {
        return Err(GameError::EmptyRoster);
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let statistics = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let seed = config.base_seed.wrapping_add(i as u64);
            let outcome = play_one(solver, roster, config.max_guesses, seed);
            pb.inc(1);
            outcome
        })
        .try_fold(Statistics::new, |mut stats, outcome| {
            let (status, guesses) = outcome?;
            stats.record_status(status, guesses);
            Ok::<_, GameError>(stats)
        })
        .try_reduce(Statistics::new, |mut a, b| {
            a.merge(&b);
            Ok(a)
        })?;

    pb.finish_with_message("Complete!");

    Ok(SimulationResult {
        strategy: strategy_name.to_string(),
        statistics,
        duration: start.elapsed(),
    })
}

/// Play a single game, returning its terminal status and guess count
fn play_one<S: Strategy>(
    solver: &Solver<S>,
    roster: &Roster,
    max_guesses: usize,
    seed: u64,
) -> Result<(Status, usize), GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::start(roster, max_guesses, &mut rng)?;

    while !session.is_over() {
        let Some(guess) = solver.next_guess(&session.rows(), &mut rng) else {
            // Unreachable while feedback stays consistent with the mystery
            debug!(seed, "solver ran out of candidates");
            break;
        };
        session.submit_guess(guess.name())?;
    }

    Ok((session.status(), session.guess_count()))
}
