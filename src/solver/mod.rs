//! Hint solver
//!
//! Narrows the roster to the athletes still consistent with the feedback seen
//! so far and picks the next guess with a pluggable strategy.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
