//! Sports Wordle
//!
//! Guess a mystery athlete. Each guess reveals which attributes (sport,
//! country, age, Olympic appearances, championships) match the mystery, with
//! higher/lower hints on the numeric ones.
//!
//! # Quick Start
//!
//! ```rust
//! use sports_wordle::game::{GameSession, GuessOutcome};
//! use sports_wordle::roster::Roster;
//!
//! let roster = Roster::embedded().unwrap();
//! let mut session = GameSession::with_mystery(&roster, "Rafael Nadal", 8).unwrap();
//!
//! if let GuessOutcome::Accepted(feedback) = session.submit_guess("Serena Williams").unwrap() {
//!     println!("{} attributes match", feedback.count_matches());
//! }
//! assert_eq!(session.guess_count(), 1);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Athlete roster
pub mod roster;

// Game engine
pub mod game;

// Hint solver
pub mod solver;

// Run configuration
pub mod config;

// Diagnostic logging
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
