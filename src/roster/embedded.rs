//! Embedded default roster
//!
//! The CSV is compiled into the binary so the game runs without any data files.

/// Default roster CSV (10 athletes)
pub const DEFAULT_ROSTER_CSV: &str = include_str!("../../data/roster.csv");
