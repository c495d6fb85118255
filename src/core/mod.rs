//! Core domain types for Sports Wordle
//!
//! Athlete entries, the tracked attributes and the pure feedback calculation.
//! Nothing here holds mutable state or performs I/O.

mod entry;
mod feedback;

pub use entry::{Attribute, AttributeKind, Entry};
pub use feedback::{AttributeFeedback, Direction, Feedback, compare};
