//! Error types for the game engine, roster loading and visitor store.
//!
//! No failing engine operation mutates session state.

use thiserror::Error;

/// Errors raised by session operations
#[derive(Debug, Error)]
pub enum GameError {
    /// The roster has no entries, so no mystery can be drawn
    #[error("roster is empty: cannot pick a mystery athlete")]
    EmptyRoster,

    /// The operation is not allowed in the current session state
    #[error("invalid state: {0}")]
    InvalidState(StateViolation),

    /// A submitted name is not in the roster
    #[error("unknown athlete: {0}")]
    UnknownEntry(String),

    /// The visitor store failed
    #[error("visitor store error: {0}")]
    Store(#[from] StoreError),
}

/// Why a state transition was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateViolation {
    /// Give up requested before any guess was made
    #[error("make at least one guess before giving up")]
    NoGuesses,

    /// The session already reached a terminal state
    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed roster CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Two entries share a name (compared case-insensitively)
    #[error("duplicate athlete name: {0}")]
    DuplicateName(String),
}

/// Errors raised by a `KeyValueStore`
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_violation_messages() {
        let err = GameError::InvalidState(StateViolation::NoGuesses);
        assert_eq!(
            err.to_string(),
            "invalid state: make at least one guess before giving up"
        );

        let err = GameError::InvalidState(StateViolation::GameOver);
        assert_eq!(err.to_string(), "invalid state: the game is already over");
    }

    #[test]
    fn unknown_entry_message() {
        let err = GameError::UnknownEntry("Michael Jordan".to_string());
        assert_eq!(err.to_string(), "unknown athlete: Michael Jordan");
    }
}
