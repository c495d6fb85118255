//! Game session state machine
//!
//! A session starts `Active` and moves to one of three terminal states:
//! `Won`, `Lost` (guess limit reached) or `GaveUp`. The `over`/`won`/`gave_up`
//! flags are derived from the single `Status` so they can never disagree.

use crate::core::{Entry, Feedback, compare};
use crate::error::{GameError, StateViolation};
use crate::roster::Roster;
use rand::Rng;
use tracing::{debug, info};

/// Default guess limit
pub const DEFAULT_MAX_GUESSES: usize = 8;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Won,
    Lost,
    GaveUp,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Result of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was appended; carries its feedback
    Accepted(Feedback),
    /// The name was already guessed; nothing changed
    AlreadyGuessed,
}

/// One row of the guess table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow<'r> {
    pub entry: &'r Entry,
    pub feedback: Feedback,
}

/// One play-through against a hidden mystery entry
#[derive(Debug, Clone)]
pub struct GameSession<'r> {
    roster: &'r Roster,
    mystery: &'r Entry,
    guesses: Vec<&'r Entry>,
    max_guesses: usize,
    status: Status,
}

impl<'r> GameSession<'r> {
    /// Start a session with a mystery drawn uniformly from the roster
    ///
    /// # Errors
    /// Returns `GameError::EmptyRoster` if the roster has no entries.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use sports_wordle::game::GameSession;
    /// use sports_wordle::roster::Roster;
    ///
    /// let roster = Roster::embedded().unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = GameSession::start(&roster, 8, &mut rng).unwrap();
    /// assert!(!session.is_over());
    /// assert!(session.mystery().is_none()); // hidden until the game ends
    /// ```
    pub fn start<R: Rng + ?Sized>(
        roster: &'r Roster,
        max_guesses: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }

        let position = rng.random_range(0..roster.len());
        let mystery = roster.get(position).ok_or(GameError::EmptyRoster)?;
        debug!(position, "mystery drawn");

        Ok(Self::new(roster, mystery, max_guesses))
    }

    /// Start a session against a chosen mystery entry
    ///
    /// # Errors
    /// Returns `GameError::UnknownEntry` if `name` is not in the roster.
    pub fn with_mystery(
        roster: &'r Roster,
        name: &str,
        max_guesses: usize,
    ) -> Result<Self, GameError> {
        let mystery = roster
            .find(name)
            .ok_or_else(|| GameError::UnknownEntry(name.to_string()))?;
        Ok(Self::new(roster, mystery, max_guesses))
    }

    fn new(roster: &'r Roster, mystery: &'r Entry, max_guesses: usize) -> Self {
        Self {
            roster,
            mystery,
            guesses: Vec::new(),
            max_guesses: max_guesses.max(1),
            status: Status::Active,
        }
    }

    /// Submit a guess by name (case-insensitive)
    ///
    /// Re-submitting an already guessed name is a no-op. Failing calls leave
    /// the session untouched.
    ///
    /// # Errors
    /// - `InvalidState(GameOver)` if the session already ended
    /// - `UnknownEntry` if the name is not in the roster
    pub fn submit_guess(&mut self, name: &str) -> Result<GuessOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::InvalidState(StateViolation::GameOver));
        }

        let entry = self
            .roster
            .find(name)
            .ok_or_else(|| GameError::UnknownEntry(name.to_string()))?;

        if self.has_guessed(entry.name()) {
            debug!(name = entry.name(), "duplicate guess ignored");
            return Ok(GuessOutcome::AlreadyGuessed);
        }

        self.guesses.push(entry);
        let feedback = compare(entry, self.mystery);

        self.status = if feedback.is_correct() {
            Status::Won
        } else if self.guesses.len() >= self.max_guesses {
            Status::Lost
        } else {
            Status::Active
        };

        info!(
            guess = entry.name(),
            count = self.guesses.len(),
            status = ?self.status,
            "guess accepted"
        );

        Ok(GuessOutcome::Accepted(feedback))
    }

    /// Abandon the session
    ///
    /// # Errors
    /// - `InvalidState(NoGuesses)` if no guess has been made yet
    /// - `InvalidState(GameOver)` if the session already ended
    pub fn give_up(&mut self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::InvalidState(StateViolation::GameOver));
        }
        if self.guesses.is_empty() {
            return Err(GameError::InvalidState(StateViolation::NoGuesses));
        }

        self.status = Status::GaveUp;
        info!(count = self.guesses.len(), "player gave up");
        Ok(())
    }

    /// Roster entries whose name contains `query` (case-insensitive), excluding
    /// entries already guessed. An empty query yields nothing.
    #[must_use]
    pub fn filter_candidates(&self, query: &str) -> Vec<&'r Entry> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.roster
            .iter()
            .filter(|entry| entry.name().to_lowercase().contains(&needle))
            .filter(|entry| !self.has_guessed(entry.name()))
            .collect()
    }

    /// Check whether a name was already guessed (case-insensitive)
    #[must_use]
    pub fn has_guessed(&self, name: &str) -> bool {
        self.guesses.iter().any(|guess| guess.is_named(name))
    }

    /// The mystery entry, revealed only once the session is over
    #[must_use]
    pub fn mystery(&self) -> Option<&'r Entry> {
        self.status.is_over().then_some(self.mystery)
    }

    /// Guessed entries in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[&'r Entry] {
        &self.guesses
    }

    /// Guess table rows with their feedback
    #[must_use]
    pub fn rows(&self) -> Vec<GuessRow<'r>> {
        self.guesses
            .iter()
            .map(|&entry| GuessRow {
                entry,
                feedback: compare(entry, self.mystery),
            })
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn roster(&self) -> &'r Roster {
        self.roster
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.status, Status::Won)
    }

    #[inline]
    #[must_use]
    pub const fn gave_up(&self) -> bool {
        matches!(self.status, Status::GaveUp)
    }
}
