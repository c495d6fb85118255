//! The guessing-game engine
//!
//! Session state machine, share text, visitor store and statistics.

mod session;
pub mod share;
pub mod stats;
pub mod store;

pub use session::{DEFAULT_MAX_GUESSES, GameSession, GuessOutcome, GuessRow, Status};
pub use share::share_text;
pub use stats::Statistics;
pub use store::{FileStore, KeyValueStore, MemoryStore, check_first_visit};

use crate::error::GameError;
use crate::roster::Roster;
use rand::Rng;
use tracing::warn;

/// A freshly started session plus whether this visitor is new
#[derive(Debug)]
pub struct Launch<'r> {
    pub session: GameSession<'r>,
    /// `true` if the instructions should be shown
    pub first_visit: bool,
}

/// Start the first session of a run
///
/// Draws the mystery from `rng` and reads (then sets) the visitor flag in
/// `store`. Later sessions are started with [`GameSession::start`].
///
/// A failing store only affects the instructions: the error is logged and the
/// visit counts as a first visit.
///
/// # Errors
/// Returns `GameError::EmptyRoster` for an empty roster.
pub fn launch<'r, R, S>(
    roster: &'r Roster,
    max_guesses: usize,
    rng: &mut R,
    store: &mut S,
) -> Result<Launch<'r>, GameError>
where
    R: Rng + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let session = GameSession::start(roster, max_guesses, rng)?;
    let first_visit = check_first_visit(store).unwrap_or_else(|err| {
        warn!(error = %err, "visitor store unavailable, showing instructions");
        true
    });

    Ok(Launch {
        session,
        first_visit,
    })
}
