//! Shareable result text
//!
//! Produces the spoiler-safe grid people paste into chats. Copying it anywhere
//! is up to the caller.

use super::session::GameSession;
use crate::core::Feedback;

/// Glyph for a matching attribute
pub const MATCH_GLYPH: char = '🟩';
/// Glyph for a non-matching attribute
pub const MISS_GLYPH: char = '⬜';
/// Last line of every share text
pub const SHARE_FOOTER: &str = "Play at: https://sportswordle.me";

/// Render one guess's feedback as a glyph row in attribute order
#[must_use]
pub fn glyph_row(feedback: &Feedback) -> String {
    feedback
        .attributes()
        .iter()
        .map(|fb| if fb.matched { MATCH_GLYPH } else { MISS_GLYPH })
        .collect()
}

/// Build the share text for a finished session
///
/// Returns `None` while the session is still active, since the header names
/// the mystery athlete.
///
/// # Examples
/// ```
/// use sports_wordle::core::Entry;
/// use sports_wordle::game::{GameSession, share_text};
/// use sports_wordle::roster::Roster;
///
/// let roster = Roster::new(vec![
///     Entry::new("A", "X", 20, "USA", 1, 1),
///     Entry::new("B", "X", 30, "USA", 1, 1),
/// ]).unwrap();
/// let mut session = GameSession::with_mystery(&roster, "B", 8).unwrap();
/// session.submit_guess("B").unwrap();
///
/// let text = share_text(&session).unwrap();
/// assert!(text.starts_with("Sports Wordle - B\nI got it in 1/8 guesses!"));
/// ```
#[must_use]
pub fn share_text(session: &GameSession) -> Option<String> {
    let mystery = session.mystery()?;

    let mut text = format!("Sports Wordle - {}\n", mystery.name());
    if session.is_won() {
        text.push_str(&format!(
            "I got it in {}/{} guesses!",
            session.guess_count(),
            session.max_guesses()
        ));
    } else {
        text.push_str("I gave up!");
    }
    text.push_str("\n\n");

    for row in session.rows() {
        text.push_str(&glyph_row(&row.feedback));
        text.push('\n');
    }

    text.push('\n');
    text.push_str(SHARE_FOOTER);
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entry;
    use crate::roster::Roster;

    fn roster() -> Roster {
        Roster::new(vec![
            Entry::new("A", "X", 20, "USA", 1, 1),
            Entry::new("B", "X", 30, "USA", 1, 1),
            Entry::new("C", "Y", 30, "UK", 2, 1),
        ])
        .unwrap()
    }

    #[test]
    fn no_share_text_while_active() {
        let roster = roster();
        let mut session = GameSession::with_mystery(&roster, "B", 8).unwrap();
        assert!(share_text(&session).is_none());

        session.submit_guess("A").unwrap();
        assert!(share_text(&session).is_none());
    }

    #[test]
    fn won_share_text() {
        let roster = roster();
        let mut session = GameSession::with_mystery(&roster, "B", 8).unwrap();
        session.submit_guess("A").unwrap();
        session.submit_guess("B").unwrap();

        let text = share_text(&session).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Sports Wordle - B");
        assert_eq!(lines[1], "I got it in 2/8 guesses!");
        assert_eq!(lines[2], "");
        // Guess A: sport match, country match, age miss, olympics match, championships match
        assert_eq!(lines[3], "🟩🟩⬜🟩🟩");
        assert_eq!(lines[4], "🟩🟩🟩🟩🟩");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], SHARE_FOOTER);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn category_glyph_precedes_age_glyph() {
        let roster = roster();
        let mut session = GameSession::with_mystery(&roster, "B", 8).unwrap();
        session.submit_guess("A").unwrap();
        session.submit_guess("B").unwrap();

        let text = share_text(&session).unwrap();
        let row_a: Vec<char> = text.lines().nth(3).unwrap().chars().collect();
        assert_eq!(row_a[0], MATCH_GLYPH);
        assert_eq!(row_a[2], MISS_GLYPH);
    }

    #[test]
    fn gave_up_share_text() {
        let roster = roster();
        let mut session = GameSession::with_mystery(&roster, "B", 8).unwrap();
        session.submit_guess("C").unwrap();
        session.give_up().unwrap();

        let text = share_text(&session).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sports Wordle - B");
        assert_eq!(lines[1], "I gave up!");
        // C: sport miss, country miss, age match, olympics miss, championships match
        assert_eq!(lines[3], "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn lost_share_text_uses_gave_up_line() {
        let roster = roster();
        let mut session = GameSession::with_mystery(&roster, "B", 2).unwrap();
        session.submit_guess("A").unwrap();
        session.submit_guess("C").unwrap();

        let text = share_text(&session).unwrap();
        assert_eq!(text.lines().nth(1), Some("I gave up!"));
    }

    #[test]
    fn share_text_is_deterministic() {
        let roster = roster();
        let mut session = GameSession::with_mystery(&roster, "B", 8).unwrap();
        session.submit_guess("A").unwrap();
        session.give_up().unwrap();

        assert_eq!(share_text(&session), share_text(&session));
    }
}
