//! Per-process play statistics

use super::session::{GameSession, Status};

/// Tally of finished sessions
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_given_up: usize,
    /// Wins by guess count; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session
    ///
    /// Active sessions are ignored.
    pub fn record(&mut self, session: &GameSession) {
        self.record_status(session.status(), session.guess_count());
    }

    /// Record a terminal status with the number of guesses it took
    pub fn record_status(&mut self, status: Status, guesses: usize) {
        match status {
            Status::Active => return,
            Status::Won => {
                self.games_won += 1;
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
            Status::GaveUp => self.games_given_up += 1,
            Status::Lost => {}
        }
        self.total_games += 1;
    }

    /// Merge another tally into this one
    pub fn merge(&mut self, other: &Self) {
        self.total_games += other.total_games;
        self.games_won += other.games_won;
        self.games_given_up += other.games_given_up;
        if self.guess_distribution.len() < other.guess_distribution.len() {
            self.guess_distribution
                .resize(other.guess_distribution.len(), 0);
        }
        for (slot, count) in self
            .guess_distribution
            .iter_mut()
            .zip(&other.guess_distribution)
        {
            *slot += count;
        }
    }

    /// Win rate as a percentage, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Average guesses over won games
    #[must_use]
    pub fn average_winning_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statistics() {
        let stats = Statistics::new();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.average_winning_guesses(), None);
    }

    #[test]
    fn records_terminal_states_only() {
        let mut stats = Statistics::new();
        stats.record_status(Status::Active, 3);
        stats.record_status(Status::Won, 3);
        stats.record_status(Status::Won, 5);
        stats.record_status(Status::Lost, 8);
        stats.record_status(Status::GaveUp, 2);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.games_given_up, 1);
        assert_eq!(stats.guess_distribution[3], 1);
        assert_eq!(stats.guess_distribution[5], 1);
        assert!((stats.win_rate() - 50.0).abs() < 1e-9);
        assert_eq!(stats.average_winning_guesses(), Some(4.0));
    }

    #[test]
    fn merge_adds_everything() {
        let mut a = Statistics::new();
        a.record_status(Status::Won, 2);
        let mut b = Statistics::new();
        b.record_status(Status::Won, 6);
        b.record_status(Status::GaveUp, 1);

        a.merge(&b);
        assert_eq!(a.total_games, 3);
        assert_eq!(a.games_won, 2);
        assert_eq!(a.games_given_up, 1);
        assert_eq!(a.guess_distribution[2], 1);
        assert_eq!(a.guess_distribution[6], 1);
    }

    #[test]
    fn record_session() {
        use crate::core::Entry;
        use crate::roster::Roster;

        let roster = Roster::new(vec![
            Entry::new("A", "X", 20, "USA", 1, 1),
            Entry::new("B", "X", 30, "USA", 1, 1),
        ])
        .unwrap();
        let mut session = GameSession::with_mystery(&roster, "B", 8).unwrap();
        let mut stats = Statistics::new();

        stats.record(&session);
        assert_eq!(stats.total_games, 0);

        session.submit_guess("B").unwrap();
        stats.record(&session);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }
}
