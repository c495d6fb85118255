//! Run configuration
//!
//! Collected from command-line flags in `main` and handed to every command.

use crate::error::RosterError;
use crate::game::{DEFAULT_MAX_GUESSES, FileStore};
use crate::roster::{Roster, loader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

/// Settings shared by all commands
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// CSV roster file; the embedded roster when `None`
    pub roster_path: Option<PathBuf>,
    /// Restrict play to one sport
    pub sport: Option<String>,
    pub max_guesses: usize,
    /// Fixed RNG seed for reproducible mysteries
    pub seed: Option<u64>,
    pub state_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            sport: None,
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
            state_file: FileStore::default_path(),
        }
    }
}

impl GameConfig {
    /// Load the configured roster, applying the sport filter
    ///
    /// # Errors
    /// Returns an error if the roster file cannot be read or has duplicate names.
    pub fn load_roster(&self) -> Result<Roster, RosterError> {
        let roster = match &self.roster_path {
            Some(path) => loader::load_from_file(path)?,
            None => Roster::embedded()?,
        };

        let roster = match &self.sport {
            Some(sport) => roster.filter_sport(sport),
            None => roster,
        };

        info!(
            athletes = roster.len(),
            sport = self.sport.as_deref().unwrap_or("all"),
            "roster ready"
        );
        Ok(roster)
    }

    /// RNG for mystery selection: seeded when configured, OS entropy otherwise
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.state_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config_uses_embedded_roster() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 8);
        assert_eq!(config.load_roster().unwrap().len(), 10);
    }

    #[test]
    fn sport_filter_applied() {
        let config = GameConfig {
            sport: Some("tennis".to_string()),
            ..GameConfig::default()
        };
        let roster = config.load_roster().unwrap();
        assert_eq!(roster.len(), 3);
        assert!(roster.iter().all(|e| e.sport() == "Tennis"));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_roster_file_fails() {
        let config = GameConfig {
            roster_path: Some(PathBuf::from("/no/such/roster.csv")),
            ..GameConfig::default()
        };
        assert!(config.load_roster().is_err());
    }
}
