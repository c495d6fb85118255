//! Roster of guessable athletes
//!
//! The roster is loaded once and shared read-only by every game session.
//! Names are indexed case-insensitively for O(1) lookup.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_ROSTER_CSV;

use crate::core::Entry;
use crate::error::RosterError;
use rustc_hash::FxHashMap;

/// Immutable, ordered list of entries with a name index
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<Entry>,
    index: FxHashMap<String, usize>,
}

impl Roster {
    /// Build a roster, rejecting duplicate names
    ///
    /// # Errors
    /// Returns `RosterError::DuplicateName` if two entries share a name
    /// (ignoring case).
    pub fn new(entries: Vec<Entry>) -> Result<Self, RosterError> {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.name_key(), i).is_some() {
                return Err(RosterError::DuplicateName(entry.name().to_string()));
            }
        }

        Ok(Self { entries, index })
    }

    /// The embedded default roster
    ///
    /// # Errors
    /// Only fails if the embedded CSV is corrupt.
    pub fn embedded() -> Result<Self, RosterError> {
        loader::from_csv_str(DEFAULT_ROSTER_CSV)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    /// Look up an entry by name, ignoring case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Distinct sports in order of first appearance
    #[must_use]
    pub fn sports(&self) -> Vec<&str> {
        let mut sports: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !sports.contains(&entry.sport()) {
                sports.push(entry.sport());
            }
        }
        sports
    }

    /// Sub-roster holding only the athletes of one sport (case-insensitive)
    #[must_use]
    pub fn filter_sport(&self, sport: &str) -> Self {
        let sport = sport.to_lowercase();
        let entries: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| e.sport().to_lowercase() == sport)
            .cloned()
            .collect();

        // Names were already unique in the parent roster
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name_key(), i))
            .collect();

        Self { entries, index }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new(vec![
            Entry::new("Novak Djokovic", "Tennis", 37, "Serbia", 1, 24),
            Entry::new("Tom Brady", "Football", 46, "USA", 0, 7),
            Entry::new("Rafael Nadal", "Tennis", 37, "Spain", 2, 22),
        ])
        .unwrap()
    }

    #[test]
    fn find_is_case_insensitive() {
        let roster = sample();
        assert_eq!(roster.find("tom brady").unwrap().name(), "Tom Brady");
        assert_eq!(roster.find("TOM BRADY").unwrap().name(), "Tom Brady");
        assert!(roster.find("Tom").is_none());
        assert!(roster.contains("rafael nadal"));
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Roster::new(vec![
            Entry::new("Tom Brady", "Football", 46, "USA", 0, 7),
            Entry::new("tom brady", "Football", 46, "USA", 0, 7),
        ]);
        assert!(matches!(result, Err(RosterError::DuplicateName(name)) if name == "tom brady"));
    }

    #[test]
    fn sports_in_first_appearance_order() {
        assert_eq!(sample().sports(), vec!["Tennis", "Football"]);
    }

    #[test]
    fn filter_sport_keeps_order_and_index() {
        let tennis = sample().filter_sport("tennis");
        assert_eq!(tennis.len(), 2);
        assert_eq!(tennis.entries()[0].name(), "Novak Djokovic");
        assert_eq!(tennis.entries()[1].name(), "Rafael Nadal");
        assert!(tennis.find("rafael nadal").is_some());
        assert!(tennis.find("Tom Brady").is_none());
    }

    #[test]
    fn filter_unknown_sport_is_empty() {
        assert!(sample().filter_sport("Curling").is_empty());
    }

    #[test]
    fn embedded_roster_loads() {
        let roster = Roster::embedded().unwrap();
        assert_eq!(roster.len(), 10);
        assert!(roster.find("Simone Biles").is_some());
    }

    #[test]
    fn default_is_empty() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert!(roster.find("anyone").is_none());
    }
}
