//! Per-attribute feedback for a guess
//!
//! Categorical attributes only report whether they match. Numeric attributes
//! additionally carry a direction pointing at the mystery's value:
//! `Higher` means the mystery's value is greater than the guessed one.

use super::entry::{Attribute, AttributeKind, Entry};

/// Where the mystery's value lies relative to the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The mystery's value is greater than the guessed value
    Higher,
    /// The mystery's value is smaller than the guessed value
    Lower,
}

impl Direction {
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Higher => '↑',
            Self::Lower => '↓',
        }
    }
}

/// Feedback for a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeFeedback {
    pub attribute: Attribute,
    pub matched: bool,
    /// Only set for numeric attributes that don't match
    pub direction: Option<Direction>,
}

/// Full feedback for one guess against the mystery entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    name_matched: bool,
    attributes: [AttributeFeedback; 5],
}

impl Feedback {
    /// Whether the guess is the mystery entry itself
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.name_matched
    }

    /// Feedback for every tracked attribute, in `Attribute::ALL` order
    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> &[AttributeFeedback; 5] {
        &self.attributes
    }

    /// Feedback for one attribute
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> AttributeFeedback {
        self.attributes
            .iter()
            .copied()
            .find(|fb| fb.attribute == attribute)
            .unwrap_or(AttributeFeedback {
                attribute,
                matched: false,
                direction: None,
            })
    }

    /// Number of matching attributes
    #[must_use]
    pub fn count_matches(&self) -> usize {
        self.attributes.iter().filter(|fb| fb.matched).count()
    }

    /// Check if every tracked attribute matched
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.attributes.iter().all(|fb| fb.matched)
    }
}

/// Compare a guessed entry against the mystery entry
///
/// Pure function: the result depends only on the two entries.
///
/// # Examples
/// ```
/// use sports_wordle::core::{Attribute, Direction, Entry, compare};
///
/// let guess = Entry::new("A", "X", 25, "USA", 1, 1);
/// let mystery = Entry::new("B", "X", 30, "USA", 1, 1);
/// let feedback = compare(&guess, &mystery);
///
/// assert!(feedback.get(Attribute::Sport).matched);
/// assert_eq!(feedback.get(Attribute::Age).direction, Some(Direction::Higher));
/// ```
#[must_use]
pub fn compare(guess: &Entry, mystery: &Entry) -> Feedback {
    let attributes = Attribute::ALL.map(|attribute| compare_attribute(attribute, guess, mystery));

    Feedback {
        name_matched: guess.is_named(mystery.name()),
        attributes,
    }
}

fn compare_attribute(attribute: Attribute, guess: &Entry, mystery: &Entry) -> AttributeFeedback {
    match attribute.kind() {
        AttributeKind::Categorical => AttributeFeedback {
            attribute,
            matched: guess.text_of(attribute) == mystery.text_of(attribute),
            direction: None,
        },
        AttributeKind::Numeric => {
            let guessed = guess.number_of(attribute);
            let actual = mystery.number_of(attribute);
            let matched = guessed == actual;
            let direction = if matched {
                None
            } else if guessed < actual {
                Some(Direction::Higher)
            } else {
                Some(Direction::Lower)
            };

            AttributeFeedback {
                attribute,
                matched,
                direction,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(name: &str, sport: &str, age: u32) -> Entry {
        Entry::new(name, sport, age, "USA", 2, 5)
    }

    #[test]
    fn compare_is_reflexive() {
        let roster = [
            Entry::new("LeBron James", "Basketball", 39, "USA", 3, 4),
            Entry::new("Lewis Hamilton", "Formula 1", 39, "UK", 0, 7),
            Entry::new("Simone Biles", "Gymnastics", 27, "USA", 7, 25),
        ];

        for entry in &roster {
            let feedback = compare(entry, entry);
            assert!(feedback.is_correct());
            assert!(feedback.all_matched());
            assert!(feedback.attributes().iter().all(|fb| fb.direction.is_none()));
        }
    }

    #[test]
    fn direction_higher_when_mystery_is_greater() {
        let mystery = athlete("M", "Tennis", 30);
        let guess = athlete("G", "Tennis", 25);

        let age = compare(&guess, &mystery).get(Attribute::Age);
        assert!(!age.matched);
        assert_eq!(age.direction, Some(Direction::Higher));
    }

    #[test]
    fn direction_lower_when_mystery_is_smaller() {
        let mystery = athlete("M", "Tennis", 30);
        let guess = athlete("G", "Tennis", 35);

        let age = compare(&guess, &mystery).get(Attribute::Age);
        assert!(!age.matched);
        assert_eq!(age.direction, Some(Direction::Lower));
    }

    #[test]
    fn categorical_mismatch_has_no_direction() {
        let mystery = athlete("M", "Tennis", 30);
        let guess = athlete("G", "Hockey", 30);

        let sport = compare(&guess, &mystery).get(Attribute::Sport);
        assert!(!sport.matched);
        assert_eq!(sport.direction, None);
    }

    #[test]
    fn categorical_comparison_is_exact() {
        let mystery = Entry::new("M", "Tennis", 30, "USA", 1, 1);
        let guess = Entry::new("G", "tennis", 30, "usa", 1, 1);

        let feedback = compare(&guess, &mystery);
        assert!(!feedback.get(Attribute::Sport).matched);
        assert!(!feedback.get(Attribute::Country).matched);
    }

    #[test]
    fn scenario_guess_a_against_b() {
        let a = athlete("A", "X", 20);
        let b = athlete("B", "X", 30);

        let feedback = compare(&a, &b);
        assert!(!feedback.is_correct());
        assert!(feedback.get(Attribute::Sport).matched);
        assert!(!feedback.get(Attribute::Age).matched);
        assert_eq!(
            feedback.get(Attribute::Age).direction,
            Some(Direction::Higher)
        );
        assert_eq!(feedback.count_matches(), 4);
    }

    #[test]
    fn feedback_follows_attribute_order() {
        let a = athlete("A", "X", 20);
        let feedback = compare(&a, &a);
        let order: Vec<Attribute> = feedback.attributes().iter().map(|fb| fb.attribute).collect();
        assert_eq!(order, Attribute::ALL);
    }

    #[test]
    fn arrows() {
        assert_eq!(Direction::Higher.arrow(), '↑');
        assert_eq!(Direction::Lower.arrow(), '↓');
    }
}
