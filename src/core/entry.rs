//! Roster entry representation
//!
//! An `Entry` is one athlete the player can guess. The name is the identity key;
//! the remaining fields are the attributes compared against the mystery athlete.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One athlete in the roster
///
/// Field names map onto the CSV header `Name,Sport,Age,Country,Olympics,Championships`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sport")]
    sport: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Olympics")]
    olympics: u32,
    #[serde(rename = "Championships")]
    championships: u32,
}

/// Whether an attribute is compared by equality only or also by ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Categorical,
    Numeric,
}

/// A tracked attribute, in display and share order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Sport,
    Country,
    Age,
    Olympics,
    Championships,
}

impl Attribute {
    /// Every tracked attribute in the fixed order used for feedback and sharing
    pub const ALL: [Self; 5] = [
        Self::Sport,
        Self::Country,
        Self::Age,
        Self::Olympics,
        Self::Championships,
    ];

    #[must_use]
    pub const fn kind(self) -> AttributeKind {
        match self {
            Self::Sport | Self::Country => AttributeKind::Categorical,
            Self::Age | Self::Olympics | Self::Championships => AttributeKind::Numeric,
        }
    }

    /// Column label used in tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sport => "Sport",
            Self::Country => "Country",
            Self::Age => "Age",
            Self::Olympics => "Olympics",
            Self::Championships => "Championships",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Entry {
    /// Create a new entry
    ///
    /// # Examples
    /// ```
    /// use sports_wordle::core::Entry;
    ///
    /// let entry = Entry::new("Simone Biles", "Gymnastics", 27, "USA", 7, 25);
    /// assert_eq!(entry.name(), "Simone Biles");
    /// assert_eq!(entry.olympics(), 7);
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        sport: impl Into<String>,
        age: u32,
        country: impl Into<String>,
        olympics: u32,
        championships: u32,
    ) -> Self {
        Self {
            name: name.into(),
            sport: sport.into(),
            age,
            country: country.into(),
            olympics,
            championships,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn sport(&self) -> &str {
        &self.sport
    }

    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[inline]
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    #[must_use]
    pub const fn olympics(&self) -> u32 {
        self.olympics
    }

    #[inline]
    #[must_use]
    pub const fn championships(&self) -> u32 {
        self.championships
    }

    /// Lowercased name used for case-insensitive lookups
    #[must_use]
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Check whether this entry has the given name, ignoring case
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Text value of a categorical attribute
    ///
    /// Returns `None` for numeric attributes.
    #[must_use]
    pub fn text_of(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Sport => Some(&self.sport),
            Attribute::Country => Some(&self.country),
            Attribute::Age | Attribute::Olympics | Attribute::Championships => None,
        }
    }

    /// Value of a numeric attribute
    ///
    /// Returns `None` for categorical attributes.
    #[must_use]
    pub const fn number_of(&self, attribute: Attribute) -> Option<u32> {
        match attribute {
            Attribute::Age => Some(self.age),
            Attribute::Olympics => Some(self.olympics),
            Attribute::Championships => Some(self.championships),
            Attribute::Sport | Attribute::Country => None,
        }
    }

    /// Attribute value rendered for display
    #[must_use]
    pub fn display_value(&self, attribute: Attribute) -> String {
        match self.number_of(attribute) {
            Some(n) => n.to_string(),
            None => self.text_of(attribute).unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lebron() -> Entry {
        Entry::new("LeBron James", "Basketball", 39, "USA", 3, 4)
    }

    #[test]
    fn entry_accessors() {
        let entry = lebron();
        assert_eq!(entry.name(), "LeBron James");
        assert_eq!(entry.sport(), "Basketball");
        assert_eq!(entry.country(), "USA");
        assert_eq!(entry.age(), 39);
        assert_eq!(entry.olympics(), 3);
        assert_eq!(entry.championships(), 4);
    }

    #[test]
    fn attribute_kinds() {
        assert_eq!(Attribute::Sport.kind(), AttributeKind::Categorical);
        assert_eq!(Attribute::Country.kind(), AttributeKind::Categorical);
        assert_eq!(Attribute::Age.kind(), AttributeKind::Numeric);
        assert_eq!(Attribute::Olympics.kind(), AttributeKind::Numeric);
        assert_eq!(Attribute::Championships.kind(), AttributeKind::Numeric);
    }

    #[test]
    fn attribute_order_is_fixed() {
        assert_eq!(Attribute::ALL[0], Attribute::Sport);
        assert_eq!(Attribute::ALL[2], Attribute::Age);
        assert_eq!(Attribute::ALL[4], Attribute::Championships);
    }

    #[test]
    fn text_and_number_are_disjoint() {
        let entry = lebron();
        for attribute in Attribute::ALL {
            let has_text = entry.text_of(attribute).is_some();
            let has_number = entry.number_of(attribute).is_some();
            assert!(has_text ^ has_number, "{attribute} must be exactly one kind");
        }
    }

    #[test]
    fn is_named_ignores_case() {
        let entry = lebron();
        assert!(entry.is_named("lebron james"));
        assert!(entry.is_named("LEBRON JAMES"));
        assert!(!entry.is_named("LeBron"));
        assert_eq!(entry.name_key(), "lebron james");
    }

    #[test]
    fn display_value_formats_numbers() {
        let entry = lebron();
        assert_eq!(entry.display_value(Attribute::Age), "39");
        assert_eq!(entry.display_value(Attribute::Country), "USA");
        assert_eq!(format!("{entry}"), "LeBron James");
    }
}
