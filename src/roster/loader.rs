//! Roster loading utilities
//!
//! Reads CSV with the header `Name,Sport,Age,Country,Olympics,Championships`.
//! Rows that fail to parse (e.g. a non-numeric age) are skipped with a warning.

use super::Roster;
use crate::core::Entry;
use crate::error::RosterError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Load a roster from a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the header cannot be read,
/// or two rows share a name.
///
/// # Examples
/// ```no_run
/// use sports_wordle::roster::loader::load_from_file;
///
/// let roster = load_from_file("data/roster.csv").unwrap();
/// println!("Loaded {} athletes", roster.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading roster");
    let file = File::open(path)?;
    from_reader(file)
}

/// Parse a roster from an in-memory CSV string
///
/// # Errors
///
/// See [`from_reader`].
pub fn from_csv_str(csv: &str) -> Result<Roster, RosterError> {
    from_reader(csv.as_bytes())
}

/// Parse a roster from any reader
///
/// # Errors
///
/// Returns an error on I/O failure, an unreadable header, or duplicate names.
///
/// # Examples
/// ```
/// use sports_wordle::roster::loader::from_reader;
///
/// let csv = "Name,Sport,Age,Country,Olympics,Championships\n\
///            Tom Brady,Football,46,USA,0,7\n";
/// let roster = from_reader(csv.as_bytes()).unwrap();
/// assert_eq!(roster.len(), 1);
/// ```
pub fn from_reader<R: Read>(reader: R) -> Result<Roster, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Surface a broken header as an error instead of skipping every row
    csv_reader.headers()?;

    let mut entries = Vec::new();
    for (row, record) in csv_reader.deserialize::<Entry>().enumerate() {
        match record {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                // Header is line 1
                warn!(line = row + 2, error = %err, "skipping malformed roster row");
            }
        }
    }

    debug!(count = entries.len(), "roster parsed");
    Roster::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Name,Sport,Age,Country,Olympics,Championships\n";

    #[test]
    fn parses_valid_rows() {
        let csv = format!("{HEADER}LeBron James,Basketball,39,USA,3,4\nLionel Messi,Soccer,36,Argentina,1,1\n");
        let roster = from_csv_str(&csv).unwrap();

        assert_eq!(roster.len(), 2);
        let messi = roster.find("lionel messi").unwrap();
        assert_eq!(messi.sport(), "Soccer");
        assert_eq!(messi.age(), 36);
        assert_eq!(messi.country(), "Argentina");
    }

    #[test]
    fn skips_malformed_rows() {
        let csv = format!(
            "{HEADER}LeBron James,Basketball,thirty-nine,USA,3,4\nLionel Messi,Soccer,36,Argentina,1,1\n"
        );
        let roster = from_csv_str(&csv).unwrap();

        assert_eq!(roster.len(), 1);
        assert!(roster.find("LeBron James").is_none());
    }

    #[test]
    fn trims_whitespace() {
        let csv = format!("{HEADER} Tom Brady , Football , 46 , USA , 0 , 7\n");
        let roster = from_csv_str(&csv).unwrap();
        let brady = roster.find("Tom Brady").unwrap();
        assert_eq!(brady.sport(), "Football");
        assert_eq!(brady.age(), 46);
    }

    #[test]
    fn header_only_gives_empty_roster() {
        let roster = from_csv_str(HEADER).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn duplicate_rows_rejected() {
        let csv = format!("{HEADER}Tom Brady,Football,46,USA,0,7\nTom Brady,Football,46,USA,0,7\n");
        assert!(matches!(
            from_csv_str(&csv),
            Err(RosterError::DuplicateName(_))
        ));
    }

    #[test]
    fn load_from_file_reads_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}Sidney Crosby,Hockey,36,Canada,2,3").unwrap();

        let roster = load_from_file(file.path()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.entries()[0].name(), "Sidney Crosby");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/roster.csv");
        assert!(matches!(result, Err(RosterError::Io(_))));
    }
}
