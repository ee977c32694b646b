//! Roster CSV writer — saves a [`Roster`] to a single CSV file.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::store::Roster;

use super::rows::StudentCsvRow;
use super::{csv_error, HEADER};

/// Write the whole roster to `path`, replacing any existing content.
///
/// The header row is always written, so an empty roster produces a
/// header-only file.
pub fn save_roster(roster: &Roster, path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;

    wtr.write_record(HEADER).map_err(csv_error)?;
    for student in roster {
        wtr.serialize(StudentCsvRow::from_model(student))
            .map_err(csv_error)?;
    }

    wtr.flush()?;
    info!(path = %path.display(), count = roster.iter().len(), "saved roster");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::models::student::StudentRecord;
    use crate::store::StudentRepository;

    fn sample_roster() -> Roster {
        Roster::from_records([
            StudentRecord::new("S001", "Ada Lovelace")
                .with_age(21)
                .with_grades([88, 92, 75]),
            StudentRecord::new("S002", "Alan Turing").with_age(24),
        ])
        .unwrap()
    }

    #[test]
    fn test_write_matches_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        save_roster(&sample_roster(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "ID,Name,Age,Grades\nS001,Ada Lovelace,21,88;92;75\nS002,Alan Turing,24,\n"
        );
    }

    #[test]
    fn test_write_empty_roster_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        save_roster(&Roster::new(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ID,Name,Age,Grades\n");
    }

    #[test]
    fn test_write_quotes_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        let mut roster = Roster::new();
        roster
            .add(StudentRecord::new("S003", "Hopper, Grace").with_age(30))
            .unwrap();
        save_roster(&roster, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("S003,\"Hopper, Grace\",30,"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        std::fs::write(&path, "stale content that is much longer than the new file\n".repeat(10))
            .unwrap();

        save_roster(&Roster::new(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ID,Name,Age,Grades\n");
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("students.csv");
        let err = save_roster(&sample_roster(), &path).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}
