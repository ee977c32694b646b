//! Roster CSV reader — loads a single CSV file into a fresh [`Roster`].

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::{Result, RosterError};
use crate::store::{Roster, StudentRepository};

use super::rows::StudentCsvRow;
use super::{csv_error, HEADER};

/// Read a roster from `path`.
///
/// Decoding is all-or-nothing: the first bad row aborts the load and no
/// partial roster is returned.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RosterError::FileAbsent(path.to_path_buf()));
        }
        Err(e) => return Err(RosterError::Io(e)),
    };

    let mut rdr = csv::Reader::from_reader(file);
    let headers = rdr.headers().map_err(csv_error)?.clone();
    if !headers.iter().eq(HEADER) {
        return Err(RosterError::MalformedHeader(
            headers.iter().collect::<Vec<_>>().join(","),
        ));
    }

    let mut roster = Roster::new();
    for result in rdr.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: StudentCsvRow = record.deserialize(Some(&headers)).map_err(csv_error)?;
        roster.add(row.to_model(line)?)?;
    }

    info!(path = %path.display(), count = roster.len(), "loaded roster");
    Ok(roster)
}
