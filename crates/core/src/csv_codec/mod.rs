//! Roster CSV import/export.
//!
//! A roster is stored as a single CSV file with the fixed header
//! `ID,Name,Age,Grades`. Grades are joined with `;` inside one field.

pub mod reader;
pub mod rows;
pub mod writer;

pub use reader::load_roster;
pub use writer::save_roster;

use crate::error::RosterError;

/// File name used when no path is configured.
pub const DEFAULT_FILENAME: &str = "students.csv";

/// Column names, in file order.
pub const HEADER: [&str; 4] = ["ID", "Name", "Age", "Grades"];

pub(crate) fn csv_error(err: csv::Error) -> RosterError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => RosterError::Io(io),
            other => RosterError::Serialization(format!("CSV error: {other:?}")),
        }
    } else {
        RosterError::Serialization(format!("CSV error: {err}"))
    }
}
