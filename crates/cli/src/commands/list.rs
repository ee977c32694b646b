use std::path::Path;

use roster_core::csv_codec::load_roster;
use roster_core::error::RosterError;
use roster_core::store::StudentRepository;

use super::display::{format_row, write_table};

/// Run the `list` command: print every student in the data file.
pub fn run(data_file: &Path) -> anyhow::Result<()> {
    let roster = load_roster(data_file)?;
    let stdout = std::io::stdout();
    write_table(&mut stdout.lock(), roster.list())?;
    println!("Total: {}", roster.len());
    Ok(())
}

/// Run the `show` command: print a single student.
pub fn show(data_file: &Path, id: &str) -> anyhow::Result<()> {
    let roster = load_roster(data_file)?;
    let student = roster
        .get(id)
        .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
    println!("{}", format_row(student));
    Ok(())
}
