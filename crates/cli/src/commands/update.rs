use std::path::Path;

use roster_core::csv_codec::save_roster;
use roster_core::error::RosterError;
use roster_core::models::student::StudentUpdate;
use roster_core::store::StudentRepository;
use tracing::info;

use super::load_or_empty;

/// Run the `update` command: apply the supplied fields to one student and save.
pub fn run(data_file: &Path, id: &str, update: StudentUpdate) -> anyhow::Result<()> {
    let mut roster = load_or_empty(data_file)?;

    if update.is_empty() {
        if !roster.contains(id) {
            return Err(RosterError::NotFound(id.to_string()).into());
        }
        println!("Nothing to update for {id}.");
        return Ok(());
    }
    roster.update(id, update)?;
    save_roster(&roster, data_file)?;

    info!("Updated student {} in {}", id, data_file.display());
    if let Some(student) = roster.get(id) {
        println!(
            "Updated {}: name={}, age={}, grades={:?}",
            id, student.name, student.age, student.grades
        );
    }
    Ok(())
}
