use std::path::Path;

use roster_core::csv_codec::save_roster;
use roster_core::store::StudentRepository;
use tracing::info;

use super::load_or_empty;

/// Run the `delete` command: remove one student and save.
pub fn run(data_file: &Path, id: &str) -> anyhow::Result<()> {
    let mut roster = load_or_empty(data_file)?;
    let removed = roster.delete(id)?;
    save_roster(&roster, data_file)?;

    info!("Deleted student {} from {}", id, data_file.display());
    println!("Deleted student {} with ID {}.", removed.name, id);
    Ok(())
}
