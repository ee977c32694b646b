use std::path::Path;

use roster_core::csv_codec::save_roster;
use roster_core::models::student::StudentRecord;
use roster_core::store::StudentRepository;
use tracing::info;

use super::load_or_empty;

/// Run the `add` command: load the roster, add one student, and save.
pub fn run(data_file: &Path, id: &str, name: &str, age: i32, grades: Vec<i64>) -> anyhow::Result<()> {
    let mut roster = load_or_empty(data_file)?;

    let student = StudentRecord::new(id, name)
        .with_age(age)
        .with_grades(grades);
    roster.add(student)?;
    save_roster(&roster, data_file)?;

    info!("Added student {} to {}", id, data_file.display());
    println!("Added student {name} with ID {id}.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::csv_codec::load_roster;
    use roster_core::error::RosterError;

    #[test]
    fn add_creates_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");

        run(&path, "S001", "Ada", 21, vec![88, 92, 75]).unwrap();

        let roster = load_roster(&path).unwrap();
        let student = roster.get("S001").unwrap();
        assert_eq!(student.age, 21);
        assert_eq!(student.grades, vec![88, 92, 75]);
    }

    #[test]
    fn add_duplicate_fails_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        run(&path, "S001", "Ada", 21, vec![]).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = run(&path, "S001", "Imposter", 30, vec![]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RosterError>(),
            Some(RosterError::DuplicateKey(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
