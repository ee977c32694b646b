//! Interactive text menu over a single in-memory roster.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use roster_core::config::RosterConfig;
use roster_core::csv_codec::{load_roster, save_roster};
use roster_core::error::RosterError;
use roster_core::models::student::{StudentRecord, StudentUpdate};
use roster_core::store::{Roster, StudentRepository};
use tracing::{info, warn};

use super::display::write_table;
use super::input::{parse_grades, AgeInput};

const MENU: &str = "
===== Student Information System =====
1. Add Student
2. Display Students (from memory)
3. Display Students (from file)
4. Update Student
5. Delete Student
6. Save to File
7. Load from File
8. Exit
";

/// Run the `menu` command against stdin/stdout.
pub fn run(config: &RosterConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(config, stdin.lock(), stdout.lock());
    menu.load_initial()?;
    menu.run()?;
    Ok(())
}

pub struct Menu<R, W> {
    roster: Roster,
    data_file: PathBuf,
    autosave: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(config: &RosterConfig, input: R, output: W) -> Self {
        Self {
            roster: Roster::new(),
            data_file: config.data_file(),
            autosave: config.roster.autosave,
            input,
            output,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Load the data file at startup. A missing file starts an empty roster.
    pub fn load_initial(&mut self) -> io::Result<()> {
        match load_roster(&self.data_file) {
            Ok(roster) => self.roster = roster,
            Err(RosterError::FileAbsent(path)) => {
                info!("No roster at {}, starting empty", path.display());
            }
            Err(e) => {
                warn!("Failed to load {}: {e}", self.data_file.display());
                writeln!(self.output, "Failed to load data: {e}")?;
            }
        }
        Ok(())
    }

    /// Loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.add()?,
                "2" => write_table(&mut self.output, self.roster.list())?,
                "3" => self.display_from_file()?,
                "4" => self.update()?,
                "5" => self.delete()?,
                "6" => self.save()?,
                "7" => self.load()?,
                "8" => {
                    writeln!(self.output, "Exiting program.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        self.output.flush()
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Student ID: ")? else {
            return Ok(());
        };
        if id.is_empty() {
            writeln!(self.output, "Student ID must not be empty.")?;
            return Ok(());
        }
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt("Enter Age (default 18): ")? else {
            return Ok(());
        };
        let age_input = AgeInput::parse(&age);
        if let AgeInput::Invalid(raw) = &age_input {
            writeln!(self.output, "Invalid age '{raw}'; using default.")?;
        }
        let Some(grades_input) = self.prompt("Enter grades separated by spaces: ")? else {
            return Ok(());
        };
        let grades = match parse_grades(&grades_input) {
            Ok(grades) => grades,
            Err(_) => {
                writeln!(self.output, "Invalid grades input. No grades added.")?;
                Vec::new()
            }
        };

        let student = StudentRecord::new(id.as_str(), name.as_str())
            .with_age(age_input.or_default())
            .with_grades(grades);
        match self.roster.add(student) {
            Ok(()) => {
                writeln!(self.output, "Added student {name} with ID {id}.")?;
                self.autosave()?;
            }
            Err(e) => writeln!(self.output, "Could not add student: {e}")?,
        }
        Ok(())
    }

    fn update(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Student ID to update: ")? else {
            return Ok(());
        };
        if !self.roster.contains(&id) {
            writeln!(self.output, "Student not found.")?;
            return Ok(());
        }

        writeln!(self.output, "Leave field empty if no change.")?;
        let mut update = StudentUpdate::new();

        let name = self.prompt("New Name: ")?.unwrap_or_default();
        if !name.is_empty() {
            update = update.name(name);
        }

        let age = self.prompt("New Age: ")?.unwrap_or_default();
        match AgeInput::parse(&age) {
            AgeInput::Given(age) => update = update.age(age),
            AgeInput::Blank => {}
            AgeInput::Invalid(_) => {
                writeln!(self.output, "Invalid age input; age not updated.")?;
            }
        }

        let grades = self
            .prompt("New grades separated by spaces (replaces old grades): ")?
            .unwrap_or_default();
        if !grades.is_empty() {
            match parse_grades(&grades) {
                Ok(grades) => update = update.grades(grades),
                Err(_) => writeln!(self.output, "Invalid grades input; grades not updated.")?,
            }
        }

        match self.roster.update(&id, update) {
            Ok(()) => {
                writeln!(self.output, "Updated student {id}.")?;
                self.autosave()?;
            }
            Err(e) => writeln!(self.output, "Could not update student: {e}")?,
        }
        Ok(())
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Student ID to delete: ")? else {
            return Ok(());
        };
        match self.roster.delete(&id) {
            Ok(_) => {
                writeln!(self.output, "Deleted student with ID {id}.")?;
                self.autosave()?;
            }
            Err(e) => writeln!(self.output, "Could not delete student: {e}")?,
        }
        Ok(())
    }

    fn display_from_file(&mut self) -> io::Result<()> {
        match load_roster(&self.data_file) {
            Ok(roster) => {
                writeln!(self.output, "\nStudents from file:")?;
                write_table(&mut self.output, roster.list())
            }
            Err(e) => writeln!(self.output, "No data loaded from file: {e}"),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match save_roster(&self.roster, &self.data_file) {
            Ok(()) => writeln!(self.output, "Data saved to {}", self.data_file.display()),
            Err(e) => {
                warn!("Save to {} failed: {e}", self.data_file.display());
                writeln!(self.output, "Failed to save data: {e}")
            }
        }
    }

    /// Replace the in-memory roster, but only if the file loads cleanly.
    fn load(&mut self) -> io::Result<()> {
        match load_roster(&self.data_file) {
            Ok(roster) => {
                self.roster = roster;
                writeln!(
                    self.output,
                    "Data loaded from {} ({} students)",
                    self.data_file.display(),
                    self.roster.len()
                )
            }
            Err(e) => writeln!(self.output, "Failed to load data: {e}"),
        }
    }

    fn autosave(&mut self) -> io::Result<()> {
        if self.autosave {
            self.save()?;
        }
        Ok(())
    }
}
