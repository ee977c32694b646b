use tracing::debug;

use crate::error::{Result, RosterError};
use crate::models::student::{StudentRecord, StudentUpdate};

use super::repository::StudentRepository;

/// In-memory roster of students, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from records, rejecting any repeated id.
    pub fn from_records(records: impl IntoIterator<Item = StudentRecord>) -> Result<Self> {
        let mut roster = Self::new();
        for record in records {
            roster.add(record)?;
        }
        Ok(roster)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.students.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }
}

impl StudentRepository for Roster {
    fn add(&mut self, student: StudentRecord) -> Result<()> {
        if self.contains(student.id()) {
            return Err(RosterError::DuplicateKey(student.id().to_string()));
        }
        debug!(id = student.id(), name = %student.name, "added student");
        self.students.push(student);
        Ok(())
    }

    fn update(&mut self, id: &str, update: StudentUpdate) -> Result<()> {
        let idx = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        debug!(id, ?update, "updating student");
        self.students[idx].apply(update);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        let idx = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        debug!(id, "deleted student");
        Ok(self.students.remove(idx))
    }

    fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id() == id)
    }

    fn list(&self) -> &[StudentRecord] {
        &self.students
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
