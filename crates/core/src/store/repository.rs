use crate::error::Result;
use crate::models::student::{StudentRecord, StudentUpdate};

/// Keyed store of student records.
///
/// Failed mutations leave the store exactly as it was.
pub trait StudentRepository {
    /// Insert a new record. Fails with `DuplicateKey` if the id is taken.
    fn add(&mut self, student: StudentRecord) -> Result<()>;
    /// Apply a partial update. Fails with `NotFound` if the id is absent.
    fn update(&mut self, id: &str, update: StudentUpdate) -> Result<()>;
    /// Remove and return a record. Fails with `NotFound` if the id is absent.
    fn delete(&mut self, id: &str) -> Result<StudentRecord>;
    fn get(&self, id: &str) -> Option<&StudentRecord>;
    /// All records in storage order.
    fn list(&self) -> &[StudentRecord];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
