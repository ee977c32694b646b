//! CSV row struct for the roster file and conversion to/from [`StudentRecord`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::models::student::StudentRecord;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const GRADE_SEPARATOR: &str = ";";

pub fn grades_to_csv(grades: &[i64]) -> String {
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(GRADE_SEPARATOR)
}

/// Decode a grades field. One bad piece fails the whole field.
pub fn csv_to_grades(s: &str, line: u64) -> Result<Vec<i64>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(GRADE_SEPARATOR)
        .map(|piece| {
            piece
                .trim()
                .parse::<i64>()
                .map_err(|_| RosterError::MalformedGrade {
                    line,
                    value: piece.to_string(),
                })
        })
        .collect()
}

pub fn csv_to_age(s: &str, line: u64) -> Result<i32> {
    s.trim()
        .parse::<i32>()
        .map_err(|_| RosterError::MalformedAge {
            line,
            value: s.to_string(),
        })
}

// ---------------------------------------------------------------------------
// StudentCsvRow
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentCsvRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Grades")]
    pub grades: String,
}

impl StudentCsvRow {
    pub fn from_model(student: &StudentRecord) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name.clone(),
            age: student.age.to_string(),
            grades: grades_to_csv(&student.grades),
        }
    }

    /// Convert to a record. `line` is the file line used in error reports.
    pub fn to_model(&self, line: u64) -> Result<StudentRecord> {
        let age = csv_to_age(&self.age, line)?;
        let grades = csv_to_grades(&self.grades, line)?;
        Ok(StudentRecord::new(self.id.clone(), self.name.clone())
            .with_age(age)
            .with_grades(grades))
    }
}
