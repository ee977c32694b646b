use serde::{Deserialize, Serialize};

/// Age assigned to a student when none is given.
pub const DEFAULT_AGE: i32 = 18;

/// A single student's record.
///
/// The id is fixed at construction; every other field can be changed
/// through a [`StudentUpdate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentRecord {
    id: String,
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub grades: Vec<i64>,
}

impl StudentRecord {
    /// Create a record with the default age and no grades.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: DEFAULT_AGE,
            grades: Vec::new(),
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_grades(mut self, grades: impl Into<Vec<i64>>) -> Self {
        self.grades = grades.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Mean of all grades, or `0.0` when there are none.
    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: i128 = self.grades.iter().map(|&g| i128::from(g)).sum();
        total as f64 / self.grades.len() as f64
    }

    /// Overwrite the fields present in `update`, leaving the rest untouched.
    pub(crate) fn apply(&mut self, update: StudentUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(grades) = update.grades {
            self.grades = grades;
        }
    }
}

/// Partial update for a [`StudentRecord`]. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    /// Replaces the whole grade list; grades are never merged.
    pub grades: Option<Vec<i64>>,
}

impl StudentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn grades(mut self, grades: impl Into<Vec<i64>>) -> Self {
        self.grades = Some(grades.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.grades.is_none()
    }
}
