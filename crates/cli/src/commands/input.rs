//! Parsing of free-form user input for the interactive menu.

use std::num::ParseIntError;

use roster_core::models::student::DEFAULT_AGE;

/// Parse space-separated grades. An empty string yields no grades.
pub fn parse_grades(s: &str) -> Result<Vec<i64>, ParseIntError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Age entered when adding a student.
#[derive(Debug, PartialEq, Eq)]
pub enum AgeInput {
    Given(i32),
    Blank,
    Invalid(String),
}

impl AgeInput {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return Self::Blank;
        }
        match s.parse() {
            Ok(age) => Self::Given(age),
            Err(_) => Self::Invalid(s.to_string()),
        }
    }

    /// Age to store; blank and unparsable input fall back to the default.
    pub fn or_default(&self) -> i32 {
        match self {
            Self::Given(age) => *age,
            Self::Blank | Self::Invalid(_) => DEFAULT_AGE,
        }
    }
}
