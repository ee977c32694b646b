//! Error types for the roster core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all roster core operations.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("duplicate student id: {0}")]
    DuplicateKey(String),

    #[error("student not found: {0}")]
    NotFound(String),

    #[error("file not found: {}", .0.display())]
    FileAbsent(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed age on line {line}: '{value}'")]
    MalformedAge { line: u64, value: String },

    #[error("malformed grade on line {line}: '{value}'")]
    MalformedGrade { line: u64, value: String },

    #[error("malformed header: expected 'ID,Name,Age,Grades', found '{0}'")]
    MalformedHeader(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// A convenience Result alias that defaults to [`RosterError`].
pub type Result<T> = std::result::Result<T, RosterError>;
