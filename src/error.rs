//! Error types for the baseball projections store

use rusqlite::ErrorCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A write would break a uniqueness or foreign key constraint. Nothing was written.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// More than one player carries the same secondary identifier.
    #[error("Ambiguous match: {count} players have {field} = {value}")]
    AmbiguousMatch {
        field: String,
        value: String,
        count: usize,
    },

    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl ProjectionError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ProjectionError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        ProjectionError::NotFound { what: what.into() }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, ProjectionError::ConstraintViolation { .. })
    }
}

impl From<rusqlite::Error> for ProjectionError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                ProjectionError::ConstraintViolation {
                    message: message.clone().unwrap_or_else(|| failure.to_string()),
                }
            }
            other => ProjectionError::Database(other),
        }
    }
}
