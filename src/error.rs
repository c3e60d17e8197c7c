//! Error types for the projection boundary.
//!
//! The projection itself never fails; these errors come from reading
//! scenarios, validating inputs and writing results.

use thiserror::Error;

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors that can occur while preparing or reporting projections.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A numeric input is outside the range the engine accepts
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// Invalid scenario row
    #[error("Invalid scenario at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: wealth-projection <scenarios.csv> [series.csv]")]
    MissingArgument,
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
