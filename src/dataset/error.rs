//! Dataset error types
//!
//! Defines all errors that can occur while loading the colony dataset.
//! Every variant is fatal at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Source file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV structure
    #[error("CSV error: {0}")]
    Csv(String),

    /// Header row lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row field could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) if matches!(err.kind(), csv::ErrorKind::Deserialize { .. }) => {
                DatasetError::Parse {
                    line: pos.line(),
                    message: err.to_string(),
                }
            }
            _ => DatasetError::Csv(err.to_string()),
        }
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::MissingColumn("state_code".to_string());
        assert_eq!(err.to_string(), "Missing required column: state_code");

        let err = DatasetError::Parse {
            line: 3,
            message: "invalid float literal".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error on line 3: invalid float literal");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = DatasetError::Io {
            path: PathBuf::from("bees.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("bees.csv"));
    }
}
