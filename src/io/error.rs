//! Error types and context management for ranking operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all symbol table and report operations
#[derive(Debug)]
pub enum RankError {
    /// Query or update against the symbol table failed
    Database {
        /// Description of the statement that failed
        operation: &'static str,
        /// Underlying `SQLite` error
        source: rusqlite::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command or policy parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A row in the symbol table holds data the tools cannot work with
    InvalidTableData {
        /// Pattern of the offending row
        pattern: String,
        /// Description of what is wrong with the row
        reason: String,
    },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database { operation, source } => {
                write!(f, "Database error during {operation}: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTableData { pattern, reason } => {
                write!(f, "Invalid symbol table row for pattern '{pattern}': {reason}")
            }
        }
    }
}

impl std::error::Error for RankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for ranking results
pub type Result<T> = std::result::Result<T, RankError>;

impl From<rusqlite::Error> for RankError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database {
            operation: "unknown",
            source: err,
        }
    }
}

impl From<std::io::Error> for RankError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the file or statement being worked on to an error
pub trait WithPath<T> {
    /// Record the path and operation for a failed file system call
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`RankError::FileSystem`] carrying the path
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| RankError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Self {
        self.map_err(|error| match error {
            RankError::FileSystem { source, .. } => RankError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }
}

/// Names the statement a database call belongs to
pub trait WithStatement<T> {
    /// Record which statement failed
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`RankError::Database`] naming the statement
    fn with_statement(self, operation: &'static str) -> Result<T>;
}

impl<T> WithStatement<T> for std::result::Result<T, rusqlite::Error> {
    fn with_statement(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| RankError::Database { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RankError {
    RankError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
