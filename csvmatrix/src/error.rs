//! Error type for file-backed matrices

use std::path::PathBuf;

use csvmatrix_core::CsvMatrixError;
use thiserror::Error;

/// Errors raised by the `csvmatrix` crate
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the pure matrix core (bounds, read-only, dialect)
    #[error(transparent)]
    Matrix(#[from] CsvMatrixError),

    /// Failure opening or mapping a file
    #[error("{context} {}: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration document
    #[cfg(feature = "serde")]
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

/// Result type for `csvmatrix` operations
pub type Result<T> = std::result::Result<T, Error>;
