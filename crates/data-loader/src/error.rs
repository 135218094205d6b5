//! Error types for the data-loader crate.
//!
//! Only whole-file failures are errors. A malformed row is not an error at
//! this level: it is reported as a [`RowDefect`] and the row is skipped, and a
//! non-numeric numeric field silently coerces to zero.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a movie dataset.
///
/// Every variant means "nothing was loaded". Callers are expected to fall
/// back to an empty dataset and show the message to the user.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Could not open file '{path}'. Please make sure it exists.")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file has no header line, so there is nothing to skip and no data
    #[error("Empty file or unable to read header: {path}")]
    EmptyDataset { path: PathBuf },
}

/// Why a single data row was skipped.
///
/// Skipped rows never abort a load; they are counted and logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: missing {field} field")]
pub struct RowDefect {
    /// 1-based line number in the source file (the header is line 1)
    pub line: usize,
    /// Name of the first field that was absent
    pub field: &'static str,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
