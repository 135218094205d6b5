//! Error types for the review store.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    /// The entry isn't `movie,review` with both parts present
    #[error("Please enter the review in the given format (Movie,Review).")]
    InvalidFormat,

    /// Double quotes are reserved for wrapping multi-line reviews in the file
    #[error("Reviews can't contain double quotes (\").")]
    QuoteNotAllowed,

    /// The review file could not be opened for appending
    #[error("Error opening file to save review: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
