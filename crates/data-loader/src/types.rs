//! Core domain types for the movie dataset.
//!
//! A [`MovieRecord`] is one row of the CSV file. A [`Dataset`] is the ordered,
//! bounded collection produced by a single load.

use serde::Serialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Limits
// =============================================================================

/// Maximum number of records kept from one file. Later rows are ignored.
pub const MAX_MOVIES: usize = 120;

/// Maximum title length, in characters
pub const MAX_TITLE_LEN: usize = 99;

/// Maximum length of the raw pipe-delimited genre field, in characters
pub const MAX_GENRE_LEN: usize = 199;

/// Maximum language length, in characters
pub const MAX_LANGUAGE_LEN: usize = 49;

// =============================================================================
// Movie Record
// =============================================================================

/// One movie parsed from a data line.
///
/// Records are only built by the parser and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub title: String,
    /// Sub-genres joined with `|`, e.g. `"Action|Drama"`
    pub genre: String,
    pub language: String,
    pub year: i32,
    pub rating: f32,
    pub rating_count: i32,
}

impl MovieRecord {
    /// Iterate over the sub-genre tokens, with leading whitespace removed.
    ///
    /// Empty tokens (from `||` or a leading/trailing `|`) are not yielded.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split('|')
            .filter(|token| !token.is_empty())
            .map(str::trim_start)
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Records loaded from one file, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) source: PathBuf,
    pub(crate) records: Vec<MovieRecord>,
}

impl Dataset {
    /// Create a dataset from already-parsed records.
    ///
    /// Records beyond [`MAX_MOVIES`] are dropped.
    pub fn from_records(source: impl Into<PathBuf>, mut records: Vec<MovieRecord>) -> Self {
        records.truncate(MAX_MOVIES);
        Self {
            source: source.into(),
            records,
        }
    }

    /// An empty dataset, used when a load fails.
    pub fn empty(source: impl Into<PathBuf>) -> Self {
        Self::from_records(source, Vec::new())
    }

    /// Path the records were read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Number of records loaded
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the dataset and take ownership of the records
    pub fn into_records(self) -> Vec<MovieRecord> {
        self.records
    }
}
