//! Loading a dataset from disk.
//!
//! Steps:
//! 1. Read the file (lossy UTF-8)
//! 2. Skip the header line
//! 3. Parse each data line, keeping good rows and skipping bad ones
//! 4. Stop once [`MAX_MOVIES`] records are kept

use crate::error::{DataLoadError, Result};
use crate::parser::{self, RowOutcome};
use crate::types::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a whole file and convert it to UTF-8, replacing invalid bytes.
///
/// The file is opened read-only and closed when this returns.
fn read_text_lossy(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| DataLoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl Dataset {
    /// Load a movie CSV file.
    ///
    /// Returns [`DataLoadError::FileNotFound`] if the file can't be opened and
    /// [`DataLoadError::EmptyDataset`] if it has no header line. Malformed rows
    /// are skipped, never reported as errors.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_text_lossy(path)?;
        let dataset = Self::parse_str(path, &content)?;
        Ok(dataset)
    }

    /// Parse file contents that have already been read.
    ///
    /// `source` is only recorded on the dataset and used in messages.
    pub fn parse_str(source: impl AsRef<Path>, content: &str) -> Result<Self> {
        let source = source.as_ref();
        let mut lines = content.lines();

        if lines.next().is_none() {
            return Err(DataLoadError::EmptyDataset {
                path: source.to_path_buf(),
            });
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;

        // Header is line 1, so data starts at line 2
        for (idx, line) in lines.enumerate() {
            if records.len() >= MAX_MOVIES {
                tracing::debug!("Reached {} records, ignoring the rest of {:?}", MAX_MOVIES, source);
                break;
            }
            match parser::parse_row(line, idx + 2) {
                RowOutcome::Kept(record) => records.push(record),
                RowOutcome::Blank => {}
                RowOutcome::Skipped(defect) => {
                    tracing::debug!("Skipping row in {:?}: {}", source, defect);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Loaded {} movies from {:?} ({} malformed rows skipped)",
            records.len(),
            source,
            skipped
        );

        Ok(Self::from_records(source, records))
    }
}

/// Load a movie CSV file. Shorthand for [`Dataset::load_from_file`].
pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
    Dataset::load_from_file(path)
}

/// Load a movie CSV file, treating any failure as an empty dataset.
///
/// The error is returned alongside so the caller can tell the user.
pub fn load_or_empty(path: impl AsRef<Path>) -> (Dataset, Option<DataLoadError>) {
    let path = path.as_ref();
    match Dataset::load_from_file(path) {
        Ok(dataset) => (dataset, None),
        Err(err) => {
            tracing::warn!("Falling back to an empty dataset: {}", err);
            (Dataset::empty(path), Some(err))
        }
    }
}
