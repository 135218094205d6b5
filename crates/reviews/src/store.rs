//! Flat-file review storage.
//!
//! Format: one `movie,review` entry per line. A review that spans several
//! lines is wrapped in double quotes:
//!
//! ```text
//! Inception,Great movie
//! Heat,"Long review
//! over two lines"
//! ```

use crate::error::{Result, ReviewError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// A single review, as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub movie: String,
    pub text: String,
}

impl Review {
    /// Validate a `movie,review` entry typed by a user.
    ///
    /// One trailing newline is ignored. The entry is split at the first comma;
    /// both sides must be non-empty and the movie name must fit on one line.
    /// Double quotes delimit multi-line reviews in the file, so they are
    /// rejected anywhere in the entry.
    pub fn parse_entry(entry: &str) -> Result<Self> {
        let entry = entry.strip_suffix('\n').unwrap_or(entry);
        if entry.contains('"') {
            return Err(ReviewError::QuoteNotAllowed);
        }
        match entry.split_once(',') {
            Some((movie, text)) if !movie.is_empty() && !movie.contains('\n') && !text.is_empty() => {
                Ok(Self {
                    movie: movie.to_string(),
                    text: text.to_string(),
                })
            }
            _ => Err(ReviewError::InvalidFormat),
        }
    }

    /// The line(s) written to the review file, without the final newline
    fn to_entry(&self) -> String {
        if self.text.contains('\n') {
            format!("{},\"{}\"", self.movie, self.text)
        } else {
            format!("{},{}", self.movie, self.text)
        }
    }

    /// Parse one logical entry read back from the file.
    ///
    /// Returns `None` for lines without a comma.
    fn from_stored(entry: &str) -> Option<Self> {
        let (movie, text) = entry.split_once(',')?;
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);
        let text = text.strip_prefix('"').unwrap_or(text);
        let text = text.strip_suffix('"').unwrap_or(text);
        Some(Self {
            movie: movie.to_string(),
            text: text.to_string(),
        })
    }
}

/// Reviews kept in a single append-only text file.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    path: PathBuf,
}

impl ReviewStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate `entry` and append it to the review file.
    ///
    /// The file is created if it doesn't exist yet.
    pub fn submit(&self, entry: &str) -> Result<Review> {
        let review = Review::parse_entry(entry)?;
        self.append(&review)?;
        Ok(review)
    }

    /// Append an already-validated review.
    pub fn append(&self, review: &Review) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| ReviewError::Open {
                path: self.path.clone(),
                source,
            })?;
        writeln!(file, "{}", review.to_entry())?;
        tracing::info!("Saved review for {:?} to {:?}", review.movie, self.path);
        Ok(())
    }

    /// All reviews for `movie`, in the order they were written.
    ///
    /// Movie names must match exactly, including case. A review file that
    /// doesn't exist yet simply has no reviews.
    pub fn reviews_for(&self, movie: &str) -> Result<Vec<String>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|review| review.movie == movie)
            .map(|review| review.text)
            .collect())
    }

    /// Every entry in the file.
    pub fn read_all(&self) -> Result<Vec<Review>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No review file at {:?} yet", self.path);
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        let mut reader = BufReader::new(file);
        let mut reviews = Vec::new();

        while let Some(mut entry) = read_line_lossy(&mut reader)? {
            // An opening quote without its closing quote continues on the next line
            while entry.matches('"').count() == 1 {
                match read_line_lossy(&mut reader)? {
                    Some(next) => entry.push_str(&next),
                    None => break,
                }
            }
            match Review::from_stored(&entry) {
                Some(review) => reviews.push(review),
                None => tracing::debug!("Ignoring review line without a comma: {:?}", entry),
            }
        }
        Ok(reviews)
    }
}

/// Read one physical line including its `\n`, or `None` at end of file.
fn read_line_lossy(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
