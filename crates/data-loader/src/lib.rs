//! # Data Loader Crate
//!
//! This crate loads the movie CSV dataset into typed records.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `Dataset` and the size limits
//! - **parser**: Parse one CSV line into a record, with best-effort coercion
//! - **loader**: Read a file, skip the header, collect up to `MAX_MOVIES` records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//!
//! let dataset = Dataset::load_from_file("Movies.csv")?;
//! for movie in dataset.records() {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result, RowDefect};
pub use loader::{load, load_or_empty};
pub use parser::RowOutcome;
pub use types::{
    Dataset,
    MovieRecord,
    // Limits
    MAX_GENRE_LEN,
    MAX_LANGUAGE_LEN,
    MAX_MOVIES,
    MAX_TITLE_LEN,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_creation() {
        let dataset = Dataset::empty("Movies.csv");
        assert_eq!(dataset.len(), 0);
        assert!(dataset.is_empty());
        assert_eq!(dataset.source().to_str(), Some("Movies.csv"));
    }

    #[test]
    fn test_from_records_is_capped() {
        let movie = MovieRecord {
            title: "Toy Story".to_string(),
            genre: "Animation|Comedy".to_string(),
            language: "English".to_string(),
            year: 1995,
            rating: 8.3,
            rating_count: 1000,
        };
        let dataset = Dataset::from_records("Movies.csv", vec![movie; MAX_MOVIES + 5]);
        assert_eq!(dataset.len(), MAX_MOVIES);
    }
}
