//! The recommendation engine: filter, fall back, format.
//!
//! ## Algorithm
//! 1. Run the standard filter pipeline over the dataset
//! 2. If anything matched, list the matches in dataset order
//! 3. Otherwise rank the whole dataset by rating (highest first, ties keep
//!    dataset order) and list the top [`FALLBACK_LIMIT`] under a notice
//!
//! Every path produces printable text; an empty dataset just yields the
//! notice with no movies under it.

use crate::filter_pipeline::FilterPipeline;
use crate::filter_spec::FilterSpec;
use data_loader::{DataLoadError, Dataset, MovieRecord, load_or_empty};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

/// How many movies the fallback ranking shows
pub const FALLBACK_LIMIT: usize = 5;

/// First line of the output when nothing matched
pub const NO_MATCH_NOTICE: &str = "No matching movies found. Showing top 5 rated movies:\n";

/// Result of running a [`FilterSpec`] against a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// At least one record matched, in dataset order
    Matches(Vec<MovieRecord>),
    /// Nothing matched; up to [`FALLBACK_LIMIT`] records by rating, best first
    Fallback(Vec<MovieRecord>),
}

impl FilterOutcome {
    /// The movies to show, whichever way they were chosen
    pub fn movies(&self) -> &[MovieRecord] {
        match self {
            FilterOutcome::Matches(movies) | FilterOutcome::Fallback(movies) => movies,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FilterOutcome::Fallback(_))
    }

    /// Format the outcome as the text block shown to the user.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fallback() {
            f.write_str(NO_MATCH_NOTICE)?;
        }
        for movie in self.movies() {
            write_movie_line(f, movie)?;
        }
        Ok(())
    }
}

/// `<title> (<year>) [<rating, 1 decimal>]` plus a newline
fn write_movie_line(f: &mut impl fmt::Write, movie: &MovieRecord) -> fmt::Result {
    writeln!(f, "{} ({}) [{:.1}]", movie.title, movie.year, movie.rating)
}

/// Format a single movie the way the result list does.
pub fn format_movie_line(movie: &MovieRecord) -> String {
    let mut line = String::new();
    // Writing into a String can't fail
    let _ = write_movie_line(&mut line, movie);
    line
}

/// Run the filter spec against `records`.
///
/// `records` is only read. The fallback ranking sorts a private list of
/// references, so repeated calls with the same input give the same result.
pub fn filter(records: &[MovieRecord], spec: &FilterSpec) -> FilterOutcome {
    let matched = FilterPipeline::standard().apply(records, spec);

    if !matched.is_empty() {
        tracing::debug!("{} of {} movies matched {:?}", matched.len(), records.len(), spec);
        return FilterOutcome::Matches(matched.into_iter().cloned().collect());
    }

    tracing::debug!("No movies matched {:?}, falling back to top rated", spec);
    FilterOutcome::Fallback(top_rated(records, FALLBACK_LIMIT))
}

/// Filter and render in one step.
pub fn filter_to_text(records: &[MovieRecord], spec: &FilterSpec) -> String {
    filter(records, spec).render()
}

/// The `limit` highest-rated records, best first.
///
/// The sort is stable, so equal ratings keep their dataset order.
pub fn top_rated(records: &[MovieRecord], limit: usize) -> Vec<MovieRecord> {
    let mut ranked: Vec<&MovieRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(limit).cloned().collect()
}

// =============================================================================
// Load + filter
// =============================================================================

/// Outcome of a full request, including whether the dataset loaded.
#[derive(Debug)]
pub struct Recommendation {
    /// Why the dataset could not be loaded, if it couldn't. The outcome is
    /// then computed over an empty dataset.
    pub load_error: Option<DataLoadError>,
    /// Number of records the engine saw
    pub dataset_len: usize,
    pub outcome: FilterOutcome,
}

impl Recommendation {
    pub fn render(&self) -> String {
        self.outcome.render()
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.outcome, f)
    }
}

/// Load `path` fresh and run `spec` against it.
///
/// Never fails: a dataset that can't be loaded is treated as empty and the
/// error is handed back in [`Recommendation::load_error`].
pub fn recommend_from_path(path: impl AsRef<Path>, spec: &FilterSpec) -> Recommendation {
    let (dataset, load_error) = load_or_empty(path);
    recommend(&dataset, spec, load_error)
}

fn recommend(dataset: &Dataset, spec: &FilterSpec, load_error: Option<DataLoadError>) -> Recommendation {
    Recommendation {
        load_error,
        dataset_len: dataset.len(),
        outcome: filter(dataset.records(), spec),
    }
}

/// One-call entry point for front ends: load `path`, filter with the raw
/// option values, and return the text to display.
pub fn filter_movies(
    path: impl AsRef<Path>,
    genre: &str,
    language: &str,
    decade: &str,
    min_rating: f32,
) -> String {
    let spec = FilterSpec::from_raw(genre, language, decade, min_rating);
    recommend_from_path(path, &spec).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: i32, rating: f32) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: "Drama".to_string(),
            language: "English".to_string(),
            year,
            rating,
            rating_count: 1000,
        }
    }

    fn sample() -> Vec<MovieRecord> {
        vec![movie("A", 2005, 7.0), movie("B", 1995, 9.0), movie("C", 2005, 5.0)]
    }

    #[test]
    fn test_matches_keep_dataset_order() {
        let spec = FilterSpec::new("Drama", "English", 2000, 6.0);
        assert_eq!(filter_to_text(&sample(), &spec), "A (2005) [7.0]\n");

        let spec = FilterSpec::new("Drama", "English", 2000, 5.0);
        assert_eq!(filter_to_text(&sample(), &spec), "A (2005) [7.0]\nC (2005) [5.0]\n");
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let spec = FilterSpec::new("Drama", "English", 2000, 8.0);
        let outcome = filter(&sample(), &spec);

        assert!(outcome.is_fallback());
        assert_eq!(
            outcome.render(),
            "No matching movies found. Showing top 5 rated movies:\n\
             B (1995) [9.0]\n\
             A (2005) [7.0]\n\
             C (2005) [5.0]\n"
        );
    }

    #[test]
    fn test_fallback_is_capped_at_five() {
        let records: Vec<MovieRecord> = (0..8).map(|i| movie(&format!("M{i}"), 1980, i as f32)).collect();
        let spec = FilterSpec::new("Drama", "English", 2020, 0.0);

        let outcome = filter(&records, &spec);
        let titles: Vec<&str> = outcome.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["M7", "M6", "M5", "M4", "M3"]);
    }

    #[test]
    fn test_fallback_ties_keep_dataset_order() {
        let records = vec![
            movie("First", 1980, 8.0),
            movie("Best", 1980, 9.0),
            movie("Second", 1980, 8.0),
            movie("Third", 1980, 8.0),
        ];
        let ranked: Vec<String> = top_rated(&records, 5).into_iter().map(|m| m.title).collect();
        assert_eq!(ranked, vec!["Best", "First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_dataset_renders_notice_only() {
        let spec = FilterSpec::new("Drama", "English", 2000, 5.0);
        assert_eq!(filter_to_text(&[], &spec), NO_MATCH_NOTICE);
    }

    #[test]
    fn test_filter_does_not_modify_records() {
        let records = sample();
        let spec = FilterSpec::new("Drama", "English", 2000, 8.0);

        let first = filter_to_text(&records, &spec);
        let second = filter_to_text(&records, &spec);

        assert_eq!(first, second);
        assert_eq!(records, sample());
    }

    #[test]
    fn test_rating_is_shown_with_one_decimal() {
        assert_eq!(format_movie_line(&movie("Heat", 1995, 8.26)), "Heat (1995) [8.3]\n");
        assert_eq!(format_movie_line(&movie("Up", 2009, 8.0)), "Up (2009) [8.0]\n");
    }

    #[test]
    fn test_missing_file_falls_back_to_empty() {
        let path = std::env::temp_dir().join("pipeline-engine-missing.csv");
        let spec = FilterSpec::new("Drama", "English", 2000, 5.0);

        let recommendation = recommend_from_path(&path, &spec);
        assert!(recommendation.load_error.is_some());
        assert_eq!(recommendation.dataset_len, 0);
        assert_eq!(recommendation.render(), NO_MATCH_NOTICE);
    }
}
