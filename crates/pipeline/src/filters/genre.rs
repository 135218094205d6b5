//! Filter to keep only movies tagged with the requested genre.
//!
//! A movie's genre field holds several sub-genres separated by `|`
//! ("Action|Drama"). The movie matches if any one of them is the
//! requested genre.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records with at least one sub-genre equal to `spec.genre`.
///
/// ## Algorithm
/// 1. Split the genre field on `|`
/// 2. Drop leading whitespace from each token
/// 3. Compare each token to the requested genre, ignoring ASCII case
/// 4. Keep the record on the first hit
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, record: &MovieRecord, spec: &FilterSpec) -> bool {
        record
            .genres()
            .any(|genre| genre.eq_ignore_ascii_case(&spec.genre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(title: &str, genre: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            language: "English".to_string(),
            year: 2000,
            rating: 7.0,
            rating_count: 10,
        }
    }

    #[test]
    fn test_genre_filter_matches_any_token() {
        let records = vec![
            tagged("Action/Drama", "Action|Drama"),     // should match
            tagged("Drama/Action", "drama|Action"),     // should match
            tagged("Spaced", "Comedy| Drama"),          // should match
            tagged("Comedy", "Comedy"),                 // should NOT match
            tagged("Melodrama", "Melodrama|Romance"),   // should NOT match
        ];
        let spec = FilterSpec::new("Drama", "English", 2000, 0.0);

        let filtered = GenreFilter.apply(records.iter().collect(), &spec);

        let titles: Vec<&str> = filtered.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Action/Drama", "Drama/Action", "Spaced"]);
    }

    #[test]
    fn test_multi_word_genre() {
        let record = tagged("Interstellar", "Adventure|Science Fiction");
        let spec = FilterSpec::new("science fiction", "English", 2010, 0.0);
        assert!(GenreFilter.matches(&record, &spec));
    }

    #[test]
    fn test_trailing_whitespace_is_significant() {
        let record = tagged("Odd", "Drama |Action");
        let spec = FilterSpec::new("Drama", "English", 2000, 0.0);
        assert!(!GenreFilter.matches(&record, &spec));
    }
}
