//! Filter for the requested decade.
//!
//! Keeps movies released inside the requested decade window,
//! e.g. 1990 -> 1990..=1999.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Filters records by release year.
///
/// ## Algorithm
/// 1. Window is `spec.decade_start ..= spec.decade_start + 9`
/// 2. Keep records whose year falls inside it
///
/// A year that failed to parse is stored as 0 and only matches decade 0.
pub struct DecadeFilter;

impl Filter for DecadeFilter {
    fn name(&self) -> &str {
        "DecadeFilter"
    }

    fn matches(&self, record: &MovieRecord, spec: &FilterSpec) -> bool {
        spec.contains_year(record.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(title: &str, year: i32) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: "Drama".to_string(),
            language: "English".to_string(),
            year,
            rating: 7.0,
            rating_count: 10,
        }
    }

    #[test]
    fn test_decade_filter_boundaries() {
        let records = vec![
            released("Too Old", 1989),
            released("First Year", 1990),
            released("Last Year", 1999),
            released("Too New", 2000),
        ];
        let spec = FilterSpec::new("Drama", "English", 1990, 0.0);

        let filtered = DecadeFilter.apply(records.iter().collect(), &spec);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "First Year");
        assert_eq!(filtered[1].title, "Last Year");
    }

    #[test]
    fn test_unparsed_year_only_matches_decade_zero() {
        let records = vec![released("Unknown Year", 0)];

        let spec = FilterSpec::new("Drama", "English", 1990, 0.0);
        assert!(DecadeFilter.apply(records.iter().collect(), &spec).is_empty());

        let spec = FilterSpec::new("Drama", "English", 0, 0.0);
        assert_eq!(DecadeFilter.apply(records.iter().collect(), &spec).len(), 1);
    }
}
