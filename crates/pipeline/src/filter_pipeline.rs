//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filter_spec::FilterSpec;
use crate::filters::{DecadeFilter, GenreFilter, LanguageFilter, MinimumRatingFilter};
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// Filters are conjunctive: a record survives only if every filter accepts
/// it. Order only affects how early a record is dropped.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumRatingFilter)
///     .add_filter(LanguageFilter);
///
/// let matched = pipeline.apply(dataset.records(), &spec);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The four filters every recommendation request runs, cheapest first:
    /// rating, language, decade, then genre (which has to split the field).
    pub fn standard() -> Self {
        Self::new()
            .add_filter(MinimumRatingFilter)
            .add_filter(LanguageFilter)
            .add_filter(DecadeFilter)
            .add_filter(GenreFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// Returns references into `records`, in their original order.
    pub fn apply<'a>(&self, records: &'a [MovieRecord], spec: &FilterSpec) -> Vec<&'a MovieRecord> {
        let mut current: Vec<&MovieRecord> = records.iter().collect();
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, spec);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, language: &str, year: i32, rating: f32) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: "Drama".to_string(),
            language: language.to_string(),
            year,
            rating,
            rating_count: 100,
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let spec = FilterSpec::new("Drama", "English", 2000, 5.0);
        let records = vec![movie("A", "English", 2001, 7.0), movie("B", "Hindi", 1990, 3.0)];

        let filtered = pipeline.apply(&records, &spec);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(LanguageFilter);
        let spec = FilterSpec::new("Drama", "English", 2000, 5.0);
        let records = vec![movie("A", "Hindi", 2001, 7.0), movie("B", "English", 2001, 7.0)];

        let filtered = pipeline.apply(&records, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "B");
    }

    #[test]
    fn test_standard_pipeline_order() {
        assert_eq!(
            FilterPipeline::standard().filter_names(),
            vec!["MinimumRatingFilter", "LanguageFilter", "DecadeFilter", "GenreFilter"]
        );
    }

    #[test]
    fn test_standard_pipeline_keeps_dataset_order() {
        let spec = FilterSpec::new("Drama", "English", 2000, 6.0);
        let records = vec![
            movie("C", "English", 2009, 6.5),
            movie("X", "English", 2010, 9.0),
            movie("A", "English", 2000, 8.0),
        ];

        let titles: Vec<&str> = FilterPipeline::standard()
            .apply(&records, &spec)
            .into_iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["C", "A"]);
    }
}
