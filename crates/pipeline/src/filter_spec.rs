//! The four-parameter query a user builds from the filter options.

use data_loader::parser::coerce_int;

/// Width of a decade window minus one: 1990 covers 1990..=1999.
const DECADE_SPAN: i32 = 9;

/// What the user asked for.
///
/// Built per request and thrown away afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Sub-genre to match, case-insensitively
    pub genre: String,
    /// Language to match, case-insensitively
    pub language: String,
    /// First year of the decade window (inclusive)
    pub decade_start: i32,
    /// Lowest acceptable rating (inclusive)
    pub min_rating: f32,
}

impl FilterSpec {
    pub fn new(
        genre: impl Into<String>,
        language: impl Into<String>,
        decade_start: i32,
        min_rating: f32,
    ) -> Self {
        Self {
            genre: genre.into(),
            language: language.into(),
            decade_start,
            min_rating,
        }
    }

    /// Build a spec from the raw values a front end collects.
    ///
    /// The decade arrives as text ("1990") and is coerced the same way the
    /// dataset's year column is: a non-numeric decade becomes 0.
    pub fn from_raw(genre: &str, language: &str, decade: &str, min_rating: f32) -> Self {
        Self::new(genre, language, coerce_int(decade), min_rating)
    }

    /// Last year of the decade window (inclusive)
    pub fn decade_end(&self) -> i32 {
        self.decade_start.saturating_add(DECADE_SPAN)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        (self.decade_start..=self.decade_end()).contains(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decade_window_is_inclusive() {
        let spec = FilterSpec::new("Drama", "English", 1990, 5.0);
        assert_eq!(spec.decade_end(), 1999);
        assert!(spec.contains_year(1990));
        assert!(spec.contains_year(1999));
        assert!(!spec.contains_year(1989));
        assert!(!spec.contains_year(2000));
    }

    #[test]
    fn test_from_raw_coerces_decade() {
        assert_eq!(FilterSpec::from_raw("Drama", "English", "2010", 7.0).decade_start, 2010);
        assert_eq!(FilterSpec::from_raw("Drama", "English", "2010s", 7.0).decade_start, 2010);
        assert_eq!(FilterSpec::from_raw("Drama", "English", "any", 7.0).decade_start, 0);
    }

    #[test]
    fn test_decade_end_saturates() {
        let spec = FilterSpec::new("Drama", "English", i32::MAX, 0.0);
        assert_eq!(spec.decade_end(), i32::MAX);
    }
}
