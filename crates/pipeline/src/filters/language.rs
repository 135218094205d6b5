//! Filter to keep only movies in the requested language.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose language equals `spec.language`, ignoring ASCII case.
///
/// This is whole-string equality: "English" does not match "English (UK)".
pub struct LanguageFilter;

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, record: &MovieRecord, spec: &FilterSpec) -> bool {
        record.language.eq_ignore_ascii_case(&spec.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_language(title: &str, language: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: "Drama".to_string(),
            language: language.to_string(),
            year: 2000,
            rating: 7.0,
            rating_count: 10,
        }
    }

    #[test]
    fn test_language_filter_ignores_case() {
        let records = vec![
            in_language("Dangal", "Hindi"),
            in_language("Heat", "English"),
            in_language("Shouting", "ENGLISH"),
            in_language("Partial", "English (UK)"),
        ];
        let spec = FilterSpec::new("Drama", "english", 2000, 0.0);

        let filtered = LanguageFilter.apply(records.iter().collect(), &spec);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Heat");
        assert_eq!(filtered[1].title, "Shouting");
    }
}
