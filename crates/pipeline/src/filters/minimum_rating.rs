//! Filter to ensure minimum quality threshold.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Removes records rated below `spec.min_rating`.
///
/// The threshold is inclusive: a 7.0 movie passes a 7.0 minimum.
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, record: &MovieRecord, spec: &FilterSpec) -> bool {
        record.rating >= spec.min_rating
    }
}
