//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a dataset.

use crate::filter_spec::FilterSpec;
use data_loader::MovieRecord;

/// Core trait for filtering movie records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters only borrow records, so the loaded dataset is never modified
/// - `apply` keeps the relative order of the records it is given
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record passes this filter.
    fn matches(&self, record: &MovieRecord, spec: &FilterSpec) -> bool;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership of the references)
    /// * `spec` - The user's query
    fn apply<'a>(
        &self,
        mut records: Vec<&'a MovieRecord>,
        spec: &FilterSpec,
    ) -> Vec<&'a MovieRecord> {
        records.retain(|record| self.matches(record, spec));
        records
    }
}
