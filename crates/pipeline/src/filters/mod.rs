//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod decade;
pub mod genre;
pub mod language;
pub mod minimum_rating;

// Re-export for convenience
pub use decade::DecadeFilter;
pub use genre::GenreFilter;
pub use language::LanguageFilter;
pub use minimum_rating::MinimumRatingFilter;
