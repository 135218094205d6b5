//! Filtering engine for movie recommendations.
//!
//! This crate provides:
//! - FilterSpec, the four-parameter query (genre, language, decade, minimum rating)
//! - Filter trait and implementations, one per predicate
//! - FilterPipeline for composing filters
//! - The engine: filter, fall back to the top rated movies, format the result
//!
//! ## Architecture
//! A request is processed in stages:
//! 1. The dataset is loaded fresh from disk (a failed load counts as empty)
//! 2. Filters keep the movies that satisfy every predicate
//! 3. If none survive, the whole dataset is ranked by rating instead
//! 4. The chosen movies are formatted as `Title (Year) [Rating]` lines
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterSpec, recommend_from_path};
//!
//! let spec = FilterSpec::from_raw("Drama", "English", "2000", 7.0);
//! let recommendation = recommend_from_path("Movies.csv", &spec);
//! print!("{}", recommendation);
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filter_spec;
pub mod filters;
pub mod options;
pub mod traits;

// Re-export main types
pub use engine::{
    FALLBACK_LIMIT, FilterOutcome, NO_MATCH_NOTICE, Recommendation, filter, filter_movies,
    filter_to_text, format_movie_line, recommend_from_path, top_rated,
};
pub use filter_pipeline::FilterPipeline;
pub use filter_spec::FilterSpec;
pub use traits::Filter;
