//! # Reviews Crate
//!
//! Free-text movie reviews stored in a flat `movie,review` file.
//!
//! ## Example Usage
//!
//! ```ignore
//! use reviews::ReviewStore;
//!
//! let store = ReviewStore::new("Reviews.csv");
//! store.submit("Inception,Loved the ending")?;
//!
//! for review in store.reviews_for("Inception")? {
//!     println!("{}", review);
//! }
//! ```

pub mod error;
pub mod store;

pub use error::{Result, ReviewError};
pub use store::{Review, ReviewStore};
