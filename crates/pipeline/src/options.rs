//! The values a user can pick from when building a [`FilterSpec`].
//!
//! The engine accepts any strings; these lists are what front ends offer.
//!
//! [`FilterSpec`]: crate::FilterSpec

pub const GENRES: [&str; 22] = [
    "AI",
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Drama",
    "Dystopian",
    "Epic",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Musical",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Superhero",
    "Survival",
    "Thriller",
    "Tragedy",
    "War",
];

pub const LANGUAGES: [&str; 4] = ["English", "Hindi", "Korean", "Mandarin"];

pub const DECADES: [&str; 4] = ["1990", "2000", "2010", "2020"];

pub const MIN_RATINGS: [&str; 6] = ["5", "6", "7", "8", "9", "10"];

/// Case-insensitive membership test against one of the option lists.
pub fn is_known(options: &[&str], value: &str) -> bool {
    options.iter().any(|option| option.eq_ignore_ascii_case(value))
}
