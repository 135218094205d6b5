use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::MovieRecord;
use pipeline::options::{self, DECADES, GENRES, LANGUAGES, MIN_RATINGS};
use pipeline::{FilterSpec, Recommendation, recommend_from_path};
use reviews::ReviewStore;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Cinefilter - Movie Recommendation and Review System
#[derive(Parser)]
#[command(name = "cinefilter")]
#[command(about = "Recommend movies by genre, language, decade and rating, and keep reviews", long_about = None)]
struct Cli {
    /// Path to the movie dataset CSV
    #[arg(short, long, global = true, env = "CINEFILTER_DATA_FILE", default_value = "Movies.csv")]
    data_file: PathBuf,

    /// Path to the review file
    #[arg(short, long, global = true, env = "CINEFILTER_REVIEWS_FILE", default_value = "Reviews.csv")]
    reviews_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies matching all four filters
    Recommend {
        /// Genre to match (any of the movie's sub-genres)
        #[arg(long)]
        genre: String,

        /// Language to match
        #[arg(long)]
        language: String,

        /// First year of the decade, e.g. 1990
        #[arg(long)]
        decade: String,

        /// Minimum rating, inclusive
        #[arg(long)]
        min_rating: f32,

        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the filter values to choose from
    Options,

    /// Add or show reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// Save a review given as "Movie,Review"
    Add {
        entry: String,
    },

    /// Show all reviews for a movie (exact name)
    Show {
        movie: String,
    },
}

#[derive(Serialize)]
struct JsonRecommendation<'a> {
    fallback: bool,
    movies: &'a [MovieRecord],
}

fn main() -> Result<()> {
    // Initialize tracing; quiet by default so only the results are printed
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            genre,
            language,
            decade,
            min_rating,
            json,
        } => handle_recommend(&cli.data_file, &genre, &language, &decade, min_rating, json)?,
        Commands::Options => handle_options(),
        Commands::Review { action } => {
            let store = ReviewStore::new(cli.reviews_file);
            match action {
                ReviewAction::Add { entry } => handle_review_add(&store, &entry)?,
                ReviewAction::Show { movie } => handle_review_show(&store, &movie)?,
            }
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    data_file: &Path,
    genre: &str,
    language: &str,
    decade: &str,
    min_rating: f32,
    json: bool,
) -> Result<()> {
    warn_if_unknown("genre", &GENRES, genre);
    warn_if_unknown("language", &LANGUAGES, language);
    warn_if_unknown("decade", &DECADES, decade);

    let spec = FilterSpec::from_raw(genre, language, decade, min_rating);
    tracing::info!(
        "Searching {} for {} movies in {} from {}-{} rated {:.1}+",
        data_file.display(),
        spec.genre,
        spec.language,
        spec.decade_start,
        spec.decade_end(),
        spec.min_rating
    );

    let recommendation = recommend_from_path(data_file, &spec);
    if let Some(err) = &recommendation.load_error {
        eprintln!("{} {}", "Error:".red().bold(), err);
    }

    if json {
        print_json(&recommendation)?;
    } else {
        print_recommendation(&recommendation);
    }
    Ok(())
}

fn warn_if_unknown(what: &str, choices: &[&str], value: &str) {
    if !options::is_known(choices, value) {
        tracing::warn!("{} {:?} is not one of the listed options", what, value);
    }
}

/// Helper function to format and print recommendations
fn print_recommendation(recommendation: &Recommendation) {
    println!("{}", "Search Results:".bold().blue());
    print!("{}", recommendation);
}

fn print_json(recommendation: &Recommendation) -> Result<()> {
    let output = JsonRecommendation {
        fallback: recommendation.outcome.is_fallback(),
        movies: recommendation.outcome.movies(),
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize recommendations")?;
    println!("{}", json);
    Ok(())
}

/// Handle the 'options' command
fn handle_options() {
    let sections: [(&str, &[&str]); 4] = [
        ("Genres", &GENRES[..]),
        ("Languages", &LANGUAGES[..]),
        ("Decades", &DECADES[..]),
        ("Minimum ratings", &MIN_RATINGS[..]),
    ];
    for (title, values) in sections {
        println!("{}", format!("{}:", title).bold().blue());
        for value in values {
            println!("{}{}", "• ".green(), value);
        }
    }
}

/// Handle the 'review add' command
fn handle_review_add(store: &ReviewStore, entry: &str) -> Result<()> {
    let review = store
        .submit(entry)
        .with_context(|| format!("Failed to save review to {}", store.path().display()))?;
    println!("{} Review for {} submitted successfully.", "✓".green(), review.movie.bold());
    Ok(())
}

/// Handle the 'review show' command
fn handle_review_show(store: &ReviewStore, movie: &str) -> Result<()> {
    let reviews = store
        .reviews_for(movie)
        .with_context(|| format!("Failed to read reviews from {}", store.path().display()))?;

    println!("{}", format!("Reviews for {}:", movie).bold().blue());
    if reviews.is_empty() {
        println!("(No reviews found)");
    }
    for review in &reviews {
        println!("{}", review);
    }
    Ok(())
}
