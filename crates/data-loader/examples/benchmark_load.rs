use data_loader::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("Movies.csv");

    println!("Loading movie dataset from {}...\n", path.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());
    if let Some(best) = dataset
        .records()
        .iter()
        .max_by(|a, b| a.rating.total_cmp(&b.rating))
    {
        println!("Highest rated: {} ({}) [{:.1}]", best.title, best.year, best.rating);
    }
}
