//! Built-in sample catalog.

use crate::cinema::Cinema;
use crate::types::{Director, Genre, Movie};
use std::sync::Arc;

/// The three sample movies, in insertion order.
///
/// *Jurassic Park* and *Schindler's List* share one Spielberg `Arc`.
pub fn sample_movies() -> Vec<Movie> {
    let director1 = Arc::new(Director::new("Steven", "Spielberg"));
    let director2 = Arc::new(Director::new("Christopher", "Nolan"));

    vec![
        Movie::new(
            "Jurassic Park",
            "Dinosaurs in the park",
            Arc::clone(&director1),
            "USA",
            Genre::ScienceFiction,
            1993,
            8.1,
        ),
        Movie::new(
            "Inception",
            "Dream within a dream",
            director2,
            "USA",
            Genre::Fantasy,
            2010,
            8.8,
        ),
        Movie::new(
            "Schindler's List",
            "Story of Oskar Schindler",
            director1,
            "USA",
            Genre::Drama,
            1993,
            8.9,
        ),
    ]
}

/// A cinema populated with [`sample_movies`]
pub fn sample_cinema() -> Cinema {
    let mut cinema = Cinema::new();
    for movie in sample_movies() {
        cinema.add(movie);
    }
    cinema
}
