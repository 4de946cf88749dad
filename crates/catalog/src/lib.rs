//! # Catalog Crate
//!
//! An in-memory catalog of movie records that can be sorted by pluggable
//! orderings and rendered as text.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Director, Genre, Movie)
//! - **ordering**: The `MovieOrdering` trait and its strategies
//! - **cinema**: The `Cinema` collection
//! - **sample**: The built-in sample movies
//! - **error**: Error types for rendering and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{sample, ByRatingDescending};
//!
//! let mut cinema = sample::sample_cinema();
//! cinema.sort(&ByRatingDescending);
//! print!("{}", cinema.render()?);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod ordering;
pub mod cinema;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Director, Genre, Movie};
pub use ordering::{ByRatingDescending, ByTitle, ByYearAscending, MovieOrdering};
pub use cinema::Cinema;
