//! The `Cinema` collection.
//!
//! A cinema owns its movies in a `Vec`, kept in insertion order until a sort
//! reorders it in place. Duplicates are allowed and nothing is ever dropped.

use crate::error::Result;
use crate::ordering::MovieOrdering;
use crate::types::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordered collection of movies.
///
/// ## Usage
/// ```ignore
/// let mut cinema = Cinema::new();
/// cinema.add(movie);
/// cinema.sort(&ByYearAscending);
/// print!("{}", cinema.render()?);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cinema {
    movies: Vec<Movie>,
}

impl Cinema {
    /// Create a new, empty Cinema.
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Append a movie to the end of the collection.
    pub fn add(&mut self, movie: Movie) {
        tracing::debug!("Adding movie: {} (count: {})", movie.title, self.movies.len());
        self.movies.push(movie);
    }

    /// Reorder the movies in place with the given strategy.
    ///
    /// The sort is stable: movies that compare equal keep their relative order.
    pub fn sort(&mut self, ordering: &dyn MovieOrdering) {
        tracing::debug!(
            "Sorting {} movies with {}",
            self.movies.len(),
            ordering.name()
        );
        self.movies
            .sort_by(|a, b| ordering.compare(Some(a), Some(b)));
    }

    /// Reorder the movies in place with an ad-hoc comparison function.
    ///
    /// Stable, like [`Cinema::sort`].
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Movie, &Movie) -> Ordering,
    {
        self.movies.sort_by(compare);
    }

    /// Iterate over the movies in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The movies as a slice, in current order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Render every movie on its own line, each terminated by `\n`.
    ///
    /// # Returns
    /// * `Ok(String)` - The full listing (empty for an empty cinema)
    /// * `Err` - If any movie is missing its director
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for movie in &self.movies {
            out.push_str(&movie.render()?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl<'a> IntoIterator for &'a Cinema {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Movie> for Cinema {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}

impl Extend<Movie> for Cinema {
    fn extend<I: IntoIterator<Item = Movie>>(&mut self, iter: I) {
        for movie in iter {
            self.add(movie);
        }
    }
}
