//! Core domain types for the cinema catalog.
//!
//! This module defines the value records held by a [`Cinema`](crate::Cinema):
//! - `Director`: a first/last name pair, shared between movies via `Arc`
//! - `Genre`: the closed set of genres a movie can belong to
//! - `Movie`: a descriptive record referencing one director

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Director
// =============================================================================

/// The person credited with directing a movie.
///
/// Several movies may point at the same director through an `Arc`. Nothing
/// mutates a director once it has been handed out, so the sharing needs no
/// locking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Director {
    pub name: String,
    pub surname: String,
}

impl Director {
    /// Creates a director with both names stored verbatim (empty text is fine)
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }

    /// Returns an independent copy with the same names
    pub fn duplicate(&self) -> Self {
        Self::new(self.name.clone(), self.surname.clone())
    }
}

impl fmt::Display for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

// =============================================================================
// Genre
// =============================================================================

/// Movie genres known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    ScienceFiction,
    Fantasy,
    Documentary,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 7] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Documentary,
    ];

    /// The variant name, as shown in rendered output
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::ScienceFiction => "ScienceFiction",
            Genre::Fantasy => "Fantasy",
            Genre::Documentary => "Documentary",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    /// Parses a variant name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownGenre {
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A single catalog entry.
///
/// `Clone` is the cheap clone: the copy shares its director with the
/// original. Use [`Movie::duplicate`] for a copy that owns its own director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub description: String,
    /// `None` is accepted at construction and only reported when rendering
    pub director: Option<Arc<Director>>,
    pub country: String,
    pub genre: Genre,
    pub year: i32,
    pub rating: f64,
}

impl Movie {
    /// Creates a movie with every field stored as given.
    ///
    /// No range checks are made on `year` or `rating`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        director: Arc<Director>,
        country: impl Into<String>,
        genre: Genre,
        year: i32,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            director: Some(director),
            country: country.into(),
            genre,
            year,
            rating,
        }
    }

    /// Creates a movie whose director is unknown.
    ///
    /// Rendering such a movie fails with [`CatalogError::MissingDirector`].
    pub fn without_director(
        title: impl Into<String>,
        description: impl Into<String>,
        country: impl Into<String>,
        genre: Genre,
        year: i32,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            director: None,
            country: country.into(),
            genre,
            year,
            rating,
        }
    }

    /// Default ordering: lexicographic by title.
    ///
    /// A missing `other` always compares as `Greater`.
    pub fn compare_default(&self, other: Option<&Movie>) -> Ordering {
        match other {
            Some(other) => self.title.cmp(&other.title),
            None => Ordering::Greater,
        }
    }

    /// Deep copy: the director is duplicated into a fresh `Arc`
    pub fn duplicate(&self) -> Self {
        Self {
            director: self
                .director
                .as_deref()
                .map(|director| Arc::new(director.duplicate())),
            ..self.clone()
        }
    }

    /// Formats the movie as a single display line:
    /// `<Title> (<Year>), <Genre>, Directed by <Director>, Rating: <Rating>`
    pub fn render(&self) -> Result<String> {
        let director = self
            .director
            .as_deref()
            .ok_or_else(|| CatalogError::MissingDirector {
                title: self.title.clone(),
            })?;

        Ok(format!(
            "{} ({}), {}, Directed by {}, Rating: {}",
            self.title, self.year, self.genre, director, self.rating
        ))
    }
}
