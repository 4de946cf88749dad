//! Error types for the catalog crate.
//!
//! Building and sorting a catalog never fails. The only faults are an absent
//! director reference discovered at render time and unparseable genre text.

use thiserror::Error;

/// Errors surfaced by catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A movie was rendered without a director attached
    #[error("Movie '{title}' has no director")]
    MissingDirector { title: String },

    /// Text did not name one of the known genres
    #[error("Unknown genre: {value}")]
    UnknownGenre { value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
