//! Ordering strategies for sorting a [`Cinema`](crate::Cinema).
//!
//! Each strategy is a stateless comparison policy. They are passed into
//! [`Cinema::sort`](crate::Cinema::sort) as trait objects so the sort itself
//! never hardcodes a key.
//!
//! ## Absent operands
//! Strategies accept `Option<&Movie>`. `ByYearAscending` and
//! `ByRatingDescending` treat a missing operand as `Equal`, while `ByTitle`
//! follows [`Movie::compare_default`] and ranks a present movie above a
//! missing one.

use crate::types::Movie;
use std::cmp::Ordering;

/// Core trait for movie comparison policies.
///
/// `Send + Sync` lets a strategy be held in shared configuration.
pub trait MovieOrdering: Send + Sync {
    /// Returns the name of this ordering (for logging/debugging)
    fn name(&self) -> &str;

    /// Three-way comparison of two possibly missing movies
    fn compare(&self, a: Option<&Movie>, b: Option<&Movie>) -> Ordering;
}

/// Oldest release first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByYearAscending;

impl MovieOrdering for ByYearAscending {
    fn name(&self) -> &str {
        "ByYearAscending"
    }

    fn compare(&self, a: Option<&Movie>, b: Option<&Movie>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a.year.cmp(&b.year),
            _ => Ordering::Equal,
        }
    }
}

/// Highest rating first.
///
/// Ratings are compared with `f64::total_cmp`, so a NaN rating still yields a
/// consistent total order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRatingDescending;

impl MovieOrdering for ByRatingDescending {
    fn name(&self) -> &str {
        "ByRatingDescending"
    }

    fn compare(&self, a: Option<&Movie>, b: Option<&Movie>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => b.rating.total_cmp(&a.rating),
            _ => Ordering::Equal,
        }
    }
}

/// Alphabetical by title, the movie's default ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByTitle;

impl MovieOrdering for ByTitle {
    fn name(&self) -> &str {
        "ByTitle"
    }

    fn compare(&self, a: Option<&Movie>, b: Option<&Movie>) -> Ordering {
        match a {
            Some(a) => a.compare_default(b),
            None => Ordering::Equal,
        }
    }
}
