//! Error types for catalog operations.
//!
//! None of these are fatal: every failing operation leaves the catalog exactly
//! as it was and hands the condition back to the caller.

use std::fmt;

use thiserror::Error;

use crate::book::CopyCount;

/// Kind of catalog entry a lookup was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A book on a shelf, keyed by title
    Book,
    /// A shelf in a library, keyed by name
    Shelf,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => write!(f, "Book"),
            Self::Shelf => write!(f, "Shelf"),
        }
    }
}

/// Errors that can occur while working with a library catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry with the requested key exists in the container
    #[error("{key} not found in {container}!")]
    NotFound {
        /// What was being looked up
        entity: Entity,
        /// The title or shelf name that was requested
        key: String,
        /// Name of the shelf or library that was searched
        container: String,
    },

    /// Check-out attempted with no copies on hand
    #[error("Cannot check out {title}: no more copies!")]
    OutOfStock {
        /// Title of the book
        title: String,
    },

    /// Check-in attempted while every copy is already on the shelf
    #[error("All copies of {title} already accounted for!")]
    AllCopiesPresent {
        /// Title of the book
        title: String,
    },

    /// A shelf with this name is already in the library
    #[error("Cannot add '{name}': shelf already exists!")]
    DuplicateShelf {
        /// The colliding shelf name
        name: String,
    },

    /// The copy total is already at its maximum
    #[error("Cannot add a copy of {title}: copy limit reached!")]
    CopyLimit {
        /// Title of the book
        title: String,
    },

    /// A recorded book claims more copies on hand than it owns
    #[error("Cannot load {title}: {copies} copies on hand is more than owned")]
    InvalidCopies {
        /// Title of the rejected book
        title: String,
        /// The recorded counts
        copies: CopyCount,
    },

    /// A book must start with at least one copy
    #[error("Cannot create {title} with zero copies")]
    ZeroCopies {
        /// Title of the rejected book
        title: String,
    },
}

impl CatalogError {
    /// Build a `NotFound` error for a missing book
    pub(crate) fn book_not_found(title: &str, shelf: &str) -> Self {
        Self::NotFound { entity: Entity::Book, key: title.to_string(), container: shelf.to_string() }
    }

    /// Build a `NotFound` error for a missing shelf
    pub(crate) fn shelf_not_found(name: &str, library: &str) -> Self {
        Self::NotFound { entity: Entity::Shelf, key: name.to_string(), container: library.to_string() }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_catalog_wording() {
        let err = CatalogError::book_not_found("The Scar", "Fantasy");
        assert_eq!(err.to_string(), "The Scar not found in Fantasy!");

        let err = CatalogError::shelf_not_found("Westerns", "Bellevue Public Library");
        assert_eq!(err.to_string(), "Westerns not found in Bellevue Public Library!");

        let err = CatalogError::DuplicateShelf { name: "Fantasy".to_string() };
        assert_eq!(err.to_string(), "Cannot add 'Fantasy': shelf already exists!");

        let err = CatalogError::OutOfStock { title: "Dune".to_string() };
        assert_eq!(err.to_string(), "Cannot check out Dune: no more copies!");
    }
}
