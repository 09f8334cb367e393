//! In-memory library catalog.
//!
//! A [`Library`] holds uniquely named [`Shelf`]s, a shelf holds [`Book`]s
//! keyed by title, and each book tracks how many of its copies are on hand.
//! Every failing operation returns a [`CatalogError`] and leaves the catalog
//! untouched.

pub mod book;
pub mod error;
pub mod events;
mod keyed;
pub mod library;
pub mod observers;
pub mod report;
pub mod shelf;

pub use book::{Book, BookMut, CopyCount};
pub use error::{CatalogError, Entity, Result};
pub use events::CirculationEvent;
pub use library::{Library, ShelfInput};
pub use observers::{CirculationLogger, CirculationObserver, StockWatcher};
pub use report::CatalogSnapshot;
pub use shelf::{BookInput, Shelf, ShelfMut};
