use std::fmt;

use log::{debug, warn};

use crate::{
    book::Book,
    error::{CatalogError, Result},
    events::CirculationEvent,
    keyed::KeyedVec,
    observers::CirculationObserver,
    report::{self, CatalogSnapshot},
    shelf::{BookInput, Shelf, ShelfMut},
};

/// Something that can be added to a library
#[derive(Debug, Clone)]
pub enum ShelfInput {
    /// A shelf built elsewhere, keyed by its own name
    Existing(Shelf),
    /// A bare label; becomes an empty shelf named exactly that
    Label(String),
}

impl ShelfInput {
    /// Wrap anything printable as a label
    #[must_use]
    pub fn label(label: impl fmt::Display) -> Self {
        Self::Label(label.to_string())
    }

    /// Resolve into the shelf that would be stored
    fn into_shelf(self) -> Shelf {
        match self {
            Self::Existing(shelf) => shelf,
            Self::Label(name) => Shelf::new(name),
        }
    }
}

impl From<Shelf> for ShelfInput {
    fn from(shelf: Shelf) -> Self {
        Self::Existing(shelf)
    }
}

impl From<&str> for ShelfInput {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for ShelfInput {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// A named library made of uniquely named shelves.
///
/// Shelves are never merged or replaced: adding a name that is already taken
/// is rejected. Circulation routed through the library is reported to every
/// registered observer.
pub struct Library {
    /// Name of the library
    name: String,
    /// Shelves in the order they were added
    shelves: KeyedVec<Shelf>,
    /// Registered circulation observers
    observers: Vec<Box<dyn CirculationObserver>>,
}

// Manual implementation of Debug for Library
impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field("shelves", &self.shelves)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Library {
    /// Create an empty library
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), shelves: KeyedVec::new(), observers: Vec::new() }
    }

    /// The library's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of shelves
    #[must_use]
    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    /// Whether the library has no shelves
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    /// Register an observer to be notified of circulation events
    pub fn register_observer(&mut self, observer: Box<dyn CirculationObserver>) {
        self.observers.push(observer);
    }

    /// Add one shelf
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateShelf` if a shelf with the same name is
    /// already in the library. The existing shelf is kept unchanged.
    pub fn add_shelf(&mut self, item: impl Into<ShelfInput>) -> Result<()> {
        let shelf = item.into().into_shelf();
        let name = shelf.name().to_string();
        if self.shelves.insert(shelf).is_err() {
            warn!("{}: shelf {name} already exists", self.name);
            return Err(CatalogError::DuplicateShelf { name });
        }
        debug!("{}: added shelf {name}", self.name);
        Ok(())
    }

    /// Add every item in order. A collision rejects only that item; the rest
    /// are still added.
    pub fn add_shelves<I>(&mut self, items: I) -> Vec<Result<()>>
    where
        I: IntoIterator,
        I::Item: Into<ShelfInput>,
    {
        items.into_iter().map(|item| self.add_shelf(item)).collect()
    }

    /// Shelf with exactly this name
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no such shelf exists.
    pub fn get_shelf(&self, name: &str) -> Result<&Shelf> {
        self.shelves.get(name).ok_or_else(|| CatalogError::shelf_not_found(name, &self.name))
    }

    /// Handle on the shelf with exactly this name. Changes made through it
    /// are not reported to observers.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no such shelf exists.
    pub fn get_shelf_mut(&mut self, name: &str) -> Result<ShelfMut<'_>> {
        self.shelf_mut(name).map(|shelf| ShelfMut { shelf })
    }

    /// The stored shelf itself; its name must not change
    fn shelf_mut(&mut self, name: &str) -> Result<&mut Shelf> {
        let library = &self.name;
        self.shelves.get_mut(name).ok_or_else(|| CatalogError::shelf_not_found(name, library))
    }

    /// Shelf names in the order the shelves were added
    pub fn list_shelf_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.shelves.keys()
    }

    /// Shelves in the order they were added
    pub fn shelves(&self) -> impl Iterator<Item = &Shelf> + '_ {
        self.shelves.iter()
    }

    /// Every line of the text catalog, shelf by shelf
    #[must_use]
    pub fn report_all_books(&self) -> Vec<String> {
        report::catalog_lines(self)
    }

    /// Serializable view of every shelf and book
    #[must_use]
    pub fn catalog(&self) -> CatalogSnapshot {
        CatalogSnapshot::from(self)
    }

    /// Place books on a shelf, returning one outcome per item and notifying
    /// observers of each successful one
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the shelf does not exist; nothing
    /// is added in that case.
    pub fn add_books_to<I>(
        &mut self,
        shelf: &str,
        items: I,
    ) -> Result<Vec<Result<CirculationEvent>>>
    where
        I: IntoIterator,
        I::Item: Into<BookInput>,
    {
        let outcomes = self.shelf_mut(shelf)?.add_books(items);
        for event in outcomes.iter().flatten() {
            notify(&self.observers, event);
        }
        Ok(outcomes)
    }

    /// Check out one copy of `title` from `shelf`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the shelf or the title is missing,
    /// or `CatalogError::OutOfStock` if no copy is available.
    pub fn check_out(&mut self, shelf: &str, title: &str) -> Result<CirculationEvent> {
        self.circulate(shelf, title, Book::check_out)
    }

    /// Check one copy of `title` back in to `shelf`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the shelf or the title is missing,
    /// or `CatalogError::AllCopiesPresent` if every copy is already in.
    pub fn check_in(&mut self, shelf: &str, title: &str) -> Result<CirculationEvent> {
        self.circulate(shelf, title, Book::check_in)
    }

    /// Apply `action` to a shelved book and notify observers on success
    fn circulate(
        &mut self,
        shelf: &str,
        title: &str,
        action: fn(&mut Book) -> Result<CirculationEvent>,
    ) -> Result<CirculationEvent> {
        let event = action(self.shelf_mut(shelf)?.book_mut(title)?)?;
        notify(&self.observers, &event);
        Ok(event)
    }
}

/// Hand `event` to every observer in registration order
fn notify(observers: &[Box<dyn CirculationObserver>], event: &CirculationEvent) {
    for observer in observers {
        observer.on_event(event);
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
