use std::{fmt, ops::Deref};

use log::debug;

use crate::{
    book::{Book, BookMut, title_case},
    error::{CatalogError, Result},
    events::CirculationEvent,
    keyed::{Keyed, KeyedVec},
};

/// Something that can be placed on a shelf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookInput {
    /// A fully described book, keyed by its own title
    Existing(Book),
    /// A bare label; becomes a single-copy book with the title-cased label
    /// as its title
    Label(String),
}

impl BookInput {
    /// Wrap anything printable as a label
    #[must_use]
    pub fn label(label: impl fmt::Display) -> Self {
        Self::Label(label.to_string())
    }

    /// Resolve into the book that would be stored
    fn into_book(self) -> Book {
        match self {
            Self::Existing(book) => book,
            Self::Label(label) => Book::new(title_case(&label)),
        }
    }
}

impl From<Book> for BookInput {
    fn from(book: Book) -> Self {
        Self::Existing(book)
    }
}

impl From<&str> for BookInput {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for BookInput {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// A named collection of books, one entry per title
#[derive(Debug, Clone, Default)]
pub struct Shelf {
    /// Identity key within a library
    name: String,
    /// Books in the order they were first shelved
    books: KeyedVec<Book>,
}

impl Keyed for Book {
    fn key(&self) -> &str {
        self.title()
    }
}

impl Keyed for Shelf {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Shelf {
    /// Create an empty shelf
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), books: KeyedVec::new() }
    }

    /// The shelf's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct titles on the shelf
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the shelf holds no titles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether a book with exactly this title is on the shelf
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.books.contains_key(title)
    }

    /// Place one item on the shelf.
    ///
    /// A title that is already shelved gains a single copy, whatever the
    /// incoming book's own copy count; otherwise the book is stored as is.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CopyLimit` if the shelved title cannot take
    /// another copy. The shelf is left unchanged.
    pub fn add_book(&mut self, item: impl Into<BookInput>) -> Result<CirculationEvent> {
        let (book, inserted) = self.books.get_or_insert(item.into().into_book());
        if inserted {
            debug!("{}: shelved {}", self.name, book.title());
            return Ok(CirculationEvent::Shelved {
                title: book.title().to_string(),
                copies: book.copies(),
            });
        }

        let event = book.add_copy()?;
        debug!("{}: added a copy of {} ({})", self.name, book.title(), book.copies());
        Ok(event)
    }

    /// Place every item on the shelf in order, returning one outcome per item
    pub fn add_books<I>(&mut self, items: I) -> Vec<Result<CirculationEvent>>
    where
        I: IntoIterator,
        I::Item: Into<BookInput>,
    {
        items.into_iter().map(|item| self.add_book(item)).collect()
    }

    /// Book with exactly this title
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the title is not on the shelf.
    pub fn get_book(&self, title: &str) -> Result<&Book> {
        self.books.get(title).ok_or_else(|| CatalogError::book_not_found(title, &self.name))
    }

    /// Handle on the book with exactly this title, for metadata updates and
    /// circulation
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the title is not on the shelf.
    pub fn get_book_mut(&mut self, title: &str) -> Result<BookMut<'_>> {
        self.book_mut(title).map(|book| BookMut { book })
    }

    /// The stored book itself; its title must not change
    pub(crate) fn book_mut(&mut self, title: &str) -> Result<&mut Book> {
        let name = &self.name;
        self.books.get_mut(title).ok_or_else(|| CatalogError::book_not_found(title, name))
    }

    /// Take the book with exactly this title off the shelf
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the title is not on the shelf.
    pub fn remove_book(&mut self, title: &str) -> Result<Book> {
        let book =
            self.books.remove(title).ok_or_else(|| CatalogError::book_not_found(title, &self.name))?;
        debug!("{}: removed {}", self.name, book.title());
        Ok(book)
    }

    /// Books in the order they were first shelved
    pub fn list_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Mutable access to a shelf held by a library.
///
/// Books can be added, removed and updated through the handle; the shelf's
/// name, which keys it in the library, cannot change. Reads go through
/// `Deref`.
#[derive(Debug)]
pub struct ShelfMut<'a> {
    /// The stored shelf
    pub(crate) shelf: &'a mut Shelf,
}

impl Deref for ShelfMut<'_> {
    type Target = Shelf;

    fn deref(&self) -> &Shelf {
        self.shelf
    }
}

impl ShelfMut<'_> {
    /// Place one item on the shelf, see [`Shelf::add_book`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CopyLimit` if the shelved title cannot take
    /// another copy.
    pub fn add_book(&mut self, item: impl Into<BookInput>) -> Result<CirculationEvent> {
        self.shelf.add_book(item)
    }

    /// Place every item on the shelf, see [`Shelf::add_books`]
    pub fn add_books<I>(&mut self, items: I) -> Vec<Result<CirculationEvent>>
    where
        I: IntoIterator,
        I::Item: Into<BookInput>,
    {
        self.shelf.add_books(items)
    }

    /// Handle on a shelved book, see [`Shelf::get_book_mut`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the title is not on the shelf.
    pub fn get_book_mut(&mut self, title: &str) -> Result<BookMut<'_>> {
        self.shelf.get_book_mut(title)
    }

    /// Take a book off the shelf, see [`Shelf::remove_book`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the title is not on the shelf.
    pub fn remove_book(&mut self, title: &str) -> Result<Book> {
        self.shelf.remove_book(title)
    }
}

#[cfg(test)]
mod tests;
