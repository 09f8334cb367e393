use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CatalogError, Result},
    events::CirculationEvent,
    report,
    shelf::Shelf,
};

/// Available and total copies of a single title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CopyCount {
    /// Copies currently on the shelf
    pub available: u32,
    /// Copies the library owns
    pub total: u32,
}

impl fmt::Display for CopyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.available, self.total)
    }
}

/// A title held by a shelf, with its metadata and copy availability.
///
/// The title is the book's identity on a shelf and cannot change after
/// creation. `available <= total` holds after every operation, and `total`
/// never goes down. Deserialized books are checked against the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    /// Identity key within a shelf
    title: String,
    /// Author, empty when unknown
    author: String,
    /// Page count, zero when unknown
    page_count: u32,
    /// Free-form description
    description: String,
    /// Current copy counts
    copies: CopyCount,
}

impl Book {
    /// Create a book with a single copy and no metadata
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            page_count: 0,
            description: String::new(),
            copies: CopyCount { available: 1, total: 1 },
        }
    }

    /// Create a book that starts with `copies` copies on hand
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ZeroCopies` if `copies` is zero, since such a
    /// book would be out of stock before anyone checked it out.
    pub fn with_copies(title: impl Into<String>, copies: u32) -> Result<Self> {
        let mut book = Self::new(title);
        if copies == 0 {
            return Err(CatalogError::ZeroCopies { title: book.title });
        }
        book.copies = CopyCount { available: copies, total: copies };
        Ok(book)
    }

    /// Set the author
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the page count
    #[must_use]
    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the author of a book that is already shelved
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Replace the page count of a book that is already shelved
    pub fn set_page_count(&mut self, page_count: u32) {
        self.page_count = page_count;
    }

    /// Replace the description of a book that is already shelved
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The book's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author, empty when unknown
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The book's page count, zero when unknown
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// The book's description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current copy counts
    #[must_use]
    pub fn copies(&self) -> CopyCount {
        self.copies
    }

    /// Copies currently available for check-out
    #[must_use]
    pub fn available_copies(&self) -> u32 {
        self.copies.available
    }

    /// Copies the library owns
    #[must_use]
    pub fn total_copies(&self) -> u32 {
        self.copies.total
    }

    /// The copy ratio as `available / total`
    #[must_use]
    pub fn copy_str(&self) -> String {
        self.copies.to_string()
    }

    /// Add one more copy of this title, available immediately
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CopyLimit` when the total is already
    /// `u32::MAX`. The counts are left untouched.
    pub fn add_copy(&mut self) -> Result<CirculationEvent> {
        let (Some(available), Some(total)) =
            (self.copies.available.checked_add(1), self.copies.total.checked_add(1))
        else {
            return Err(CatalogError::CopyLimit { title: self.title.clone() });
        };
        self.copies = CopyCount { available, total };
        Ok(CirculationEvent::CopyAdded { title: self.title.clone(), copies: self.copies })
    }

    /// Check out one copy
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OutOfStock` when no copy is available. The
    /// counts are left untouched.
    pub fn check_out(&mut self) -> Result<CirculationEvent> {
        let Some(available) = self.copies.available.checked_sub(1) else {
            return Err(CatalogError::OutOfStock { title: self.title.clone() });
        };
        self.copies.available = available;
        Ok(CirculationEvent::CheckedOut { title: self.title.clone(), copies: self.copies })
    }

    /// Check a copy back in
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AllCopiesPresent` when every copy is already on
    /// the shelf. The counts are left untouched.
    pub fn check_in(&mut self) -> Result<CirculationEvent> {
        let available = self
            .copies
            .available
            .checked_add(1)
            .filter(|&available| available <= self.copies.total)
            .ok_or_else(|| CatalogError::AllCopiesPresent { title: self.title.clone() })?;
        self.copies.available = available;
        Ok(CirculationEvent::CheckedIn { title: self.title.clone(), copies: self.copies })
    }

    /// Multi-line summary of every field
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Title: {}\nAuthor: {}\nPages: {}\nCopies: {}\nDescription: {}",
            self.title, self.author, self.page_count, self.copies, self.description
        )
    }

    /// Fixed-width catalog line with title, author and copy ratio
    #[must_use]
    pub fn report_line(&self) -> String {
        report::book_line(self)
    }

    /// Place this book on `shelf`. A shelf that already holds the title
    /// gains a copy instead.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CopyLimit` if the shelved copy cannot take
    /// another copy.
    pub fn transfer_to(self, shelf: &mut Shelf) -> Result<CirculationEvent> {
        shelf.add_book(self)
    }

    /// Take the entry with this book's title off `shelf`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the shelf has no such title.
    pub fn remove_from(&self, shelf: &mut Shelf) -> Result<Self> {
        shelf.remove_book(&self.title)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Serialized shape of a book, validated before it becomes a [`Book`]
#[derive(Deserialize)]
struct BookRecord {
    /// Identity key within a shelf
    title: String,
    /// Author, empty when missing
    #[serde(default)]
    author: String,
    /// Page count, zero when missing
    #[serde(default)]
    page_count: u32,
    /// Description, empty when missing
    #[serde(default)]
    description: String,
    /// Copy counts as recorded
    copies: CopyCount,
}

impl TryFrom<BookRecord> for Book {
    type Error = CatalogError;

    fn try_from(record: BookRecord) -> Result<Self> {
        let BookRecord { title, author, page_count, description, copies } = record;
        if copies.total == 0 {
            return Err(CatalogError::ZeroCopies { title });
        }
        if copies.available > copies.total {
            return Err(CatalogError::InvalidCopies { title, copies });
        }
        Ok(Self { title, author, page_count, description, copies })
    }
}

/// Mutable access to a shelved book.
///
/// Metadata and copy counts can change through the handle; the title, which
/// keys the book on its shelf, cannot. Reads go through `Deref`.
#[derive(Debug)]
pub struct BookMut<'a> {
    /// The shelved book
    pub(crate) book: &'a mut Book,
}

impl Deref for BookMut<'_> {
    type Target = Book;

    fn deref(&self) -> &Book {
        self.book
    }
}

impl BookMut<'_> {
    /// Replace the author
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.book.set_author(author);
    }

    /// Replace the page count
    pub fn set_page_count(&mut self, page_count: u32) {
        self.book.set_page_count(page_count);
    }

    /// Replace the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.book.set_description(description);
    }

    /// Add one copy, see [`Book::add_copy`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CopyLimit` when the total cannot grow.
    pub fn add_copy(&mut self) -> Result<CirculationEvent> {
        self.book.add_copy()
    }

    /// Check out one copy, see [`Book::check_out`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OutOfStock` when no copy is available.
    pub fn check_out(&mut self) -> Result<CirculationEvent> {
        self.book.check_out()
    }

    /// Check one copy in, see [`Book::check_in`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AllCopiesPresent` when every copy is in.
    pub fn check_in(&mut self) -> Result<CirculationEvent> {
        self.book.check_in()
    }
}

/// Title-case a free-form label.
///
/// A cased character (one with an upper- or lower-case form) that follows an
/// uncased one, or starts the string, is upper-cased; every other cased
/// character is lower-cased. Uncased characters such as digits or CJK
/// ideographs pass through and start a new word. Characters whose title-case
/// form differs from their upper-case form (`ß`, ligatures, Latin digraphs)
/// take the upper-case form here, so `ß` becomes `SS` rather than `Ss`.
#[must_use]
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut previous_is_cased = false;
    for c in label.chars() {
        if previous_is_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}
