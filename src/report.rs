//! Text catalog formatting and serializable catalog snapshots.
//!
//! The text layout is three bordered columns: title and author left-aligned
//! in 30 characters each, the `available / total` copy ratio centred in 10.
//! Over-long fields push the border out rather than being cut.

use serde::{Deserialize, Serialize};

use crate::{
    book::{Book, CopyCount},
    library::Library,
    shelf::Shelf,
};

/// Width of the title column
pub const TITLE_WIDTH: usize = 30;
/// Width of the author column
pub const AUTHOR_WIDTH: usize = 30;
/// Width of the copies column
pub const COPIES_WIDTH: usize = 10;

/// Column header line
#[must_use]
pub fn header_line() -> String {
    format!(
        "+ {:^TITLE_WIDTH$} | {:^AUTHOR_WIDTH$} | {:^COPIES_WIDTH$} +",
        "Title", "Author", "Copies"
    )
}

/// One catalog line for `book`
#[must_use]
pub fn book_line(book: &Book) -> String {
    format!(
        "+ {:<TITLE_WIDTH$} | {:<AUTHOR_WIDTH$} | {:^COPIES_WIDTH$} +",
        book.title(),
        book.author(),
        book.copy_str()
    )
}

/// Label printed ahead of a shelf's books
#[must_use]
pub fn shelf_label(shelf: &Shelf) -> String {
    format!("Shelf - {shelf}")
}

/// Title line of a full catalog
#[must_use]
pub fn banner(library: &Library) -> String {
    format!("= All Books at {library} =")
}

/// Every line of the catalog: banner, header, then each shelf's label and
/// books in insertion order
#[must_use]
pub fn catalog_lines(library: &Library) -> Vec<String> {
    let mut lines = vec![banner(library), header_line()];
    for shelf in library.shelves() {
        lines.push(shelf_label(shelf));
        lines.extend(shelf.list_books().map(book_line));
    }
    lines
}

/// Catalog entry for one book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookEntry {
    /// Title of the book
    pub title: String,
    /// Author, empty when unknown
    pub author: String,
    /// Page count, zero when unknown
    pub page_count: u32,
    /// Copy counts at snapshot time
    pub copies: CopyCount,
}

impl From<&Book> for BookEntry {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
            page_count: book.page_count(),
            copies: book.copies(),
        }
    }
}

/// Catalog entry for one shelf
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShelfEntry {
    /// Name of the shelf
    pub name: String,
    /// Books in insertion order
    pub books: Vec<BookEntry>,
}

/// Point-in-time view of a whole library, for presentation layers other than
/// the text catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSnapshot {
    /// Name of the library
    pub library: String,
    /// Shelves in insertion order
    pub shelves: Vec<ShelfEntry>,
}

impl From<&Library> for CatalogSnapshot {
    fn from(library: &Library) -> Self {
        Self {
            library: library.name().to_string(),
            shelves: library
                .shelves()
                .map(|shelf| ShelfEntry {
                    name: shelf.name().to_string(),
                    books: shelf.list_books().map(BookEntry::from).collect(),
                })
                .collect(),
        }
    }
}
