use crate::{
    book::{Book, CopyCount},
    error::{CatalogError, Entity},
    events::CirculationEvent,
    shelf::{BookInput, Shelf},
};

/// Helper function to set up the sample fantasy shelf
#[allow(clippy::expect_used)]
fn setup_fantasy_shelf() -> Shelf {
    let mut shelf = Shelf::new("Fantasy");
    let thrones = Book::with_copies("A Game of Thrones", 2).expect("two copies is valid");
    let events = shelf.add_books([BookInput::from(thrones), "The Scar".into()]);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(Result::is_ok));
    shelf
}

#[test]
#[allow(clippy::expect_used)]
fn test_label_becomes_single_copy_book() {
    let shelf = setup_fantasy_shelf();
    let scar = shelf.get_book("The Scar").expect("The Scar is shelved");
    assert_eq!(scar.copies(), CopyCount { available: 1, total: 1 });
    assert_eq!(shelf.len(), 2);
}

#[test]
#[allow(clippy::expect_used)]
fn test_duplicate_title_adds_copy() {
    let mut shelf = setup_fantasy_shelf();

    let event = shelf.add_book("The Scar");
    assert_eq!(
        event,
        Ok(CirculationEvent::CopyAdded {
            title: "The Scar".to_string(),
            copies: CopyCount { available: 2, total: 2 },
        })
    );

    let scar = shelf.get_book("The Scar").expect("The Scar is shelved");
    assert_eq!(scar.total_copies(), 2);
    assert_eq!(scar.available_copies(), 2);
    assert_eq!(shelf.len(), 2);
}

#[test]
#[allow(clippy::expect_used)]
fn test_duplicate_book_adds_one_copy_whatever_its_count() {
    let mut shelf = setup_fantasy_shelf();
    let more = Book::with_copies("A Game of Thrones", 5).expect("valid copies");

    let event = shelf.add_book(more);
    assert_eq!(event.map(|event| event.copies()), Ok(CopyCount { available: 3, total: 3 }));
    assert_eq!(shelf.len(), 2);
}

#[test]
#[allow(clippy::expect_used)]
fn test_duplicate_keeps_existing_metadata() {
    let mut shelf = Shelf::new("Fantasy");
    assert!(shelf.add_book(Book::new("The Scar").with_author("China Mieville")).is_ok());
    assert!(shelf.add_book(Book::new("The Scar").with_author("Someone Else")).is_ok());

    let scar = shelf.get_book("The Scar").expect("The Scar is shelved");
    assert_eq!(scar.author(), "China Mieville");
    assert_eq!(scar.total_copies(), 2);
}

#[test]
fn test_labels_are_title_cased() {
    let mut shelf = Shelf::new("Fantasy");
    let events = shelf.add_books(["the scar", "THE SCAR"]);

    assert!(matches!(events.first(), Some(Ok(CirculationEvent::Shelved { title, .. })) if title == "The Scar"));
    assert!(matches!(events.get(1), Some(Ok(CirculationEvent::CopyAdded { .. }))));
    assert_eq!(shelf.len(), 1);
    assert!(shelf.contains("The Scar"));
    assert!(!shelf.contains("the scar"));
}

#[test]
fn test_label_from_display_value() {
    let mut shelf = Shelf::new("Numbers");
    assert!(shelf.add_book(BookInput::label(1984)).is_ok());
    assert!(shelf.contains("1984"));
}

#[test]
fn test_lookup_is_exact() {
    let shelf = setup_fantasy_shelf();
    let result = shelf.get_book("the scar");
    assert_eq!(
        result,
        Err(CatalogError::NotFound {
            entity: Entity::Book,
            key: "the scar".to_string(),
            container: "Fantasy".to_string(),
        })
    );
}

#[test]
fn test_remove_missing_book_leaves_shelf_unchanged() {
    let mut shelf = setup_fantasy_shelf();
    let result = shelf.remove_book("Dune");
    assert!(matches!(result, Err(CatalogError::NotFound { entity: Entity::Book, .. })));
    assert_eq!(shelf.len(), 2);
}

#[test]
#[allow(clippy::expect_used)]
fn test_remove_keeps_insertion_order() {
    let mut shelf = Shelf::new("Mixed");
    let events = shelf.add_books(["Alpha", "Beta", "Gamma", "Delta"]);
    assert!(events.iter().all(Result::is_ok));

    let removed = shelf.remove_book("Beta").expect("Beta is shelved");
    assert_eq!(removed.title(), "Beta");

    let titles: Vec<_> = shelf.list_books().map(Book::title).collect();
    assert_eq!(titles, vec!["Alpha", "Gamma", "Delta"]);
    assert!(shelf.get_book("Delta").is_ok());

    // A removed title can be shelved again, at the end
    assert!(shelf.add_book("Beta").is_ok());
    let titles: Vec<_> = shelf.list_books().map(Book::title).collect();
    assert_eq!(titles, vec!["Alpha", "Gamma", "Delta", "Beta"]);
}

#[test]
fn test_list_books_is_restartable() {
    let shelf = setup_fantasy_shelf();
    let first: Vec<_> = shelf.list_books().map(Book::title).collect();
    let second: Vec<_> = shelf.list_books().map(Book::title).collect();
    assert_eq!(first, vec!["A Game of Thrones", "The Scar"]);
    assert_eq!(first, second);
}

#[test]
#[allow(clippy::expect_used)]
fn test_circulation_through_mutable_lookup() {
    let mut shelf = setup_fantasy_shelf();
    let mut thrones = shelf.get_book_mut("A Game of Thrones").expect("shelved");
    assert!(thrones.check_out().is_ok());
    assert_eq!(
        shelf.get_book("A Game of Thrones").map(Book::copies),
        Ok(CopyCount { available: 1, total: 2 })
    );
}

#[test]
#[allow(clippy::expect_used)]
fn test_book_handle_keeps_title_and_index() {
    let mut shelf = setup_fantasy_shelf();
    {
        let mut scar = shelf.get_book_mut("The Scar").expect("shelved");
        scar.set_author("China Mieville");
        scar.set_page_count(608);
        assert!(scar.add_copy().is_ok());
        assert!(scar.check_out().is_ok());
        assert_eq!(scar.title(), "The Scar");
    }

    assert_eq!(shelf.get_book("The Scar").map(Book::author), Ok("China Mieville"));
    let titles: Vec<_> = shelf.list_books().map(Book::title).collect();
    assert_eq!(titles, vec!["A Game of Thrones", "The Scar"]);
    assert!(titles.iter().all(|&title| shelf.get_book(title).is_ok_and(|book| book.title() == title)));

    // The stored entry is still the one new copies land on
    assert!(shelf.add_book("The Scar").is_ok());
    assert!(shelf.add_book("Dune").is_ok());
    assert_eq!(shelf.len(), 3);
    assert_eq!(
        shelf.get_book("The Scar").map(Book::copies),
        Ok(CopyCount { available: 2, total: 3 })
    );
}

#[test]
#[allow(clippy::expect_used)]
fn test_add_at_copy_limit_leaves_shelf_unchanged() {
    let mut shelf = Shelf::new("Fantasy");
    let crowded = Book::with_copies("The Scar", u32::MAX).expect("non-zero copies");
    assert!(shelf.add_book(crowded).is_ok());

    let result = shelf.add_book("The Scar");
    assert_eq!(result, Err(CatalogError::CopyLimit { title: "The Scar".to_string() }));
    assert_eq!(
        shelf.get_book("The Scar").map(Book::copies),
        Ok(CopyCount { available: u32::MAX, total: u32::MAX })
    );
    assert_eq!(shelf.len(), 1);
}

#[test]
fn test_display_is_name() {
    assert_eq!(Shelf::new("Science Fiction").to_string(), "Science Fiction");
}
