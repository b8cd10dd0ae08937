//! Counting books across a roster and picking out the ones that recur.
//!
//! Everything here is pure: no I/O, no errors. An empty roster is not a
//! special case, it simply yields an empty tally and no common books.

use crate::domain::model::{Book, BookTally, Bookworm};

/// Registers every book on every shelf along with its number of occurrences.
///
/// A bookworm who lists the same book twice counts twice toward that book.
pub fn books_count(bookworms: &[Bookworm]) -> BookTally {
    let mut tally = BookTally::new();

    for bookworm in bookworms {
        for book in &bookworm.books {
            tally.record(book);
        }
    }

    tally
}

/// Books whose tally is strictly greater than one, sorted by author then title.
pub fn common_books(tally: &BookTally) -> Vec<Book> {
    let books = tally
        .iter()
        .filter(|(_, count)| *count > 1)
        .map(|(book, _)| book.clone())
        .collect();

    sort_books(books)
}

/// Books found more than once across all shelves.
pub fn find_common_books(bookworms: &[Bookworm]) -> Vec<Book> {
    common_books(&books_count(bookworms))
}

/// Sorts books by author, then by title.
pub fn sort_books(mut books: Vec<Book>) -> Vec<Book> {
    books.sort();
    books
}
