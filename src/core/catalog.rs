//! # Catalog Partition
//!
//! Splits one fetched page into the two lists the home screen shows.
//! Pure: no I/O, no state, same input always gives the same output.

use std::collections::HashSet;

use log::{debug, warn};

use crate::api::{Book, BookType};

/// The fetched page, split by format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub pdf_books: Vec<Book>,
    pub unicode_books: Vec<Book>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.pdf_books.is_empty() && self.unicode_books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pdf_books.len() + self.unicode_books.len()
    }
}

/// Stable partition by `book_type`.
///
/// `PDF` goes to `pdf_books`, `UNICODE` to `unicode_books`, every other tag
/// is dropped. Relative order inside each list matches the input.
pub fn partition(books: Vec<Book>) -> Catalog {
    let mut catalog = Catalog::default();
    let mut seen_ids = HashSet::new();
    let mut dropped = 0usize;

    for book in books {
        if !seen_ids.insert(book.id.clone()) {
            warn!("Duplicate book id in catalog page: {}", book.id);
        }
        match book.book_type {
            BookType::Pdf => catalog.pdf_books.push(book),
            BookType::Unicode => catalog.unicode_books.push(book),
            BookType::Other(ref tag) => {
                debug!("Dropping book {} with unrecognized type {:?}", book.id, tag);
                dropped += 1;
            }
        }
    }

    debug!(
        "Partitioned catalog: {} pdf, {} unicode, {} dropped",
        catalog.pdf_books.len(),
        catalog.unicode_books.len(),
        dropped
    );
    catalog
}
