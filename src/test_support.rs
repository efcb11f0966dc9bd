//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{Author, Book, BookType, CatalogSource, FetchError};

/// Builds a book with placeholder text fields.
pub fn book(id: &str, book_type: &str) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Book {id}"),
        author: Author {
            name: format!("Author {id}"),
        },
        description: format!("Description {id}"),
        book_type: BookType::from(book_type.to_string()),
    }
}

/// Serves the same page of books for every request.
pub struct StaticSource {
    books: Vec<Book>,
}

impl StaticSource {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_page(&self, _page: u32) -> Result<Vec<Book>, FetchError> {
        Ok(self.books.clone())
    }
}

/// Fails every request with a network error.
pub struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_page(&self, _page: u32) -> Result<Vec<Book>, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

/// Never answers. For exercising cancellation.
pub struct PendingSource;

#[async_trait]
impl CatalogSource for PendingSource {
    fn name(&self) -> &str {
        "pending"
    }

    async fn fetch_page(&self, _page: u32) -> Result<Vec<Book>, FetchError> {
        std::future::pending().await
    }
}
