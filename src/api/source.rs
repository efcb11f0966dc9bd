use std::fmt;

use async_trait::async_trait;
use log::debug;

use super::types::Book;
use crate::core::catalog::{self, Catalog};

/// Errors that can occur while fetching a catalog page.
/// Callers treat every variant the same way; the variants only carry the cause.
#[derive(Debug)]
pub enum FetchError {
    /// Client misconfigured (bad base URL, TLS backend init). Not retryable.
    Config(String),
    /// Page numbers start at 1.
    InvalidPage(u32),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// No response within the configured timeout.
    Timeout,
    /// Server answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not `{ "data": Book[] }`.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::InvalidPage(page) => write!(f, "invalid page number: {page}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::Config(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Anything that can serve pages of the book catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Fetches one page of books in the order the source returns them.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Book>, FetchError>;

    /// Fetches one page and splits it into the PDF and UNICODE lists.
    /// Fails as a whole; there are no partial results.
    async fn load_catalog(&self, page: u32) -> Result<Catalog, FetchError> {
        let books = self.fetch_page(page).await?;
        debug!("{} returned {} books for page {}", self.name(), books.len(), page);
        Ok(catalog::partition(books))
    }
}
