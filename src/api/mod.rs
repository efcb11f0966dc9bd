pub mod client;
pub mod source;
pub mod types;

pub use client::CatalogClient;
pub use source::{CatalogSource, FetchError};
pub use types::{Author, Book, BookType, CatalogPage};
