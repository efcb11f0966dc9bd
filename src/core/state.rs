//! # Application State
//!
//! Core business state for the catalog screen. Domain data only,
//! presentation state (focus, selection, cursor) lives in the `tui` module.
//!
//! ```text
//! CatalogState
//! ├── status: LoadStatus            // Idle / Loading / Loaded / Failed
//! ├── pdf_books: Vec<Book>          // "PDF Books"
//! ├── unicode_books: Vec<Book>      // "Searched Books"
//! ├── search_query: String          // collected, never applied
//! ├── page: u32                     // page to request
//! ├── generation: u64               // id of the latest requested fetch
//! ├── navigator: Navigator          // route stack
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::Book;
use crate::core::navigation::Navigator;

/// Where the current load stands. Together with the book lists this tells
/// "still loading", "failed" and "loaded but empty" apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    pub status: LoadStatus,
    pub pdf_books: Vec<Book>,
    pub unicode_books: Vec<Book>,
    pub search_query: String,
    pub page: u32,
    /// Bumped on every load request, cancel and quit. Results carrying an
    /// older value are discarded.
    pub generation: u64,
    pub navigator: Navigator,
    pub status_message: String,
}

impl CatalogState {
    pub fn new(page: u32) -> Self {
        Self {
            status: LoadStatus::Idle,
            pdf_books: Vec::new(),
            unicode_books: Vec::new(),
            search_query: String::new(),
            page,
            generation: 0,
            navigator: Navigator::new(),
            status_message: String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Loaded successfully, but neither list has anything in it.
    pub fn is_empty_result(&self) -> bool {
        self.status == LoadStatus::Loaded
            && self.pdf_books.is_empty()
            && self.unicode_books.is_empty()
    }

    /// Looks up a book shown in either list.
    pub fn find_book(&self, book_id: &str) -> Option<&Book> {
        self.pdf_books
            .iter()
            .chain(self.unicode_books.iter())
            .find(|b| b.id == book_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Route;

    #[test]
    fn test_state_new_defaults() {
        let state = CatalogState::new(1);
        assert_eq!(state.status, LoadStatus::Idle);
        assert!(state.pdf_books.is_empty());
        assert!(state.unicode_books.is_empty());
        assert!(state.search_query.is_empty());
        assert_eq!(state.page, 1);
        assert_eq!(state.generation, 0);
        assert_eq!(state.navigator.current(), &Route::Home);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_empty_result_requires_loaded() {
        let mut state = CatalogState::new(1);
        assert!(!state.is_empty_result());
        state.status = LoadStatus::Failed("boom".to_string());
        assert!(!state.is_empty_result());
        state.status = LoadStatus::Loaded;
        assert!(state.is_empty_result());
    }
}
