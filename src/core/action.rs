//! # Actions
//!
//! Everything that can happen on the catalog screen becomes an `Action`.
//! Screen mounted? That's `Action::Load`.
//! Fetch finished? That's `Action::CatalogLoaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the adapter should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::catalog::Catalog;
use crate::core::navigation::{DetailParams, Route};
use crate::core::state::{CatalogState, LoadStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Request a fresh fetch-and-partition of the configured page.
    Load,
    /// A fetch finished successfully.
    CatalogLoaded { generation: u64, catalog: Catalog },
    /// A fetch failed. `error` is the display text of the cause.
    LoadFailed { generation: u64, error: String },
    /// Abandon the in-flight fetch.
    CancelLoad,
    /// Search field contents changed.
    SearchChanged(String),
    /// Open the chapter list for a book currently shown.
    OpenDetail(String),
    /// Leave the current detail screen.
    Back,
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Abort any in-flight fetch, then start one for `page` tagged `generation`.
    SpawnFetch { page: u32, generation: u64 },
    /// Abort the in-flight fetch.
    CancelFetch,
    Quit,
}

pub fn update(state: &mut CatalogState, action: Action) -> Effect {
    match action {
        Action::Load => {
            state.generation += 1;
            state.status = LoadStatus::Loading;
            // A reload replaces everything, it never appends
            state.pdf_books.clear();
            state.unicode_books.clear();
            state.status_message = format!("Loading page {}...", state.page);
            info!(
                "Load requested: page={}, generation={}",
                state.page, state.generation
            );
            Effect::SpawnFetch {
                page: state.page,
                generation: state.generation,
            }
        }
        Action::CatalogLoaded {
            generation,
            catalog,
        } => {
            if generation != state.generation {
                debug!(
                    "Discarding stale catalog (generation {} != {})",
                    generation, state.generation
                );
                return Effect::None;
            }
            info!(
                "Catalog loaded: {} pdf, {} unicode",
                catalog.pdf_books.len(),
                catalog.unicode_books.len()
            );
            state.status_message = format!("{} books", catalog.len());
            state.pdf_books = catalog.pdf_books;
            state.unicode_books = catalog.unicode_books;
            state.status = LoadStatus::Loaded;
            Effect::None
        }
        Action::LoadFailed { generation, error } => {
            if generation != state.generation {
                debug!(
                    "Discarding stale failure (generation {} != {}): {}",
                    generation, state.generation, error
                );
                return Effect::None;
            }
            warn!("Error fetching catalog: {}", error);
            state.pdf_books.clear();
            state.unicode_books.clear();
            state.status = LoadStatus::Failed(error);
            state.status_message = String::from("Load failed");
            Effect::None
        }
        Action::CancelLoad => {
            if !state.is_loading() {
                return Effect::None;
            }
            state.generation += 1;
            state.status = LoadStatus::Idle;
            state.status_message = String::from("Load cancelled");
            info!("Load cancelled");
            Effect::CancelFetch
        }
        Action::SearchChanged(query) => {
            state.search_query = query;
            Effect::None
        }
        Action::OpenDetail(book_id) => {
            if state.find_book(&book_id).is_none() {
                warn!("Ignoring navigation to unknown book id: {}", book_id);
                return Effect::None;
            }
            debug!("Navigating to chapter list for {}", book_id);
            state
                .navigator
                .navigate(Route::ChapterList(DetailParams { book_id }));
            Effect::None
        }
        Action::Back => {
            state.navigator.back();
            Effect::None
        }
        Action::Quit => {
            state.generation += 1;
            Effect::Quit
        }
    }
}
