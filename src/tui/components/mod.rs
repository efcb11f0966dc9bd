//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: header line with title and status
//! - `Footer`: tab labels and key hints
//! - `ChapterList`: placeholder detail screen for one book id
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: text field, emits the query on every edit
//! - `BookList`: selectable list of books, emits `Open(id)` on Enter
//!
//! Components receive external data as props, never by reaching into
//! `CatalogState` themselves:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new("Featured Books", &state.status_message).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Header line)
//! ├── search_box.rs    (Search input)
//! ├── book_list.rs     (One list of books)
//! ├── chapter_list.rs  (Detail placeholder)
//! └── footer.rs        (Tab bar)
//! ```

pub mod book_list;
pub mod chapter_list;
pub mod footer;
pub mod search_box;
pub mod title_bar;

pub use book_list::{BookList, BookListEvent, BookListState};
pub use chapter_list::ChapterList;
pub use footer::Footer;
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
