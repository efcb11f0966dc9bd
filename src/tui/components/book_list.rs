//! # BookList Component
//!
//! One titled, scrollable list of books ("PDF Books", "Searched Books").
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookListState` lives in `TuiState`
//! - `BookList` is created each frame with borrowed state and props
//!
//! When there is nothing to list, the body says why: not loaded yet,
//! loading, failed, or loaded with no books of this type.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Book;
use crate::core::state::LoadStatus;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent selection state for one list.
#[derive(Debug, Default)]
pub struct BookListState {
    pub selected: usize,
    pub list_state: ListState,
}

/// Events emitted by a book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookListEvent {
    /// Enter pressed on the book with this id.
    Open(String),
}

impl BookListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the selection inside `len` items (lists are replaced on reload).
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle a key event against the books currently shown.
    pub fn handle_event(&mut self, event: &TuiEvent, books: &[Book]) -> Option<BookListEvent> {
        if books.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(books.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => books
                .get(self.selected)
                .map(|book| BookListEvent::Open(book.id.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for one book list.
pub struct BookList<'a> {
    pub title: &'a str,
    pub books: &'a [Book],
    pub status: &'a LoadStatus,
    pub focused: bool,
    state: &'a mut BookListState,
}

impl<'a> BookList<'a> {
    pub fn new(
        title: &'a str,
        books: &'a [Book],
        status: &'a LoadStatus,
        focused: bool,
        state: &'a mut BookListState,
    ) -> Self {
        Self {
            title,
            books,
            status,
            focused,
            state,
        }
    }

    fn empty_message(&self) -> (String, Style) {
        let dim = Style::default().fg(Color::DarkGray);
        match self.status {
            LoadStatus::Idle => ("Not loaded. Press Ctrl+R to load.".to_string(), dim),
            LoadStatus::Loading => ("Loading...".to_string(), Style::default().fg(Color::Yellow)),
            LoadStatus::Failed(error) => (
                format!("Could not load books: {error}"),
                Style::default().fg(Color::Red),
            ),
            LoadStatus::Loaded => ("No books.".to_string(), dim),
        }
    }
}

impl Component for BookList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        if self.books.is_empty() {
            let (message, style) = self.empty_message();
            let empty = Paragraph::new(message)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.books.len());

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .books
            .iter()
            .map(|book| book_item(book, inner_width))
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Three lines per book: title, author, description.
fn book_item(book: &Book, width: usize) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            truncate_to_width(&book.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&format!("Author: {}", book.author.name), width),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            truncate_to_width(&format!("Description: {}", book.description), width),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
