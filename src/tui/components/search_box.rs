//! # SearchBox Component
//!
//! Single-line text field above the book lists.
//!
//! The buffer is internal state; `focused` is a prop. Every edit emits
//! `SearchEvent::Changed` with the full text so the core can record it.
//! Nothing filters on it.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search for books...";
const SEARCH_ICON: &str = "⌕ ";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Changed(String),
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether keyboard focus is on the field (Prop)
    pub focused: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
        }
    }

    /// Column of the cursor relative to the field's inner area.
    fn cursor_column(&self) -> u16 {
        let width = SEARCH_ICON.width() + self.buffer.width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let flattened: String = text.chars().filter(|c| !c.is_control()).collect();
                if flattened.is_empty() {
                    return None;
                }
                self.buffer.push_str(&flattened);
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
            }
            _ => return None,
        }
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = if self.buffer.is_empty() {
            Span::styled(
                format!("{SEARCH_ICON}{PLACEHOLDER}"),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(format!("{SEARCH_ICON}{}", self.buffer))
        };

        let paragraph = Paragraph::new(text).block(Block::bordered().border_style(border_style));
        frame.render_widget(paragraph, area);

        if self.focused {
            let max_x = area.x + area.width.saturating_sub(2);
            let x = (area.x + 1).saturating_add(self.cursor_column()).min(max_x);
            frame.set_cursor_position(Position { x, y: area.y + 1 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_full_buffer() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('d')),
            Some(SearchEvent::Changed("d".to_string()))
        );
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('u')),
            Some(SearchEvent::Changed("du".to_string()))
        );
        assert_eq!(search.buffer, "du");
    }

    #[test]
    fn test_backspace_on_empty_emits_nothing() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);

        search.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed(String::new()))
        );
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut search = SearchBox::new();
        let event = search.handle_event(&TuiEvent::Paste("war and\npeace".to_string()));
        assert_eq!(event, Some(SearchEvent::Changed("war andpeace".to_string())));
    }

    #[test]
    fn test_ignores_navigation_keys() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(search.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut search = SearchBox::new();
        search.buffer = "本".to_string();
        assert_eq!(search.cursor_column(), (SEARCH_ICON.width() + 2) as u16);
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();
        terminal
            .draw(|f| {
                search.render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains(PLACEHOLDER));
    }
}
