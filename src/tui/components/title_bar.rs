//! # TitleBar Component
//!
//! Single-line header: screen title, status message, and the message
//! icon on the right edge.
//!
//! Stateless: everything it shows arrives as props.
//!
//! 1. **With status**: `"Featured Books | 12 books"`
//! 2. **Default**: `"Featured Books"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const MESSAGE_ICON: &str = "✉";

pub struct TitleBar {
    /// Screen title (e.g. "Featured Books")
    pub title: String,
    /// Status message (e.g. "Loading page 1...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status_message: status_message.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [text_area, icon_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(2)]).areas(area);

        let mut spans = vec![Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), text_area);

        let icon = Paragraph::new(Span::styled(MESSAGE_ICON, Style::default().fg(Color::Blue)))
            .alignment(Alignment::Right);
        frame.render_widget(icon, icon_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Featured Books", "Loading page 1...");
        let text = render_text(&mut title_bar);
        assert!(text.contains("Featured Books"));
        assert!(text.contains("Loading page 1..."));
        assert!(text.contains(MESSAGE_ICON));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Featured Books", "");
        let text = render_text(&mut title_bar);
        assert!(text.contains("Featured Books"));
        assert!(!text.contains('|'));
    }
}
