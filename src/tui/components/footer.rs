//! # Footer Component
//!
//! Bottom tab bar. The tabs are labels only, none of them is wired to a screen.
//! The right side carries the key hints for the current screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// (icon, label) for each footer tab, left to right.
pub const FOOTER_ITEMS: [(&str, &str); 4] = [
    ("⌂", "Home"),
    ("▤", "Audio Books"),
    ("⚙", "Settings"),
    ("⌕", "Search"),
];

pub struct Footer {
    pub hints: &'static str,
}

impl Footer {
    pub fn new(hints: &'static str) -> Self {
        Self { hints }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(self.hints.len() as u16)])
                .areas(area);

        let mut spans = Vec::new();
        for (icon, label) in FOOTER_ITEMS {
            spans.push(Span::styled(format!("{icon} "), Style::default().fg(Color::Blue)));
            spans.push(Span::raw(format!("{label}  ")));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), tabs_area);

        let hints = Paragraph::new(Span::styled(self.hints, Style::default().fg(Color::DarkGray)));
        frame.render_widget(hints, hints_area);
    }
}
