//! # Chapter List Screen
//!
//! Placeholder detail screen. It receives the book id through navigation
//! and shows it; chapter data is not fetched.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::navigation::DetailParams;
use crate::tui::component::Component;

pub struct ChapterList<'a> {
    pub params: &'a DetailParams,
}

impl<'a> ChapterList<'a> {
    pub fn new(params: &'a DetailParams) -> Self {
        Self { params }
    }
}

impl Component for ChapterList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(format!("Chapter List for Book ID: {}", self.params.book_id)),
            Line::from(""),
            Line::styled("Esc Back", Style::default().fg(Color::DarkGray)),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().title(" Chapters "))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
