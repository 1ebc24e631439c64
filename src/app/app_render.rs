use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::dom::render_document;

impl App {
    /// Lay out the target, then draw the document and the key hints
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let [canvas, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        self.layout(canvas, now);
        render_document(&self.document, frame, canvas, now);

        let hints = Line::from(vec![
            Span::styled(" t/b/l/r", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" placement ({}) ", self.tooltip.placement())),
            Span::styled(" q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::Gray)),
            status,
        );
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
