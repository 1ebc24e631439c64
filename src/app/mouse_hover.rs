//! Mouse hover handling
//!
//! Forwards pointer motion to the document and the resulting enter/leave
//! transitions to the tooltip.

use std::time::Instant;

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::tooltip::handle_hover_events;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let events = app
                .document
                .pointer_moved(mouse.column as f64, mouse.row as f64);
            handle_hover_events(&mut app.tooltip, &mut app.document, &events, now);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
