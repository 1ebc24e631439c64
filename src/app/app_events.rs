use std::time::{Duration, Instant};

use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind};

use super::app_state::App;
use super::mouse_hover::handle_mouse;
use crate::tooltip::{Placement, handle_hover_events};

/// Redraw interval while a fade is running
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Longest wait for input when nothing is scheduled
pub const IDLE_POLL: Duration = Duration::from_millis(250);

fn placement_for_key(c: char) -> Option<Placement> {
    match c {
        't' => Some(Placement::Top),
        'b' => Some(Placement::Bottom),
        'l' => Some(Placement::Left),
        'r' => Some(Placement::Right),
        _ => None,
    }
}

impl App {
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            Event::Mouse(mouse) => handle_mouse(self, mouse, now),
            Event::FocusLost => {
                let events = self.document.pointer_left();
                handle_hover_events(&mut self.tooltip, &mut self.document, &events, now);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c) => {
                if let Some(placement) = placement_for_key(c) {
                    self.tooltip.set_placement(placement);
                }
            }
            _ => {}
        }
    }

    /// Fire due timers and retire finished fades
    pub fn tick(&mut self, now: Instant) {
        self.tooltip.tick(&mut self.document, now);
        self.document.settle(now);
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.document.is_animating(now) {
            return FRAME_INTERVAL;
        }
        match self.tooltip.next_deadline() {
            Some(at) => at.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
