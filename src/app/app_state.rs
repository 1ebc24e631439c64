//! Demo application state
//!
//! One target box centered in the terminal and one tooltip bound to it.

use std::time::Instant;

use crate::config::TooltipOptions;
use crate::dom::{Document, ElementId, Offset};
use crate::tooltip::{PlacementMetrics, Tooltip, handle_hover_events};
use crate::widgets::popup;
use ratatui::layout::Rect;

pub const DEMO_OVERLAY: &str = "div#tooltip";
pub const DEMO_TARGET: &str = "div#content";
const TARGET_TEXT: &str = "Hover me";

/// Fill in whatever the demo needs that the options leave unset
pub fn demo_options(mut options: TooltipOptions) -> TooltipOptions {
    options.el.get_or_insert_with(|| DEMO_OVERLAY.to_string());
    options.target.get_or_insert_with(|| DEMO_TARGET.to_string());
    options.metrics.get_or_insert(PlacementMetrics::TERMINAL);
    options
}

pub struct App {
    pub document: Document,
    pub tooltip: Tooltip,
    pub target: ElementId,
    pub overlay: ElementId,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(options: &TooltipOptions, text: &str) -> Self {
        let mut document = Document::new();

        let target = document.create("div");
        document.set_id(target, "content");
        document.set_text(target, TARGET_TEXT);
        document.fit_to_text(target, 2);

        let overlay = document.create("div");
        document.set_id(overlay, "tooltip");
        document.set_text(overlay, text);
        document.fit_to_text(overlay, 1);

        let tooltip = Tooltip::new(&mut document, options);

        Self {
            document,
            tooltip,
            target,
            overlay,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Center the target box in `area`.
    ///
    /// When the box moves under a still pointer, hover is re-checked.
    pub fn layout(&mut self, area: Rect, now: Instant) {
        let Some(size) = self.document.size(self.target) else {
            return;
        };
        let rect = popup::centered_popup(area, size.width as u16, size.height as u16);
        let offset = Offset::new(rect.y as f64, rect.x as f64);
        if self.document.offset(self.target) == Some(offset) {
            return;
        }
        self.document.set_offset(self.target, offset);
        let events = self.document.recheck_hover();
        handle_hover_events(&mut self.tooltip, &mut self.document, &events, now);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
