//! Document rendering
//!
//! Draws every visible element in tree order. Tooltip bubbles clear what is
//! beneath them, pointer decorations become a single arrow glyph next to
//! their bubble, and anything else is drawn as a plain bordered box.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::document::Document;
use super::element::{Element, ElementId};
use super::geometry::{self, Offset, Size};
use crate::widgets::popup;

pub const TOOLTIP_CLASS: &str = "tooltip";
pub const POINTER_CLASS: &str = "tooltip-pointer";

const TOOLTIP_BORDER: (u8, u8, u8) = (0, 200, 200);
const TOOLTIP_TEXT: (u8, u8, u8) = (255, 255, 255);
const BOX_BORDER: (u8, u8, u8) = (128, 128, 128);
const BOX_TEXT: (u8, u8, u8) = (220, 220, 220);

/// Scale an RGB color toward black by `opacity`
pub fn faded(rgb: (u8, u8, u8), opacity: f32) -> Color {
    let scale = |c: u8| (c as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(scale(rgb.0), scale(rgb.1), scale(rgb.2))
}

/// Render all visible elements of `doc` into `area`
pub fn render_document(doc: &Document, frame: &mut Frame, area: Rect, now: Instant) {
    for id in doc.tree_order() {
        let opacity = doc.opacity(id, now);
        if opacity <= 0.0 {
            continue;
        }
        let Some(el) = doc.get(id) else {
            continue;
        };

        if el.has_class(POINTER_CLASS) {
            render_pointer(doc, el, frame, area, opacity);
        } else if el.has_class(TOOLTIP_CLASS) {
            render_bubble(el, frame, area, opacity);
        } else {
            render_box(el, frame, area, opacity);
        }
    }
}

fn render_bubble(el: &Element, frame: &mut Frame, area: Rect, opacity: f32) {
    let Some(rect) = geometry::to_cells(el.offset(), el.size(), area) else {
        return;
    };
    popup::clear_area(frame, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(faded(TOOLTIP_BORDER, opacity)))
        .padding(Padding::horizontal(1));
    let text = Paragraph::new(el.text())
        .block(block)
        .style(Style::default().fg(faded(TOOLTIP_TEXT, opacity)));

    frame.render_widget(text, rect);
}

fn render_box(el: &Element, frame: &mut Frame, area: Rect, opacity: f32) {
    let Some(rect) = geometry::to_cells(el.offset(), el.size(), area) else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(faded(BOX_BORDER, opacity)));
    let text = Paragraph::new(el.text())
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(faded(BOX_TEXT, opacity)));

    frame.render_widget(text, rect);
}

/// Arrow glyph and its cell for a pointer attached to `bubble`
pub fn pointer_cell(pointer: &Element, bubble: &Element) -> Option<(Offset, &'static str)> {
    let Offset { top, left } = bubble.offset();
    let Size { width, height } = bubble.size();
    let center_x = left + (width / 2.0).floor();
    // first content row, so the arrow sits beside the text
    let middle_y = top + 1.0_f64.min((height - 1.0).max(0.0));

    if pointer.has_class("top") {
        Some((Offset::new(top + height, center_x), "▼"))
    } else if pointer.has_class("bottom") {
        Some((Offset::new(top - 1.0, center_x), "▲"))
    } else if pointer.has_class("left") {
        Some((Offset::new(middle_y, left + width), "▶"))
    } else if pointer.has_class("right") {
        Some((Offset::new(middle_y, left - 1.0), "◀"))
    } else {
        None
    }
}

fn render_pointer(doc: &Document, el: &Element, frame: &mut Frame, area: Rect, opacity: f32) {
    let Some(bubble) = el.parent().and_then(|p: ElementId| doc.get(p)) else {
        return;
    };
    let Some((offset, glyph)) = pointer_cell(el, bubble) else {
        return;
    };
    let Some(rect) = geometry::to_cells(offset, Size::new(1.0, 1.0), area) else {
        return;
    };

    frame.buffer_mut().set_string(
        rect.x,
        rect.y,
        glyph,
        Style::default().fg(faded(TOOLTIP_BORDER, opacity)),
    );
}

#[cfg(test)]
#[path = "dom_render_tests.rs"]
mod dom_render_tests;
