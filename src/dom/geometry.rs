//! Document-space geometry
//!
//! Offsets are measured from the document origin in cells. They stay `f64`
//! so centering arithmetic keeps its half cells until draw time.

use ratatui::layout::Rect;

/// Top-left position of an element, relative to the document origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Rendered size of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Whether `(x, y)` falls inside the box at `offset` with `size`.
///
/// Left/top edges are inclusive, right/bottom edges exclusive.
pub fn contains(offset: Offset, size: Size, x: f64, y: f64) -> bool {
    x >= offset.left && x < offset.left + size.width && y >= offset.top && y < offset.top + size.height
}

/// Round a document box to terminal cells and clip it to `area`.
///
/// Returns `None` when nothing of the box is left inside `area`.
pub fn to_cells(offset: Offset, size: Size, area: Rect) -> Option<Rect> {
    let x0 = offset.left.round() as i64;
    let y0 = offset.top.round() as i64;
    let x1 = x0.saturating_add(size.width.round().max(0.0) as i64);
    let y1 = y0.saturating_add(size.height.round().max(0.0) as i64);

    let left = x0.max(area.x as i64);
    let top = y0.max(area.y as i64);
    let right = x1.min(area.right() as i64);
    let bottom = y1.min(area.bottom() as i64);

    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
