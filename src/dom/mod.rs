//! Element tree module
//!
//! A small retained tree of positioned elements with jQuery-style queries,
//! class manipulation, linear fades and hover listeners. The tooltip widget
//! drives it; the renderer draws it with ratatui.

mod document;
mod dom_render;
mod element;
mod fade;
mod geometry;
mod hover;
mod selector;

pub use document::{Document, IntoSelection, Selection};
pub use dom_render::{POINTER_CLASS, TOOLTIP_CLASS, faded, pointer_cell, render_document};
pub use element::{Element, ElementId};
pub use fade::Visibility;
pub use geometry::{Offset, Size, contains, to_cells};
pub use hover::{HoverBinding, HoverEvent, HoverKind};
pub use selector::Selector;
