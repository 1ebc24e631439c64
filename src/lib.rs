//! Delayed, positioned hover tooltips for terminal UIs.
//!
//! A [`tooltip::Tooltip`] is bound to a target element of a
//! [`dom::Document`]. Hovering the target schedules a reveal after the show
//! delay; the reveal positions the overlay on the configured side and fades
//! it in. Leaving the target cancels the pending reveal and fades it out.

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod tooltip;
pub mod widgets;

mod test_utils;

pub use error::HovertipError;
