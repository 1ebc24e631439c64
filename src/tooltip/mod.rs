//! Tooltip module
//!
//! A hover tooltip over a [`Document`](crate::dom::Document): hovering the
//! target schedules a delayed, positioned fade-in of the overlay; leaving it
//! cancels the pending show and fades the overlay out.

mod behavior;
mod placement;
mod timer;
mod tooltip_events;
mod tooltip_state;

pub use behavior::{DefaultBehavior, TooltipBehavior};
pub use placement::{Placement, PlacementMetrics, compute_offset};
pub use timer::ShowTimer;
pub use tooltip_events::handle_hover_events;
pub use tooltip_state::{OPENED_CLASS, Tooltip};
