use std::time::Instant;

use super::tooltip_state::Tooltip;
use crate::dom::{Document, HoverEvent};

/// Feed a batch of hover transitions to `tooltip`, in order.
///
/// Returns true if any of them belonged to it.
pub fn handle_hover_events(
    tooltip: &mut Tooltip,
    doc: &mut Document,
    events: &[HoverEvent],
    now: Instant,
) -> bool {
    let mut handled = false;
    for event in events {
        handled |= tooltip.handle_hover(doc, event, now);
    }
    handled
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
