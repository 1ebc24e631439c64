//! Render strategy
//!
//! `render` is the seam for customizing what a hover change does. The
//! default dispatches to the widget's own show/hide; a variant overrides any
//! of the three methods and is installed with [`Tooltip::with_behavior`].

use std::time::Instant;

use super::tooltip_state::Tooltip;
use crate::dom::Document;

pub trait TooltipBehavior {
    /// Called after every hover transition
    fn render(&self, tooltip: &mut Tooltip, doc: &mut Document, now: Instant) {
        if tooltip.is_hover() {
            self.show(tooltip, doc, now);
        } else {
            self.hide(tooltip, doc, now);
        }
    }

    fn show(&self, tooltip: &mut Tooltip, doc: &mut Document, now: Instant) {
        tooltip.show(doc, now);
    }

    fn hide(&self, tooltip: &mut Tooltip, doc: &mut Document, now: Instant) {
        tooltip.hide(doc, now);
    }
}

/// Show on hover, hide otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBehavior;

impl TooltipBehavior for DefaultBehavior {}

#[cfg(test)]
#[path = "behavior_tests.rs"]
mod behavior_tests;
