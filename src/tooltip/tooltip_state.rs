use std::rc::Rc;
use std::time::{Duration, Instant};

use super::behavior::{DefaultBehavior, TooltipBehavior};
use super::placement::{Placement, PlacementMetrics, compute_offset};
use super::timer::ShowTimer;
use crate::config::TooltipOptions;
use crate::dom::{
    Document, HoverBinding, HoverEvent, IntoSelection, POINTER_CLASS, Selection, TOOLTIP_CLASS,
};

/// Marker class present while the tooltip is revealed
pub const OPENED_CLASS: &str = "opened";

/// A hover tooltip anchored to a target element.
///
/// The widget holds handles into a [`Document`] it does not own, so every
/// operation that touches elements takes the document explicitly. Time is
/// passed in as `now`; the delayed show only happens when [`Tooltip::tick`]
/// is called at or after the deadline.
pub struct Tooltip {
    overlay: Selection,
    target: Selection,
    binding: Option<HoverBinding>,
    hover: bool,
    placement: Placement,
    show_delay: Duration,
    fade: Duration,
    metrics: PlacementMetrics,
    timer: ShowTimer,
    behavior: Rc<dyn TooltipBehavior>,
}

impl Tooltip {
    /// Create a tooltip, binding `el` and `target` from `options` when present
    pub fn new(doc: &mut Document, options: &TooltipOptions) -> Self {
        let mut tooltip = Self {
            overlay: Selection::empty(),
            target: Selection::empty(),
            binding: None,
            hover: false,
            placement: options.placement,
            show_delay: Duration::from_millis(options.show_delay_ms),
            fade: Duration::from_millis(options.fade_ms),
            metrics: options.metrics.unwrap_or_default(),
            timer: ShowTimer::new(),
            behavior: Rc::new(DefaultBehavior),
        };

        if let Some(el) = &options.el {
            tooltip.set_overlay(doc, el);
        }
        if let Some(target) = &options.target {
            tooltip.bind_target(doc, target);
        }
        tooltip
    }

    /// Replace the render strategy
    pub fn with_behavior(mut self, behavior: impl TooltipBehavior + 'static) -> Self {
        self.behavior = Rc::new(behavior);
        self
    }

    /// Select the overlay element. It is marked as a tooltip and hidden.
    pub fn set_overlay(&mut self, doc: &mut Document, el: impl IntoSelection) -> &mut Self {
        self.overlay = el.into_selection(doc);
        doc.add_class(&self.overlay, TOOLTIP_CLASS);
        doc.hide(&self.overlay);
        self
    }

    /// Anchor to `target` and listen for the pointer entering or leaving it.
    ///
    /// A previous listener is released first.
    pub fn bind_target(&mut self, doc: &mut Document, target: impl IntoSelection) -> &mut Self {
        if let Some(old) = self.binding.take() {
            doc.unbind_hover(old);
        }
        self.target = target.into_selection(doc);
        self.binding = Some(doc.bind_hover(&self.target));
        self
    }

    pub fn set_placement(&mut self, placement: Placement) -> &mut Self {
        self.placement = placement;
        self
    }

    pub fn set_show_delay(&mut self, delay: Duration) -> &mut Self {
        self.show_delay = delay;
        self
    }

    pub fn set_fade(&mut self, fade: Duration) -> &mut Self {
        self.fade = fade;
        self
    }

    pub fn set_metrics(&mut self, metrics: PlacementMetrics) -> &mut Self {
        self.metrics = metrics;
        self
    }

    pub fn overlay(&self) -> &Selection {
        &self.overlay
    }

    pub fn target(&self) -> &Selection {
        &self.target
    }

    pub fn binding(&self) -> Option<HoverBinding> {
        self.binding
    }

    pub fn is_hover(&self) -> bool {
        self.hover
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn show_delay(&self) -> Duration {
        self.show_delay
    }

    pub fn fade(&self) -> Duration {
        self.fade
    }

    pub fn metrics(&self) -> PlacementMetrics {
        self.metrics
    }

    /// When the pending delayed show is due, if one is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(&self.overlay, OPENED_CLASS)
    }

    pub fn is_visible(&self, doc: &Document, now: Instant) -> bool {
        doc.is_visible(&self.overlay, now)
    }

    /// Listener body: flip the hover flag and render.
    ///
    /// Events from other listeners are ignored. Returns whether the event
    /// belonged to this tooltip.
    pub fn handle_hover(&mut self, doc: &mut Document, event: &HoverEvent, now: Instant) -> bool {
        if self.binding != Some(event.binding) {
            return false;
        }
        self.hover = !self.hover;
        self.render(doc, now);
        true
    }

    /// Set the hover flag directly and render, for callers that track the
    /// pointer themselves
    pub fn set_hover(&mut self, doc: &mut Document, hovering: bool, now: Instant) -> &mut Self {
        self.hover = hovering;
        self.render(doc, now);
        self
    }

    /// Dispatch the current hover state through the render strategy
    pub fn render(&mut self, doc: &mut Document, now: Instant) {
        let behavior = Rc::clone(&self.behavior);
        behavior.render(self, doc, now);
    }

    /// Schedule a reveal after the show delay, replacing any pending one
    pub fn show(&mut self, doc: &mut Document, now: Instant) -> &mut Self {
        self.ensure_pointer(doc);
        self.timer.schedule(now + self.show_delay);
        log::debug!("tooltip show scheduled in {:?}", self.show_delay);
        self
    }

    /// Anchor to `target` on `placement` for this show and mark it hovered.
    ///
    /// Any listener from `bind_target` is released; the caller reports
    /// leaving with `set_hover`.
    pub fn show_at(
        &mut self,
        doc: &mut Document,
        target: impl IntoSelection,
        placement: Placement,
        now: Instant,
    ) -> &mut Self {
        if let Some(old) = self.binding.take() {
            doc.unbind_hover(old);
        }
        self.target = target.into_selection(doc);
        self.placement = placement;
        self.set_hover(doc, true, now)
    }

    /// Cancel any pending reveal and fade the overlay out
    pub fn hide(&mut self, doc: &mut Document, now: Instant) -> &mut Self {
        self.timer.cancel();
        doc.fade_out(&self.overlay, self.fade, now);
        doc.remove_class(&self.overlay, OPENED_CLASS);
        self
    }

    /// Fire the delayed show if it is due. Returns whether it fired.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) -> bool {
        if !self.timer.take_due(now) {
            return false;
        }
        self.reveal(doc, now);
        true
    }

    /// Release the hover listener and drop any pending reveal
    pub fn dispose(&mut self, doc: &mut Document) {
        if let Some(binding) = self.binding.take() {
            doc.unbind_hover(binding);
        }
        self.timer.cancel();
        self.hover = false;
    }

    fn ensure_pointer(&self, doc: &mut Document) {
        let selector = format!(".{}", POINTER_CLASS);
        for overlay in self.overlay.iter() {
            if doc.find(overlay, &selector).is_empty() {
                let pointer = doc.create("div");
                doc.add_class(pointer, POINTER_CLASS);
                doc.append(overlay, pointer);
            }
        }
    }

    fn reveal(&mut self, doc: &mut Document, now: Instant) {
        if !self.hover {
            log::debug!("pointer left before the show delay, skipping reveal");
            return;
        }

        let (Some(target), Some(target_size), Some(overlay_size)) = (
            doc.offset(&self.target),
            doc.size(&self.target),
            doc.size(&self.overlay),
        ) else {
            log::debug!("tooltip has no target or overlay element, skipping reveal");
            return;
        };

        let offset = compute_offset(
            self.placement,
            target,
            target_size,
            overlay_size,
            &self.metrics,
        );

        let pointers = doc.find(&self.overlay, &format!(".{}", POINTER_CLASS));
        for side in Placement::ALL {
            if side != self.placement {
                doc.remove_class(&pointers, side.class_name());
            }
        }
        doc.add_class(&pointers, self.placement.class_name());

        doc.set_offset(&self.overlay, offset);
        doc.fade_in(&self.overlay, self.fade, now);
        doc.toggle_class(&self.overlay, OPENED_CLASS);
        log::debug!("tooltip revealed at {:?} ({})", offset, self.placement);
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
