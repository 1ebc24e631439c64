//! Retained element tree
//!
//! `Document` owns every element and exposes the jQuery-like operations the
//! tooltip needs. Operations take anything that converts into a
//! [`Selection`]; an empty selection turns every operation into a no-op.

use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthStr;

use super::element::{Element, ElementId};
use super::fade::Visibility;
use super::geometry::{self, Offset, Size};
use super::hover::{HoverBinding, HoverEvent, HoverRegistry};
use super::selector::Selector;

/// Ordered set of element handles returned by a query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection(Vec<ElementId>);

impl Selection {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<ElementId> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.0.iter().copied()
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.0
    }
}

impl From<ElementId> for Selection {
    fn from(id: ElementId) -> Self {
        Self(vec![id])
    }
}

impl FromIterator<ElementId> for Selection {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Anything a document operation can be pointed at: a selector string,
/// an element handle, or an existing selection
pub trait IntoSelection {
    fn into_selection(self, doc: &Document) -> Selection;
}

impl IntoSelection for &str {
    fn into_selection(self, doc: &Document) -> Selection {
        doc.select(self)
    }
}

impl IntoSelection for &String {
    fn into_selection(self, doc: &Document) -> Selection {
        doc.select(self)
    }
}

impl IntoSelection for ElementId {
    fn into_selection(self, doc: &Document) -> Selection {
        if doc.get(self).is_some() {
            Selection::from(self)
        } else {
            Selection::empty()
        }
    }
}

impl IntoSelection for Selection {
    fn into_selection(self, _doc: &Document) -> Selection {
        self
    }
}

impl IntoSelection for &Selection {
    fn into_selection(self, _doc: &Document) -> Selection {
        self.clone()
    }
}

#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
    roots: Vec<ElementId>,
    hover: HoverRegistry,
    pointer: Option<(f64, f64)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a detached top-level element
    pub fn create(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag));
        self.roots.push(id);
        id
    }

    /// Move `child` to the end of `parent`'s children
    pub fn append(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        if self.is_ancestor(child, parent) {
            log::debug!("refusing to append {:?} into its own descendant {:?}", child, parent);
            return;
        }

        match self.elements[child.0].parent.take() {
            Some(old) => self.elements[old.0].children.retain(|c| *c != child),
            None => self.roots.retain(|r| *r != child),
        }
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    fn is_ancestor(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        while let Some(parent) = self.elements[id.0].parent {
            if parent == ancestor {
                return true;
            }
            id = parent;
        }
        false
    }

    pub fn set_id(&mut self, id: ElementId, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.set_id(value);
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.get_mut(id) {
            el.set_text(text);
        }
    }

    /// Size an element to its text plus a one-cell border and `padding`
    /// columns on each side
    pub fn fit_to_text(&mut self, id: ElementId, padding: u16) {
        if let Some(el) = self.get_mut(id) {
            let width = el.text().lines().map(|l| l.width()).max().unwrap_or(0);
            let lines = el.text().lines().count().max(1);
            el.size = Size::new(
                (width + 2 + 2 * padding as usize) as f64,
                (lines + 2) as f64,
            );
        }
    }

    /// Every element in depth-first tree order
    pub fn tree_order(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack: Vec<ElementId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.elements[id.0].children.iter().rev().copied());
        }
        order
    }

    /// Query the whole document. Invalid selectors match nothing.
    pub fn select(&self, selector: &str) -> Selection {
        match selector.parse::<Selector>() {
            Ok(sel) => self.matching(self.tree_order(), &sel),
            Err(e) => {
                log::debug!("{}", e);
                Selection::empty()
            }
        }
    }

    /// Query the descendants of every element in `within`
    pub fn find(&self, within: impl IntoSelection, selector: &str) -> Selection {
        let within = within.into_selection(self);
        let sel = match selector.parse::<Selector>() {
            Ok(sel) => sel,
            Err(e) => {
                log::debug!("{}", e);
                return Selection::empty();
            }
        };
        let descendants = self
            .tree_order()
            .into_iter()
            .filter(|id| within.iter().any(|root| *id != root && self.is_ancestor(root, *id)))
            .collect::<Vec<_>>();
        self.matching(descendants, &sel)
    }

    fn matching(&self, candidates: Vec<ElementId>, sel: &Selector) -> Selection {
        candidates
            .into_iter()
            .filter(|id| sel.matches(&self.elements[id.0]))
            .collect()
    }

    fn each(&mut self, target: impl IntoSelection, mut f: impl FnMut(&mut Element)) {
        let sel = target.into_selection(self);
        for id in sel.iter() {
            if let Some(el) = self.get_mut(id) {
                f(el);
            }
        }
    }

    pub fn add_class(&mut self, target: impl IntoSelection, class: &str) {
        self.each(target, |el| el.add_class(class));
    }

    pub fn remove_class(&mut self, target: impl IntoSelection, class: &str) {
        self.each(target, |el| el.remove_class(class));
    }

    pub fn toggle_class(&mut self, target: impl IntoSelection, class: &str) {
        self.each(target, |el| el.toggle_class(class));
    }

    /// True when any selected element carries `class`
    pub fn has_class(&self, target: impl IntoSelection, class: &str) -> bool {
        target
            .into_selection(self)
            .iter()
            .any(|id| self.get(id).is_some_and(|el| el.has_class(class)))
    }

    /// Document offset of the first selected element
    pub fn offset(&self, target: impl IntoSelection) -> Option<Offset> {
        let id = target.into_selection(self).first()?;
        self.get(id).map(Element::offset)
    }

    /// Size of the first selected element
    pub fn size(&self, target: impl IntoSelection) -> Option<Size> {
        let id = target.into_selection(self).first()?;
        self.get(id).map(Element::size)
    }

    pub fn set_offset(&mut self, target: impl IntoSelection, offset: Offset) {
        self.each(target, |el| el.offset = offset);
    }

    pub fn set_size(&mut self, target: impl IntoSelection, size: Size) {
        self.each(target, |el| el.size = size);
    }

    /// Hide immediately, cancelling any running fade
    pub fn hide(&mut self, target: impl IntoSelection) {
        self.each(target, |el| el.visibility = Visibility::Hidden);
    }

    pub fn fade_in(&mut self, target: impl IntoSelection, duration: Duration, now: Instant) {
        self.each(target, |el| el.visibility = el.visibility.fade_to(true, duration, now));
    }

    pub fn fade_out(&mut self, target: impl IntoSelection, duration: Duration, now: Instant) {
        self.each(target, |el| {
            el.visibility = el.visibility.fade_to(false, duration, now)
        });
    }

    /// Own opacity of one element. Hidden ancestors hide their subtree.
    pub fn opacity(&self, id: ElementId, now: Instant) -> f32 {
        let Some(el) = self.get(id) else {
            return 0.0;
        };
        let own = el.visibility.opacity(now);
        match el.parent {
            Some(parent) => own * self.opacity(parent, now),
            None => own,
        }
    }

    /// True when any selected element is at least partly visible
    pub fn is_visible(&self, target: impl IntoSelection, now: Instant) -> bool {
        target
            .into_selection(self)
            .iter()
            .any(|id| self.opacity(id, now) > 0.0)
    }

    /// True while any fade is still running
    pub fn is_animating(&self, now: Instant) -> bool {
        self.elements.iter().any(|el| el.visibility.is_animating(now))
    }

    /// Collapse finished fades into their resting state
    pub fn settle(&mut self, now: Instant) {
        for el in &mut self.elements {
            el.visibility = el.visibility.settle(now);
        }
    }

    fn pointer_inside(&self, id: ElementId) -> bool {
        match (self.pointer, self.get(id)) {
            (Some((x, y)), Some(el)) => geometry::contains(el.offset, el.size, x, y),
            _ => false,
        }
    }

    /// Register an enter/leave listener on every selected element
    pub fn bind_hover(&mut self, target: impl IntoSelection) -> HoverBinding {
        let sel = target.into_selection(self);
        let inside = sel.iter().map(|id| self.pointer_inside(id)).collect();
        let binding = self.hover.bind(sel.ids().to_vec(), inside);
        log::debug!("bound hover listener {:?} to {} element(s)", binding, sel.len());
        binding
    }

    /// Release a listener. Returns false if it was not registered.
    pub fn unbind_hover(&mut self, binding: HoverBinding) -> bool {
        self.hover.unbind(binding)
    }

    pub fn is_hover_bound(&self, binding: HoverBinding) -> bool {
        self.hover.is_bound(binding)
    }

    pub fn hover_listener_count(&self) -> usize {
        self.hover.len()
    }

    /// Move the pointer and report the enter/leave transitions it caused
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Vec<HoverEvent> {
        self.pointer = Some((x, y));
        self.dispatch_hover()
    }

    /// Re-test the last pointer position after elements moved
    pub fn recheck_hover(&mut self) -> Vec<HoverEvent> {
        self.dispatch_hover()
    }

    /// The pointer left the document entirely
    pub fn pointer_left(&mut self) -> Vec<HoverEvent> {
        self.pointer = None;
        self.dispatch_hover()
    }

    fn dispatch_hover(&mut self) -> Vec<HoverEvent> {
        let mut registry = std::mem::take(&mut self.hover);
        let events = registry.update(|id| self.pointer_inside(id));
        self.hover = registry;
        for event in &events {
            log::debug!("hover {:?} on {:?}", event.kind, event.element);
        }
        events
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
