//! Hover listeners
//!
//! A listener watches every element of a selection and reports one event
//! per element each time the pointer crosses its border.

use super::element::ElementId;

/// Handle to a registered hover listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoverBinding(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverKind {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEvent {
    pub binding: HoverBinding,
    pub element: ElementId,
    pub kind: HoverKind,
}

#[derive(Debug)]
struct Listener {
    binding: HoverBinding,
    elements: Vec<ElementId>,
    inside: Vec<bool>,
}

#[derive(Debug, Default)]
pub(crate) struct HoverRegistry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl HoverRegistry {
    pub fn bind(&mut self, elements: Vec<ElementId>, inside: Vec<bool>) -> HoverBinding {
        self.next_id += 1;
        let binding = HoverBinding(self.next_id);
        self.listeners.push(Listener {
            binding,
            elements,
            inside,
        });
        binding
    }

    pub fn unbind(&mut self, binding: HoverBinding) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.binding != binding);
        self.listeners.len() != before
    }

    pub fn is_bound(&self, binding: HoverBinding) -> bool {
        self.listeners.iter().any(|l| l.binding == binding)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Re-evaluate every listener with `is_inside` and collect transitions
    pub fn update(&mut self, is_inside: impl Fn(ElementId) -> bool) -> Vec<HoverEvent> {
        let mut events = Vec::new();
        for listener in &mut self.listeners {
            for (element, was_inside) in listener.elements.iter().zip(listener.inside.iter_mut()) {
                let now_inside = is_inside(*element);
                if now_inside == *was_inside {
                    continue;
                }
                *was_inside = now_inside;
                events.push(HoverEvent {
                    binding: listener.binding,
                    element: *element,
                    kind: if now_inside {
                        HoverKind::Enter
                    } else {
                        HoverKind::Leave
                    },
                });
            }
        }
        events
    }
}
