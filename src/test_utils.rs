#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use crate::config::TooltipOptions;
    use crate::dom::{Document, Offset, Size};
    use crate::tooltip::{Tooltip, handle_hover_events};

    /// Target `div#content` at (100, 100) sized 50x20, overlay
    /// `div#tooltip` sized 80x30
    pub fn test_document() -> Document {
        let mut doc = Document::new();
        let content = doc.create("div");
        doc.set_id(content, "content");
        doc.set_offset(content, Offset::new(100.0, 100.0));
        doc.set_size(content, Size::new(50.0, 20.0));

        let tooltip = doc.create("div");
        doc.set_id(tooltip, "tooltip");
        doc.set_text(tooltip, "Hello World");
        doc.set_size(tooltip, Size::new(80.0, 30.0));
        doc
    }

    pub fn test_options() -> TooltipOptions {
        TooltipOptions {
            el: Some("div#tooltip".to_string()),
            target: Some("div#content".to_string()),
            ..TooltipOptions::default()
        }
    }

    pub fn test_tooltip() -> (Document, Tooltip) {
        let mut doc = test_document();
        let tooltip = Tooltip::new(&mut doc, &test_options());
        (doc, tooltip)
    }

    pub fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Move the pointer onto the target and deliver the resulting events
    pub fn enter(doc: &mut Document, tooltip: &mut Tooltip, now: Instant) {
        let events = doc.pointer_moved(110.0, 105.0);
        handle_hover_events(tooltip, doc, &events, now);
    }

    /// Move the pointer off the target and deliver the resulting events
    pub fn leave(doc: &mut Document, tooltip: &mut Tooltip, now: Instant) {
        let events = doc.pointer_moved(0.0, 0.0);
        handle_hover_events(tooltip, doc, &events, now);
    }
}
