//! Compound element selectors
//!
//! Supports an optional tag (or `*`) followed by any number of `#id` and
//! `.class` parts, e.g. `div#tooltip` or `.tooltip-pointer.top`.
//! Combinators and selector lists are not supported.

use std::str::FromStr;

use crate::error::HovertipError;

use super::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        let tag_matches = self
            .tag
            .as_ref()
            .is_none_or(|tag| tag.eq_ignore_ascii_case(element.tag()));
        let id_matches = self
            .id
            .as_ref()
            .is_none_or(|id| element.id() == Some(id.as_str()));

        tag_matches
            && id_matches
            && self.classes.iter().all(|class| element.has_class(class))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Read an identifier starting at byte `start`, returning it and the end index
fn take_ident(input: &str, start: usize) -> Option<(&str, usize)> {
    let rest = &input[start..];
    let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
    if len == 0 {
        return None;
    }
    Some((&rest[..len], start + len))
}

impl FromStr for Selector {
    type Err = HovertipError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || HovertipError::InvalidSelector(input.to_string());
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut selector = Selector::default();
        let mut pos = 0;

        if trimmed.starts_with('*') {
            pos = 1;
        } else if trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let (tag, end) = take_ident(trimmed, 0).ok_or_else(invalid)?;
            selector.tag = Some(tag.to_string());
            pos = end;
        }

        while pos < trimmed.len() {
            let marker = trimmed[pos..].chars().next().ok_or_else(invalid)?;
            let (name, end) = take_ident(trimmed, pos + marker.len_utf8()).ok_or_else(invalid)?;
            match marker {
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                '.' => selector.classes.push(name.to_string()),
                _ => return Err(invalid()),
            }
            pos = end;
        }

        Ok(selector)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
