//! Tooltip placement
//!
//! Offsets follow the classic top-anchored layout: the default case puts the
//! bubble centered above the target, left/right replace it outright, and
//! bottom shifts the already computed top offset downward.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::dom::{Offset, Size};

/// Side of the target the tooltip is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(from = "String")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub const ALL: [Placement; 4] = [
        Placement::Top,
        Placement::Bottom,
        Placement::Left,
        Placement::Right,
    ];

    /// Parse a side name. Anything unrecognized behaves as `Top`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bottom" => Placement::Bottom,
            "left" => Placement::Left,
            "right" => Placement::Right,
            "top" => Placement::Top,
            other => {
                log::debug!("unknown placement {:?}, using top", other);
                Placement::Top
            }
        }
    }

    /// Marker class put on the pointer decoration
    pub fn class_name(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

impl From<String> for Placement {
    fn from(name: String) -> Self {
        Placement::from_name(&name)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Gaps used by [`compute_offset`]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementMetrics {
    /// Space between the bubble and the target for top placement
    pub vertical_gap: f64,
    /// Space between the bubble and the target for left/right placement
    pub horizontal_gap: f64,
    /// Added on top of the target and bubble heights for bottom placement
    pub bottom_extra: f64,
}

impl PlacementMetrics {
    /// Gaps for cell-based layouts: leaves one free cell for the pointer
    pub const TERMINAL: PlacementMetrics = PlacementMetrics {
        vertical_gap: 1.0,
        horizontal_gap: 1.0,
        bottom_extra: 2.0,
    };
}

impl Default for PlacementMetrics {
    fn default() -> Self {
        Self {
            vertical_gap: 30.0,
            horizontal_gap: 10.0,
            bottom_extra: 50.0,
        }
    }
}

/// Overlay offset for `placement` around a target at `target` sized `target_size`
pub fn compute_offset(
    placement: Placement,
    target: Offset,
    target_size: Size,
    overlay_size: Size,
    metrics: &PlacementMetrics,
) -> Offset {
    let mut offset = Offset {
        top: target.top - overlay_size.height - metrics.vertical_gap,
        left: target.left + (target_size.width - overlay_size.width) / 2.0,
    };

    match placement {
        Placement::Top => {}
        Placement::Left => {
            offset = Offset {
                top: target.top,
                left: target.left - overlay_size.width - metrics.horizontal_gap,
            };
        }
        Placement::Right => {
            offset = Offset {
                top: target.top,
                left: target.left + target_size.width + metrics.horizontal_gap,
            };
        }
        Placement::Bottom => {
            // shifts the top-placement offset rather than mirroring it
            offset.top += target_size.height + overlay_size.height + metrics.bottom_extra;
        }
    }

    offset
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
