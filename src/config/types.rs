// Configuration type definitions

use serde::Deserialize;

use crate::tooltip::{Placement, PlacementMetrics};

pub const DEFAULT_SHOW_DELAY_MS: u64 = 400;
pub const DEFAULT_FADE_MS: u64 = 250;

/// Options a tooltip is constructed from.
///
/// `el` selects the overlay, `target` selects the anchor. Keys the struct
/// does not name are ignored when read from a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    pub el: Option<String>,
    pub target: Option<String>,
    pub placement: Placement,
    pub show_delay_ms: u64,
    pub fade_ms: u64,
    pub metrics: Option<PlacementMetrics>,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        TooltipOptions {
            el: None,
            target: None,
            placement: Placement::Top,
            show_delay_ms: DEFAULT_SHOW_DELAY_MS,
            fade_ms: DEFAULT_FADE_MS,
            metrics: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipOptions,
}
