//! Default series colors
//!
//! Datasets may omit `color`; renderers pick from this rotation instead.

use super::types::Dataset;

/// Color rotation for datasets without an explicit color
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", "#14b8a6", "#6366f1", "#a855f7", "#ec4899", "#f97316", "#eab308", "#22c55e",
];

/// Palette entry for a position, wrapping around
pub fn palette_color(index: usize) -> &'static str {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

/// The dataset's own color, or the palette entry for its position
pub fn color_for(dataset: &Dataset, index: usize) -> &str {
    dataset.color.as_deref().unwrap_or_else(|| palette_color(index))
}
