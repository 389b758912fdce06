pub use kurbo::{Affine, Point, Rect};

/// Width of the canonical page coordinate space.
pub const PAGE_WIDTH: f64 = 412.0;
/// Height of the canonical page coordinate space (the safe area).
pub const PAGE_HEIGHT: f64 = 618.0;
/// Width/height ratio of the full-bleed area.
pub const FULLBLEED_RATIO: f64 = 9.0 / 16.0;
/// Height of the full-bleed area in page units.
pub const FULLBLEED_HEIGHT: f64 = PAGE_WIDTH / FULLBLEED_RATIO;
/// Height of each band of the full-bleed area that falls outside the safe area.
pub const DANGER_ZONE_HEIGHT: f64 = (FULLBLEED_HEIGHT - PAGE_HEIGHT) / 2.0;

/// Page aspect ratio as emitted on grid layers.
pub const PAGE_ASPECT_RATIO: &str = "412:618";

/// Element box expressed in percentages of the page safe area.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PercentBox {
    /// Left offset, percent of page width.
    pub x: f64,
    /// Top offset, percent of page height.
    pub y: f64,
    /// Width, percent of page width.
    pub width: f64,
    /// Height, percent of page height.
    pub height: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
}

impl PercentBox {
    /// Convert a box in page units into percentages of the page.
    pub fn from_page_units(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self {
            x: percent_of_width(x),
            y: percent_of_height(y),
            width: percent_of_width(width),
            height: percent_of_height(height),
            rotation,
        }
    }
}

/// Convert a horizontal page-unit length into percent of the page width.
pub fn percent_of_width(v: f64) -> f64 {
    v / PAGE_WIDTH * 100.0
}

/// Convert a vertical page-unit length into percent of the page height.
pub fn percent_of_height(v: f64) -> f64 {
    v / PAGE_HEIGHT * 100.0
}

/// Convert a page-unit length into `em` relative to the page height.
///
/// The fixed layout stylesheet sets the safe-area font size to the page height.
pub fn em_of_height(v: f64) -> f64 {
    v / PAGE_HEIGHT
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
