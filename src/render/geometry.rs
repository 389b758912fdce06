use crate::{
    foundation::core::{
        Affine, DANGER_ZONE_HEIGHT, FULLBLEED_HEIGHT, PAGE_WIDTH, PercentBox, Point, Rect,
    },
    story::element::{Element, Geometry},
};

/// Lowest page-unit y an element may reach and keep its link while a page
/// attachment is shown. Taps below it land on the attachment's swipe-up area.
pub const ATTACHMENT_LINK_LIMIT: f64 = FULLBLEED_HEIGHT * 0.8 - DANGER_ZONE_HEIGHT;

/// Full-bleed geometry used for background elements.
pub fn fullbleed_geometry() -> Geometry {
    Geometry {
        x: 0.0,
        y: -DANGER_ZONE_HEIGHT,
        width: PAGE_WIDTH,
        height: FULLBLEED_HEIGHT,
        rotation_angle: 0.0,
    }
}

/// Output box of an element in percent of the page.
///
/// Background elements always cover the full-bleed area.
pub fn element_box(el: &Element) -> PercentBox {
    let g = if el.is_background {
        fullbleed_geometry()
    } else {
        el.geometry
    };
    PercentBox::from_page_units(g.x, g.y, g.width, g.height, g.rotation_angle)
}

/// Axis-aligned bounds of the rotated element box, in page units.
pub fn rotated_bounds(g: &Geometry) -> Rect {
    let rect = Rect::new(g.x, g.y, g.x + g.width, g.y + g.height);
    if g.rotation_angle == 0.0 {
        return rect;
    }
    let center = Point::new(g.x + g.width / 2.0, g.y + g.height / 2.0);
    Affine::rotate_about(g.rotation_angle.to_radians(), center).transform_rect_bbox(rect)
}

/// Return `true` when any part of the element reaches below the attachment limit.
pub fn overlaps_attachment_region(g: &Geometry) -> bool {
    rotated_bounds(g).y1 > ATTACHMENT_LINK_LIMIT
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
