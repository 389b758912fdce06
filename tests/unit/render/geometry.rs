use super::*;
use crate::story::dsl::{rect, shape_element};

#[test]
fn link_limit_matches_policy_constant() {
    // 732.44 * 0.8 - 57.22
    assert!((ATTACHMENT_LINK_LIMIT - 528.7333).abs() < 1e-3);
}

#[test]
fn background_uses_fullbleed_box() {
    let el = shape_element("bg", rect(10.0, 10.0, 20.0, 20.0), None).as_background();
    let b = element_box(&el);
    assert_eq!(b.x, 0.0);
    assert!((b.width - 100.0).abs() < 1e-9);
    assert!(b.y < 0.0);
    assert!(b.height > 100.0);
}

#[test]
fn unrotated_bounds_are_the_box() {
    let r = rotated_bounds(&rect(10.0, 20.0, 30.0, 40.0));
    assert_eq!(r, Rect::new(10.0, 20.0, 40.0, 60.0));
}

#[test]
fn rotation_grows_bounds_around_center() {
    let mut g = rect(0.0, 0.0, 100.0, 10.0);
    g.rotation_angle = 90.0;
    let r = rotated_bounds(&g);
    assert!((r.y0 - -45.0).abs() < 1e-9);
    assert!((r.y1 - 55.0).abs() < 1e-9);
}

#[test]
fn rotated_element_can_enter_attachment_region() {
    let mut g = rect(100.0, 480.0, 200.0, 20.0);
    assert!(!overlaps_attachment_region(&g));
    g.rotation_angle = 90.0;
    assert!(overlaps_attachment_region(&g));
}
