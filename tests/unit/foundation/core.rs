use super::*;

#[test]
fn fullbleed_constants_are_consistent() {
    assert!((FULLBLEED_HEIGHT - 732.4444).abs() < 1e-3);
    assert!((PAGE_HEIGHT + 2.0 * DANGER_ZONE_HEIGHT - FULLBLEED_HEIGHT).abs() < 1e-9);
}

#[test]
fn percent_box_scales_each_axis_by_its_page_dimension() {
    let b = PercentBox::from_page_units(206.0, 309.0, 103.0, 61.8, 45.0);
    assert!((b.x - 50.0).abs() < 1e-9);
    assert!((b.y - 50.0).abs() < 1e-9);
    assert!((b.width - 25.0).abs() < 1e-9);
    assert!((b.height - 10.0).abs() < 1e-9);
    assert_eq!(b.rotation, 45.0);
}

#[test]
fn em_is_relative_to_page_height() {
    assert!((em_of_height(61.8) - 0.1).abs() < 1e-12);
}
