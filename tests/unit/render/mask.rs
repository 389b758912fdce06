use super::*;

#[test]
fn rectangle_has_no_clip() {
    assert!(MaskType::Rectangle.clip_path().is_none());
    assert!(clip_path_defs(MaskType::Rectangle, "e1").is_none());
}

#[test]
fn registered_shapes_emit_named_clip_paths() {
    for kind in [
        MaskType::Circle,
        MaskType::Triangle,
        MaskType::Diamond,
        MaskType::Pentagon,
        MaskType::Heart,
    ] {
        let svg = clip_path_defs(kind, "e1").unwrap();
        let clip = svg.find_all("clipPath");
        assert_eq!(clip.len(), 1);
        assert_eq!(
            clip[0].get_attr("id"),
            Some(format!("mask-{}-e1-output", kind.as_str()).as_str())
        );
        assert_eq!(clip[0].get_attr("clipPathUnits"), Some("objectBoundingBox"));
    }
}

#[test]
fn mask_type_parses_from_editor_names() {
    let m: crate::story::element::Mask = serde_json::from_str(r#"{"type":"heart"}"#).unwrap();
    assert_eq!(m.kind, MaskType::Heart);
}

#[test]
fn clip_defs_do_not_share_the_mask_layer_class() {
    let svg = clip_path_defs(MaskType::Circle, "e1").unwrap();
    assert_eq!(svg.get_attr("class"), Some("mask-defs"));
    assert_eq!(svg.get_attr("width"), Some("0"));
    assert!(clip_path_defs(MaskType::Rectangle, "e1").is_none());
}
