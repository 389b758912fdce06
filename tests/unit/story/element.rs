use super::*;

fn parse(json: &str) -> Element {
    serde_json::from_str(json).unwrap()
}

#[test]
fn text_element_flattens_geometry_and_payload() {
    let el = parse(
        r#"{
            "id": "t1", "type": "text",
            "x": 10, "y": 20, "width": 200, "height": 40, "rotationAngle": 5,
            "content": "Hello", "fontSize": 36,
            "font": { "family": "Roboto", "service": "fonts.google.com", "variants": [[0, 400]] }
        }"#,
    );
    assert_eq!(el.type_name(), "text");
    assert_eq!(el.geometry.rotation_angle, 5.0);
    assert_eq!(el.opacity, 100.0);
    let text = el.as_text().unwrap();
    assert_eq!(text.font_size, 36.0);
    assert_eq!(text.tag_name, TagName::Auto);
    assert_eq!(text.line_height, 1.3);
}

#[test]
fn video_element_reads_loop_and_tracks() {
    let el = parse(
        r#"{
            "id": "v1", "type": "video", "x": 0, "y": 0, "width": 100, "height": 100,
            "loop": false,
            "resource": { "src": "v.mp4", "mimeType": "video/mp4", "length": 12 },
            "tracks": [{ "track": "v.vtt", "srclang": "en", "label": "English" }]
        }"#,
    );
    assert_eq!(el.pacing_duration_secs(), Some(12.0));
    assert_eq!(el.caption_tracks().len(), 1);
    assert_eq!(el.caption_tracks()[0].kind, "captions");
    assert_eq!(el.media_anchor(), "el-v1-media");
}

#[test]
fn looping_video_never_paces() {
    let el = parse(
        r#"{
            "id": "v1", "type": "video", "x": 0, "y": 0, "width": 100, "height": 100,
            "loop": true,
            "resource": { "src": "v.mp4", "mimeType": "video/mp4", "length": 30 }
        }"#,
    );
    assert_eq!(el.pacing_duration_secs(), None);
}

#[test]
fn unknown_element_type_fails() {
    let err = serde_json::from_str::<Element>(
        r#"{ "id": "x", "type": "hologram", "x": 0, "y": 0, "width": 1, "height": 1 }"#,
    );
    assert!(err.is_err());
}

#[test]
fn missing_geometry_fails() {
    let err = serde_json::from_str::<Element>(
        r#"{ "id": "x", "type": "shape", "y": 0, "width": 1, "height": 1 }"#,
    );
    assert!(err.is_err());
}

#[test]
fn unknown_mask_type_fails() {
    let err = serde_json::from_str::<Element>(
        r#"{ "id": "x", "type": "shape", "x": 0, "y": 0, "width": 1, "height": 1, "mask": { "type": "blob" } }"#,
    );
    assert!(err.is_err());
}

#[test]
fn with_tag_name_clones_without_touching_source() {
    let el = parse(
        r#"{ "id": "t", "type": "text", "x": 0, "y": 0, "width": 1, "height": 1,
             "content": "Hi", "fontSize": 12, "font": { "family": "Arial" } }"#,
    );
    let tagged = el.with_tag_name(TagName::H2);
    assert_eq!(tagged.as_text().unwrap().tag_name, TagName::H2);
    assert_eq!(el.as_text().unwrap().tag_name, TagName::Auto);
}

#[test]
fn without_link_drops_link_and_branch() {
    let el = parse(
        r#"{ "id": "s", "type": "shape", "x": 0, "y": 0, "width": 1, "height": 1,
             "link": { "url": "https://example.com" } }"#,
    );
    assert!(el.active_link().is_some());
    let stripped = el.without_link();
    assert!(stripped.link.is_none());
    assert!(stripped.branching_page_id.is_none());
    assert!(el.link.is_some());
}

#[test]
fn empty_link_url_is_inactive() {
    let el = parse(
        r#"{ "id": "s", "type": "shape", "x": 0, "y": 0, "width": 1, "height": 1,
             "link": { "url": "  " } }"#,
    );
    assert!(el.active_link().is_none());
}

#[test]
fn media_fit_defaults_focal_point_to_center() {
    let el = parse(
        r#"{ "id": "i", "type": "image", "x": 0, "y": 0, "width": 1, "height": 1,
             "resource": { "src": "a.jpg", "mimeType": "image/jpeg" } }"#,
    );
    let fit = el.media_fit().unwrap();
    assert_eq!(fit.scale, 100.0);
    assert_eq!((fit.focal_x, fit.focal_y), (50.0, 50.0));
}

#[test]
fn tag_name_auto_renders_as_paragraph() {
    assert_eq!(TagName::Auto.as_str(), "p");
    assert_eq!(TagName::H1.as_str(), "h1");
}
