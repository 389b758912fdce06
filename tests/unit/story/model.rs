use super::*;

fn story(json: &str) -> Story {
    Story::from_json_str(json).unwrap()
}

const TWO_PAGES: &str = r#"{
    "title": "Trip",
    "pages": [
        {
            "id": "p1",
            "elements": [
                { "id": "bg", "type": "image", "isBackground": true,
                  "x": 0, "y": 0, "width": 412, "height": 618,
                  "resource": { "src": "bg.jpg", "mimeType": "image/jpeg" } },
                { "id": "t1", "type": "text", "x": 10, "y": 10, "width": 300, "height": 40,
                  "content": "Hello", "fontSize": 20,
                  "font": { "family": "Roboto", "service": "fonts.google.com" },
                  "branchingPageId": "p2" }
            ]
        },
        { "id": "p2" }
    ]
}"#;

#[test]
fn defaults_follow_editor() {
    let s = story(TWO_PAGES);
    assert!(s.auto_advance);
    assert_eq!(s.default_page_duration, 7.0);
    assert_eq!(s.pages.len(), 2);
    s.validate().unwrap();
}

#[test]
fn background_element_is_split_from_regular_elements() {
    let s = story(TWO_PAGES);
    let page = &s.pages[0];
    assert_eq!(page.background_element().map(|e| e.id.as_str()), Some("bg"));
    let regular: Vec<_> = page.regular_elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(regular, vec!["t1"]);
    assert!(s.pages[1].background_element().is_none());
    assert!(s.pages[1].regular_elements().is_empty());
}

#[test]
fn branch_to_missing_page_fails() {
    let s = story(&TWO_PAGES.replace("\"branchingPageId\": \"p2\"", "\"branchingPageId\": \"p9\""));
    let err = s.validate().unwrap_err();
    assert!(matches!(err, StoryError::Validation(ref m) if m.contains("p9")));
}

#[test]
fn duplicate_page_ids_fail() {
    let s = story(&TWO_PAGES.replace("{ \"id\": \"p2\" }", "{ \"id\": \"p1\" }").replace(
        "\"branchingPageId\": \"p2\"",
        "\"branchingPageId\": \"p1\"",
    ));
    assert!(s.validate().is_err());
}

#[test]
fn background_flag_must_be_first() {
    let s = story(
        r#"{ "pages": [{ "id": "p", "elements": [
            { "id": "a", "type": "shape", "x": 0, "y": 0, "width": 1, "height": 1 },
            { "id": "b", "type": "shape", "isBackground": true, "x": 0, "y": 0, "width": 1, "height": 1 }
        ]}]}"#,
    );
    assert!(s.validate().is_err());
}

#[test]
fn negative_animation_duration_fails() {
    let s = story(
        r#"{ "pages": [{ "id": "p", "animations": [
            { "id": "a", "targets": ["x"], "type": "fade-in", "duration": -5 }
        ]}]}"#,
    );
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("animation 'a'"));
}

#[test]
fn story_audio_with_captions_is_rejected() {
    let s = story(
        r#"{ "backgroundAudio": {
            "resource": { "src": "a.mp3", "mimeType": "audio/mpeg" },
            "tracks": [{ "track": "a.vtt" }]
        }}"#,
    );
    assert!(s.validate().is_err());
}

#[test]
fn custom_font_requires_url() {
    let s = story(
        r#"{ "fonts": { "Brand": { "family": "Brand", "service": "custom" } } }"#,
    );
    assert!(s.validate().is_err());
}

#[test]
fn story_font_map_overrides_element_font() {
    let s = story(
        r#"{ "fonts": { "Roboto": { "family": "Roboto", "service": "fonts.google.com",
             "variants": [[0, 400], [0, 700]] } } }"#,
    );
    let carried = Font::google("Roboto", vec![]);
    assert_eq!(s.resolve_font(&carried).variants.len(), 2);
    let other = Font::system("Arial");
    assert_eq!(s.resolve_font(&other).family, "Arial");
}

#[test]
fn link_and_branch_are_exclusive() {
    let s = story(
        r#"{ "pages": [{ "id": "p", "elements": [
            { "id": "a", "type": "shape", "x": 0, "y": 0, "width": 1, "height": 1,
              "link": { "url": "https://example.com" }, "branchingPageId": "p" }
        ]}]}"#,
    );
    assert!(s.validate().is_err());
}

#[test]
fn empty_attachment_url_is_inactive() {
    let s = story(r#"{ "pages": [{ "id": "p", "pageAttachment": { "url": " " } }] }"#);
    assert!(s.pages[0].active_page_attachment().is_none());
}

#[test]
fn from_path_reads_and_names_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("story.json");
    std::fs::write(&path, r#"{ "title": "Disk", "pages": [{ "id": "p" }] }"#).unwrap();
    let s = Story::from_path(&path).unwrap();
    assert_eq!(s.title, "Disk");

    let err = Story::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, StoryError::Other(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn zero_default_duration_fails() {
    let s = story(r#"{ "defaultPageDuration": 0 }"#);
    assert!(s.validate().is_err());
}

#[test]
fn font_text_that_breaks_css_is_rejected() {
    let evil_family = r#"{"title":"t","pages":[{"id":"p","elements":[
        {"id":"t","type":"text","x":0,"y":0,"width":10,"height":10,"content":"Hi","fontSize":20,
         "font":{"family":"Evil</style><script>alert(1)</script>","service":"custom","url":"https://f.test/a.woff2"}}]}]}"#;
    assert!(matches!(
        story(evil_family).validate(),
        Err(StoryError::Validation(_))
    ));

    let evil_url = r#"{"title":"t","fonts":{"Brand":{"family":"Brand","service":"custom",
        "url":"https://f.test/a.woff2\");}body{color:red"}},"pages":[]}"#;
    let err = story(evil_url).validate().unwrap_err();
    assert!(err.to_string().contains("url"));
}
