use super::*;
use crate::{
    compile::advance::Advancement,
    foundation::error::StoryError,
    story::{
        dsl::{PageBuilder, StoryBuilder, image_element, rect, shape_element, text_element},
        element::ElementKind,
        font::Font,
        media::{BackgroundAudio, Resource},
    },
};

fn options() -> CompileOptions {
    let mut o = CompileOptions::default();
    o.metadata.publisher = "Daily <News>".to_string();
    o.metadata.generator_name = Some("storyout".to_string());
    o
}

#[test]
fn document_head_is_ordered() {
    let story = StoryBuilder::new("My story")
        .link("https://x.test/story")
        .build()
        .unwrap();
    let html = compile_story(&story, &options()).unwrap().html;
    assert!(html.starts_with(
        "<!doctype html><html amp lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\""
    ));
    let order = [
        "amp-story-generator-name",
        "<script async src=\"https://cdn.ampproject.org/v0.js\">",
        "custom-element=\"amp-story\"",
        "<style amp-custom>",
        "<style amp-boilerplate>",
        "<noscript>",
        "<title>My story</title>",
        "<link rel=\"canonical\" href=\"https://x.test/story\">",
        "<body><amp-story standalone publisher=\"Daily &lt;News&gt;\"",
    ];
    let mut last = 0;
    for needle in order {
        let at = html.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
        assert!(at >= last, "{needle} out of order");
        last = at;
    }
}

#[test]
fn first_page_ignores_animations() {
    let page = |id: &str| {
        PageBuilder::new(id)
            .element(shape_element("s", rect(0.0, 0.0, 10.0, 10.0), None))
            .animation("a", &["s"], 10_000.0, 0.0)
            .build()
            .unwrap()
    };
    let story = StoryBuilder::new("s")
        .page(page("p1"))
        .page(page("p2"))
        .build()
        .unwrap();
    let artifacts = inspect_story(&story, &options()).unwrap();
    assert_eq!(artifacts.pages[0].advancement, Some(Advancement::Seconds(7.0)));
    assert_eq!(artifacts.pages[1].advancement, Some(Advancement::Seconds(10.0)));
}

#[test]
fn story_audio_and_posters_go_on_root() {
    let story = StoryBuilder::new("s")
        .background_audio(BackgroundAudio::new(Resource::new("theme.mp3", "audio/mpeg")))
        .featured_media("poster.jpg", 640.0, 853.0)
        .publisher_logo("logo.png")
        .build()
        .unwrap();
    let html = compile_story(&story, &options()).unwrap().html;
    assert!(html.contains(
        "publisher-logo-src=\"logo.png\" title=\"s\" poster-portrait-src=\"poster.jpg\" background-audio=\"theme.mp3\""
    ));
}

#[test]
fn preloads_reach_head() {
    let page = PageBuilder::new("p")
        .background(image_element("bg", rect(0.0, 0.0, 1.0, 1.0), Resource::new("bg.jpg", "image/jpeg")))
        .build()
        .unwrap();
    let story = StoryBuilder::new("s").page(page).build().unwrap();
    let compiled = compile_story(&story, &options()).unwrap();
    assert!(compiled.html.contains("<link rel=\"preload\" href=\"bg.jpg\" as=\"image\">"));
    assert_eq!(compiled.artifacts.preloads.len(), 1);
}

#[test]
fn invalid_story_fails_before_output() {
    let story: Story = serde_json::from_str(
        r#"{ "pages": [{ "id": "p" }, { "id": "p" }] }"#,
    )
    .unwrap();
    assert!(matches!(
        compile_story(&story, &options()),
        Err(StoryError::Validation(_))
    ));
}

#[test]
fn compilation_is_deterministic() {
    let page = PageBuilder::new("p")
        .element(shape_element("s", rect(0.0, 0.0, 10.0, 10.0), None))
        .build()
        .unwrap();
    let story = StoryBuilder::new("s").page(page).build().unwrap();
    let a = compile_story(&story, &options()).unwrap();
    let b = compile_story(&story, &options()).unwrap();
    assert_eq!(a.html, b.html);
    assert_eq!(a.artifacts, b.artifacts);
}

#[test]
fn custom_font_cannot_inject_markup() {
    let page = PageBuilder::new("p")
        .element(text_element(
            "t",
            rect(0.0, 0.0, 100.0, 40.0),
            "Hello",
            Font::system("Arial"),
            20.0,
        ))
        .build()
        .unwrap();
    let mut story = StoryBuilder::new("s").page(page).build().unwrap();
    if let ElementKind::Text(p) = &mut story.pages[0].elements[0].kind {
        p.font = Font::custom(
            "Evil</style><script>alert(1)</script>",
            "https://f.test/a.woff2",
        );
    }
    assert!(matches!(
        compile_story(&story, &options()),
        Err(StoryError::Validation(_))
    ));
}
