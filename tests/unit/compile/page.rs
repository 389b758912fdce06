use super::*;
use crate::story::{
    dsl::{
        PageBuilder, StoryBuilder, caption_track, image_element, product, product_element, rect,
        shape_element, text_element, video_element,
    },
    font::Font,
    media::Resource,
    pattern::{Color, Pattern},
};

fn compile(page: Page) -> CompiledPage {
    let story = StoryBuilder::new("s").page(page).build().unwrap();
    let page = &story.pages[0];
    compile_page(&story, page, &page.animations, &CompileOptions::default()).unwrap()
}

fn child_tags(node: &ElementNode) -> Vec<String> {
    node.element_children().map(|c| c.tag.clone()).collect()
}

#[test]
fn empty_page_has_one_layer_and_default_timer() {
    let compiled = compile(PageBuilder::new("p").build().unwrap());
    assert_eq!(compiled.node.get_attr("id"), Some("p"));
    assert_eq!(compiled.node.get_attr("auto-advance-after"), Some("7s"));
    assert_eq!(child_tags(&compiled.node), vec!["amp-story-grid-layer"]);
    assert!(compiled.node.to_markup().contains("background:#ffffff"));
}

#[test]
fn background_layer_comes_first_with_overlay() {
    let page = PageBuilder::new("p")
        .background_color(Pattern::solid(Color::rgb(0, 0, 0)))
        .background(
            image_element("bg", rect(0.0, 0.0, 412.0, 618.0), Resource::new("bg.jpg", "image/jpeg"))
                .with_overlay(Pattern::solid(Color {
                    a: 0.5,
                    ..Color::rgb(0, 0, 0)
                })),
        )
        .element(shape_element("s", rect(0.0, 0.0, 10.0, 10.0), None))
        .build()
        .unwrap();
    let compiled = compile(page);
    let layers: Vec<_> = compiled.node.element_children().collect();
    assert_eq!(layers.len(), 2);
    let bg_html = layers[0].to_markup();
    assert!(bg_html.contains("el-bg"));
    assert!(bg_html.contains("page-background-overlay-area"));
    assert!(bg_html.contains("background:#000000"));
    let regular = layers[1].to_markup();
    assert!(regular.contains("el-s"));
    assert!(!regular.contains("el-bg"));
    assert!(!regular.contains("background:#000000"));
}

#[test]
fn text_tags_follow_vertical_order() {
    let page = PageBuilder::new("p")
        .element(text_element("low", rect(0.0, 400.0, 300.0, 50.0), "Lower headline", Font::system("Arial"), 40.0))
        .element(text_element("top", rect(0.0, 20.0, 300.0, 50.0), "Top headline", Font::system("Arial"), 40.0))
        .build()
        .unwrap();
    let compiled = compile(page);
    assert_eq!(compiled.artifacts.text_tags["top"], TagName::H1);
    assert_eq!(compiled.artifacts.text_tags["low"], TagName::H2);
    let html = compiled.node.to_markup();
    assert!(html.contains("<h1 class=\"text-wrapper\""));
    assert!(html.contains("<h2 class=\"text-wrapper\""));
    let low = html.find("id=\"el-low\"").unwrap();
    let top = html.find("id=\"el-top\"").unwrap();
    assert!(low < top);
}

#[test]
fn shopping_attachment_is_last_and_suppresses_outlink() {
    let page = PageBuilder::new("p")
        .element(product_element("pr", rect(10.0, 10.0, 20.0, 20.0), product("sku", "Hat")))
        .element(shape_element("s", rect(0.0, 560.0, 50.0, 50.0), None).with_link("https://x.test"))
        .page_attachment("https://out.test", None)
        .build()
        .unwrap();
    let compiled = compile(page);
    let tags = child_tags(&compiled.node);
    assert_eq!(tags.last().map(String::as_str), Some("amp-story-shopping-attachment"));
    assert!(!tags.contains(&"amp-story-page-outlink".to_string()));
    assert_eq!(compiled.artifacts.attachment, Some("shopping"));
    assert_eq!(compiled.artifacts.stripped_links, vec!["s".to_string()]);
    assert!(!compiled.node.to_markup().contains("https://x.test"));
}

#[test]
fn shopping_without_page_attachment_keeps_low_links() {
    let page = PageBuilder::new("p")
        .element(product_element("pr", rect(10.0, 10.0, 20.0, 20.0), product("sku", "Hat")))
        .element(shape_element("s", rect(0.0, 560.0, 50.0, 50.0), None).with_link("https://x.test"))
        .build()
        .unwrap();
    let compiled = compile(page);
    assert_eq!(compiled.artifacts.attachment, Some("shopping"));
    assert!(compiled.artifacts.stripped_links.is_empty());
    assert!(compiled.node.to_markup().contains("https://x.test"));
}

#[test]
fn outlink_strips_links_below_limit() {
    let page = PageBuilder::new("p")
        .element(shape_element("low", rect(0.0, 560.0, 50.0, 50.0), None).with_link("https://low.test"))
        .element(shape_element("jump", rect(100.0, 500.0, 50.0, 50.0), None).with_branch("p"))
        .page_attachment("https://out.test", None)
        .build()
        .unwrap();
    let compiled = compile(page);
    assert_eq!(compiled.artifacts.attachment, Some("outlink"));
    assert_eq!(
        compiled.artifacts.stripped_links,
        vec!["low".to_string(), "jump".to_string()]
    );
    let html = compiled.node.to_markup();
    assert!(!html.contains("https://low.test"));
    assert!(!html.contains("#page=p"));
}

#[test]
fn links_above_limit_survive_attachment() {
    let page = PageBuilder::new("p")
        .element(shape_element("s", rect(0.0, 100.0, 50.0, 50.0), None).with_link("https://x.test"))
        .page_attachment("https://out.test", Some("Go"))
        .build()
        .unwrap();
    let compiled = compile(page);
    assert!(compiled.artifacts.stripped_links.is_empty());
    let html = compiled.node.to_markup();
    assert!(html.contains("https://x.test"));
    assert!(html.ends_with(">Go</a></amp-story-page-outlink></amp-story-page>"));
}

#[test]
fn links_are_kept_without_attachment() {
    let page = PageBuilder::new("p")
        .element(shape_element("s", rect(0.0, 560.0, 50.0, 50.0), None).with_link("https://x.test"))
        .build()
        .unwrap();
    let compiled = compile(page);
    assert!(compiled.artifacts.stripped_links.is_empty());
    assert_eq!(compiled.artifacts.attachment, None);
}

#[test]
fn captioned_video_and_audio_get_caption_layer() {
    let audio = BackgroundAudio {
        looping: false,
        tracks: vec![caption_track("a", "a.vtt", "en", "EN")],
        ..BackgroundAudio::new(Resource::new("a.mp3", "audio/mpeg").with_length(4.0))
    };
    let page = PageBuilder::new("p")
        .element(
            video_element("v", rect(0.0, 0.0, 10.0, 10.0), Resource::new("v.mp4", "video/mp4"), true)
                .with_tracks(vec![caption_track("c", "v.vtt", "en", "EN")]),
        )
        .background_audio(audio)
        .build()
        .unwrap();
    let compiled = compile(page);
    assert_eq!(compiled.artifacts.audio, Some(AudioEmbed::Enhanced));
    assert_eq!(compiled.node.get_attr("background-audio"), None);
    let captions = compiled.node.find_all("amp-story-captions");
    let ids: Vec<_> = captions.iter().filter_map(|c| c.get_attr("id")).collect();
    assert_eq!(ids, vec!["el-v-captions", "page-p-background-audio-captions"]);
    let html = compiled.node.to_markup();
    assert!(html.contains(
        r#"<amp-video id="page-p-background-audio" autoplay layout="fixed" width="1" height="1" captions-id="page-p-background-audio-captions">"#
    ));
}

#[test]
fn looping_audio_uses_page_attribute() {
    let page = PageBuilder::new("p")
        .background_audio(BackgroundAudio::new(Resource::new("a.mp3", "audio/mpeg")))
        .build()
        .unwrap();
    let compiled = compile(page);
    assert_eq!(compiled.node.get_attr("background-audio"), Some("a.mp3"));
    assert_eq!(compiled.artifacts.audio, Some(AudioEmbed::Attribute));
    assert!(compiled.node.find_all("amp-video").is_empty());
}

#[test]
fn suppressed_animations_do_not_extend_timer() {
    let page = PageBuilder::new("p")
        .element(shape_element("s", rect(0.0, 0.0, 10.0, 10.0), None))
        .animation("a", &["s"], 9000.0, 0.0)
        .build()
        .unwrap();
    let story = StoryBuilder::new("s").page(page).build().unwrap();
    let page = &story.pages[0];
    let options = CompileOptions::default();
    let with = compile_page(&story, page, &page.animations, &options).unwrap();
    let without = compile_page(&story, page, &[], &options).unwrap();
    assert_eq!(with.node.get_attr("auto-advance-after"), Some("9s"));
    assert_eq!(without.node.get_attr("auto-advance-after"), Some("7s"));
}

#[test]
fn structure_check_rejects_misplaced_attachment() {
    let bad = el("amp-story-page")
        .attr("id", "p")
        .child(el("amp-story-page-outlink"))
        .child(el("amp-story-grid-layer"));
    assert!(matches!(
        verify_page_structure(&bad),
        Err(StoryError::Invariant(_))
    ));
    let two = el("amp-story-page")
        .child(el("amp-story-page-outlink"))
        .child(el("amp-story-shopping-attachment"));
    assert!(verify_page_structure(&two).is_err());
    let ok = el("amp-story-page")
        .child(el("amp-story-grid-layer"))
        .child(el("amp-story-page-outlink"));
    assert!(verify_page_structure(&ok).is_ok());
}
