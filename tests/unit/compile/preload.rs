use super::*;
use crate::story::{
    dsl::{PageBuilder, StoryBuilder, gif_element, image_element, rect, video_element},
    media::{MediaOutput, Resource},
};

#[test]
fn no_pages_no_preloads() {
    let story = StoryBuilder::new("s").build().unwrap();
    assert!(preload_resources(&story).is_empty());
}

#[test]
fn first_page_background_image() {
    let p1 = PageBuilder::new("p1")
        .background(image_element(
            "bg",
            rect(0.0, 0.0, 412.0, 618.0),
            Resource::new("bg.jpg", "image/jpeg"),
        ))
        .element(image_element("x", rect(0.0, 0.0, 1.0, 1.0), Resource::new("x.jpg", "image/jpeg")))
        .build()
        .unwrap();
    let p2 = PageBuilder::new("p2")
        .background(video_element(
            "bg2",
            rect(0.0, 0.0, 1.0, 1.0),
            Resource::new("bg2.mp4", "video/mp4"),
            true,
        ))
        .build()
        .unwrap();
    let story = StoryBuilder::new("s").page(p1).page(p2).build().unwrap();
    assert_eq!(
        preload_resources(&story),
        vec![Preload {
            url: "bg.jpg".to_string(),
            kind: PreloadKind::Image
        }]
    );
}

#[test]
fn gif_background_prefers_output_video() {
    let mut res = Resource::new("bg.gif", "image/gif");
    res.output = Some(MediaOutput {
        mime_type: "video/mp4".to_string(),
        src: "bg.mp4".to_string(),
        poster: None,
    });
    let page = PageBuilder::new("p")
        .background(gif_element("bg", rect(0.0, 0.0, 1.0, 1.0), res))
        .build()
        .unwrap();
    let story = StoryBuilder::new("s").page(page).build().unwrap();
    let preloads = preload_resources(&story);
    assert_eq!(preloads[0].url, "bg.mp4");
    assert_eq!(preloads[0].kind.as_str(), "video");
}

#[test]
fn first_page_without_background_has_none() {
    let page = PageBuilder::new("p")
        .element(image_element("x", rect(0.0, 0.0, 1.0, 1.0), Resource::new("x.jpg", "image/jpeg")))
        .build()
        .unwrap();
    let story = StoryBuilder::new("s").page(page).build().unwrap();
    assert!(preload_resources(&story).is_empty());
}
