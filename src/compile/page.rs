use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    compile::{
        advance::{Advancement, background_audio_anchor, page_advancement},
        attachment::{choose_attachment, is_attachment_tag, render_attachment},
        options::CompileOptions,
        text_tags::{assign_text_tags, text_elements_by_position},
    },
    foundation::{
        core::PAGE_ASPECT_RATIO,
        error::{StoryError, StoryResult},
    },
    markup::node::{ElementNode, el},
    render::{
        element::{RenderContext, render_fragment, source, track},
        geometry::overlaps_attachment_region,
        style::Style,
        wrapper::wrap_element,
    },
    story::{
        element::{Element, TagName},
        media::BackgroundAudio,
        model::{Animation, Page, Story},
    },
};

/// Caption layer height in pixels.
const CAPTIONS_HEIGHT: &str = "100";

/// How the page soundtrack is embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioEmbed {
    /// `background-audio` attribute on the page.
    Attribute,
    /// Tag-based embed in its own layer.
    Enhanced,
}

/// Decisions taken while compiling one page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageArtifacts {
    /// Page id.
    pub id: String,
    /// Page pacer; `None` when the page advances manually.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advancement: Option<Advancement>,
    /// Tag of each regular text element.
    pub text_tags: BTreeMap<String, TagName>,
    /// Emitted attachment kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<&'static str>,
    /// Elements whose link was dropped under the attachment.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stripped_links: Vec<String>,
    /// Soundtrack embed form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioEmbed>,
}

/// Compiled page markup plus its artifacts.
#[derive(Clone, Debug)]
pub struct CompiledPage {
    /// `amp-story-page` node.
    pub node: ElementNode,
    /// Decisions taken.
    pub artifacts: PageArtifacts,
}

/// DOM id of the captions node of a page's background audio.
pub fn background_audio_captions_anchor(page_id: &str) -> String {
    format!("{}-captions", background_audio_anchor(page_id))
}

/// Compile one page.
///
/// `animations` replaces the page's own list for timing, so the story compiler
/// can suppress the first page's entrance animations.
#[tracing::instrument(skip(story, page, animations, options), fields(page = %page.id))]
pub fn compile_page(
    story: &Story,
    page: &Page,
    animations: &[Animation],
    options: &CompileOptions,
) -> StoryResult<CompiledPage> {
    let advancement = page_advancement(story, page, animations);
    let text_tags = assign_text_tags(&text_elements_by_position(page.regular_elements()))?;
    let attachment = choose_attachment(page, options);
    let ctx = RenderContext { story, options };

    let audio = page.background_audio.as_ref();
    let audio_embed = audio.map(|a| {
        if a.needs_enhanced_embed() {
            AudioEmbed::Enhanced
        } else {
            AudioEmbed::Attribute
        }
    });

    let mut node = el("amp-story-page")
        .attr("id", &page.id)
        .attr_opt("auto-advance-after", advancement.as_ref().map(Advancement::to_attr));
    if let (Some(a), Some(AudioEmbed::Attribute)) = (audio, audio_embed) {
        node = node.attr("background-audio", &a.resource.src);
    }

    let background = page.background_element();
    if let Some(bg) = background {
        node = node.child(background_layer(page, bg, &ctx)?);
    }
    if let (Some(a), Some(AudioEmbed::Enhanced)) = (audio, audio_embed) {
        node = node.child(audio_layer(&page.id, a));
    }

    let strip_low_links = page.active_page_attachment().is_some();
    let mut stripped_links = Vec::new();
    let mut safe_area = el("div").attr("class", "page-safe-area");
    for element in page.regular_elements() {
        let mut element = match text_tags.get(&element.id) {
            Some(tag) => element.with_tag_name(*tag),
            None => element.clone(),
        };
        if strip_low_links
            && (element.active_link().is_some() || element.branching_page_id.is_some())
            && overlaps_attachment_region(&element.geometry)
        {
            element = element.without_link();
            stripped_links.push(element.id.clone());
        }
        if let Some(fragment) = render_fragment(&element, &ctx)? {
            safe_area = safe_area.child(wrap_element(&element, fragment));
        }
    }
    let fullbleed_style = Style::new()
        .set_opt(
            "background",
            background
                .is_none()
                .then(|| page.background_color.to_css()),
        )
        .to_css();
    node = node.child(
        grid_layer("vertical").child(
            el("div")
                .attr("class", "page-fullbleed-area")
                .attr_opt("style", (!fullbleed_style.is_empty()).then_some(fullbleed_style))
                .child(safe_area),
        ),
    );

    if let Some(captions) = captions_layer(page, audio) {
        node = node.child(captions);
    }

    if let Some(chosen) = &attachment {
        node = node.child(render_attachment(chosen)?);
    }
    verify_page_structure(&node)?;

    if !stripped_links.is_empty() {
        tracing::debug!(count = stripped_links.len(), "links dropped under attachment");
    }
    Ok(CompiledPage {
        node,
        artifacts: PageArtifacts {
            id: page.id.clone(),
            advancement,
            text_tags,
            attachment: attachment.as_ref().map(|a| a.kind()),
            stripped_links,
            audio: audio_embed,
        },
    })
}

fn grid_layer(template: &str) -> ElementNode {
    el("amp-story-grid-layer")
        .attr("template", template)
        .attr("aspect-ratio", PAGE_ASPECT_RATIO)
        .attr("class", "grid-layer")
}

fn background_layer(page: &Page, bg: &Element, ctx: &RenderContext<'_>) -> StoryResult<ElementNode> {
    let mut safe_area = el("div").attr("class", "page-safe-area");
    if let Some(fragment) = render_fragment(bg, ctx)? {
        safe_area = safe_area.child(wrap_element(bg, fragment));
    }
    let overlay = bg.overlay.as_ref().filter(|o| !o.is_transparent()).map(|o| {
        el("div").attr("class", "page-background-overlay-area").attr(
            "style",
            Style::new().set("background", o.to_css()).to_css(),
        )
    });
    Ok(grid_layer("vertical").child(
        el("div")
            .attr("class", "page-fullbleed-area")
            .attr(
                "style",
                Style::new()
                    .set("background", page.background_color.to_css())
                    .to_css(),
            )
            .child(safe_area.child_opt(overlay)),
    ))
}

fn audio_layer(page_id: &str, audio: &BackgroundAudio) -> ElementNode {
    el("amp-story-grid-layer").attr("template", "fill").child(
        el("amp-video")
            .attr("id", background_audio_anchor(page_id))
            .flag("autoplay")
            .attr("layout", "fixed")
            .attr("width", "1")
            .attr("height", "1")
            .flag_if("loop", audio.looping)
            .attr_opt(
                "captions-id",
                audio
                    .has_captions()
                    .then(|| background_audio_captions_anchor(page_id)),
            )
            .child(source(&audio.resource.mime_type, &audio.resource.src))
            .children(audio.tracks.iter().map(track)),
    )
}

fn captions_layer(page: &Page, audio: Option<&BackgroundAudio>) -> Option<ElementNode> {
    let mut ids: Vec<String> = page
        .regular_elements()
        .iter()
        .filter(|el| !el.caption_tracks().is_empty())
        .map(Element::captions_anchor)
        .collect();
    if audio.is_some_and(BackgroundAudio::has_captions) {
        ids.push(background_audio_captions_anchor(&page.id));
    }
    if ids.is_empty() {
        return None;
    }
    Some(
        el("amp-story-grid-layer")
            .attr("template", "vertical")
            .attr("class", "captions-layer")
            .children(ids.into_iter().map(|id| {
                el("amp-story-captions")
                    .attr("id", id)
                    .attr("layout", "fixed-height")
                    .attr("height", CAPTIONS_HEIGHT)
            })),
    )
}

/// Check the attachment rules of a compiled page: at most one attachment
/// block, and it must be the page's last child element.
pub fn verify_page_structure(page: &ElementNode) -> StoryResult<()> {
    let children: Vec<&ElementNode> = page.element_children().collect();
    let attachments = children
        .iter()
        .filter(|c| is_attachment_tag(&c.tag))
        .count();
    if attachments > 1 {
        return Err(StoryError::invariant(format!(
            "page '{}' has {attachments} attachment blocks",
            page.get_attr("id").unwrap_or_default()
        )));
    }
    if attachments == 1 && !children.last().is_some_and(|c| is_attachment_tag(&c.tag)) {
        return Err(StoryError::invariant(format!(
            "attachment of page '{}' is not its last child",
            page.get_attr("id").unwrap_or_default()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compile/page.rs"]
mod tests;
