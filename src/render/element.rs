use crate::{
    compile::options::CompileOptions,
    foundation::{
        core::{PercentBox, em_of_height},
        error::StoryResult,
        math::fmt_num,
    },
    markup::node::{ElementNode, Node, el},
    render::{
        geometry::fullbleed_geometry,
        style::{Style, em, pct},
    },
    story::{
        element::{
            BackgroundTextMode, Element, ElementKind, GifPayload, ImagePayload, MediaFit,
            TextPayload, VideoPayload,
        },
        media::{CaptionTrack, Resource},
        model::Story,
    },
};

/// Read-only inputs shared by every element renderer of one compilation.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    /// Story being compiled (font map lookups).
    pub story: &'a Story,
    /// Compile options (feature flags).
    pub options: &'a CompileOptions,
}

/// Render the type-specific fragment of one element.
///
/// Returns `None` for elements with no output under the current options
/// (product tags while shopping is disabled).
pub fn render_fragment(element: &Element, ctx: &RenderContext<'_>) -> StoryResult<Option<Node>> {
    let node = match &element.kind {
        ElementKind::Text(p) => render_text(p, element, ctx),
        ElementKind::Image(p) => render_image(p, element),
        ElementKind::Video(p) => render_video(p, element),
        ElementKind::Gif(p) => render_gif(p, element),
        ElementKind::Shape(p) => el("div").attr("class", "shape-element").attr(
            "style",
            Style::new()
                .set("width", "100%")
                .set("height", "100%")
                .set_opt("background", p.background_color.as_ref().map(|b| b.to_css()))
                .to_css(),
        ),
        ElementKind::Product(p) => {
            if !ctx.options.flags.shopping {
                return Ok(None);
            }
            el("amp-story-shopping-tag").attr("data-product-id", &p.product.product_id)
        }
        ElementKind::Sticker(p) => el("amp-img")
            .attr("class", "sticker")
            .attr("layout", "fill")
            .attr("src", &p.sticker.src)
            .attr("alt", &p.sticker.kind),
    };
    Ok(Some(node.into()))
}

fn render_text(p: &TextPayload, element: &Element, ctx: &RenderContext<'_>) -> ElementNode {
    let font = ctx.story.resolve_font(&p.font);
    let width = element.geometry.width;
    let padding = (width > 0.0
        && (p.padding.horizontal != 0.0 || p.padding.vertical != 0.0))
        .then(|| {
            format!(
                "{} {}",
                pct(p.padding.vertical / width * 100.0),
                pct(p.padding.horizontal / width * 100.0)
            )
        });
    let fill = p.background_color.as_ref().map(|b| b.to_css());
    let style = Style::new()
        .set("font-size", em(em_of_height(p.font_size)))
        .set("line-height", fmt_num(p.line_height))
        .set("text-align", p.text_align.as_str())
        .set("font-family", font.css_stack())
        .set_opt("padding", padding)
        .set("margin", "0")
        .set_opt(
            "background",
            fill.clone()
                .filter(|_| p.background_text_mode == BackgroundTextMode::Fill),
        );
    let wrapper = el(p.tag_name.as_str())
        .attr("class", "text-wrapper")
        .attr("style", style.to_css());
    match fill {
        Some(fill) if p.background_text_mode == BackgroundTextMode::Highlight => wrapper.child(
            el("span")
                .attr("class", "text-highlight")
                .attr(
                    "style",
                    Style::new()
                        .set("background", fill)
                        .set("box-decoration-break", "clone")
                        .set("-webkit-box-decoration-break", "clone")
                        .to_css(),
                )
                .raw(&p.content),
        ),
        _ => wrapper.raw(&p.content),
    }
}

/// Box of the media inside its element for a cover fit, in percent of the element.
///
/// The media fills the element at `scale` percent, keeps its own aspect ratio
/// and is shifted so that the focal point stays in view.
pub fn cover_fit(element: &Element, resource: &Resource, fit: MediaFit) -> PercentBox {
    let g = if element.is_background {
        fullbleed_geometry()
    } else {
        element.geometry
    };
    let scale = fit.scale.max(100.0) / 100.0;
    let (mut width, mut height) = (100.0 * scale, 100.0 * scale);
    if let Some(media_ratio) = resource.aspect_ratio()
        && g.width > 0.0
        && g.height > 0.0
    {
        let box_ratio = g.width / g.height;
        if media_ratio > box_ratio {
            width = height * media_ratio / box_ratio;
        } else {
            height = width * box_ratio / media_ratio;
        }
    }
    let focal_x = fit.focal_x.clamp(0.0, 100.0) / 100.0;
    let focal_y = fit.focal_y.clamp(0.0, 100.0) / 100.0;
    PercentBox {
        x: -(width - 100.0) * focal_x,
        y: -(height - 100.0) * focal_y,
        width,
        height,
        rotation: 0.0,
    }
}

fn media_container(element: &Element, resource: &Resource, media: ElementNode) -> ElementNode {
    let fit = element.media_fit().unwrap_or(MediaFit {
        scale: 100.0,
        focal_x: 50.0,
        focal_y: 50.0,
    });
    let placed = cover_fit(element, resource, fit);
    el("div")
        .attr("class", "media-element")
        .attr_opt(
            "style",
            resource
                .base_color
                .as_deref()
                .map(|c| Style::new().set("background-color", c).to_css()),
        )
        .child(
            el("div")
                .attr("class", "media-fit")
                .attr("style", Style::new().placed(&placed).to_css())
                .child(media),
        )
}

fn render_image(p: &ImagePayload, element: &Element) -> ElementNode {
    let alt = p.alt.as_ref().or(p.resource.alt.as_ref());
    let img = el("amp-img")
        .attr("layout", "fill")
        .attr("src", &p.resource.src)
        .attr_opt("alt", alt);
    media_container(element, &p.resource, img)
}

fn render_video(p: &VideoPayload, element: &Element) -> ElementNode {
    let alt = p.alt.as_ref().or(p.resource.alt.as_ref());
    let video = el("amp-video")
        .attr("id", element.media_anchor())
        .flag("autoplay")
        .attr("layout", "fill")
        .attr_opt("poster", p.resource.poster.as_ref())
        .attr_opt("title", alt)
        .flag_if("loop", p.looping)
        .flag_if("noaudio", p.resource.is_muted)
        .attr_opt(
            "captions-id",
            (!p.tracks.is_empty()).then(|| element.captions_anchor()),
        )
        .child(source(&p.resource.mime_type, &p.resource.src))
        .children(p.tracks.iter().map(track));
    media_container(element, &p.resource, video)
}

fn render_gif(p: &GifPayload, element: &Element) -> ElementNode {
    let alt = p.alt.as_ref().or(p.resource.alt.as_ref());
    let media = match p.resource.output.as_ref().filter(|o| !o.src.trim().is_empty()) {
        Some(output) => el("amp-video")
            .attr("id", element.media_anchor())
            .flag("autoplay")
            .flag("loop")
            .flag("noaudio")
            .attr("layout", "fill")
            .attr_opt(
                "poster",
                output.poster.as_ref().or(p.resource.poster.as_ref()),
            )
            .attr_opt("title", alt)
            .child(source(&output.mime_type, &output.src)),
        None => el("amp-img")
            .attr("layout", "fill")
            .attr("src", &p.resource.src)
            .attr_opt("alt", alt),
    };
    media_container(element, &p.resource, media)
}

/// `<source>` child of a video embed.
pub fn source(mime_type: &str, src: &str) -> ElementNode {
    let node = el("source");
    let node = if mime_type.is_empty() {
        node
    } else {
        node.attr("type", mime_type)
    };
    node.attr("src", src)
}

/// `<track>` child of a video embed.
pub fn track(t: &CaptionTrack) -> ElementNode {
    el("track")
        .attr("kind", &t.kind)
        .attr("src", &t.track)
        .attr_opt("srclang", (!t.srclang.is_empty()).then_some(&t.srclang))
        .attr_opt("label", (!t.label.is_empty()).then_some(&t.label))
}

#[cfg(test)]
#[path = "../../tests/unit/render/element.rs"]
mod tests;
