use serde::Serialize;

use crate::{
    compile::{
        extensions::{ScriptDescriptor, required_scripts},
        fonts::{FontDeclarations, resolve_fonts},
        options::CompileOptions,
        page::{PageArtifacts, compile_page},
        preload::{Preload, preload_resources},
    },
    foundation::{
        core::{FULLBLEED_HEIGHT, PAGE_HEIGHT},
        error::StoryResult,
        math::fmt_num,
    },
    markup::node::{ElementNode, el},
    story::model::Story,
};

const BOILERPLATE: &str = "body{-webkit-animation:-amp-start 8s steps(1,end) 0s 1 normal both;-moz-animation:-amp-start 8s steps(1,end) 0s 1 normal both;-ms-animation:-amp-start 8s steps(1,end) 0s 1 normal both;animation:-amp-start 8s steps(1,end) 0s 1 normal both}@-webkit-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-moz-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-ms-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-o-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}";

const BOILERPLATE_NOSCRIPT: &str = "body{-webkit-animation:none;-moz-animation:none;-ms-animation:none;animation:none}";

/// Everything the compiler decided, without the markup.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoryArtifacts {
    /// Runtime scripts in head order.
    pub scripts: Vec<ScriptDescriptor>,
    /// Font declarations.
    pub fonts: FontDeclarations,
    /// Preload hints.
    pub preloads: Vec<Preload>,
    /// Per-page decisions in page order.
    pub pages: Vec<PageArtifacts>,
}

/// Output of [`compile_story`].
#[derive(Clone, Debug)]
pub struct CompiledStory {
    /// Complete document markup.
    pub html: String,
    /// Decisions taken.
    pub artifacts: StoryArtifacts,
}

/// Compile a story into its markup document.
///
/// The story is validated first. The first page compiles without its
/// entrance animations.
#[tracing::instrument(skip(story, options), fields(pages = story.pages.len()))]
pub fn compile_story(story: &Story, options: &CompileOptions) -> StoryResult<CompiledStory> {
    story.validate()?;

    let scripts = required_scripts(story, options);
    let fonts = resolve_fonts(story, options)?;
    let preloads = preload_resources(story);

    let mut pages = Vec::with_capacity(story.pages.len());
    let mut page_nodes = Vec::with_capacity(story.pages.len());
    for (index, page) in story.pages.iter().enumerate() {
        let animations = if index == 0 { &[][..] } else { &page.animations[..] };
        let compiled = compile_page(story, page, animations, options)?;
        page_nodes.push(compiled.node);
        pages.push(compiled.artifacts);
    }

    let artifacts = StoryArtifacts {
        scripts,
        fonts,
        preloads,
        pages,
    };
    let document = el("html")
        .flag("amp")
        .attr("lang", &options.lang)
        .child(head(story, options, &artifacts)?)
        .child(el("body").child(story_root(story, options).children(page_nodes)));
    let html = format!("<!doctype html>{}", document.to_markup());
    tracing::debug!(bytes = html.len(), "story compiled");
    Ok(CompiledStory { html, artifacts })
}

/// Artifacts of a story without keeping its markup.
pub fn inspect_story(story: &Story, options: &CompileOptions) -> StoryResult<StoryArtifacts> {
    Ok(compile_story(story, options)?.artifacts)
}

fn head(
    story: &Story,
    options: &CompileOptions,
    artifacts: &StoryArtifacts,
) -> StoryResult<ElementNode> {
    let meta = &options.metadata;
    let mut head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width,minimum-scale=1,initial-scale=1"),
        )
        .child_opt(meta.generator_name.as_ref().map(|name| {
            el("meta")
                .attr("name", "amp-story-generator-name")
                .attr("content", name)
        }))
        .child_opt(meta.generator_version.as_ref().map(|version| {
            el("meta")
                .attr("name", "amp-story-generator-version")
                .attr("content", version)
        }));

    for script in &artifacts.scripts {
        head = head.child(
            el("script")
                .flag("async")
                .attr_opt("custom-element", script.name.as_ref())
                .attr("src", &script.src),
        );
    }
    for href in &artifacts.fonts.stylesheets {
        head = head.child(el("link").attr("href", href).attr("rel", "stylesheet"));
    }
    for preload in &artifacts.preloads {
        head = head.child(
            el("link")
                .attr("rel", "preload")
                .attr("href", &preload.url)
                .attr("as", preload.kind.as_str()),
        );
    }

    let mut custom_css = artifacts.fonts.font_faces.join("");
    custom_css.push_str(&layout_css());
    Ok(head
        .child(el("style").flag("amp-custom").raw_text(custom_css)?)
        .child(el("style").flag("amp-boilerplate").raw(BOILERPLATE))
        .child(el("noscript").child(el("style").flag("amp-boilerplate").raw(BOILERPLATE_NOSCRIPT)))
        .child(el("title").text(&story.title))
        .child_opt(
            story
                .link
                .as_ref()
                .filter(|l| !l.trim().is_empty())
                .map(|l| el("link").attr("rel", "canonical").attr("href", l)),
        ))
}

fn story_root(story: &Story, options: &CompileOptions) -> ElementNode {
    el("amp-story")
        .flag("standalone")
        .attr("publisher", &options.metadata.publisher)
        .attr_opt("publisher-logo-src", story.publisher_logo.as_ref().map(|l| &l.url))
        .attr("title", &story.title)
        .attr_opt("poster-portrait-src", story.featured_media.as_ref().map(|m| &m.url))
        .attr_opt(
            "background-audio",
            story.background_audio.as_ref().map(|a| &a.resource.src),
        )
}

/// Fixed stylesheet positioning the page areas.
///
/// The full-bleed area extends the safe area above and below; elements size
/// fonts and borders in `em` of the safe-area height.
fn layout_css() -> String {
    let fullbleed = fmt_num(FULLBLEED_HEIGHT / PAGE_HEIGHT);
    let safe = fmt_num(PAGE_HEIGHT / FULLBLEED_HEIGHT);
    format!(
        ".page-fullbleed-area{{position:absolute;overflow:hidden;width:100%;left:0;height:calc({fullbleed} * 100%);top:calc((1 - {fullbleed}) * 100% / 2)}}\
.page-safe-area{{overflow:visible;position:absolute;top:0;bottom:0;left:0;right:0;width:100%;height:calc({safe} * 100%);margin:auto 0;container-type:size}}\
.page-element{{font-size:100cqh}}\
.mask,.media-element,.media-fit,.shape-element{{position:absolute;width:100%;height:100%;left:0;top:0}}\
.media-element{{overflow:hidden}}\
.mask-defs{{position:absolute;width:0;height:0;overflow:hidden}}\
.text-wrapper{{white-space:pre-line;overflow-wrap:break-word}}\
.page-background-overlay-area{{position:absolute;top:0;left:0;width:100%;height:100%}}\
amp-story-grid-layer.grid-layer{{overflow:visible}}\
amp-story-grid-layer.captions-layer{{align-content:end}}"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compile/story.rs"]
mod tests;
