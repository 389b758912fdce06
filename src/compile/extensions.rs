use serde::Serialize;

use crate::{
    compile::options::CompileOptions,
    story::{element::ElementKind, model::Story},
};

/// Runtime script the document must load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScriptDescriptor {
    /// Custom element name; `None` for the base runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Script URL.
    pub src: String,
}

const CDN: &str = "https://cdn.ampproject.org";

/// Base runtime script.
pub fn base_runtime() -> ScriptDescriptor {
    ScriptDescriptor {
        name: None,
        src: format!("{CDN}/v0.js"),
    }
}

/// Extension script for `name` at `version`.
pub fn extension(name: &str, version: &str) -> ScriptDescriptor {
    ScriptDescriptor {
        name: Some(name.to_string()),
        src: format!("{CDN}/v0/{name}-{version}.js"),
    }
}

/// Insertion-ordered set of script descriptors.
#[derive(Debug, Default)]
struct ScriptSet {
    scripts: Vec<ScriptDescriptor>,
}

impl ScriptSet {
    fn insert(&mut self, script: ScriptDescriptor) {
        if !self.scripts.contains(&script) {
            self.scripts.push(script);
        }
    }
}

/// Every script the compiled story needs, base entries first, deduplicated in
/// first-encounter order.
///
/// Video and gif elements need `amp-video`; captioned videos and captioned
/// page audio need `amp-story-captions`; product elements need
/// `amp-story-shopping` while shopping is enabled. Page audio in its tag-based
/// form is embedded through `amp-video` as well.
pub fn required_scripts(story: &Story, options: &CompileOptions) -> Vec<ScriptDescriptor> {
    let mut set = ScriptSet::default();
    set.insert(base_runtime());
    set.insert(extension("amp-story", "1.0"));

    for page in &story.pages {
        for el in &page.elements {
            match &el.kind {
                ElementKind::Video(p) => {
                    set.insert(extension("amp-video", "0.1"));
                    if !p.tracks.is_empty() {
                        set.insert(extension("amp-story-captions", "0.1"));
                    }
                }
                ElementKind::Gif(_) => set.insert(extension("amp-video", "0.1")),
                ElementKind::Product(_) if options.flags.shopping => {
                    set.insert(extension("amp-story-shopping", "0.1"));
                }
                _ => {}
            }
        }
        if let Some(audio) = &page.background_audio
            && audio.needs_enhanced_embed()
        {
            set.insert(extension("amp-video", "0.1"));
            if audio.has_captions() {
                set.insert(extension("amp-story-captions", "0.1"));
            }
        }
    }
    tracing::debug!(count = set.scripts.len(), "required scripts");
    set.scripts
}

#[cfg(test)]
#[path = "../../tests/unit/compile/extensions.rs"]
mod tests;
