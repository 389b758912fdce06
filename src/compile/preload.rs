use serde::Serialize;

use crate::story::{element::ElementKind, model::Story};

/// Coarse resource type of a preload hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreloadKind {
    /// Still image.
    Image,
    /// Video.
    Video,
}

impl PreloadKind {
    /// `as` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// Resource the browser should fetch early.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Preload {
    /// Resource URL.
    pub url: String,
    /// Resource type.
    pub kind: PreloadKind,
}

/// Background media of the first page, in element order.
///
/// GIFs preload their transcoded video when one exists.
pub fn preload_resources(story: &Story) -> Vec<Preload> {
    let Some(first) = story.pages.first() else {
        return Vec::new();
    };
    first
        .elements
        .iter()
        .filter(|el| el.is_background)
        .filter_map(|el| match &el.kind {
            ElementKind::Image(p) => Some(Preload {
                url: p.resource.src.clone(),
                kind: PreloadKind::Image,
            }),
            ElementKind::Video(p) => Some(Preload {
                url: p.resource.src.clone(),
                kind: PreloadKind::Video,
            }),
            ElementKind::Gif(p) => Some(
                match p.resource.output.as_ref().filter(|o| !o.src.trim().is_empty()) {
                    Some(output) => Preload {
                        url: output.src.clone(),
                        kind: PreloadKind::Video,
                    },
                    None => Preload {
                        url: p.resource.src.clone(),
                        kind: PreloadKind::Image,
                    },
                },
            ),
            _ => None,
        })
        .filter(|p| !p.url.trim().is_empty())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compile/preload.rs"]
mod tests;
