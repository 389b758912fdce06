use crate::{
    markup::node::{ElementNode, el},
    story::element::MaskType,
};

impl MaskType {
    /// Registered mask name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
            Self::Pentagon => "pentagon",
            Self::Heart => "heart",
        }
    }

    /// Clip path in `objectBoundingBox` units; `None` for rectangles.
    pub fn clip_path(self) -> Option<&'static str> {
        match self {
            Self::Rectangle => None,
            Self::Circle => Some(
                "M 0.5 0 C 0.7761 0 1 0.2239 1 0.5 C 1 0.7761 0.7761 1 0.5 1 C 0.2239 1 0 0.7761 0 0.5 C 0 0.2239 0.2239 0 0.5 0 Z",
            ),
            Self::Triangle => Some("M 0.5 0 L 1 1 L 0 1 Z"),
            Self::Diamond => Some("M 0.5 0 L 1 0.5 L 0.5 1 L 0 0.5 Z"),
            Self::Pentagon => Some("M 0.5 0 L 1 0.3633 L 0.8090 1 L 0.1910 1 L 0 0.3633 Z"),
            Self::Heart => Some(
                "M 0.5 0.2 C 0.5 0.2 0.35 0 0.2 0 C 0.08 0 0 0.1 0 0.25 C 0 0.55 0.5 0.85 0.5 1 C 0.5 0.85 1 0.55 1 0.25 C 1 0.1 0.92 0 0.8 0 C 0.65 0 0.5 0.2 0.5 0.2 Z",
            ),
        }
    }
}

/// DOM id of the clip path emitted for `element_id`.
pub fn clip_path_id(kind: MaskType, element_id: &str) -> String {
    format!("mask-{}-{element_id}-output", kind.as_str())
}

/// Zero-size inline SVG defining the element's clip path.
pub fn clip_path_defs(kind: MaskType, element_id: &str) -> Option<ElementNode> {
    let d = kind.clip_path()?;
    Some(
        el("svg")
            .attr("width", "0")
            .attr("height", "0")
            .attr("class", "mask-defs")
            .child(
                el("defs").child(
                    el("clipPath")
                        .attr("id", clip_path_id(kind, element_id))
                        .attr("clipPathUnits", "objectBoundingBox")
                        .child(el("path").attr("d", d)),
                ),
            ),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
