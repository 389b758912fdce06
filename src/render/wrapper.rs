use crate::{
    foundation::{core::em_of_height, math::fmt_num},
    markup::node::{ElementNode, Node, el},
    render::{
        geometry::element_box,
        mask::{clip_path_defs, clip_path_id},
        style::{Style, em},
    },
    story::element::{Element, MaskType},
};

/// Wrap a rendered fragment with placement, link, mask and border.
///
/// Output shape, outermost first:
/// `div.page-element#el-{id}` > `a` (when linked) > `div.mask` > fragment.
/// Masked elements also carry the inline clip path definition.
pub fn wrap_element(element: &Element, fragment: Node) -> ElementNode {
    let mask = element.mask.map(|m| m.kind).unwrap_or_default();

    let mut mask_style = Style::new()
        .set("position", "absolute")
        .set("width", "100%")
        .set("height", "100%")
        .set("left", "0")
        .set("top", "0");
    if element.opacity < 100.0 {
        mask_style = mask_style.set("opacity", fmt_num(element.opacity / 100.0));
    }
    if mask == MaskType::Rectangle {
        mask_style = border_style(element, mask_style);
    } else {
        mask_style = mask_style.set("clip-path", format!("url(#{})", clip_path_id(mask, &element.id)));
    }
    let masked = el("div")
        .attr("class", "mask")
        .attr("id", format!("el-{}-mask", element.id))
        .attr("style", mask_style.to_css())
        .child(fragment);

    let body: ElementNode = match link_anchor(element) {
        Some(anchor) => anchor.child(masked),
        None => masked,
    };

    el("div")
        .attr("class", "page-element")
        .attr("id", format!("el-{}", element.id))
        .attr("style", Style::new().placed(&element_box(element)).to_css())
        .child_opt(clip_path_defs(mask, &element.id))
        .child(body)
}

fn link_anchor(element: &Element) -> Option<ElementNode> {
    if element.is_background {
        return None;
    }
    let block = Style::new()
        .set("display", "block")
        .set("width", "100%")
        .set("height", "100%")
        .to_css();
    if let Some(link) = element.active_link() {
        return Some(
            el("a")
                .attr("href", &link.url)
                .attr("target", "_blank")
                .attr("rel", "noreferrer")
                .attr_opt("data-tooltip-text", link.desc.as_ref())
                .attr_opt("data-tooltip-icon", link.icon.as_ref())
                .attr("style", block),
        );
    }
    element.branching_page_id.as_ref().map(|page| {
        el("a")
            .attr("href", format!("#page={page}"))
            .attr("style", block)
    })
}

fn border_style(element: &Element, style: Style) -> Style {
    let style = match element.border.filter(|b| b.is_visible()) {
        Some(b) => style
            .set("border-style", "solid")
            .set("border-color", b.color.to_css())
            .set(
                "border-width",
                [b.top, b.right, b.bottom, b.left]
                    .iter()
                    .map(|w| em(em_of_height(*w)))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
            .set("box-sizing", "border-box"),
        None => style,
    };
    match element.border_radius.filter(|r| !r.is_zero()) {
        Some(r) => style
            .set(
                "border-radius",
                [r.top_left, r.top_right, r.bottom_right, r.bottom_left]
                    .iter()
                    .map(|v| em(em_of_height(*v)))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
            .set("overflow", "hidden"),
        None => style,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/wrapper.rs"]
mod tests;
