use serde::Serialize;

use crate::{
    compile::options::CompileOptions,
    foundation::error::StoryResult,
    markup::node::{ElementNode, el},
    story::{
        element::Product,
        model::{AttachmentTheme, Page, PageAttachment, ShoppingAttachment},
    },
};

/// Fallback call-to-action label of page attachments.
pub const DEFAULT_CTA_TEXT: &str = "Learn more";

/// The single trailing attachment of a page.
#[derive(Clone, Debug, PartialEq)]
pub enum Attachment<'a> {
    /// Shopping drawer listing the page's products.
    Shopping {
        /// Products in first-seen order, deduplicated by id.
        products: Vec<&'a Product>,
        /// Drawer settings, when configured.
        settings: Option<&'a ShoppingAttachment>,
    },
    /// Outbound swipe-up link.
    Outlink(&'a PageAttachment),
}

impl Attachment<'_> {
    /// Short name for logs and artifacts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Shopping { .. } => "shopping",
            Self::Outlink(_) => "outlink",
        }
    }
}

/// Products of the page's product elements, deduplicated by id.
pub fn page_products(page: &Page) -> Vec<&Product> {
    let mut out: Vec<&Product> = Vec::new();
    for product in page.elements.iter().filter_map(|el| el.as_product()) {
        if !out.iter().any(|p| p.product_id == product.product_id) {
            out.push(product);
        }
    }
    out
}

/// Pick the page attachment: shopping when the page has products and shopping
/// is enabled, else the page attachment when its URL is set, else none.
pub fn choose_attachment<'a>(page: &'a Page, options: &CompileOptions) -> Option<Attachment<'a>> {
    if options.flags.shopping {
        let products = page_products(page);
        if !products.is_empty() {
            return Some(Attachment::Shopping {
                products,
                settings: page.shopping_attachment.as_ref(),
            });
        }
    }
    page.active_page_attachment().map(Attachment::Outlink)
}

#[derive(Serialize)]
struct ShoppingConfig<'a> {
    items: &'a [&'a Product],
}

/// Markup of an attachment block.
pub fn render_attachment(attachment: &Attachment<'_>) -> StoryResult<ElementNode> {
    match attachment {
        Attachment::Shopping { products, settings } => {
            let json = serde_json::to_string(&ShoppingConfig { items: products })?;
            let theme = settings.map_or(AttachmentTheme::default(), |s| s.theme);
            Ok(el("amp-story-shopping-attachment")
                .attr("theme", theme.as_str())
                .attr_opt("cta-text", settings.and_then(|s| s.cta_text.as_ref()))
                .child(
                    el("script")
                        .attr("type", "application/json")
                        .raw_text(json.replace('<', "\\u003c"))?,
                ))
        }
        Attachment::Outlink(a) => {
            let cta = a
                .cta_text
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(DEFAULT_CTA_TEXT);
            Ok(el("amp-story-page-outlink")
                .attr("layout", "nodisplay")
                .attr("theme", a.theme.as_str())
                .attr_opt("cta-image", a.icon.as_ref())
                .child(
                    el("a")
                        .attr("href", &a.url)
                        .attr("target", "_blank")
                        .attr("rel", "noreferrer")
                        .text(cta),
                ))
        }
    }
}

/// Return `true` for attachment block tags.
pub fn is_attachment_tag(tag: &str) -> bool {
    matches!(
        tag,
        "amp-story-page-outlink" | "amp-story-shopping-attachment" | "amp-story-page-attachment"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compile/attachment.rs"]
mod tests;
