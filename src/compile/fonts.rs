use std::collections::{BTreeMap, BTreeSet};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::{
    compile::options::CompileOptions,
    foundation::error::StoryResult,
    story::{
        font::{Font, FontService, FontVariant},
        model::Story,
    },
    text::content::parse_content,
};

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// Characters escaped inside a Google Fonts family name; spaces become `+`.
const FAMILY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.');

/// Font declarations the document head must carry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FontDeclarations {
    /// Stylesheet URLs, one per hosting service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
    /// Inline `@font-face` rules for self-hosted families.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub font_faces: Vec<String>,
    /// Resolved faces per hosted family.
    pub variants: BTreeMap<String, Vec<FontVariant>>,
}

/// Faces of `font` to load for the `requested` ones.
///
/// A requested face the font does not declare resolves to its nearest declared
/// face. Fonts without a variant list load whatever was requested.
pub fn resolve_variants(
    font: &Font,
    requested: impl IntoIterator<Item = FontVariant>,
) -> BTreeSet<FontVariant> {
    requested
        .into_iter()
        .filter_map(|wanted| {
            if font.variants.is_empty() || font.has_variant(wanted) {
                Some(wanted)
            } else {
                font.nearest_variant(wanted)
            }
        })
        .collect()
}

/// Collect the font declarations for every text element of the story.
///
/// System fonts are never declared. Google families share one stylesheet URL;
/// each custom family gets one `@font-face` rule.
pub fn resolve_fonts(story: &Story, options: &CompileOptions) -> StoryResult<FontDeclarations> {
    let mut used: BTreeMap<String, (&Font, BTreeSet<FontVariant>)> = BTreeMap::new();
    for page in &story.pages {
        for el in &page.elements {
            let Some(text) = el.as_text() else {
                continue;
            };
            let font = story.resolve_font(&text.font);
            if font.service == FontService::System {
                continue;
            }
            let requested = parse_content(&text.content)?.requested_variants();
            let entry = used
                .entry(font.family.clone())
                .or_insert_with(|| (font, BTreeSet::new()));
            entry.1.extend(resolve_variants(font, requested));
        }
    }

    let mut out = FontDeclarations::default();
    let mut google = Vec::new();
    for (family, (font, variants)) in &used {
        out.variants
            .insert(family.clone(), variants.iter().copied().collect());
        match font.service {
            FontService::Google => google.push(google_family_param(family, variants)),
            FontService::Custom => {
                if let Some(url) = &font.url {
                    out.font_faces.push(font_face(font, url, &options.font_display));
                }
            }
            FontService::System => {}
        }
    }
    if !google.is_empty() {
        out.stylesheets.push(format!(
            "{GOOGLE_FONTS_CSS}?display={}&{}",
            utf8_percent_encode(&options.font_display, NON_ALPHANUMERIC),
            google.join("&")
        ));
    }
    tracing::debug!(
        families = used.len(),
        stylesheets = out.stylesheets.len(),
        font_faces = out.font_faces.len(),
        "font declarations"
    );
    Ok(out)
}

/// `family=` query parameter for one Google family.
///
/// Only regular: bare family. Only 400 weights: `ital@`. Only upright:
/// `wght@`. Otherwise `ital,wght@` tuples, all sorted.
pub fn google_family_param(family: &str, variants: &BTreeSet<FontVariant>) -> String {
    let name = utf8_percent_encode(family, FAMILY)
        .to_string()
        .replace(' ', "+");
    let only_regular = variants.iter().all(|v| *v == FontVariant::REGULAR);
    if only_regular {
        return format!("family={name}");
    }
    let spec = if variants.iter().all(|v| v.weight == 400) {
        let ital: BTreeSet<u8> = variants.iter().map(|v| v.italic).collect();
        format!("ital@{}", join(ital))
    } else if variants.iter().all(|v| !v.is_italic()) {
        let wght: BTreeSet<u16> = variants.iter().map(|v| v.weight).collect();
        format!("wght@{}", join(wght))
    } else {
        format!(
            "ital,wght@{}",
            join(variants.iter().map(|v| format!("{},{}", v.italic, v.weight)))
        )
    };
    format!("family={name}:{spec}")
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

fn font_face(font: &Font, url: &str, display: &str) -> String {
    let format = url
        .rsplit_once('.')
        .map(|(_, ext)| ext.split(['?', '#']).next().unwrap_or(ext).to_ascii_lowercase())
        .and_then(|ext| match ext.as_str() {
            "woff2" => Some("woff2"),
            "woff" => Some("woff"),
            "ttf" => Some("truetype"),
            "otf" => Some("opentype"),
            _ => None,
        });
    let src = match format {
        Some(f) => format!("url(\"{url}\") format(\"{f}\")"),
        None => format!("url(\"{url}\")"),
    };
    format!(
        "@font-face{{font-family:\"{}\";src:{src};font-display:{display}}}",
        font.family.replace('"', "")
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fonts.rs"]
mod tests;
