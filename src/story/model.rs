use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{StoryError, StoryResult},
    foundation::math::is_non_negative,
    story::{
        element::{Element, ElementKind},
        font::{Font, FontService},
        media::{BackgroundAudio, Resource},
        pattern::Pattern,
    },
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A complete story document.
///
/// A story is a pure data model that can be:
/// - built programmatically (see [`crate::StoryBuilder`])
/// - deserialized from the editor's JSON
///
/// Compiling a story is performed by [`crate::compile_story`].
pub struct Story {
    /// Story title.
    #[serde(default)]
    pub title: String,
    /// Canonical URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Default page-advance policy.
    #[serde(default = "default_true")]
    pub auto_advance: bool,
    /// Default page duration in seconds.
    #[serde(default = "default_page_duration")]
    pub default_page_duration: f64,
    /// Story-wide soundtrack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_audio: Option<BackgroundAudio>,
    /// Poster image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<FeaturedMedia>,
    /// Publisher logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_logo: Option<PublisherLogo>,
    /// Authoritative font declarations keyed by family.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fonts: BTreeMap<String, Font>,
    /// Ordered pages.
    #[serde(default)]
    pub pages: Vec<Page>,
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_page_duration() -> f64 {
    7.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Poster image of the story.
pub struct FeaturedMedia {
    /// Image URL.
    pub url: String,
    /// Intrinsic width.
    #[serde(default)]
    pub width: f64,
    /// Intrinsic height.
    #[serde(default)]
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Publisher logo.
pub struct PublisherLogo {
    /// Image URL.
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One page of a story.
pub struct Page {
    /// Page identifier, unique within the story.
    pub id: String,
    /// Page fill.
    #[serde(default)]
    pub background_color: Pattern,
    /// Per-page override of the story advance policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advancement: Option<PageAdvancement>,
    /// Elements in z-order. The first one may be the background.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Entrance animations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
    /// Page soundtrack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_audio: Option<BackgroundAudio>,
    /// Outbound swipe-up link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_attachment: Option<PageAttachment>,
    /// Shopping drawer settings; products come from product elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_attachment: Option<ShoppingAttachment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-page advance policy.
pub struct PageAdvancement {
    /// Advance automatically.
    #[serde(default = "default_true")]
    pub auto_advance: bool,
    /// Page duration in seconds; falls back to the story default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_duration: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Entrance animation; only its timing matters to the compiler.
pub struct Animation {
    /// Animation identifier.
    pub id: String,
    /// Ids of the animated elements.
    #[serde(default)]
    pub targets: Vec<String>,
    /// Effect name.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Duration in milliseconds.
    #[serde(default)]
    pub duration: f64,
    /// Start delay in milliseconds.
    #[serde(default)]
    pub delay: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Attachment drawer color theme.
pub enum AttachmentTheme {
    /// Light drawer.
    #[default]
    Light,
    /// Dark drawer.
    Dark,
}

impl AttachmentTheme {
    /// Attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outbound link shown as the page's swipe-up call to action.
pub struct PageAttachment {
    /// Target URL; empty disables the attachment.
    #[serde(default)]
    pub url: String,
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    /// Call-to-action icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Drawer theme.
    #[serde(default)]
    pub theme: AttachmentTheme,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Shopping drawer settings.
pub struct ShoppingAttachment {
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    /// Drawer theme.
    #[serde(default)]
    pub theme: AttachmentTheme,
}

impl Story {
    /// Parse a story from the editor's JSON.
    pub fn from_json_str(s: &str) -> StoryResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a story JSON file.
    pub fn from_path(path: &std::path::Path) -> StoryResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            StoryError::Other(anyhow::Error::new(e).context(format!(
                "read story '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Font declaration for `font`: the story font map wins over the copy
    /// carried by a text element.
    pub fn resolve_font<'a>(&'a self, font: &'a Font) -> &'a Font {
        self.fonts.get(&font.family).unwrap_or(font)
    }

    /// Validate story invariants and references.
    pub fn validate(&self) -> StoryResult<()> {
        if !self.default_page_duration.is_finite() || self.default_page_duration <= 0.0 {
            return Err(StoryError::validation(
                "defaultPageDuration must be finite and > 0",
            ));
        }
        if let Some(audio) = &self.background_audio {
            validate_audio(audio, "story backgroundAudio")?;
            if audio.has_captions() {
                return Err(StoryError::validation(
                    "story backgroundAudio cannot carry caption tracks; attach captioned audio to a page",
                ));
            }
        }
        for (family, font) in &self.fonts {
            if family != &font.family {
                return Err(StoryError::validation(format!(
                    "font map key '{family}' does not match family '{}'",
                    font.family
                )));
            }
            validate_font(font)?;
        }

        let mut page_ids = BTreeSet::new();
        for page in &self.pages {
            if page.id.trim().is_empty() {
                return Err(StoryError::validation("page id must be non-empty"));
            }
            if !page_ids.insert(page.id.as_str()) {
                return Err(StoryError::validation(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
        }

        for page in &self.pages {
            page.validate()?;
            for el in &page.elements {
                if let Some(target) = &el.branching_page_id
                    && !page_ids.contains(target.as_str())
                {
                    return Err(StoryError::validation(format!(
                        "element '{}' on page '{}' branches to missing page '{target}'",
                        el.id, page.id
                    )));
                }
                if let Some(text) = el.as_text() {
                    validate_font(self.resolve_font(&text.font))?;
                }
            }
        }
        Ok(())
    }
}

impl Page {
    /// The background element: the first element, when flagged.
    pub fn background_element(&self) -> Option<&Element> {
        self.elements.first().filter(|el| el.is_background)
    }

    /// Every element except the background, in z-order.
    pub fn regular_elements(&self) -> &[Element] {
        match self.background_element() {
            Some(_) => &self.elements[1..],
            None => &self.elements,
        }
    }

    /// Page attachment with a non-empty URL, if any.
    pub fn active_page_attachment(&self) -> Option<&PageAttachment> {
        self.page_attachment
            .as_ref()
            .filter(|a| !a.url.trim().is_empty())
    }

    /// Validate page-level invariants.
    pub fn validate(&self) -> StoryResult<()> {
        if let Some(adv) = &self.advancement
            && let Some(d) = adv.page_duration
            && (!d.is_finite() || d <= 0.0)
        {
            return Err(StoryError::validation(format!(
                "page '{}' pageDuration must be finite and > 0",
                self.id
            )));
        }
        if let Some(audio) = &self.background_audio {
            validate_audio(audio, &format!("page '{}' backgroundAudio", self.id))?;
        }
        for anim in &self.animations {
            if !is_non_negative(anim.duration) || !is_non_negative(anim.delay) {
                return Err(StoryError::validation(format!(
                    "animation '{}' on page '{}' must have finite, non-negative duration and delay",
                    anim.id, self.id
                )));
            }
        }

        let mut ids = BTreeSet::new();
        for (index, el) in self.elements.iter().enumerate() {
            if el.id.trim().is_empty() {
                return Err(StoryError::validation(format!(
                    "element on page '{}' has an empty id",
                    self.id
                )));
            }
            if !ids.insert(el.id.as_str()) {
                return Err(StoryError::validation(format!(
                    "duplicate element id '{}' on page '{}'",
                    el.id, self.id
                )));
            }
            if el.is_background && index != 0 {
                return Err(StoryError::validation(format!(
                    "element '{}' on page '{}' is flagged as background but is not the first element",
                    el.id, self.id
                )));
            }
            validate_element(el)
                .map_err(|e| StoryError::validation(format!("page '{}': {e}", self.id)))?;
        }
        Ok(())
    }
}

fn validate_element(el: &Element) -> Result<(), String> {
    let g = &el.geometry;
    for (name, v) in [("x", g.x), ("y", g.y), ("rotationAngle", g.rotation_angle)] {
        if !v.is_finite() {
            return Err(format!("element '{}' {name} must be finite", el.id));
        }
    }
    for (name, v) in [("width", g.width), ("height", g.height)] {
        if !is_non_negative(v) {
            return Err(format!(
                "element '{}' {name} must be finite and >= 0",
                el.id
            ));
        }
    }
    if !el.opacity.is_finite() || !(0.0..=100.0).contains(&el.opacity) {
        return Err(format!("element '{}' opacity must be within 0..=100", el.id));
    }
    if el.active_link().is_some() && el.branching_page_id.is_some() {
        return Err(format!(
            "element '{}' cannot carry both a link and a branching page",
            el.id
        ));
    }
    if let Some(border) = &el.border {
        for w in [border.left, border.top, border.right, border.bottom] {
            if !is_non_negative(w) {
                return Err(format!(
                    "element '{}' border widths must be finite and >= 0",
                    el.id
                ));
            }
        }
    }

    match &el.kind {
        ElementKind::Text(p) => {
            if !p.font_size.is_finite() || p.font_size <= 0.0 {
                return Err(format!("text element '{}' fontSize must be > 0", el.id));
            }
            if !p.line_height.is_finite() || p.line_height <= 0.0 {
                return Err(format!("text element '{}' lineHeight must be > 0", el.id));
            }
        }
        ElementKind::Image(p) => {
            validate_resource(&p.resource, &el.id)?;
            validate_fit(p.scale, &el.id)?;
        }
        ElementKind::Video(p) => {
            validate_resource(&p.resource, &el.id)?;
            validate_fit(p.scale, &el.id)?;
            for track in &p.tracks {
                if track.track.trim().is_empty() {
                    return Err(format!("video element '{}' has a caption track without src", el.id));
                }
            }
        }
        ElementKind::Gif(p) => {
            validate_fit(p.scale, &el.id)?;
            let has_output = p
                .resource
                .output
                .as_ref()
                .is_some_and(|o| !o.src.trim().is_empty());
            if !has_output && p.resource.src.trim().is_empty() {
                return Err(format!("gif element '{}' has no source", el.id));
            }
        }
        ElementKind::Product(p) => {
            if p.product.product_id.trim().is_empty() {
                return Err(format!("product element '{}' has an empty productId", el.id));
            }
        }
        ElementKind::Sticker(p) => {
            if p.sticker.src.trim().is_empty() {
                return Err(format!("sticker element '{}' has no source", el.id));
            }
        }
        ElementKind::Shape(_) => {}
    }
    Ok(())
}

fn validate_resource(resource: &Resource, element_id: &str) -> Result<(), String> {
    if resource.src.trim().is_empty() {
        return Err(format!("element '{element_id}' resource src must be non-empty"));
    }
    if let Some(len) = resource.length
        && !is_non_negative(len)
    {
        return Err(format!(
            "element '{element_id}' resource length must be finite and >= 0"
        ));
    }
    Ok(())
}

fn validate_fit(scale: f64, element_id: &str) -> Result<(), String> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("element '{element_id}' scale must be finite and > 0"));
    }
    Ok(())
}

fn validate_audio(audio: &BackgroundAudio, what: &str) -> StoryResult<()> {
    if audio.resource.src.trim().is_empty() {
        return Err(StoryError::validation(format!(
            "{what} resource src must be non-empty"
        )));
    }
    if let Some(len) = audio.resource.length
        && !is_non_negative(len)
    {
        return Err(StoryError::validation(format!(
            "{what} length must be finite and >= 0"
        )));
    }
    Ok(())
}

/// Characters that would break out of a CSS string or declaration.
const CSS_UNSAFE: &[char] = &['<', '>', '"', '\\', ';', '{', '}'];

fn validate_font(font: &Font) -> StoryResult<()> {
    if font.family.trim().is_empty() {
        return Err(StoryError::validation("font family must be non-empty"));
    }
    if font.family.contains(CSS_UNSAFE) {
        return Err(StoryError::validation(format!(
            "font family '{}' contains characters not allowed in CSS",
            font.family
        )));
    }
    if let Some(url) = font.url.as_deref()
        && url.contains(CSS_UNSAFE)
    {
        return Err(StoryError::validation(format!(
            "font '{}' url contains characters not allowed in CSS",
            font.family
        )));
    }
    if font.service == FontService::Custom
        && font.url.as_deref().is_none_or(|u| u.trim().is_empty())
    {
        return Err(StoryError::validation(format!(
            "custom font '{}' must declare a url",
            font.family
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/story/model.rs"]
mod tests;
