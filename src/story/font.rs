use serde::{Deserialize, Serialize};

/// A single font face selector: `(italic, weight)`.
///
/// Serialized as the editor's `[italic, weight]` tuple.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(u8, u16)", into = "(u8, u16)")]
pub struct FontVariant {
    /// `1` for italic faces, `0` otherwise.
    pub italic: u8,
    /// CSS font weight (100..=900).
    pub weight: u16,
}

impl FontVariant {
    /// Upright 400.
    pub const REGULAR: Self = Self::new(false, 400);

    /// Build a variant.
    pub const fn new(italic: bool, weight: u16) -> Self {
        Self {
            italic: italic as u8,
            weight,
        }
    }

    /// Return `true` for italic faces.
    pub fn is_italic(self) -> bool {
        self.italic != 0
    }

    /// Combined style/weight distance: `|Δitalic| + |Δweight|`.
    pub fn distance(self, other: Self) -> u32 {
        u32::from(self.italic.abs_diff(other.italic)) + u32::from(self.weight.abs_diff(other.weight))
    }
}

impl From<(u8, u16)> for FontVariant {
    fn from((italic, weight): (u8, u16)) -> Self {
        Self {
            italic: italic.min(1),
            weight,
        }
    }
}

impl From<FontVariant> for (u8, u16) {
    fn from(v: FontVariant) -> Self {
        (v.italic, v.weight)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Where a font is served from.
pub enum FontService {
    /// Google Fonts, requested through one combined stylesheet URL.
    #[serde(rename = "fonts.google.com", alias = "google")]
    Google,
    /// Self-hosted font file referenced by `url`.
    #[serde(rename = "custom")]
    Custom,
    /// Locally installed font; never declared.
    #[default]
    #[serde(rename = "system")]
    System,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Font family reference carried by text elements and the story font map.
pub struct Font {
    /// Family name.
    pub family: String,
    /// Hosting service.
    #[serde(default)]
    pub service: FontService,
    /// Faces the family actually provides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<FontVariant>,
    /// Direct font file URL (custom fonts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Fallback families for the CSS font stack.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
}

impl Font {
    /// System font without variants.
    pub fn system(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            service: FontService::System,
            variants: Vec::new(),
            url: None,
            fallbacks: Vec::new(),
        }
    }

    /// Google-hosted font with its available variants.
    pub fn google(family: impl Into<String>, variants: Vec<FontVariant>) -> Self {
        Self {
            service: FontService::Google,
            variants,
            ..Self::system(family)
        }
    }

    /// Self-hosted font file.
    pub fn custom(family: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            service: FontService::Custom,
            url: Some(url.into()),
            ..Self::system(family)
        }
    }

    /// Return `true` when `variant` is one of the declared faces.
    pub fn has_variant(&self, variant: FontVariant) -> bool {
        self.variants.contains(&variant)
    }

    /// Closest declared face to `requested` by combined italic+weight distance.
    ///
    /// Exact matches return themselves. Ties keep the first declared face.
    /// Returns `None` when the font declares no variants.
    pub fn nearest_variant(&self, requested: FontVariant) -> Option<FontVariant> {
        self.variants
            .iter()
            .fold(None::<(FontVariant, u32)>, |best, &candidate| {
                let d = candidate.distance(requested);
                match best {
                    Some((_, best_d)) if best_d <= d => best,
                    _ => Some((candidate, d)),
                }
            })
            .map(|(v, _)| v)
    }

    /// CSS `font-family` stack: quoted family followed by fallbacks.
    pub fn css_stack(&self) -> String {
        let mut parts = vec![format!("\"{}\"", self.family.replace('"', ""))];
        parts.extend(self.fallbacks.iter().map(|f| {
            if f.contains(' ') {
                format!("\"{}\"", f.replace('"', ""))
            } else {
                f.clone()
            }
        }));
        parts.join(",")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/font.rs"]
mod tests;
