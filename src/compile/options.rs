use serde::{Deserialize, Serialize};

use crate::foundation::error::StoryResult;

/// Feature flags gating optional output facets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Emit product tags and shopping attachments.
    pub shopping: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { shopping: true }
    }
}

/// Publisher information placed on the story root and in head metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherMetadata {
    /// Publisher name.
    pub publisher: String,
    /// Generator name meta tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator_name: Option<String>,
    /// Generator version meta tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator_version: Option<String>,
}

/// Options for one compilation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Feature flags.
    pub flags: FeatureFlags,
    /// Publisher metadata.
    pub metadata: PublisherMetadata,
    /// Google Fonts `display` parameter.
    pub font_display: String,
    /// Document language.
    pub lang: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            flags: FeatureFlags::default(),
            metadata: PublisherMetadata::default(),
            font_display: "swap".to_string(),
            lang: "en".to_string(),
        }
    }
}

impl CompileOptions {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> StoryResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/options.rs"]
mod tests;
