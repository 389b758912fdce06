use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Media descriptor referenced by image, video, gif and audio payloads.
pub struct Resource {
    /// Media family as tagged by the editor (`image`, `video`, `gif`, `audio`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// MIME type of `src` (e.g. `video/mp4`).
    #[serde(default)]
    pub mime_type: String,
    /// Source URL.
    #[serde(default)]
    pub src: String,
    /// Intrinsic width.
    #[serde(default)]
    pub width: f64,
    /// Intrinsic height.
    #[serde(default)]
    pub height: f64,
    /// Poster image for time-based media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Duration in seconds for time-based media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Video has no audio track.
    #[serde(default)]
    pub is_muted: bool,
    /// Default alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Placeholder color shown while loading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    /// Transcoded video output (GIF resources).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<MediaOutput>,
}

impl Resource {
    /// Resource with only a source and MIME type set.
    pub fn new(src: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            kind: None,
            mime_type: mime_type.into(),
            src: src.into(),
            width: 0.0,
            height: 0.0,
            poster: None,
            length: None,
            is_muted: false,
            alt: None,
            base_color: None,
            output: None,
        }
    }

    /// Copy of this resource with intrinsic dimensions set.
    pub fn with_size(&self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }

    /// Copy of this resource with a duration (seconds) set.
    pub fn with_length(&self, length: f64) -> Self {
        Self {
            length: Some(length),
            ..self.clone()
        }
    }

    /// Duration in seconds; `0` when unknown.
    pub fn duration_secs(&self) -> f64 {
        self.length.unwrap_or(0.0)
    }

    /// Intrinsic aspect ratio, when both dimensions are known.
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Transcoded video rendition of an animated GIF.
pub struct MediaOutput {
    /// MIME type of the rendition.
    #[serde(default = "default_output_mime")]
    pub mime_type: String,
    /// Rendition URL.
    pub src: String,
    /// Optional poster frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

fn default_output_mime() -> String {
    "video/mp4".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Caption/subtitle track attached to a video or background audio.
pub struct CaptionTrack {
    /// Track identifier.
    #[serde(default)]
    pub id: String,
    /// Track file URL (WebVTT).
    pub track: String,
    /// Identifier of the uploaded track file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    /// Track kind; the output only knows `captions`.
    #[serde(default = "default_track_kind")]
    pub kind: String,
    /// Track language.
    #[serde(default)]
    pub srclang: String,
    /// Human readable label.
    #[serde(default)]
    pub label: String,
}

fn default_track_kind() -> String {
    "captions".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Soundtrack attached to a page or to the whole story.
pub struct BackgroundAudio {
    /// Audio resource.
    pub resource: Resource,
    /// Restart when finished.
    #[serde(rename = "loop", default = "default_true")]
    pub looping: bool,
    /// Caption tracks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<CaptionTrack>,
}

fn default_true() -> bool {
    true
}

impl BackgroundAudio {
    /// Looping audio without captions.
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            looping: true,
            tracks: Vec::new(),
        }
    }

    /// Return `true` when caption tracks are attached.
    pub fn has_captions(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Page audio needs a tag-based embed instead of the `background-audio`
    /// attribute when it carries captions or must stop (and pace the page)
    /// after one play-through.
    pub fn needs_enhanced_embed(&self) -> bool {
        self.has_captions() || !self.looping
    }

    /// Duration that may drive page advancement: `0` for looping audio.
    pub fn pacing_duration_secs(&self) -> f64 {
        if self.looping {
            0.0
        } else {
            self.resource.duration_secs()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/media.rs"]
mod tests;
