use serde::{Deserialize, Serialize};

use crate::story::{
    font::Font,
    media::{CaptionTrack, Resource},
    pattern::{Color, Pattern},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A visual element placed on a page.
///
/// Common fields live here; the type-specific payload is the [`ElementKind`]
/// discriminated by the editor's `type` key.
pub struct Element {
    /// Element identifier, unique within its page.
    pub id: String,
    /// Placement in page units.
    #[serde(flatten)]
    pub geometry: Geometry,
    /// Marks the page background element (only valid on the first element).
    #[serde(default)]
    pub is_background: bool,
    /// Opacity in percent (`0..=100`).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Optional border.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Optional per-corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    /// Optional clip mask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<Mask>,
    /// Optional overlay fill (background elements).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Pattern>,
    /// Outbound link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// In-story branch target; mutually exclusive with `link`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branching_page_id: Option<String>,
    /// Type-specific payload.
    #[serde(flatten)]
    pub kind: ElementKind,
}

fn default_opacity() -> f64 {
    100.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Element placement in page units.
pub struct Geometry {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Clockwise rotation in degrees around the box center.
    #[serde(default)]
    pub rotation_angle: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Element payload keyed by the editor's `type` string.
pub enum ElementKind {
    /// Rich text block.
    Text(TextPayload),
    /// Still image.
    Image(ImagePayload),
    /// Video.
    Video(VideoPayload),
    /// Animated GIF (rendered through its transcoded video).
    Gif(GifPayload),
    /// Filled shape; the mask defines its outline.
    Shape(ShapePayload),
    /// Shoppable product tag.
    Product(ProductPayload),
    /// Decorative sticker.
    Sticker(StickerPayload),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Text element payload.
pub struct TextPayload {
    /// Inline rich-text HTML produced by the editor.
    pub content: String,
    /// Font family reference.
    pub font: Font,
    /// Font size in page units.
    pub font_size: f64,
    /// Unitless line height.
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    /// Horizontal alignment.
    #[serde(default)]
    pub text_align: TextAlign,
    /// Inner padding in page units.
    #[serde(default)]
    pub padding: Padding,
    /// Fill behind the text block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Pattern>,
    /// How `background_color` is painted.
    #[serde(default)]
    pub background_text_mode: BackgroundTextMode,
    /// Semantic tag; `auto` lets the compiler choose.
    #[serde(default)]
    pub tag_name: TagName,
}

fn default_line_height() -> f64 {
    1.3
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Start-aligned (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// End-aligned.
    Right,
    /// Justified.
    Justify,
}

impl TextAlign {
    /// CSS `text-align` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Text padding in page units.
pub struct Padding {
    /// Left and right padding.
    #[serde(default)]
    pub horizontal: f64,
    /// Top and bottom padding.
    #[serde(default)]
    pub vertical: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Painting mode for a text element's background color.
pub enum BackgroundTextMode {
    /// No background.
    #[default]
    None,
    /// Fill the whole element box.
    Fill,
    /// Highlight behind each line of text.
    Highlight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic tag for a text element.
pub enum TagName {
    /// Let the compiler pick from font size and length.
    #[default]
    Auto,
    /// Top-level heading.
    H1,
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
    /// Paragraph.
    P,
}

impl TagName {
    /// Markup tag name; `auto` renders as a paragraph.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Auto | Self::P => "p",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Image element payload.
pub struct ImagePayload {
    /// Image resource.
    pub resource: Resource,
    /// Zoom in percent (`>= 100`).
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Horizontal focal point in percent of the media width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_x: Option<f64>,
    /// Vertical focal point in percent of the media height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_y: Option<f64>,
    /// Alternative text; falls back to the resource's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Video element payload.
pub struct VideoPayload {
    /// Video resource.
    pub resource: Resource,
    /// Zoom in percent (`>= 100`).
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Horizontal focal point in percent of the media width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_x: Option<f64>,
    /// Vertical focal point in percent of the media height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_y: Option<f64>,
    /// Alternative text; falls back to the resource's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Restart when finished.
    #[serde(rename = "loop", default)]
    pub looping: bool,
    /// Caption tracks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<CaptionTrack>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// GIF element payload.
pub struct GifPayload {
    /// GIF resource; `resource.output` holds the transcoded video.
    pub resource: Resource,
    /// Zoom in percent (`>= 100`).
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Horizontal focal point in percent of the media width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_x: Option<f64>,
    /// Vertical focal point in percent of the media height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_y: Option<f64>,
    /// Alternative text; falls back to the resource's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

fn default_scale() -> f64 {
    100.0
}

/// Cover-fit parameters shared by the media payloads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaFit {
    /// Zoom in percent.
    pub scale: f64,
    /// Horizontal focal point in percent.
    pub focal_x: f64,
    /// Vertical focal point in percent.
    pub focal_y: f64,
}

impl MediaFit {
    fn new(scale: f64, focal_x: Option<f64>, focal_y: Option<f64>) -> Self {
        Self {
            scale,
            focal_x: focal_x.unwrap_or(50.0),
            focal_y: focal_y.unwrap_or(50.0),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Shape element payload.
pub struct ShapePayload {
    /// Fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Pattern>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Product element payload.
pub struct ProductPayload {
    /// Product data, serialized verbatim into the shopping attachment.
    pub product: Product,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Product record in the shopping configuration format.
pub struct Product {
    /// Stable product identifier.
    pub product_id: String,
    /// Display title.
    pub product_title: String,
    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_brand: Option<String>,
    /// Price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price: Option<f64>,
    /// ISO currency code of `product_price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price_currency: Option<String>,
    /// Product images.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_images: Vec<ProductImage>,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_details: Option<String>,
    /// Product page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// Review summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRating>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Product image.
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Product review summary.
pub struct AggregateRating {
    /// Average rating.
    pub rating_value: f64,
    /// Number of reviews.
    pub review_count: u64,
    /// Reviews page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Sticker element payload.
pub struct StickerPayload {
    /// Sticker reference.
    pub sticker: Sticker,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Sticker artwork reference.
pub struct Sticker {
    /// Sticker identifier in the sticker catalogue.
    #[serde(rename = "type")]
    pub kind: String,
    /// Artwork URL.
    pub src: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Outbound link attached to an element.
pub struct Link {
    /// Target URL.
    pub url: String,
    /// Tooltip text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Tooltip icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Element border in page units.
pub struct Border {
    /// Left width.
    #[serde(default)]
    pub left: f64,
    /// Top width.
    #[serde(default)]
    pub top: f64,
    /// Right width.
    #[serde(default)]
    pub right: f64,
    /// Bottom width.
    #[serde(default)]
    pub bottom: f64,
    /// Border color.
    pub color: Color,
    /// Editor hint that all sides share one width.
    #[serde(default)]
    pub locked_width: bool,
}

impl Border {
    /// Return `true` when any side has a positive width.
    pub fn is_visible(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .any(|w| *w > 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-corner radius in page units.
pub struct BorderRadius {
    /// Top-left radius.
    #[serde(default)]
    pub top_left: f64,
    /// Top-right radius.
    #[serde(default)]
    pub top_right: f64,
    /// Bottom-right radius.
    #[serde(default)]
    pub bottom_right: f64,
    /// Bottom-left radius.
    #[serde(default)]
    pub bottom_left: f64,
}

impl BorderRadius {
    /// Return `true` when every corner is square.
    pub fn is_zero(&self) -> bool {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .iter()
        .all(|r| *r <= 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Clip mask applied to an element.
pub struct Mask {
    /// Registered mask shape.
    #[serde(rename = "type")]
    pub kind: MaskType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Registered mask shapes.
pub enum MaskType {
    /// No clipping.
    #[default]
    Rectangle,
    /// Ellipse inscribed in the box.
    Circle,
    /// Upward triangle.
    Triangle,
    /// Rhombus touching each edge midpoint.
    Diamond,
    /// Regular pentagon.
    Pentagon,
    /// Heart.
    Heart,
}

impl Element {
    /// Editor `type` string of this element.
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            ElementKind::Text(_) => "text",
            ElementKind::Image(_) => "image",
            ElementKind::Video(_) => "video",
            ElementKind::Gif(_) => "gif",
            ElementKind::Shape(_) => "shape",
            ElementKind::Product(_) => "product",
            ElementKind::Sticker(_) => "sticker",
        }
    }

    /// Media resource for image, video and gif elements.
    pub fn resource(&self) -> Option<&Resource> {
        match &self.kind {
            ElementKind::Image(p) => Some(&p.resource),
            ElementKind::Video(p) => Some(&p.resource),
            ElementKind::Gif(p) => Some(&p.resource),
            _ => None,
        }
    }

    /// Cover-fit parameters for image, video and gif elements.
    pub fn media_fit(&self) -> Option<MediaFit> {
        match &self.kind {
            ElementKind::Image(p) => Some(MediaFit::new(p.scale, p.focal_x, p.focal_y)),
            ElementKind::Video(p) => Some(MediaFit::new(p.scale, p.focal_x, p.focal_y)),
            ElementKind::Gif(p) => Some(MediaFit::new(p.scale, p.focal_x, p.focal_y)),
            _ => None,
        }
    }

    /// Text payload, when this is a text element.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.kind {
            ElementKind::Text(p) => Some(p),
            _ => None,
        }
    }

    /// Product payload, when this is a product element.
    pub fn as_product(&self) -> Option<&Product> {
        match &self.kind {
            ElementKind::Product(p) => Some(&p.product),
            _ => None,
        }
    }

    /// Caption tracks of a video element; empty otherwise.
    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        match &self.kind {
            ElementKind::Video(p) => &p.tracks,
            _ => &[],
        }
    }

    /// Duration that may drive page advancement.
    ///
    /// Only non-looping videos with a known length qualify.
    pub fn pacing_duration_secs(&self) -> Option<f64> {
        match &self.kind {
            ElementKind::Video(p) if !p.looping => p.resource.length.filter(|l| *l > 0.0),
            _ => None,
        }
    }

    /// DOM id of the element's media node.
    pub fn media_anchor(&self) -> String {
        format!("el-{}-media", self.id)
    }

    /// DOM id of the element's captions node.
    pub fn captions_anchor(&self) -> String {
        format!("el-{}-captions", self.id)
    }

    /// Link with a non-empty URL, if any.
    pub fn active_link(&self) -> Option<&Link> {
        self.link.as_ref().filter(|l| !l.url.trim().is_empty())
    }

    /// Copy of this element whose text payload carries `tag`.
    ///
    /// Non-text elements are returned unchanged.
    pub fn with_tag_name(&self, tag: TagName) -> Self {
        let mut out = self.clone();
        if let ElementKind::Text(p) = &mut out.kind {
            p.tag_name = tag;
        }
        out
    }

    /// Copy of this element with its link and branch target removed.
    pub fn without_link(&self) -> Self {
        Self {
            link: None,
            branching_page_id: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/element.rs"]
mod tests;
