use std::collections::BTreeMap;

use crate::{
    foundation::error::{StoryError, StoryResult},
    story::{
        element::{
            Border, BorderRadius, Element, ElementKind, GifPayload, Geometry, ImagePayload,
            Link, Mask, MaskType, Padding, Product, ProductPayload, ShapePayload, Sticker,
            StickerPayload, TagName, TextAlign, TextPayload, BackgroundTextMode, VideoPayload,
        },
        font::Font,
        media::{BackgroundAudio, CaptionTrack, Resource},
        model::{
            Animation, FeaturedMedia, Page, PageAdvancement, PageAttachment, PublisherLogo,
            ShoppingAttachment, Story,
        },
        pattern::Pattern,
    },
};

/// Builder for [`Story`] values; `build` validates the result.
pub struct StoryBuilder {
    title: String,
    link: Option<String>,
    auto_advance: bool,
    default_page_duration: f64,
    background_audio: Option<BackgroundAudio>,
    featured_media: Option<FeaturedMedia>,
    publisher_logo: Option<PublisherLogo>,
    fonts: BTreeMap<String, Font>,
    pages: Vec<Page>,
}

impl StoryBuilder {
    /// Start a story with the editor defaults (auto-advance, 7 second pages).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            auto_advance: true,
            default_page_duration: 7.0,
            background_audio: None,
            featured_media: None,
            publisher_logo: None,
            fonts: BTreeMap::new(),
            pages: Vec::new(),
        }
    }

    /// Canonical URL.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Story advance policy.
    pub fn auto_advance(mut self, enabled: bool, default_page_duration: f64) -> Self {
        self.auto_advance = enabled;
        self.default_page_duration = default_page_duration;
        self
    }

    /// Story-wide soundtrack.
    pub fn background_audio(mut self, audio: BackgroundAudio) -> Self {
        self.background_audio = Some(audio);
        self
    }

    /// Poster image.
    pub fn featured_media(mut self, url: impl Into<String>, width: f64, height: f64) -> Self {
        self.featured_media = Some(FeaturedMedia {
            url: url.into(),
            width,
            height,
        });
        self
    }

    /// Publisher logo.
    pub fn publisher_logo(mut self, url: impl Into<String>) -> Self {
        self.publisher_logo = Some(PublisherLogo { url: url.into() });
        self
    }

    /// Declare a font; a family may be declared once.
    pub fn font(mut self, font: Font) -> StoryResult<Self> {
        if self.fonts.contains_key(&font.family) {
            return Err(StoryError::validation(format!(
                "duplicate font family '{}'",
                font.family
            )));
        }
        self.fonts.insert(font.family.clone(), font);
        Ok(self)
    }

    /// Append a page.
    pub fn page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Finish and validate.
    pub fn build(self) -> StoryResult<Story> {
        let story = Story {
            title: self.title,
            link: self.link,
            auto_advance: self.auto_advance,
            default_page_duration: self.default_page_duration,
            background_audio: self.background_audio,
            featured_media: self.featured_media,
            publisher_logo: self.publisher_logo,
            fonts: self.fonts,
            pages: self.pages,
        };
        story.validate()?;
        Ok(story)
    }
}

/// Builder for [`Page`] values.
pub struct PageBuilder {
    page: Page,
}

impl PageBuilder {
    /// Empty white page.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            page: Page {
                id: id.into(),
                background_color: Pattern::default(),
                advancement: None,
                elements: Vec::new(),
                animations: Vec::new(),
                background_audio: None,
                page_attachment: None,
                shopping_attachment: None,
            },
        }
    }

    /// Page fill.
    pub fn background_color(mut self, pattern: Pattern) -> Self {
        self.page.background_color = pattern;
        self
    }

    /// Override the story advance policy for this page.
    pub fn advancement(mut self, auto_advance: bool, page_duration: Option<f64>) -> Self {
        self.page.advancement = Some(PageAdvancement {
            auto_advance,
            page_duration,
        });
        self
    }

    /// Set the background element, replacing any previous one.
    pub fn background(mut self, element: Element) -> Self {
        let element = element.as_background();
        if self.page.elements.first().is_some_and(|el| el.is_background) {
            self.page.elements[0] = element;
        } else {
            self.page.elements.insert(0, element);
        }
        self
    }

    /// Append a regular element.
    pub fn element(mut self, element: Element) -> Self {
        self.page.elements.push(element);
        self
    }

    /// Add an animation on `targets`; durations in milliseconds.
    pub fn animation(
        mut self,
        id: impl Into<String>,
        targets: &[&str],
        duration_ms: f64,
        delay_ms: f64,
    ) -> Self {
        self.page.animations.push(Animation {
            id: id.into(),
            targets: targets.iter().map(|t| (*t).to_string()).collect(),
            kind: "fade-in".to_string(),
            duration: duration_ms,
            delay: delay_ms,
        });
        self
    }

    /// Page soundtrack.
    pub fn background_audio(mut self, audio: BackgroundAudio) -> Self {
        self.page.background_audio = Some(audio);
        self
    }

    /// Outbound swipe-up link.
    pub fn page_attachment(mut self, url: impl Into<String>, cta_text: Option<&str>) -> Self {
        self.page.page_attachment = Some(PageAttachment {
            url: url.into(),
            cta_text: cta_text.map(str::to_string),
            ..PageAttachment::default()
        });
        self
    }

    /// Shopping drawer settings.
    pub fn shopping_attachment(mut self, attachment: ShoppingAttachment) -> Self {
        self.page.shopping_attachment = Some(attachment);
        self
    }

    /// Finish and validate the page on its own.
    pub fn build(self) -> StoryResult<Page> {
        self.page.validate()?;
        Ok(self.page)
    }
}

fn element(id: impl Into<String>, geometry: Geometry, kind: ElementKind) -> Element {
    Element {
        id: id.into(),
        geometry,
        is_background: false,
        opacity: 100.0,
        border: None,
        border_radius: None,
        mask: None,
        overlay: None,
        link: None,
        branching_page_id: None,
        kind,
    }
}

/// Geometry without rotation.
pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Geometry {
    Geometry {
        x,
        y,
        width,
        height,
        rotation_angle: 0.0,
    }
}

/// Text element with editor defaults.
pub fn text_element(
    id: impl Into<String>,
    geometry: Geometry,
    content: impl Into<String>,
    font: Font,
    font_size: f64,
) -> Element {
    element(
        id,
        geometry,
        ElementKind::Text(TextPayload {
            content: content.into(),
            font,
            font_size,
            line_height: 1.3,
            text_align: TextAlign::Left,
            padding: Padding::default(),
            background_color: None,
            background_text_mode: BackgroundTextMode::None,
            tag_name: TagName::Auto,
        }),
    )
}

/// Image element.
pub fn image_element(id: impl Into<String>, geometry: Geometry, resource: Resource) -> Element {
    element(
        id,
        geometry,
        ElementKind::Image(ImagePayload {
            resource,
            scale: 100.0,
            focal_x: None,
            focal_y: None,
            alt: None,
        }),
    )
}

/// Video element.
pub fn video_element(
    id: impl Into<String>,
    geometry: Geometry,
    resource: Resource,
    looping: bool,
) -> Element {
    element(
        id,
        geometry,
        ElementKind::Video(VideoPayload {
            resource,
            scale: 100.0,
            focal_x: None,
            focal_y: None,
            alt: None,
            looping,
            tracks: Vec::new(),
        }),
    )
}

/// GIF element.
pub fn gif_element(id: impl Into<String>, geometry: Geometry, resource: Resource) -> Element {
    element(
        id,
        geometry,
        ElementKind::Gif(GifPayload {
            resource,
            scale: 100.0,
            focal_x: None,
            focal_y: None,
            alt: None,
        }),
    )
}

/// Shape element.
pub fn shape_element(id: impl Into<String>, geometry: Geometry, fill: Option<Pattern>) -> Element {
    element(
        id,
        geometry,
        ElementKind::Shape(ShapePayload {
            background_color: fill,
        }),
    )
}

/// Product element.
pub fn product_element(id: impl Into<String>, geometry: Geometry, product: Product) -> Element {
    element(id, geometry, ElementKind::Product(ProductPayload { product }))
}

/// Sticker element.
pub fn sticker_element(
    id: impl Into<String>,
    geometry: Geometry,
    kind: impl Into<String>,
    src: impl Into<String>,
) -> Element {
    element(
        id,
        geometry,
        ElementKind::Sticker(StickerPayload {
            sticker: Sticker {
                kind: kind.into(),
                src: src.into(),
            },
        }),
    )
}

/// Minimal product record.
pub fn product(id: impl Into<String>, title: impl Into<String>) -> Product {
    Product {
        product_id: id.into(),
        product_title: title.into(),
        product_brand: None,
        product_price: None,
        product_price_currency: None,
        product_images: Vec::new(),
        product_details: None,
        product_url: None,
        aggregate_rating: None,
    }
}

/// With-field constructors. Each returns a new element and leaves `self`
/// untouched.
impl Element {
    /// Copy flagged as the page background.
    pub fn as_background(&self) -> Self {
        Self {
            is_background: true,
            ..self.clone()
        }
    }

    /// Copy rotated by `degrees`.
    pub fn rotated(&self, degrees: f64) -> Self {
        let mut out = self.clone();
        out.geometry.rotation_angle = degrees;
        out
    }

    /// Copy with an outbound link.
    pub fn with_link(&self, url: impl Into<String>) -> Self {
        Self {
            link: Some(Link {
                url: url.into(),
                desc: None,
                icon: None,
            }),
            branching_page_id: None,
            ..self.clone()
        }
    }

    /// Copy branching to another page.
    pub fn with_branch(&self, page_id: impl Into<String>) -> Self {
        Self {
            link: None,
            branching_page_id: Some(page_id.into()),
            ..self.clone()
        }
    }

    /// Copy with a clip mask.
    pub fn with_mask(&self, kind: MaskType) -> Self {
        Self {
            mask: Some(Mask { kind }),
            ..self.clone()
        }
    }

    /// Copy with a border.
    pub fn with_border(&self, border: Border) -> Self {
        Self {
            border: Some(border),
            ..self.clone()
        }
    }

    /// Copy with rounded corners.
    pub fn with_border_radius(&self, radius: BorderRadius) -> Self {
        Self {
            border_radius: Some(radius),
            ..self.clone()
        }
    }

    /// Copy with an overlay fill.
    pub fn with_overlay(&self, overlay: Pattern) -> Self {
        Self {
            overlay: Some(overlay),
            ..self.clone()
        }
    }

    /// Copy with opacity in percent.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self {
            opacity,
            ..self.clone()
        }
    }

    /// Copy whose video payload carries `tracks`. Other kinds are unchanged.
    pub fn with_tracks(&self, tracks: Vec<CaptionTrack>) -> Self {
        let mut out = self.clone();
        if let ElementKind::Video(p) = &mut out.kind {
            p.tracks = tracks;
        }
        out
    }
}

/// Caption track with the default kind.
pub fn caption_track(
    id: impl Into<String>,
    src: impl Into<String>,
    srclang: impl Into<String>,
    label: impl Into<String>,
) -> CaptionTrack {
    CaptionTrack {
        id: id.into(),
        track: src.into(),
        track_id: None,
        kind: "captions".to_string(),
        srclang: srclang.into(),
        label: label.into(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/dsl.rs"]
mod tests;
