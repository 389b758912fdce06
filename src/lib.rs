//! Storyout compiles web story documents into AMP story markup.
//!
//! A story is a pure data model (pages of typed elements, animations, audio and
//! attachments). Compiling it is a single synchronous call that turns that graph
//! into one HTML document plus the decisions taken on the way.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: `Story -> ()` (geometry, durations, references, fonts)
//! 2. **Scan**: one pass each for runtime scripts, font declarations and preload hints
//! 3. **Compile pages**: advancement, text tags, layers, the single trailing attachment
//! 4. **Assemble**: head metadata, boilerplate and the ordered pages
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: no IO, no shared state; the same input always yields the same bytes.
//! - **Fail fast**: invalid input is rejected with [`StoryError`] instead of producing
//!   markup the validator would refuse.
//!
//! # Getting started
//!
//! - For the command line tool, see the repository README.
//! - For a walkthrough of the model and the compiler stages, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compile;
mod foundation;
mod markup;
mod render;
mod story;
mod text;

/// Standalone documentation of the story model and compiler stages.
pub mod guide;

pub use animation::timing::total_duration_secs;
pub use compile::advance::{
    Advancement, background_audio_anchor, page_advancement, resolve_advancement,
};
pub use compile::attachment::{
    Attachment, DEFAULT_CTA_TEXT, choose_attachment, page_products, render_attachment,
};
pub use compile::extensions::{ScriptDescriptor, base_runtime, extension, required_scripts};
pub use compile::fonts::{
    FontDeclarations, google_family_param, resolve_fonts, resolve_variants,
};
pub use compile::options::{CompileOptions, FeatureFlags, PublisherMetadata};
pub use compile::page::{
    AudioEmbed, CompiledPage, PageArtifacts, background_audio_captions_anchor, compile_page,
    verify_page_structure,
};
pub use compile::preload::{Preload, PreloadKind, preload_resources};
pub use compile::story::{CompiledStory, StoryArtifacts, compile_story, inspect_story};
pub use compile::text_tags::{assign_text_tags, text_elements_by_position};
pub use foundation::core::{
    DANGER_ZONE_HEIGHT, FULLBLEED_HEIGHT, FULLBLEED_RATIO, PAGE_ASPECT_RATIO, PAGE_HEIGHT,
    PAGE_WIDTH, PercentBox,
};
pub use foundation::error::{StoryError, StoryResult};
pub use markup::node::{ElementNode, Node, el};
pub use render::element::{RenderContext, cover_fit, render_fragment};
pub use render::geometry::{ATTACHMENT_LINK_LIMIT, element_box, overlaps_attachment_region};
pub use render::wrapper::wrap_element;
pub use story::dsl::{
    PageBuilder, StoryBuilder, caption_track, gif_element, image_element, product,
    product_element, rect, shape_element, sticker_element, text_element, video_element,
};
pub use story::element::{
    AggregateRating, BackgroundTextMode, Border, BorderRadius, Element, ElementKind, Geometry,
    GifPayload, ImagePayload, Link, Mask, MaskType, MediaFit, Padding, Product, ProductImage,
    ProductPayload, ShapePayload, Sticker, StickerPayload, TagName, TextAlign, TextPayload,
    VideoPayload,
};
pub use story::font::{Font, FontService, FontVariant};
pub use story::media::{BackgroundAudio, CaptionTrack, MediaOutput, Resource};
pub use story::model::{
    Animation, AttachmentTheme, FeaturedMedia, Page, PageAdvancement, PageAttachment,
    PublisherLogo, ShoppingAttachment, Story,
};
pub use story::pattern::{Color, GradientStop, Pattern};
pub use text::content::{TextContent, TextRun, parse_content};
