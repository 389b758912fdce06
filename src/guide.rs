//! # Storyout guide
//!
//! A walkthrough of the story model and of what each compiler stage decides.
//!
//! If you are looking for commands, start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Story`](crate::Story): metadata, advance policy, font map and ordered pages
//! - [`Page`](crate::Page): background fill, elements in z-order, animations, audio, attachments
//! - [`Element`](crate::Element): common placement fields plus an [`ElementKind`](crate::ElementKind) payload
//! - [`CompileOptions`](crate::CompileOptions): feature flags and publisher metadata
//! - [`CompiledStory`](crate::CompiledStory): the document markup and the [`StoryArtifacts`](crate::StoryArtifacts)
//!
//! ## Coordinates
//!
//! Element geometry lives in a fixed page space of
//! [`PAGE_WIDTH`](crate::PAGE_WIDTH) by [`PAGE_HEIGHT`](crate::PAGE_HEIGHT) units. The full-bleed
//! area is 9:16 and overflows the page by [`DANGER_ZONE_HEIGHT`](crate::DANGER_ZONE_HEIGHT) above
//! and below. The output expresses boxes in percent of the page and lengths (font sizes, borders,
//! radii) in `em` of the page height.
//!
//! ## Stages
//!
//! [`compile_story`](crate::compile_story) validates the story and then runs:
//!
//! 1. [`required_scripts`](crate::required_scripts): base runtime, `amp-story`, then the
//!    extensions used by the pages, deduplicated in first-use order.
//! 2. [`resolve_fonts`](crate::resolve_fonts): faces used by text runs, each snapped to the
//!    nearest declared variant; one Google Fonts URL and one `@font-face` per custom family.
//! 3. [`preload_resources`](crate::preload_resources): background media of the first page.
//! 4. [`compile_page`](crate::compile_page) per page, the first one without animations.
//!
//! A page compiles to, in order: the background layer, the tag-based audio layer, the regular
//! element layer, the captions layer, and at most one attachment as the last child. Shopping
//! attachments win over page attachments. While an attachment is shown, links of elements
//! reaching below [`ATTACHMENT_LINK_LIMIT`](crate::ATTACHMENT_LINK_LIMIT) are dropped.
//!
//! ## Page advancement
//!
//! [`resolve_advancement`](crate::resolve_advancement) prefers the longest non-looping video that
//! outlasts both the animations (or one second) and non-looping audio. Otherwise the page uses a
//! timer of the longest of animations, audio and the default duration, unless the audio is the
//! longest, in which case the audio paces the page.
//!
//! ## Building stories in code
//!
//! ```
//! use storyout::{CompileOptions, Font, PageBuilder, StoryBuilder, compile_story, rect, text_element};
//!
//! let page = PageBuilder::new("cover")
//!     .element(text_element(
//!         "title",
//!         rect(20.0, 40.0, 372.0, 80.0),
//!         "Hello stories",
//!         Font::system("Arial"),
//!         40.0,
//!     ))
//!     .build()?;
//! let story = StoryBuilder::new("Demo").page(page).build()?;
//! let compiled = compile_story(&story, &CompileOptions::default())?;
//! assert!(compiled.html.contains("<h1 class=\"text-wrapper\""));
//! # Ok::<(), storyout::StoryError>(())
//! ```
//!
//! ## Errors
//!
//! - [`StoryError::Validation`](crate::StoryError::Validation): the input is malformed.
//! - [`StoryError::Invariant`](crate::StoryError::Invariant): the output would break a structural rule.
//! - [`StoryError::Serde`](crate::StoryError::Serde): JSON could not be read or written.
