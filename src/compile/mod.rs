pub(crate) mod advance;
pub(crate) mod attachment;
pub(crate) mod extensions;
pub(crate) mod fonts;
pub(crate) mod options;
pub(crate) mod page;
pub(crate) mod preload;
pub(crate) mod story;
pub(crate) mod text_tags;
