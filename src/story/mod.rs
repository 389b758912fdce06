pub(crate) mod dsl;
pub(crate) mod element;
pub(crate) mod font;
pub(crate) mod media;
pub(crate) mod model;
pub(crate) mod pattern;
