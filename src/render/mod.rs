pub(crate) mod element;
pub(crate) mod geometry;
pub(crate) mod mask;
pub(crate) mod style;
pub(crate) mod wrapper;
