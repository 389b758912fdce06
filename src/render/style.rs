use crate::foundation::{core::PercentBox, math::fmt_num};

/// Ordered list of CSS declarations serialized into a `style` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    /// Empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name: value`.
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.decls.push((name, value.into()));
        self
    }

    /// Append `name: value` when `value` is present.
    pub fn set_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Absolute placement from a percentage box.
    pub fn placed(self, b: &PercentBox) -> Self {
        let s = self
            .set("position", "absolute")
            .set("left", pct(b.x))
            .set("top", pct(b.y))
            .set("width", pct(b.width))
            .set("height", pct(b.height));
        if b.rotation == 0.0 {
            s
        } else {
            s.set("transform", format!("rotate({}deg)", fmt_num(b.rotation)))
        }
    }

    /// Return `true` when no declaration is set.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// `name:value;name:value` form.
    pub fn to_css(&self) -> String {
        self.decls
            .iter()
            .map(|(n, v)| format!("{n}:{v}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Percentage length.
pub fn pct(v: f64) -> String {
    format!("{}%", fmt_num(v))
}

/// `em` length.
pub fn em(v: f64) -> String {
    format!("{}em", fmt_num(v))
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
