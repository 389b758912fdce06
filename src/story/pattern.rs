use serde::{Deserialize, Serialize};

use crate::foundation::math::fmt_num;

/// Straight-alpha color as stored by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Color {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque white.
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// CSS color value: `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({},{},{},{})",
                self.r,
                self.g,
                self.b,
                fmt_num(self.a.clamp(0.0, 1.0))
            )
        }
    }
}

/// Color stop inside a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color.
    pub color: Color,
    /// Stop position in `[0, 1]`.
    pub position: f64,
}

/// Fill pattern used for page backgrounds, shapes, text fills and overlays.
///
/// The editor omits `type` for solid fills, so deserialization accepts both
/// `{ "color": .. }` and `{ "type": "linear", "stops": [..] }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pattern {
    /// Single color fill.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Linear gradient; `rotation` is expressed in turns.
    Linear {
        /// Ordered gradient stops.
        stops: Vec<GradientStop>,
        /// Gradient rotation in turns (`0.25` is a quarter turn).
        rotation: f64,
        /// Optional alpha multiplier applied to the whole gradient.
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
    /// Radial gradient centered on the box.
    Radial {
        /// Ordered gradient stops.
        stops: Vec<GradientStop>,
        /// Optional alpha multiplier applied to the whole gradient.
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
}

impl Default for Pattern {
    fn default() -> Self {
        Self::Solid {
            color: Color::white(),
        }
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            #[serde(rename = "type", default)]
            kind: Option<String>,
            #[serde(default)]
            color: Option<Color>,
            #[serde(default)]
            stops: Vec<GradientStop>,
            #[serde(default)]
            rotation: f64,
            #[serde(default)]
            alpha: Option<f64>,
        }

        let repr = Repr::deserialize(deserializer)?;
        match repr.kind.as_deref().unwrap_or("solid") {
            "solid" => {
                let color = repr
                    .color
                    .ok_or_else(|| serde::de::Error::missing_field("color"))?;
                Ok(Self::Solid { color })
            }
            "linear" => Ok(Self::Linear {
                stops: repr.stops,
                rotation: repr.rotation,
                alpha: repr.alpha,
            }),
            "radial" => Ok(Self::Radial {
                stops: repr.stops,
                alpha: repr.alpha,
            }),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["solid", "linear", "radial"],
            )),
        }
    }
}

impl Pattern {
    /// Solid fill helper.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// CSS `background` value for this pattern.
    pub fn to_css(&self) -> String {
        match self {
            Self::Solid { color } => color.to_css(),
            Self::Linear {
                stops,
                rotation,
                alpha,
            } => format!(
                "linear-gradient({}turn,{})",
                fmt_num(rotation + 0.5),
                stops_css(stops, *alpha)
            ),
            Self::Radial { stops, alpha } => {
                format!("radial-gradient({})", stops_css(stops, *alpha))
            }
        }
    }

    /// Return `true` when the fill is fully transparent.
    pub fn is_transparent(&self) -> bool {
        match self {
            Self::Solid { color } => color.a <= 0.0,
            Self::Linear { stops, alpha, .. } | Self::Radial { stops, alpha } => {
                alpha.is_some_and(|a| a <= 0.0) || stops.iter().all(|s| s.color.a <= 0.0)
            }
        }
    }
}

fn stops_css(stops: &[GradientStop], alpha: Option<f64>) -> String {
    stops
        .iter()
        .map(|stop| {
            let color = Color {
                a: stop.color.a * alpha.unwrap_or(1.0),
                ..stop.color
            };
            format!("{} {}%", color.to_css(), fmt_num(stop.position * 100.0))
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "../../tests/unit/story/pattern.rs"]
mod tests;
