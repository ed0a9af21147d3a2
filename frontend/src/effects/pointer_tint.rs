use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected #rgb or #rrggbb, got {0:?}")]
    Format(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(raw: &str) -> Result<Self, ColorError> {
        let err = || ColorError::Format(raw.to_string());
        let hex = raw.strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(|c| c.to_digit(16).unwrap_or(0) as u8 * 17);
                match (digits.next(), digits.next(), digits.next()) {
                    (Some(r), Some(g), Some(b)) => Ok(Self::new(r, g, b)),
                    _ => Err(err()),
                }
            }
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(err()),
        }
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Channel-wise interpolation; `t` is clamped to `[0, 1]`.
pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TintAxis {
    #[default]
    Horizontal,
    Vertical,
    /// Distance from the box center.
    Radial,
}

/// Text color that follows the pointer across a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerTint {
    pub from: Rgb,
    pub to: Rgb,
    pub axis: TintAxis,
}

impl Default for PointerTint {
    fn default() -> Self {
        Self {
            from: Rgb::new(0x1e, 0x90, 0xff),
            to: Rgb::new(0x7c, 0x3a, 0xed),
            axis: TintAxis::Horizontal,
        }
    }
}

impl PointerTint {
    /// Color for a pointer at `(x, y)` relative to the top-left of a
    /// `width` x `height` box.
    pub fn color_at(&self, x: f64, y: f64, width: f64, height: f64) -> Rgb {
        if width <= 0.0 || height <= 0.0 {
            return self.from;
        }
        let t = match self.axis {
            TintAxis::Horizontal => x / width,
            TintAxis::Vertical => y / height,
            TintAxis::Radial => {
                let (cx, cy) = (width / 2.0, height / 2.0);
                (x - cx).hypot(y - cy) / cx.hypot(cy)
            }
        };
        lerp(self.from, self.to, t)
    }
}
