//! Brush and background styling state.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Brush parameters shared by every segment emitted for one move event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushStyle {
    /// Stroke width in canvas pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Rgba,
}

impl Default for BrushStyle {
    fn default() -> Self {
        Self {
            width: 3.0,
            color: Rgba::opaque(30, 30, 30),
        }
    }
}

/// A named entry in one of the selector strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Selector name, matching the strip's data attribute.
    pub name: &'static str,
    pub color: Rgba,
}

/// Brush colors offered by the color strip.
pub const BRUSH_COLORS: &[Swatch] = &[
    Swatch { name: "ink", color: Rgba::opaque(30, 30, 30) },
    Swatch { name: "crimson", color: Rgba::opaque(220, 38, 38) },
    Swatch { name: "amber", color: Rgba::opaque(245, 158, 11) },
    Swatch { name: "emerald", color: Rgba::opaque(16, 185, 129) },
    Swatch { name: "sky", color: Rgba::opaque(14, 165, 233) },
    Swatch { name: "violet", color: Rgba::opaque(139, 92, 246) },
    Swatch { name: "chalk", color: Rgba::opaque(245, 245, 245) },
];

/// Canvas background choices.
pub const BACKGROUNDS: &[Swatch] = &[
    Swatch { name: "paper", color: Rgba::opaque(250, 250, 250) },
    Swatch { name: "slate", color: Rgba::opaque(30, 41, 59) },
    Swatch { name: "midnight", color: Rgba::opaque(2, 6, 23) },
    Swatch { name: "parchment", color: Rgba::opaque(254, 243, 199) },
];

/// Brush widths offered by the size strip, in canvas pixels.
pub const BRUSH_SIZES: &[f64] = &[1.0, 3.0, 6.0, 10.0, 16.0];

/// Look up a swatch by its selector name.
pub fn swatch_by_name(swatches: &'static [Swatch], name: &str) -> Option<Swatch> {
    swatches.iter().copied().find(|swatch| swatch.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_round_trip() {
        let rgba = Rgba::new(220, 38, 38, 200);
        let color: Color = rgba.into();
        assert_eq!(Rgba::from(color), rgba);
    }

    #[test]
    fn test_swatch_lookup() {
        let swatch = swatch_by_name(BRUSH_COLORS, "crimson").unwrap();
        assert_eq!(swatch.color, Rgba::opaque(220, 38, 38));
        assert!(swatch_by_name(BRUSH_COLORS, "mauve").is_none());
    }

    #[test]
    fn test_brush_style_serde_round_trip() {
        let brush = BrushStyle {
            width: 6.0,
            color: Rgba::opaque(14, 165, 233),
        };
        let json = serde_json::to_string(&brush).unwrap();
        let back: BrushStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, brush);
    }
}
