//! Core data model for the capture surface.
//!
//! Everything a stroke commit needs travels as an explicit value: the style
//! is a parameter of the commit operation, never shared mutable context
//! state. Switching tools therefore affects future segments only — there is
//! no order-of-operation hazard between a tool change and pixels already on
//! the surface.

use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The ink accent color (`#8B5CF6`).
    pub const ACCENT: Self = Self::rgba(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 1.0);

    /// The surface background. The eraser paints with this, so "erased"
    /// pixels are indistinguishable from untouched ones.
    pub const BACKGROUND: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Parse a hex color string: `#RGB` or `#RRGGBB`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgba(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                    1.0,
                ))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    1.0,
                ))
            }
            _ => None,
        }
    }

    /// Channels as 8-bit values, for handing to the rasterizer.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

// ─── Stroke style ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

/// Style applied to a single committed segment.
///
/// Widths and colors are in logical units; the surface scales them to
/// physical pixels when rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
}

impl StrokeStyle {
    /// Narrow accent-colored ink stroke.
    pub const fn pen() -> Self {
        Self {
            width: 3.0,
            color: Color::ACCENT,
            cap: StrokeCap::Round,
            join: StrokeJoin::Round,
        }
    }

    /// Wide background-colored stroke that overpaints existing ink.
    pub const fn eraser() -> Self {
        Self {
            width: 15.0,
            color: Color::BACKGROUND,
            cap: StrokeCap::Round,
            join: StrokeJoin::Round,
        }
    }
}

// ─── Tools ───────────────────────────────────────────────────────────────

/// The active tool determines the style of the *next* segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
}

impl Tool {
    pub const fn style(self) -> StrokeStyle {
        match self {
            Tool::Pen => StrokeStyle::pen(),
            Tool::Eraser => StrokeStyle::eraser(),
        }
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A position in logical (device-independent) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One step of a stroke: the path extension committed by a single
/// pointer-move while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}
