//! The stroke surface: a pixmap at physical resolution addressed in logical
//! coordinates.
//!
//! Invariant: the backing pixmap is always exactly
//! `round(logical × device_pixel_ratio)` pixels. Changing either side of
//! that product means allocating a new surface; the buffer is recreated
//! blank, not resampled, so prior raster content is lost on resize. That is
//! the documented behavior of the component, not an accident.

use crate::error::{RasterError, RasterResult};
use scrawl_core::model::{Color, Point, StrokeCap, StrokeJoin, StrokeStyle};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Maximum physical dimension (matches common browser canvas limits).
const MAX_DIMENSION: u32 = 32767;

/// An addressable drawing target with an opaque background.
///
/// Drawing commands take logical coordinates and an explicit [`StrokeStyle`];
/// there is no mutable style state on the surface itself.
pub struct StrokeSurface {
    logical_width: f32,
    logical_height: f32,
    dpr: f32,
    background: Color,
    pixmap: Pixmap,
}

impl StrokeSurface {
    /// Allocate a surface of `logical_width × logical_height` logical pixels
    /// backed by a `logical × dpr` physical buffer, filled with the
    /// background color.
    pub fn new(logical_width: f32, logical_height: f32, dpr: f32) -> RasterResult<Self> {
        Self::with_background(logical_width, logical_height, dpr, Color::BACKGROUND)
    }

    /// Allocate with an explicit background color.
    pub fn with_background(
        logical_width: f32,
        logical_height: f32,
        dpr: f32,
        background: Color,
    ) -> RasterResult<Self> {
        let invalid = || RasterError::InvalidDimensions {
            width: logical_width,
            height: logical_height,
            dpr,
        };

        if !(logical_width > 0.0 && logical_height > 0.0 && dpr > 0.0) {
            return Err(invalid());
        }

        let physical_width = (logical_width * dpr).round() as u32;
        let physical_height = (logical_height * dpr).round() as u32;
        if physical_width == 0
            || physical_height == 0
            || physical_width > MAX_DIMENSION
            || physical_height > MAX_DIMENSION
        {
            return Err(invalid());
        }

        let mut pixmap = Pixmap::new(physical_width, physical_height).ok_or_else(invalid)?;
        pixmap.fill(to_skia_color(background));

        log::debug!(
            "allocated surface {logical_width}x{logical_height} @ dpr {dpr} \
             ({physical_width}x{physical_height} physical)"
        );

        Ok(Self {
            logical_width,
            logical_height,
            dpr,
            background,
            pixmap,
        })
    }

    // ─── Geometry accessors ──────────────────────────────────────────────

    pub fn logical_size(&self) -> (f32, f32) {
        (self.logical_width, self.logical_height)
    }

    pub fn physical_size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// The backing pixel buffer (premultiplied RGBA, physical resolution).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    // ─── Drawing ─────────────────────────────────────────────────────────

    /// Stroke one segment in logical coordinates with the given style.
    ///
    /// The segment is rasterized immediately under the surface's uniform
    /// DPR scale: a logical point (x, y) lands at physical (x·dpr, y·dpr),
    /// and the stroke width scales with it.
    pub fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            // Non-finite coordinates produce no path; skip the segment.
            return;
        };

        let [r, g, b, a] = style.color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width,
            line_cap: map_cap(style.cap),
            line_join: map_join(style.join),
            ..Stroke::default()
        };

        log::trace!(
            "segment ({}, {}) -> ({}, {}) width {}",
            from.x,
            from.y,
            to.x,
            to.y,
            style.width
        );

        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            Transform::from_scale(self.dpr, self.dpr),
            None,
        );
    }

    /// Fill the entire buffer with the background color. Idempotent.
    pub fn clear(&mut self) {
        log::debug!("clear surface");
        self.pixmap.fill(to_skia_color(self.background));
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn map_cap(cap: StrokeCap) -> LineCap {
    match cap {
        StrokeCap::Butt => LineCap::Butt,
        StrokeCap::Round => LineCap::Round,
        StrokeCap::Square => LineCap::Square,
    }
}

fn map_join(join: StrokeJoin) -> LineJoin {
    match join {
        StrokeJoin::Miter => LineJoin::Miter,
        StrokeJoin::Round => LineJoin::Round,
        StrokeJoin::Bevel => LineJoin::Bevel,
    }
}
