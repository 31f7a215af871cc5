//! The capture surface component.
//!
//! Composes the pointer tracker, the active tool, and the raster surface.
//! All operations are synchronous and local; the only defensive checks are
//! uninitialized-surface guards, which make the operation a silent no-op
//! rather than an error.

use crate::tracker::StrokeTracker;
use scrawl_core::input::{InputEvent, SurfaceRect};
use scrawl_core::model::Tool;
use scrawl_raster::{RasterResult, StrokeSurface, to_data_uri};
use serde::{Deserialize, Serialize};

/// Default logical height of the drawing area.
pub const DEFAULT_LOGICAL_HEIGHT: f32 = 400.0;

/// Host-supplied sizing configuration.
///
/// `logical_width` overrides the measured container width when set;
/// `logical_height` is fixed at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub logical_width: Option<f32>,
    pub logical_height: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            logical_width: None,
            logical_height: DEFAULT_LOGICAL_HEIGHT,
        }
    }
}

type SaveCallback = Box<dyn FnMut(&str)>;

/// The freehand capture component.
///
/// Lifecycle: construct, [`mount`](Self::mount) with the measured container
/// rect, feed input events, and [`export_image`](Self::export_image) on
/// demand. Resizing reallocates the buffer and discards its contents.
pub struct CaptureSurface {
    config: CaptureConfig,
    surface: Option<StrokeSurface>,
    tracker: StrokeTracker,
    tool: Tool,
    on_save: Option<SaveCallback>,
}

impl CaptureSurface {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            surface: None,
            tracker: StrokeTracker::new(),
            tool: Tool::default(),
            on_save: None,
        }
    }

    /// Register the host's save callback, invoked synchronously by
    /// [`export_image`](Self::export_image).
    pub fn on_save(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_save = Some(Box::new(callback));
        self
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Allocate the backing buffer from the measured container and device
    /// pixel ratio. The configured width, when present, wins over the
    /// measurement.
    pub fn mount(&mut self, container: &SurfaceRect, dpr: f32) -> RasterResult<()> {
        let width = self.config.logical_width.unwrap_or(container.width);
        let surface = StrokeSurface::new(width, self.config.logical_height, dpr)?;
        log::debug!("mounted at {width}x{} dpr {dpr}", self.config.logical_height);
        self.surface = Some(surface);
        Ok(())
    }

    /// Re-measure after a container or device-pixel-ratio change.
    ///
    /// The buffer is recreated, not resampled: prior raster content is lost.
    /// Any in-progress stroke is abandoned with it.
    pub fn handle_resize(&mut self, container: &SurfaceRect, dpr: f32) -> RasterResult<()> {
        self.tracker = StrokeTracker::new();
        self.mount(container, dpr)
    }

    /// Drop the backing buffer. Subsequent input and export calls no-op
    /// until the next mount.
    pub fn unmount(&mut self) {
        self.tracker = StrokeTracker::new();
        self.surface = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The backing surface, if mounted. Mainly for hosts that want to
    /// inspect pixels (tests, thumbnails).
    pub fn surface(&self) -> Option<&StrokeSurface> {
        self.surface.as_ref()
    }

    // ─── Tools ───────────────────────────────────────────────────────────

    /// Select the tool applied to subsequent segments. Pixels already on
    /// the surface are unaffected.
    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!("tool -> {tool:?}");
        self.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Feed one normalized input event. Each move while drawing commits one
    /// segment to the buffer synchronously, styled by the tool active at
    /// that moment.
    pub fn handle(&mut self, event: &InputEvent) {
        let Some(surface) = self.surface.as_mut() else {
            // Input before mount: nothing to draw on.
            return;
        };

        if let Some(segment) = self.tracker.handle(event) {
            surface.stroke_segment(segment.from, segment.to, &self.tool.style());
        }
    }

    // ─── Bulk operations ─────────────────────────────────────────────────

    /// Wipe the buffer to the background. Keeps the active tool and any
    /// in-progress pointer state.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
    }

    /// Encode the current buffer as a `data:image/png;base64,...` URI,
    /// deliver it to the save callback if one is registered, and return it.
    ///
    /// Returns `None` before mount or if encoding fails; both are silent
    /// from the host's perspective.
    pub fn export_image(&mut self) -> Option<String> {
        let surface = self.surface.as_ref()?;
        match to_data_uri(surface) {
            Ok(uri) => {
                if let Some(callback) = self.on_save.as_mut() {
                    callback(&uri);
                }
                Some(uri)
            }
            Err(err) => {
                log::error!("export failed: {err}");
                None
            }
        }
    }
}
