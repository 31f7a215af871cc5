//! The freehand capture component.
//!
//! `CaptureSurface` is a leaf: it owns its backing raster buffer and tool
//! state, consumes normalized input events, and exposes a narrow contract
//! (handle input, clear, export) to the hosting view. The host owns the
//! exported image and any onward transmission.

pub mod capture;
pub mod tracker;

pub use capture::{CaptureConfig, CaptureSurface};
pub use tracker::StrokeTracker;
