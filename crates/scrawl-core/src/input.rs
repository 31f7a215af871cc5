//! Input abstraction layer.
//!
//! Normalizes mouse and touch events into a unified `InputEvent` enum
//! consumed by the capture surface. Mouse events arrive already relative to
//! the surface element; touch events carry viewport (client) coordinates and
//! are normalized against the surface's bounding rectangle.

use serde::{Deserialize, Serialize};

/// A normalized input event from any pointing device.
///
/// Coordinates are logical (device-independent) and relative to the
/// surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, first touch contact).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved while pressed.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp,

    /// Pointer left the surface. Ends any in-progress stroke, same as
    /// `PointerUp`.
    PointerLeave,
}

/// The surface's position and size within the host viewport, in logical
/// pixels. Produced by the host's container measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A single touch contact in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

impl InputEvent {
    /// Create a PointerDown from a mouse event's element-relative offset.
    pub fn mouse_down(offset_x: f32, offset_y: f32) -> Self {
        Self::PointerDown {
            x: offset_x,
            y: offset_y,
        }
    }

    /// Create a PointerMove from a mouse event's element-relative offset.
    pub fn mouse_move(offset_x: f32, offset_y: f32) -> Self {
        Self::PointerMove {
            x: offset_x,
            y: offset_y,
        }
    }

    /// Create a PointerDown from a touch list. Only the first touch point
    /// is tracked; simultaneous extra contacts are ignored. Returns `None`
    /// for an empty list.
    pub fn touch_start(touches: &[TouchPoint], rect: &SurfaceRect) -> Option<Self> {
        let touch = touches.first()?;
        Some(Self::PointerDown {
            x: touch.client_x - rect.left,
            y: touch.client_y - rect.top,
        })
    }

    /// Create a PointerMove from a touch list, tracking the first touch
    /// point only.
    pub fn touch_move(touches: &[TouchPoint], rect: &SurfaceRect) -> Option<Self> {
        let touch = touches.first()?;
        Some(Self::PointerMove {
            x: touch.client_x - rect.left,
            y: touch.client_y - rect.top,
        })
    }

    /// Touch lifted.
    pub fn touch_end() -> Self {
        Self::PointerUp
    }

    /// Extract position if this event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } => Some((*x, *y)),
            Self::PointerUp | Self::PointerLeave => None,
        }
    }
}
