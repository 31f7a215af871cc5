//! Pointer state machine for stroke capture.
//!
//! Two states: `Idle` and `Drawing`. A stroke is a connected path from
//! pointer-down to pointer-up; each move while drawing yields exactly one
//! segment to commit. The tracker is pure — it never touches pixels — so
//! the rendering side can apply whatever style is active at commit time.

use scrawl_core::input::InputEvent;
use scrawl_core::model::{Point, Segment};

#[derive(Debug, Clone, Copy, PartialEq)]
enum TrackState {
    Idle,
    Drawing { last: Point },
}

/// Turns normalized input events into stroke segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeTracker {
    state: TrackState,
}

impl Default for StrokeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self {
            state: TrackState::Idle,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, TrackState::Drawing { .. })
    }

    /// Advance the state machine. Returns the segment to commit, if any.
    ///
    /// - `PointerDown` begins a path at the event position; no pixels yet.
    /// - `PointerMove` while drawing extends the path by one segment.
    /// - `PointerMove` while idle is a stray event and is ignored.
    /// - `PointerUp` and `PointerLeave` both close the path.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Segment> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.state = TrackState::Drawing {
                    last: Point::new(*x, *y),
                };
                None
            }
            InputEvent::PointerMove { x, y } => {
                let TrackState::Drawing { last } = &mut self.state else {
                    log::trace!("stray move at ({x}, {y}) ignored");
                    return None;
                };
                let next = Point::new(*x, *y);
                let segment = Segment {
                    from: *last,
                    to: next,
                };
                *last = next;
                Some(segment)
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.state = TrackState::Idle;
                None
            }
        }
    }
}
