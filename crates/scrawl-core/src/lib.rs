pub mod input;
pub mod model;

pub use input::{InputEvent, SurfaceRect, TouchPoint};
pub use model::*;
