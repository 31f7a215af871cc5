//! CPU raster surface for the Scrawl capture component.
//!
//! Owns the physical pixel buffer and the logical→physical coordinate
//! mapping. Callers issue drawing commands in logical coordinates; the
//! surface rasterizes them at `logical × device_pixel_ratio` resolution
//! through a uniform scale transform.

pub mod error;
pub mod export;
pub mod surface;

pub use error::{RasterError, RasterResult};
pub use export::{to_data_uri, to_png};
pub use surface::StrokeSurface;
