//! Roundel core crate.
//!
//! Signed-distance shading for rounded panel chrome: fill, inset border, and
//! an outward drop shadow, anti-aliased without supersampling. The shading
//! routine is a pure per-pixel function; `raster` provides a CPU execution
//! environment for callers without a GPU pipeline.

pub mod coords;
pub mod logging;
pub mod raster;
pub mod shade;
