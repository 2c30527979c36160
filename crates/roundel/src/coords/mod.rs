//! Coordinate and geometry types shared across the shading core and harness.
//!
//! Canonical space:
//! - Surface pixels
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! Rectangle origins are lower-left corners; "top" corners are the ones with
//! the larger Y coordinate.

mod color;
mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
