//! The per-pixel shading core.
//!
//! Pure functions only: every pixel is shaded independently from the per-draw
//! constants in [`PanelParams`] and its own coordinate, with no shared state
//! and no error path. Malformed inputs are clamped (radii) or fall out as
//! degenerate geometry, never as a fault.
//!
//! The screen-space derivative of the distance field (`df_fwidth`) is an
//! input here; the execution environment supplies it (GPU derivative builtin,
//! or the substitutes in [`crate::raster`]).

pub mod aa;
pub mod compositor;
pub mod params;
pub mod sdf;

pub use compositor::{shade_pixel, smoothstep, SHADOW_COLOR};
pub use params::PanelParams;
