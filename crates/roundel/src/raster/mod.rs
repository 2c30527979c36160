//! CPU execution environment for the shading routine.
//!
//! The routine itself is a pure per-pixel function; this module supplies what
//! a GPU pipeline would otherwise provide — a pixel grid to invoke it over
//! and the screen-space derivative primitive. Iteration order carries no
//! semantics: every invocation depends only on the draw constants and its own
//! pixel coordinate.

mod derivative;
mod surface;

pub use derivative::Derivative;
pub use surface::{Rgba8, Surface};

use crate::coords::{Vec2, Viewport};
use crate::shade::{shade_pixel, PanelParams};

/// Shades every pixel of `surface` with the panel chrome routine and
/// source-over blends the results.
///
/// Pixel centers sit at half-texel offsets. Pixels the routine resolves to
/// alpha 0 (everything far outside the shape) leave the target untouched.
pub fn draw_panel(surface: &mut Surface, params: &PanelParams, derivative: Derivative) {
    log::debug!(
        "panel draw: {}x{} target, rect {:?}, derivative {:?}",
        surface.width(),
        surface.height(),
        params.rect,
        derivative,
    );
    if params.canvas != Viewport::new(surface.width() as f32, surface.height() as f32) {
        log::warn!(
            "draw canvas {:?} does not match the {}x{} target",
            params.canvas,
            surface.width(),
            surface.height(),
        );
    }

    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let pixel = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let df_fwidth = derivative.df_fwidth(params, pixel);
            let color = shade_pixel(params, pixel, df_fwidth);
            if color.a > 0.0 {
                surface.blend_pixel(x, y, color);
            }
        }
    }
}
