use crate::coords::Vec2;
use crate::shade::params::PanelParams;
use crate::shade::sdf::rounded_rect_sdf;

/// Substitute for the GPU derivative builtin.
///
/// Hardware shades pixels in small synchronized groups and derives `fwidth`
/// from neighbor differences; on the CPU each invocation stands alone, so the
/// harness either re-evaluates the distance field at one-pixel offsets or
/// uses a fixed width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Derivative {
    /// Fixed blend width, e.g. `1.0` for a plain 1:1 pixel grid.
    Constant(f32),
    /// One-sided finite differences: `|ddx| + |ddy|` at +1px offsets.
    FiniteDifference,
}

impl Derivative {
    /// Screen-space derivative of the distance field at `pixel`.
    pub fn df_fwidth(&self, params: &PanelParams, pixel: Vec2) -> f32 {
        match *self {
            Derivative::Constant(width) => width,
            Derivative::FiniteDifference => {
                let radii = params.effective_radii();
                let half = params.half_size();
                let center = params.center();

                let d = rounded_rect_sdf(pixel - center, half, radii);
                let dx = rounded_rect_sdf(pixel + Vec2::new(1.0, 0.0) - center, half, radii);
                let dy = rounded_rect_sdf(pixel + Vec2::new(0.0, 1.0) - center, half, radii);
                (dx - d).abs() + (dy - d).abs()
            }
        }
    }
}
