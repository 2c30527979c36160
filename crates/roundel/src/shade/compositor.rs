use crate::coords::{ColorRgba, Vec2};
use crate::shade::aa::corner_blend_width;
use crate::shade::params::PanelParams;
use crate::shade::sdf::rounded_rect_sdf;

/// Fixed drop-shadow color: dark translucent gray.
pub const SHADOW_COLOR: ColorRgba = ColorRgba::new(0.1, 0.1, 0.1, 0.7);

/// Clamped Hermite interpolation between `edge0` and `edge1`.
///
/// Degenerate edges (`edge0 >= edge1`, e.g. a zero blend width) resolve as a
/// hard step at `edge0` instead of the NaN a naive division would produce.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 >= edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Shades one pixel of panel chrome.
///
/// Classifies the pixel into exactly one of three regions by its boundary
/// distance and blends accordingly:
///
/// 1. border band — between the outer boundary and the inward-shifted one;
/// 2. shadow band — outside, short of the outward-shifted boundary;
/// 3. fill — everything else (far-outside pixels fall through here and
///    resolve to alpha 0).
///
/// The band boundaries come from re-evaluating the distance field at
/// horizontally shifted sample points (inward by `2 * border_width`, outward
/// by `2 * shadow_extent`), which makes both bands one-sided. That, the
/// missing fill/border color mix, and the missing backdrop blend for the
/// shadow are known limitations kept for output compatibility.
///
/// `df_fwidth` is the screen-space derivative of the distance field at this
/// pixel, supplied by the execution environment.
pub fn shade_pixel(params: &PanelParams, pixel: Vec2, df_fwidth: f32) -> ColorRgba {
    let radii = params.effective_radii();
    let half = params.half_size();
    let p = pixel - params.center();

    let d = rounded_rect_sdf(p, half, radii);
    let d_border = rounded_rect_sdf(p - Vec2::new(2.0 * params.border_width, 0.0), half, radii);
    let d_shadow = rounded_rect_sdf(p + Vec2::new(2.0 * params.shadow_extent, 0.0), half, radii);

    let delta = corner_blend_width(params.rect, radii, pixel, df_fwidth);

    if d > d_border && d <= 0.0 {
        let seam = 1.0 - smoothstep(1.0 - delta / 2.0, 1.0 + delta / 2.0, 1.0 + d);
        params.border_color.scale_alpha(seam)
    } else if d > 0.0 && d < d_shadow {
        let falloff = 1.0 - smoothstep(0.0, 1.0, d / d_shadow);
        SHADOW_COLOR.scale_alpha(falloff)
    } else {
        // Softer, asymmetric falloff tuned for anti-aliased interior edges.
        let edge = 1.0 - smoothstep(1.0 - 3.0 * delta / 4.0, 1.0 + delta / 4.0, 1.0 + d);
        params.fill.scale_alpha(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect, Viewport};

    const EPS: f32 = 1e-3;

    /// The end-to-end scenario: 100x100 rect, all radii 20, border 5,
    /// shadow 10, white fill, black border.
    fn panel() -> PanelParams {
        PanelParams::new(
            Viewport::new(200.0, 200.0),
            Rect::new(50.0, 50.0, 100.0, 100.0),
            CornerRadii::all(20.0),
            5.0,
            10.0,
            ColorRgba::white(),
            ColorRgba::black(),
        )
    }

    // ── smoothstep ────────────────────────────────────────────────────────

    #[test]
    fn smoothstep_clamps_and_interpolates() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_degenerate_edges_step_without_nan() {
        assert_eq!(smoothstep(1.0, 1.0, 0.9), 0.0);
        assert_eq!(smoothstep(1.0, 1.0, 1.0), 1.0);
    }

    // ── region classification ─────────────────────────────────────────────

    #[test]
    fn center_resolves_to_fill_unmodified() {
        let out = shade_pixel(&panel(), Vec2::new(100.0, 100.0), 1.0);
        assert_eq!(out, ColorRgba::white());
    }

    #[test]
    fn fill_is_exact_when_border_and_shadow_are_disabled() {
        let mut params = panel();
        params.border_width = 0.0;
        params.shadow_extent = 0.0;
        params.fill = ColorRgba::new(0.3, 0.5, 0.7, 0.9);
        let out = shade_pixel(&params, Vec2::new(100.0, 100.0), 1.0);
        assert_eq!(out, params.fill);
    }

    #[test]
    fn inner_right_edge_is_border_band() {
        // 1 unit inside the right edge midpoint: d = -1, within the band.
        let out = shade_pixel(&panel(), Vec2::new(149.0, 100.0), 1.0);
        assert_eq!(out, ColorRgba::black());
    }

    #[test]
    fn zero_border_width_empties_the_border_band() {
        let mut params = panel();
        params.border_width = 0.0;
        let out = shade_pixel(&params, Vec2::new(149.0, 100.0), 1.0);
        assert_eq!(out, params.fill);
    }

    #[test]
    fn outer_right_edge_is_shadow_band() {
        // 2 units outside the right edge midpoint: d = 2 and the shifted
        // boundary sits at d_shadow = 22, so the falloff argument is 2/22.
        let out = shade_pixel(&panel(), Vec2::new(152.0, 100.0), 1.0);
        assert_eq!((out.r, out.g, out.b), (0.1, 0.1, 0.1));
        let expected = 0.7 * (1.0 - smoothstep(0.0, 1.0, 2.0 / 22.0));
        assert!((out.a - expected).abs() < EPS);
        assert!((out.a - 0.6837).abs() < EPS);
    }

    #[test]
    fn zero_shadow_extent_empties_the_shadow_band() {
        let mut params = panel();
        params.shadow_extent = 0.0;
        let out = shade_pixel(&params, Vec2::new(152.0, 100.0), 1.0);
        assert_eq!(out.a, 0.0);
    }

    #[test]
    fn far_outside_resolves_to_transparent_fill() {
        // Left of the panel: the outward (+x) shadow shift points away from
        // this side, so the pixel falls through to the fill rule at alpha 0.
        let out = shade_pixel(&panel(), Vec2::new(1.0, 100.0), 1.0);
        assert_eq!(out.a, 0.0);
    }

    #[test]
    fn shadow_tail_extends_only_on_the_shifted_side() {
        // The horizontal band shift is one-sided by construction: the
        // mirrored pixel left of the panel never classifies as shadow.
        let right = shade_pixel(&panel(), Vec2::new(152.0, 100.0), 1.0);
        let left = shade_pixel(&panel(), Vec2::new(48.0, 100.0), 1.0);
        assert!(right.a > 0.0);
        assert_eq!(left.a, 0.0);
    }

    // ── falloff continuity ────────────────────────────────────────────────

    #[test]
    fn fill_alpha_never_increases_from_center_outward() {
        // Border and shadow disabled so every sample stays in the fill
        // region; walk the top-left diagonal straight through the corner AA
        // zone, where delta varies along the ray.
        let mut params = panel();
        params.border_width = 0.0;
        params.shadow_extent = 0.0;

        let center = params.center();
        let dir = Vec2::new(-1.0, 1.0) / 2f32.sqrt();
        let mut previous = f32::INFINITY;
        let mut t = 0.0;
        while t <= 120.0 {
            let alpha = shade_pixel(&params, center + dir * t, 1.5).a;
            assert!(alpha <= previous + 1e-4, "alpha rose at t = {t}");
            previous = alpha;
            t += 0.25;
        }
        assert_eq!(previous, 0.0);
    }
}
