use crate::coords::{CornerRadii, Rect, Vec2};

/// Blend width used to soften the boundary near a rounded corner.
///
/// Checks the pixel against the four corner anchor points in fixed order
/// top-left, top-right, bottom-left, bottom-right; the first corner whose
/// effective radius exceeds the anchor distance wins. The ordered branches
/// are deliberate: when two corner regions overlap this biases toward the
/// earlier corner. Rendered output depends on that bias, so it must not be
/// replaced by a nearest-of-four selection.
///
/// `df_fwidth` is the local screen-space derivative of the distance field, so
/// the blend stays about one pixel wide independent of scale. Pixels outside
/// every corner region get 0; straight edges rely on the compositor's
/// degenerate smoothstep instead.
pub fn corner_blend_width(rect: Rect, radii: CornerRadii, pixel: Vec2, df_fwidth: f32) -> f32 {
    let min = rect.min();
    let max = rect.max();

    // (anchor, radius), in priority order. +Y up: top corners carry max.y.
    let corners = [
        (Vec2::new(min.x, max.y), radii.top_left),
        (Vec2::new(max.x, max.y), radii.top_right),
        (Vec2::new(min.x, min.y), radii.bottom_left),
        (Vec2::new(max.x, min.y), radii.bottom_right),
    ];

    for (anchor, radius) in corners {
        let dist = pixel.distance(anchor);
        if dist < radius {
            return (radius - dist) / radius * df_fwidth * 2.0;
        }
    }
    0.0
}
