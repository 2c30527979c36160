use crate::coords::{CornerRadii, Vec2};

/// Signed distance from `p` to the rounded-rectangle boundary.
///
/// `p` is relative to the rectangle center, `half` is the half-size. Negative
/// inside, zero on the boundary, positive outside.
///
/// The standard rounded-box SDF generalized to four radii: the scalar radius
/// is re-selected per quadrant (sign of `p.x` picks the left/right pair, sign
/// of `p.y` picks top vs. bottom) before the single-radius formula applies.
/// Radii are expected to be pre-clamped (see `CornerRadii::clamped_to`); the
/// evaluator itself stays pure.
pub fn rounded_rect_sdf(p: Vec2, half: Vec2, radii: CornerRadii) -> f32 {
    let (top, bottom) = if p.x > 0.0 {
        (radii.top_right, radii.bottom_right)
    } else {
        (radii.top_left, radii.bottom_left)
    };
    let r = if p.y > 0.0 { top } else { bottom };

    let q = p.abs() - half + Vec2::new(r, r);
    q.x.max(q.y).min(0.0) + q.max(0.0).length() - r
}
