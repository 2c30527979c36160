use super::Vec2;

/// Per-corner radii for a rounded rectangle (surface pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right,
/// bottom-left. Requested values are free-form; [`clamped_to`](Self::clamped_to)
/// produces the effective radii the distance field actually uses.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Clamps each radius into what a rectangle of `size` can carry.
    ///
    /// Negative radii become 0; radii beyond the smaller rectangle dimension
    /// are clamped to it, so the rounding can never self-intersect.
    #[inline]
    pub fn clamped_to(self, size: Vec2) -> Self {
        let cap = size.x.min(size.y).max(0.0);
        let clamp = |r: f32| r.clamp(0.0, cap);
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }
}
