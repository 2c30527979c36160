use crate::coords::{ColorRgba, CornerRadii, Rect, Vec2, Viewport};

/// Per-draw inputs for panel chrome shading.
///
/// Everything here is constant across all pixels of one draw; only the pixel
/// coordinate varies per invocation. `rect.origin` is the lower-left corner
/// of the panel in surface space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelParams {
    pub canvas: Viewport,
    pub rect: Rect,
    pub radii: CornerRadii,
    /// Inset border thickness. 0 means no visible border band.
    pub border_width: f32,
    /// Outward shadow spread distance. 0 means no visible shadow band.
    pub shadow_extent: f32,
    pub fill: ColorRgba,
    pub border_color: ColorRgba,
}

impl PanelParams {
    #[inline]
    pub fn new(
        canvas: Viewport,
        rect: Rect,
        radii: CornerRadii,
        border_width: f32,
        shadow_extent: f32,
        fill: ColorRgba,
        border_color: ColorRgba,
    ) -> Self {
        Self { canvas, rect, radii, border_width, shadow_extent, fill, border_color }
    }

    /// Radii actually used by the distance field: clamped so the rounding can
    /// never exceed what the rectangle can carry.
    #[inline]
    pub fn effective_radii(&self) -> CornerRadii {
        self.radii.clamped_to(self.rect.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.rect.half_size()
    }
}
