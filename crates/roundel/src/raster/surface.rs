use anyhow::{ensure, Result};
use bytemuck::{Pod, Zeroable};

use crate::coords::ColorRgba;

/// One RGBA8 texel, straight alpha.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8(pub [u8; 4]);

/// CPU render target: an RGBA8 pixel grid.
///
/// Texels are stored row-major top-to-bottom (the usual image layout);
/// accessors take +Y-up coordinates and map rows internally, so callers stay
/// in the crate's canonical space.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    texels: Vec<Rgba8>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure!(width > 0 && height > 0, "surface has zero size");
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            texels: vec![Rgba8([0; 4]); len],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        // Row 0 of storage is the top row; y counts up from the bottom.
        (self.height - 1 - y) as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> Rgba8 {
        self.texels[self.index(x, y)]
    }

    /// Clears every texel to `color`.
    pub fn fill(&mut self, color: ColorRgba) {
        let texel = Rgba8(color.to_rgba8());
        self.texels.fill(texel);
    }

    /// Straight-alpha source-over blend of `src` onto the texel at `(x, y)`.
    pub fn blend_pixel(&mut self, x: u32, y: u32, src: ColorRgba) {
        let idx = self.index(x, y);
        let dst = self.texels[idx].0;

        let sa = src.a.clamp(0.0, 1.0);
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            self.texels[idx] = Rgba8([0; 4]);
            return;
        }

        let blend = |s: f32, d: u8| {
            let d = d as f32 / 255.0;
            let c = (s.clamp(0.0, 1.0) * sa + d * da * (1.0 - sa)) / out_a;
            (c * 255.0 + 0.5) as u8
        };
        self.texels[idx] = Rgba8([
            blend(src.r, dst[0]),
            blend(src.g, dst[1]),
            blend(src.b, dst[2]),
            (out_a * 255.0 + 0.5) as u8,
        ]);
    }

    /// Raw RGBA8 bytes, rows top-to-bottom — ready for image encoders.
    #[inline]
    pub fn data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }
}
