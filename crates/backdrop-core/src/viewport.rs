use crate::constants::MAX_PIXEL_RATIO;
use crate::error::{BackdropError, Result};
use crate::tier::DeviceTier;
use glam::Vec2;

/// CSS-pixel size of a drawing area plus its (capped) device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(BackdropError::InvalidViewport { width, height });
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(BackdropError::InvalidPixelRatio(pixel_ratio));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio: pixel_ratio.min(MAX_PIXEL_RATIO),
        })
    }

    /// Nothing can be drawn into a zero-area viewport.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn tier(&self) -> DeviceTier {
        DeviceTier::classify(self.width)
    }

    /// Map a normalized [0,1]² position to CSS pixels.
    #[inline]
    pub fn to_px(&self, uv: Vec2) -> Vec2 {
        Vec2::new(uv.x * self.width, uv.y * self.height)
    }

    /// Backing store size in device pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio) as u32;
        let h = (self.height * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }
}
