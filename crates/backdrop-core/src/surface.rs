//! Paint abstraction between the simulation and a concrete backend
//! (Canvas 2D in the browser, SVG text on the host).

use crate::viewport::Viewport;
use glam::Vec2;
use std::fmt;

/// CSS `hsla()` colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32, // percent
    pub lightness: f32,  // percent
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Hsla,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Hsla,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Hsla,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakMark {
    pub y: f32,
    pub thickness: f32,
    pub color: Hsla,
    pub glow: Option<Glow>,
}

/// Everything needed to paint one spectrum bar, in CSS pixels.
///
/// The gradient runs bottom (`y + height`) to top (`y`); only the two top
/// corners are rounded.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub gradient: [GradientStop; 3],
    pub glow: Option<Glow>,
    pub peak: Option<PeakMark>,
}

pub trait Surface {
    /// Reset the drawing area for a new frame.
    fn clear(&mut self, viewport: &Viewport);
    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle);
    fn fill_bar(&mut self, bar: &BarGeometry);
}

/// Counts draw calls; handy for host-side checks and debug logging.
#[derive(Clone, Debug, Default)]
pub struct NullSurface {
    pub clears: usize,
    pub polylines: usize,
    pub bars: usize,
}

impl Surface for NullSurface {
    fn clear(&mut self, _viewport: &Viewport) {
        self.clears += 1;
    }

    fn stroke_polyline(&mut self, _points: &[Vec2], _style: &StrokeStyle) {
        self.polylines += 1;
    }

    fn fill_bar(&mut self, _bar: &BarGeometry) {
        self.bars += 1;
    }
}
