use crate::surface::{BarGeometry, StrokeStyle, Surface};
use crate::viewport::Viewport;
use glam::Vec2;
use std::fmt::Write;

/// SVG `d` attribute for a polyline: `M x y L x y ...`. Empty for no points.
pub fn path_data(points: &[Vec2]) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{} {:.2} {:.2}", cmd, p.x, p.y);
    }
    d
}

/// Surface that accumulates one frame as SVG markup.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    viewport: Viewport,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the frame as a standalone `<svg>` document.
    pub fn document(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.viewport.width,
            h = self.viewport.height
        );
        if !self.defs.is_empty() {
            let _ = write!(out, "<defs>{}</defs>", self.defs);
        }
        out.push_str(&self.body);
        out.push_str("</svg>");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, viewport: &Viewport) {
        self.viewport = *viewport;
        self.defs.clear();
        self.body.clear();
        self.gradients = 0;
    }

    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle) {
        if points.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            path_data(points),
            style.color,
            style.width
        );
    }

    fn fill_bar(&mut self, bar: &BarGeometry) {
        let id = format!("bar{}", self.gradients);
        self.gradients += 1;
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{id}" x1="0" y1="1" x2="0" y2="0">"#
        );
        for stop in &bar.gradient {
            let _ = write!(
                self.defs,
                r#"<stop offset="{}" stop-color="{}"/>"#,
                stop.offset, stop.color
            );
        }
        self.defs.push_str("</linearGradient>");

        let _ = write!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="url(#{id})"/>"#,
            bar.x, bar.y, bar.width, bar.height, bar.corner_radius
        );
        if let Some(peak) = &bar.peak {
            let _ = write!(
                self.body,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{}" fill="{}"/>"#,
                bar.x, peak.y, bar.width, peak.thickness, peak.color
            );
        }
    }
}
