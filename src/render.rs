use backdrop_core::{BarGeometry, StrokeStyle, Surface, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D backend for the core `Surface`.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    // rectangle with only the top corners rounded
    fn trace_bar(&self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        let r = radius.min(h).max(0.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x, y + h);
        ctx.line_to(x, y + r);
        ctx.quadratic_curve_to(x, y, x + r, y);
        ctx.line_to(x + w - r, y);
        ctx.quadratic_curve_to(x + w, y, x + w, y + r);
        ctx.line_to(x + w, y + h);
        ctx.close_path();
    }
}

impl Surface for CanvasPainter {
    fn clear(&mut self, viewport: &Viewport) {
        let dpr = viewport.pixel_ratio as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_stroke_style_str(&style.color.to_string());
        ctx.set_line_width(style.width as f64);
        ctx.set_line_cap("round");
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.stroke();
    }

    fn fill_bar(&mut self, bar: &BarGeometry) {
        let ctx = &self.ctx;
        let (x, y, w, h) = (bar.x as f64, bar.y as f64, bar.width as f64, bar.height as f64);

        let gradient = ctx.create_linear_gradient(x, y + h, x, y);
        for stop in &bar.gradient {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
        if let Some(glow) = &bar.glow {
            ctx.set_shadow_color(&glow.color.to_string());
            ctx.set_shadow_blur(glow.blur as f64);
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        self.trace_bar(x, y, w, h, bar.corner_radius as f64);
        ctx.fill();
        ctx.set_shadow_blur(0.0);

        if let Some(peak) = &bar.peak {
            ctx.set_fill_style_str(&peak.color.to_string());
            if let Some(glow) = &peak.glow {
                ctx.set_shadow_color(&glow.color.to_string());
                ctx.set_shadow_blur(glow.blur as f64);
            }
            ctx.fill_rect(x, peak.y as f64, w, peak.thickness as f64);
            ctx.set_shadow_blur(0.0);
        }
    }
}
