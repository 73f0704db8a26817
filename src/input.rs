use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Where pointer coordinates are normalized against.
#[derive(Clone)]
pub enum PointerSpace {
    /// The element's bounding client rect.
    Element(web::Element),
    /// The full window.
    Window,
}

/// Normalize a client-space point into [0,1]² relative to a rect. A
/// degenerate rect maps everything to the centre.
#[inline]
pub fn normalize_point(client: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    if !(size.x > 0.0 && size.y > 0.0) || !client.is_finite() {
        return Vec2::splat(0.5);
    }
    ((client - origin) / size).clamp(Vec2::ZERO, Vec2::ONE)
}

// ---------------- Event helpers ----------------
/// Client coordinates of a mouse event or of the first touch of a touch
/// event.
pub fn event_client_point(ev: &web::Event) -> Option<Vec2> {
    // mouse first: `TouchEvent` is not defined in every desktop browser
    if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
        return Some(Vec2::new(m.client_x() as f32, m.client_y() as f32));
    }
    if let Some(t) = ev.dyn_ref::<web::TouchEvent>() {
        let touch = t.touches().get(0)?;
        return Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
    }
    None
}

pub fn pointer_uv(client: Vec2, space: &PointerSpace) -> Vec2 {
    match space {
        PointerSpace::Element(el) => {
            let rect = el.get_bounding_client_rect();
            normalize_point(
                client,
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            )
        }
        PointerSpace::Window => {
            let size = web::window()
                .map(|w| {
                    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    Vec2::new(width as f32, height as f32)
                })
                .unwrap_or(Vec2::ZERO);
            normalize_point(client, Vec2::ZERO, size)
        }
    }
}
