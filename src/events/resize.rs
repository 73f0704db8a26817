use super::Listener;
use crate::dom;
use backdrop_core::Viewport;
use web_sys as web;

/// Keep the canvas backing store in step with its CSS size and report the
/// new viewport.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    mut on_resize: impl FnMut(Viewport) + 'static,
) -> anyhow::Result<Listener> {
    Listener::new(window, "resize", move |_ev: web::Event| {
        let viewport = dom::canvas_viewport(&canvas);
        dom::sync_canvas_backing_size(&canvas, &viewport);
        on_resize(viewport);
    })
}
