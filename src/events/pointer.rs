use super::Listener;
use crate::constants::POINTER_EVENTS;
use crate::dom;
use crate::input::{self, PointerSpace};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Listen for mouse and touch movement on `window` and report the position
/// normalized in `space`, with the event's host time.
pub fn wire_pointer(
    window: &web::Window,
    space: PointerSpace,
    on_move: impl FnMut(Vec2, f64) + 'static,
) -> anyhow::Result<Vec<Listener>> {
    let on_move = Rc::new(RefCell::new(on_move));
    POINTER_EVENTS
        .iter()
        .map(|&kind| {
            let on_move = on_move.clone();
            let space = space.clone();
            Listener::new(window, kind, move |ev: web::Event| {
                if let Some(client) = input::event_client_point(&ev) {
                    let uv = input::pointer_uv(client, &space);
                    (&mut *on_move.borrow_mut())(uv, dom::now_ms());
                }
            })
        })
        .collect()
}
