use backdrop_core::{AnimationTicker, FrameRequester, FrameThrottle, Scene, Surface};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Closure<dyn FnMut(f64)>;
pub type FrameSlot = Rc<RefCell<Option<FrameCallback>>>;

pub type Ticker<S> = AnimationTicker<RafRequester, S>;
pub type SharedTicker<S> = Rc<RefCell<Option<Ticker<S>>>>;

/// `requestAnimationFrame` behind the core `FrameRequester` hook.
///
/// Holds the frame callback weakly: the mount owns it, and once the mount
/// drops it no further frame can be requested.
pub struct RafRequester {
    window: web::Window,
    slot: Weak<RefCell<Option<FrameCallback>>>,
}

impl FrameRequester for RafRequester {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.slot.upgrade()?;
        let slot = slot.borrow();
        let callback = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Build the frame callback around `painter` and start a ticker for
/// `scene`. The returned slot keeps the callback alive.
pub fn start_loop<S, P>(
    window: web::Window,
    scene: S,
    mut painter: P,
    throttle: Option<FrameThrottle>,
) -> (SharedTicker<S>, FrameSlot)
where
    S: Scene + 'static,
    P: Surface + 'static,
{
    let ticker: SharedTicker<S> = Rc::new(RefCell::new(None));
    let slot: FrameSlot = Rc::new(RefCell::new(None));

    let ticker_tick = ticker.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if let Some(t) = ticker_tick.borrow_mut().as_mut() {
            t.tick(timestamp, &mut painter);
        }
    }) as Box<dyn FnMut(f64)>));

    let requester = RafRequester {
        window,
        slot: Rc::downgrade(&slot),
    };
    let mut started = AnimationTicker::start(requester, scene);
    if let Some(throttle) = throttle {
        started = started.with_throttle(throttle);
    }
    *ticker.borrow_mut() = Some(started);
    (ticker, slot)
}
