//! Mounting and tearing down the animated layers.
//!
//! A [`Layer`] is one canvas with its own loop, listeners and (optionally)
//! visibility watch. Dropping it cancels the pending frame first, then
//! releases the callback, the listeners and the observer.

use crate::constants::*;
use crate::dom;
use crate::events::{self, Listener};
use crate::frame::{self, FrameSlot, SharedTicker};
use crate::input::PointerSpace;
use crate::render::CanvasPainter;
use crate::visibility::{self, VisibilityWatch};
use backdrop_core::{FrameThrottle, Scene, SpectrumBars, Viewport, WaveField};
use web_sys as web;

pub struct LayerOptions {
    pub pointer_space: PointerSpace,
    pub throttle: Option<FrameThrottle>,
    pub pause_offscreen: bool,
}

pub struct Layer<S: Scene + 'static> {
    name: &'static str,
    ticker: SharedTicker<S>,
    slot: FrameSlot,
    listeners: Vec<Listener>,
    visibility: Option<VisibilityWatch>,
}

pub fn mount_layer<S: Scene + 'static>(
    name: &'static str,
    canvas: web::HtmlCanvasElement,
    make_scene: impl FnOnce(Viewport) -> S,
    options: LayerOptions,
) -> anyhow::Result<Layer<S>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let painter = CanvasPainter::new(&canvas)?;

    let viewport = dom::canvas_viewport(&canvas);
    dom::sync_canvas_backing_size(&canvas, &viewport);
    let tier = viewport.tier();

    let (ticker, slot) = frame::start_loop(
        window.clone(),
        make_scene(viewport),
        painter,
        options.throttle,
    );

    let mut listeners = Vec::with_capacity(4);
    let ticker_resize = ticker.clone();
    listeners.push(events::wire_resize(&window, canvas.clone(), move |vp| {
        if let Ok(mut t) = ticker_resize.try_borrow_mut() {
            if let Some(t) = t.as_mut() {
                t.resize(vp);
            }
        }
    })?);
    let ticker_pointer = ticker.clone();
    listeners.extend(events::wire_pointer(
        &window,
        options.pointer_space,
        move |uv, now_ms| {
            if let Ok(mut t) = ticker_pointer.try_borrow_mut() {
                if let Some(t) = t.as_mut() {
                    t.scene_mut().pointer_moved(uv, now_ms);
                }
            }
        },
    )?);

    let visibility = if options.pause_offscreen {
        let ticker_vis = ticker.clone();
        visibility::watch(&canvas, VISIBILITY_THRESHOLD, move |visible| {
            if let Ok(mut t) = ticker_vis.try_borrow_mut() {
                if let Some(t) = t.as_mut() {
                    t.set_visible(visible);
                }
            }
        })
    } else {
        None
    };

    log::info!(
        "[{}] mounted {}x{} @{}x tier={}",
        name,
        viewport.width,
        viewport.height,
        viewport.pixel_ratio,
        tier.name()
    );
    Ok(Layer {
        name,
        ticker,
        slot,
        listeners,
        visibility,
    })
}

impl<S: Scene + 'static> Layer<S> {
    /// Frames painted so far.
    pub fn frames(&self) -> u64 {
        self.ticker
            .try_borrow()
            .ok()
            .and_then(|t| t.as_ref().map(|t| t.frames()))
            .unwrap_or(0)
    }
}

impl<S: Scene + 'static> Drop for Layer<S> {
    fn drop(&mut self) {
        let frames = self.frames();
        match self.ticker.try_borrow_mut() {
            // dropping the ticker cancels its pending frame
            Ok(mut t) => drop(t.take()),
            Err(_) => log::warn!("[{}] unmounted while ticking", self.name),
        }
        self.slot.borrow_mut().take();
        self.listeners.clear();
        self.visibility.take();
        log::info!("[{}] unmounted after {} frames", self.name, frames);
    }
}

/// Wave fibers beneath, spectrum bars on top.
pub struct Backdrop {
    waves: Option<Layer<WaveField>>,
    spectrum: Option<Layer<SpectrumBars>>,
}

impl Backdrop {
    pub fn is_empty(&self) -> bool {
        self.waves.is_none() && self.spectrum.is_none()
    }
}

/// Mount every layer whose canvas is present. A layer that cannot start is
/// skipped with a warning; `None` means nothing animates (reduced motion, or
/// no layer could start).
pub fn mount_backdrop(document: &web::Document) -> Option<Backdrop> {
    if dom::prefers_reduced_motion() {
        log::info!("[backdrop] reduced motion requested; not animating");
        return None;
    }

    let waves = dom::canvas_by_id(document, WAVES_CANVAS_ID).and_then(|canvas| {
        let space = PointerSpace::Element(canvas.clone().into());
        mount_layer(
            "waves",
            canvas,
            WaveField::new,
            LayerOptions {
                pointer_space: space,
                throttle: None,
                pause_offscreen: false,
            },
        )
    });
    let spectrum = dom::canvas_by_id(document, SPECTRUM_CANVAS_ID).and_then(|canvas| {
        mount_layer(
            "spectrum",
            canvas,
            SpectrumBars::new,
            LayerOptions {
                pointer_space: PointerSpace::Window,
                throttle: Some(FrameThrottle::from_fps(SPECTRUM_TARGET_FPS)),
                pause_offscreen: true,
            },
        )
    });

    let backdrop = Backdrop {
        waves: waves
            .map_err(|e| log::warn!("[waves] not mounted: {:?}", e))
            .ok(),
        spectrum: spectrum
            .map_err(|e| log::warn!("[spectrum] not mounted: {:?}", e))
            .ok(),
    };
    (!backdrop.is_empty()).then_some(backdrop)
}
