//! Owned animation loop.
//!
//! An [`AnimationTicker`] holds the scene state, the pending frame request and
//! the pause/throttle policy. Creating one requests the first frame; dropping
//! it (or calling [`AnimationTicker::stop`]) cancels whatever is pending, so a
//! torn-down scene can never be called back.

use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use std::fmt;

/// A per-frame simulation driven by an [`AnimationTicker`].
pub trait Scene {
    fn resize(&mut self, viewport: Viewport);
    /// Pointer moved to `uv` (normalized, clamped by the scene) at host time
    /// `now_ms`.
    fn pointer_moved(&mut self, uv: Vec2, now_ms: f64);
    /// Advance clock, pointer and physics by one frame, in that order.
    fn step(&mut self, now_ms: f64);
    fn render<P: Surface + ?Sized>(&mut self, surface: &mut P);
}

/// Host hook that schedules the next tick (`requestAnimationFrame` in the
/// browser).
pub trait FrameRequester {
    type Handle: Copy + PartialEq + fmt::Debug;

    /// `None` when the host refused the request; the loop then stays idle.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Caps the work rate by skipping ticks that arrive early.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameThrottle {
    pub fn from_fps(fps: f64) -> Self {
        Self {
            interval_ms: 1000.0 / fps.max(1.0),
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Whether a tick at `timestamp_ms` should do work. The first tick is
    /// always admitted; later ones keep the remainder so the cadence does not
    /// drift.
    pub fn admit(&mut self, timestamp_ms: f64) -> bool {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(timestamp_ms);
            return true;
        };
        let elapsed = timestamp_ms - last;
        if elapsed < self.interval_ms {
            return false;
        }
        self.last_ms = Some(timestamp_ms - elapsed % self.interval_ms);
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    Hidden,
    Throttled,
    Stopped,
}

pub struct AnimationTicker<R: FrameRequester, S: Scene> {
    requester: R,
    scene: S,
    pending: Option<R::Handle>,
    throttle: Option<FrameThrottle>,
    visible: bool,
    running: bool,
    frames: u64,
}

impl<R: FrameRequester, S: Scene> AnimationTicker<R, S> {
    pub fn start(mut requester: R, scene: S) -> Self {
        let pending = requester.request_frame();
        Self {
            requester,
            scene,
            pending,
            throttle: None,
            visible: true,
            running: true,
            frames: 0,
        }
    }

    pub fn with_throttle(mut self, throttle: FrameThrottle) -> Self {
        self.throttle = Some(throttle);
        self
    }

    /// Frame callback body. The pending request is consumed; a new one is
    /// made unless the ticker has been stopped.
    pub fn tick<P: Surface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut P) -> TickOutcome {
        self.pending = None;
        if !self.running {
            return TickOutcome::Stopped;
        }

        let outcome = if !self.visible {
            TickOutcome::Hidden
        } else if !self
            .throttle
            .as_mut()
            .map_or(true, |t| t.admit(timestamp_ms))
        {
            TickOutcome::Throttled
        } else {
            self.scene.step(timestamp_ms);
            self.scene.render(surface);
            self.frames += 1;
            TickOutcome::Rendered
        };

        self.pending = self.requester.request_frame();
        outcome
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.scene.resize(viewport);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<R::Handle> {
        self.pending
    }

    /// Frames actually simulated and painted.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.requester.cancel_frame(handle);
        }
    }
}

impl<R: FrameRequester, S: Scene> Drop for AnimationTicker<R, S> {
    fn drop(&mut self) {
        self.stop();
    }
}
