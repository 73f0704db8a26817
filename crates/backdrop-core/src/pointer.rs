use crate::constants::{INTERACTION_WINDOW_MS, POINTER_REST};
use glam::Vec2;

/// Smoothed pointer position in viewport-normalized [0,1]² space.
///
/// Event handlers write `target`; the frame loop walks `current` toward it
/// with a single-pole low-pass filter, so `current` can never overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    target: Vec2,
    current: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        let rest = Vec2::from(POINTER_REST);
        Self {
            target: rest,
            current: rest,
        }
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new target, clamped into [0,1]². Non-finite input is ignored.
    pub fn set_target(&mut self, uv: Vec2) {
        if !uv.is_finite() {
            return;
        }
        self.target = uv.clamp(Vec2::ZERO, Vec2::ONE);
    }

    /// One frame of exponential interpolation toward the target.
    #[inline]
    pub fn step(&mut self, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        self.current += (self.target - self.current) * alpha;
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }
}

/// Tracks when the pointer last moved, in host milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionTracker {
    last_ms: Option<f64>,
}

impl InteractionTracker {
    pub fn touch(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Linear fade from 1 at the moment of interaction to 0 after the
    /// interaction window. Zero until the first interaction.
    pub fn strength(&self, now_ms: f64) -> f32 {
        match self.last_ms {
            Some(last) => {
                let since = (now_ms - last).max(0.0);
                (1.0 - since / INTERACTION_WINDOW_MS).max(0.0) as f32
            }
            None => 0.0,
        }
    }
}
