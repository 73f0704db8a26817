//! Wave field generator.
//!
//! Each fiber is a horizontal polyline displaced by a few sine harmonics and
//! a ring-shaped ripple centred on the pointer. Path generation is a pure
//! function of its inputs; the only per-frame state lives in [`WaveField`].

use crate::clock::SimulationClock;
use crate::constants::*;
use crate::pointer::PointerState;
use crate::surface::{Hsla, StrokeStyle, Surface};
use crate::ticker::Scene;
use crate::tier::{FiberConfig, TierProfile};
use crate::viewport::Viewport;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

/// One sine term relative to the fiber's base amplitude/frequency/speed/phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonic {
    pub gain: f32,
    pub frequency_scale: f32,
    pub speed_scale: f32,
    pub phase_scale: f32,
}

const FUNDAMENTAL: Harmonic = Harmonic {
    gain: 1.0,
    frequency_scale: 1.0,
    speed_scale: 1.0,
    phase_scale: 1.0,
};

const GOLDEN_OVERTONE: Harmonic = Harmonic {
    gain: SECOND_HARMONIC_GAIN,
    frequency_scale: PHI,
    speed_scale: SECOND_HARMONIC_SPEED,
    phase_scale: 2.0,
};

const GOLDEN_UNDERTONE: Harmonic = Harmonic {
    gain: THIRD_HARMONIC_GAIN,
    frequency_scale: 1.0 / PHI,
    speed_scale: THIRD_HARMONIC_SPEED,
    phase_scale: 3.0,
};

pub fn harmonics(profile: &TierProfile) -> SmallVec<[Harmonic; 3]> {
    let mut terms: SmallVec<[Harmonic; 3]> = smallvec![FUNDAMENTAL, GOLDEN_OVERTONE];
    if profile.third_harmonic {
        terms.push(GOLDEN_UNDERTONE);
    }
    terms
}

/// Ripple weight at `distance` from the pointer: 1 at the pointer, falling
/// to 0 at `max_dist` and staying 0 beyond it.
#[inline]
pub fn ripple_influence(distance: f32, max_dist: f32, exponent: f32) -> f32 {
    if !(max_dist > 0.0) || !(distance < max_dist) {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / max_dist).powf(exponent)
}

/// Vertical ripple displacement for a sample `distance` px from the pointer.
#[inline]
pub fn ripple_offset(distance: f32, max_dist: f32, exponent: f32, t: f32) -> f32 {
    let influence = ripple_influence(distance, max_dist, exponent);
    if influence == 0.0 {
        return 0.0;
    }
    (distance * RIPPLE_WAVENUMBER - t * RIPPLE_ANGULAR_SPEED).sin() * RIPPLE_STRENGTH * influence
}

#[inline]
fn harmonic_offset(config: &FiberConfig, terms: &[Harmonic], x: f32, t: f32) -> f32 {
    terms
        .iter()
        .map(|h| {
            let arg = x * config.frequency * h.frequency_scale
                + t * config.speed * h.speed_scale
                + config.phase * h.phase_scale;
            arg.sin() * config.amplitude * h.gain
        })
        .sum()
}

/// Fill `out` with the fiber's polyline for time `t`.
///
/// `pointer` is the smoothed pointer position in normalized viewport space.
/// Samples run from x = 0 in steps of the profile's sample step up to the
/// viewport width. A zero-size viewport yields an empty path.
pub fn generate_path_into(
    out: &mut Vec<Vec2>,
    config: &FiberConfig,
    t: f32,
    pointer: Vec2,
    viewport: &Viewport,
    profile: &TierProfile,
) {
    out.clear();
    if viewport.is_empty() || !(profile.sample_step > 0.0) {
        return;
    }

    let terms = harmonics(profile);
    let base_y = viewport.height * config.y_offset;
    let pointer_px = viewport.to_px(pointer);
    let max_dist = viewport.width * profile.ripple_radius;
    let samples = (viewport.width / profile.sample_step).floor() as usize + 1;
    out.reserve(samples);

    for i in 0..samples {
        // from the index, not accumulated
        let x = i as f32 * profile.sample_step;
        let mut y = base_y + harmonic_offset(config, &terms, x, t);
        let distance = Vec2::new(x, base_y).distance(pointer_px);
        y += ripple_offset(distance, max_dist, profile.ripple_exponent, t);
        out.push(Vec2::new(x, y));
    }
}

pub fn generate_path(
    config: &FiberConfig,
    t: f32,
    pointer: Vec2,
    viewport: &Viewport,
    profile: &TierProfile,
) -> Vec<Vec2> {
    let mut out = Vec::new();
    generate_path_into(&mut out, config, t, pointer, viewport, profile);
    out
}

pub fn fiber_stroke(config: &FiberConfig, profile: &TierProfile) -> StrokeStyle {
    StrokeStyle {
        color: Hsla::new(config.hue, 70.0, 55.0, config.opacity),
        width: profile.stroke_width,
    }
}

/// Wave field scene: clock, smoothed pointer and the active tier profile.
pub struct WaveField {
    viewport: Viewport,
    profile: &'static TierProfile,
    clock: SimulationClock,
    pointer: PointerState,
    scratch: Vec<Vec2>,
}

impl WaveField {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            profile: viewport.tier().profile(),
            clock: SimulationClock::new(),
            pointer: PointerState::new(),
            scratch: Vec::new(),
        }
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn profile(&self) -> &'static TierProfile {
        self.profile
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current geometry of every fiber, for SVG output or inspection.
    pub fn paths(&self) -> Vec<Vec<Vec2>> {
        self.profile
            .fibers
            .iter()
            .map(|f| {
                generate_path(
                    f,
                    self.clock.time(),
                    self.pointer.current(),
                    &self.viewport,
                    self.profile,
                )
            })
            .collect()
    }
}

impl Scene for WaveField {
    fn resize(&mut self, viewport: Viewport) {
        let tier = viewport.tier();
        if tier != self.profile.tier {
            log::debug!(
                "[waves] tier {} -> {} ({} fibers)",
                self.profile.tier.name(),
                tier.name(),
                tier.profile().fibers.len()
            );
            self.profile = tier.profile();
        }
        self.viewport = viewport;
    }

    fn pointer_moved(&mut self, uv: Vec2, _now_ms: f64) {
        self.pointer.set_target(uv);
    }

    fn step(&mut self, _now_ms: f64) {
        self.clock.advance();
        self.pointer.step(self.profile.pointer_smoothing);
    }

    fn render<P: Surface + ?Sized>(&mut self, surface: &mut P) {
        surface.clear(&self.viewport);
        if self.viewport.is_empty() {
            return;
        }
        let profile = self.profile;
        let t = self.clock.time();
        let pointer = self.pointer.current();
        for fiber in profile.fibers {
            generate_path_into(&mut self.scratch, fiber, t, pointer, &self.viewport, profile);
            surface.stroke_polyline(&self.scratch, &fiber_stroke(fiber, profile));
        }
    }
}
