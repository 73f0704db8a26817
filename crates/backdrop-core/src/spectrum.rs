//! Spectrum bar simulator.
//!
//! Bars idle with a low "breathing" motion and jump toward a gaussian bump
//! under the pointer for a short window after each interaction. Heights are
//! percentages of the canvas height. Physics follows a VU meter: fast
//! attack, slow exponential decay and a held peak marker.

use crate::clock::SimulationClock;
use crate::constants::*;
use crate::pointer::{InteractionTracker, PointerState};
use crate::surface::{BarGeometry, Glow, GradientStop, Hsla, PeakMark, Surface};
use crate::ticker::Scene;
use crate::tier::TierProfile;
use crate::viewport::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarState {
    pub current: f32,
    pub target: f32,
    pub peak: f32,
    pub peak_hold: f32, // seconds of simulated time since the last new peak
}

impl Default for BarState {
    fn default() -> Self {
        Self {
            current: BAR_MIN_HEIGHT,
            target: BAR_MIN_HEIGHT,
            peak: BAR_MIN_HEIGHT,
            peak_hold: 0.0,
        }
    }
}

/// Emphasis for low-index ("bass") bars: 1 at index 0, shrinking toward the
/// top of the range.
#[inline]
pub fn freq_weight(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (1.0 - index as f32 / count as f32)
        .max(0.0)
        .powf(FREQ_WEIGHT_EXPONENT)
}

#[inline]
pub fn bar_ceiling(index: usize, count: usize, max_height: f32) -> f32 {
    BAR_CEILING_BASE + freq_weight(index, count) * max_height
}

/// Idle motion, present whether or not anyone touches the pointer.
#[inline]
pub fn ambient_level(index: usize, t: f32) -> f32 {
    let i = index as f32;
    BAR_MIN_HEIGHT
        + (t * 0.4 + i * 0.15).sin() * 2.5
        + (t * 0.7 + i * PHI * 0.08).sin() * 2.0
        + (t * 1.1 + i * 0.22).sin() * 1.5
}

/// Pointer-driven lift for one bar at full interaction strength.
pub fn pointer_forcing(index: usize, count: usize, pointer_x: f32, t: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let n = index as f32 / count as f32;
    let weight = freq_weight(index, count);
    let distance = (n - pointer_x).abs();
    let gaussian = |scale: f32| (-(distance * scale / GAUSSIAN_SPREAD).powi(2)).exp();

    let primary = gaussian(1.0) * PRIMARY_GAIN * weight;
    let h2 = gaussian(HARMONIC2_DISTANCE) * HARMONIC2_GAIN * weight;
    let h3 = gaussian(HARMONIC3_DISTANCE) * HARMONIC3_GAIN * weight;

    let sub_bass = if pointer_x < SUB_BASS_POINTER_EDGE && n < SUB_BASS_BAND {
        SUB_BASS_GAIN * (1.0 - n / SUB_BASS_BAND) * (1.0 - pointer_x / SUB_BASS_POINTER_EDGE)
    } else {
        0.0
    };

    let shimmer = if pointer_x > SHIMMER_POINTER_EDGE && n > SHIMMER_BAND {
        (t * SHIMMER_RATE + index as f32 * 0.6).sin()
            * SHIMMER_GAIN
            * ((n - SHIMMER_BAND) / (1.0 - SHIMMER_BAND))
    } else {
        0.0
    };

    primary + h2 + h3 + sub_bass + shimmer
}

/// One step of the VU-meter filter: fast rise toward a higher target,
/// exponential fall toward the floor that never undershoots a lower target.
#[inline]
pub fn attack_decay(current: f32, target: f32) -> f32 {
    if target > current {
        current + (target - current) * ATTACK_RATE
    } else {
        (BAR_MIN_HEIGHT + (current - BAR_MIN_HEIGHT) * DECAY_RATE).max(target)
    }
}

/// Advance one bar's peak marker by one frame.
#[inline]
pub fn track_peak(bar: &mut BarState) {
    if bar.current > bar.peak {
        bar.peak = bar.current;
        bar.peak_hold = 0.0;
    } else {
        bar.peak_hold += CLOCK_STEP;
        if bar.peak_hold > PEAK_HOLD_SEC {
            bar.peak = bar.current.max(bar.peak * PEAK_DECAY);
        }
    }
}

pub struct SpectrumBars {
    viewport: Viewport,
    profile: &'static TierProfile,
    clock: SimulationClock,
    pointer: PointerState,
    interaction: InteractionTracker,
    bars: Vec<BarState>,
    snapshot: Vec<f32>,
}

impl SpectrumBars {
    pub fn new(viewport: Viewport) -> Self {
        let profile = viewport.tier().profile();
        Self {
            viewport,
            profile,
            clock: SimulationClock::new(),
            pointer: PointerState::new(),
            interaction: InteractionTracker::default(),
            bars: vec![BarState::default(); profile.bar_count],
            snapshot: Vec::with_capacity(profile.bar_count),
        }
    }

    pub fn bars(&self) -> &[BarState] {
        &self.bars
    }

    pub fn profile(&self) -> &'static TierProfile {
        self.profile
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn interaction_strength(&self, now_ms: f64) -> f32 {
        self.interaction.strength(now_ms)
    }

    pub fn ceiling(&self, index: usize) -> f32 {
        bar_ceiling(index, self.bars.len(), self.profile.bar_max_height)
    }

    pub fn compute_targets(&mut self, now_ms: f64) {
        let count = self.bars.len();
        let t = self.clock.time();
        let strength = self.interaction.strength(now_ms);
        let pointer_x = self.pointer.current().x;
        let max_height = self.profile.bar_max_height;

        for (i, bar) in self.bars.iter_mut().enumerate() {
            let mut target = ambient_level(i, t);
            if strength > 0.0 {
                target += pointer_forcing(i, count, pointer_x, t) * strength;
            }
            bar.target = target.clamp(BAR_MIN_HEIGHT, bar_ceiling(i, count, max_height));
        }
    }

    pub fn apply_physics(&mut self) {
        let count = self.bars.len();
        let max_height = self.profile.bar_max_height;
        for (i, bar) in self.bars.iter_mut().enumerate() {
            bar.current = attack_decay(bar.current, bar.target)
                .clamp(BAR_MIN_HEIGHT, bar_ceiling(i, count, max_height));
        }
    }

    /// Light blur across neighbours so adjacent bars do not look jagged.
    /// Reads from a snapshot, so the result does not depend on sweep order.
    pub fn smooth_neighbors(&mut self) {
        let count = self.bars.len();
        if count < 3 {
            return;
        }
        self.snapshot.clear();
        self.snapshot.extend(self.bars.iter().map(|b| b.current));
        let max_height = self.profile.bar_max_height;
        let s = NEIGHBOR_SMOOTHING;
        for i in 1..count - 1 {
            let blended = self.snapshot[i] * (1.0 - s)
                + (self.snapshot[i - 1] + self.snapshot[i + 1]) * (s / 2.0);
            self.bars[i].current =
                blended.clamp(BAR_MIN_HEIGHT, bar_ceiling(i, count, max_height));
        }
    }

    pub fn track_peaks(&mut self) {
        self.bars.iter_mut().for_each(track_peak);
    }

    /// Paint geometry for bar `index`, or `None` when it cannot be drawn
    /// (out of range, empty viewport, or bars narrower than their gaps).
    pub fn bar_geometry(&self, index: usize) -> Option<BarGeometry> {
        let bar = self.bars.get(index)?;
        if self.viewport.is_empty() {
            return None;
        }
        let count = self.bars.len() as f32;
        let gap = self.profile.bar_gap;
        let width = (self.viewport.width - (count - 1.0) * gap) / count;
        if !(width > 0.0) {
            return None;
        }

        let h = self.viewport.height;
        let level = bar.current / 100.0;
        let height = level * h;
        let x = index as f32 * (width + gap);
        let y = h - height;

        let n = index as f32 / count;
        let hue = BAR_HUE_BASE + n * BAR_HUE_SPAN;
        let saturation = 70.0 + level * 20.0;
        let lightness = 50.0 + level * 25.0;

        let gradient = [
            GradientStop {
                offset: 0.0,
                color: Hsla::new(hue, saturation, lightness * 0.5, 0.9),
            },
            GradientStop {
                offset: 0.4,
                color: Hsla::new(hue + 10.0, saturation, lightness * 0.8, 0.95),
            },
            GradientStop {
                offset: 1.0,
                color: Hsla::new(hue + 25.0, saturation, lightness, 0.85),
            },
        ];

        let glow = (self.profile.glow && bar.current > GLOW_MIN_HEIGHT).then(|| Glow {
            color: Hsla::new(hue, saturation, lightness, 0.6),
            blur: bar.current / 6.0,
        });

        let peak = (bar.peak > bar.current + PEAK_MARKER_GAP).then(|| PeakMark {
            y: h - bar.peak / 100.0 * h,
            thickness: PEAK_MARKER_THICKNESS,
            color: Hsla::new(hue + 20.0, 85.0, 70.0, 0.85),
            glow: self.profile.glow.then(|| Glow {
                color: Hsla::new(hue + 20.0, 90.0, 75.0, 0.5),
                blur: 4.0,
            }),
        });

        Some(BarGeometry {
            x,
            y,
            width,
            height,
            corner_radius: (width / 2.0).min(BAR_MAX_CORNER_RADIUS),
            gradient,
            glow,
            peak,
        })
    }
}

impl Scene for SpectrumBars {
    fn resize(&mut self, viewport: Viewport) {
        let profile = viewport.tier().profile();
        if profile.tier != self.profile.tier || self.bars.len() != profile.bar_count {
            log::debug!(
                "[spectrum] tier {} -> {} ({} bars)",
                self.profile.tier.name(),
                profile.tier.name(),
                profile.bar_count
            );
            // fresh arrays: indices from the old layout mean nothing now
            self.bars = vec![BarState::default(); profile.bar_count];
            self.snapshot = Vec::with_capacity(profile.bar_count);
            self.profile = profile;
        }
        self.viewport = viewport;
    }

    // only the horizontal coordinate drives the bars
    fn pointer_moved(&mut self, uv: Vec2, now_ms: f64) {
        self.pointer.set_target(uv);
        self.interaction.touch(now_ms);
    }

    fn step(&mut self, now_ms: f64) {
        self.clock.advance();
        self.pointer.step(self.profile.pointer_smoothing);
        self.compute_targets(now_ms);
        self.apply_physics();
        self.smooth_neighbors();
        self.track_peaks();
    }

    fn render<P: Surface + ?Sized>(&mut self, surface: &mut P) {
        surface.clear(&self.viewport);
        for i in 0..self.bars.len() {
            match self.bar_geometry(i) {
                Some(bar) => surface.fill_bar(&bar),
                None => return,
            }
        }
    }
}
