//! Device tiers and the per-tier parameter tables.
//!
//! Every quality decision (fiber density, sample step, bar count, glow) is
//! made once per resize by picking a [`TierProfile`]. Draw code reads the
//! profile and never branches on the tier itself.

use crate::constants::{DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceTier {
    /// Classify a viewport width in CSS pixels. Total: NaN and negative
    /// widths fall into `Mobile`.
    pub fn classify(width: f32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            DeviceTier::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            DeviceTier::Tablet
        } else {
            DeviceTier::Mobile
        }
    }

    pub fn profile(self) -> &'static TierProfile {
        match self {
            DeviceTier::Mobile => &MOBILE_PROFILE,
            DeviceTier::Tablet => &TABLET_PROFILE,
            DeviceTier::Desktop => &DESKTOP_PROFILE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceTier::Mobile => "mobile",
            DeviceTier::Tablet => "tablet",
            DeviceTier::Desktop => "desktop",
        }
    }
}

/// Static tuning for one fiber.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiberConfig {
    pub amplitude: f32,
    pub frequency: f32, // radians per px
    pub speed: f32,     // radians per clock unit
    pub phase: f32,
    pub y_offset: f32, // baseline as a fraction of viewport height
    pub hue: f32,
    pub opacity: f32,
}

impl FiberConfig {
    const fn new(
        amplitude: f32,
        frequency: f32,
        speed: f32,
        phase: f32,
        y_offset: f32,
        hue: f32,
        opacity: f32,
    ) -> Self {
        Self {
            amplitude,
            frequency,
            speed,
            phase,
            y_offset,
            hue,
            opacity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierProfile {
    pub tier: DeviceTier,

    // wave field
    pub fibers: &'static [FiberConfig],
    pub sample_step: f32,
    pub stroke_width: f32,
    pub third_harmonic: bool,
    pub ripple_radius: f32, // fraction of viewport width
    pub ripple_exponent: f32,
    pub pointer_smoothing: f32,

    // spectrum
    pub bar_count: usize,
    pub bar_max_height: f32,
    pub bar_gap: f32,
    pub glow: bool,
}

// Phases are multiples of the golden ratio so no two fibers line up.
const DESKTOP_FIBERS: [FiberConfig; 8] = [
    FiberConfig::new(25.0, 0.008, 0.40, 0.0, 0.22, 220.0, 0.15),
    FiberConfig::new(30.0, 0.006, 0.32, 1.618_034, 0.30, 232.0, 0.18),
    FiberConfig::new(35.0, 0.005, 0.25, 3.236_068, 0.38, 244.0, 0.20),
    FiberConfig::new(32.0, 0.0055, 0.28, 4.854_102, 0.46, 256.0, 0.18),
    FiberConfig::new(28.0, 0.007, 0.35, 6.472_136, 0.54, 270.0, 0.16),
    FiberConfig::new(26.0, 0.0065, 0.30, 8.090_170, 0.62, 286.0, 0.15),
    FiberConfig::new(24.0, 0.0075, 0.38, 9.708_204, 0.70, 302.0, 0.14),
    FiberConfig::new(22.0, 0.008, 0.42, 11.326_238, 0.78, 320.0, 0.12),
];

const TABLET_FIBERS: [FiberConfig; 5] = [
    FiberConfig::new(28.0, 0.007, 0.35, 0.0, 0.28, 225.0, 0.18),
    FiberConfig::new(34.0, 0.0055, 0.26, 3.236_068, 0.40, 248.0, 0.22),
    FiberConfig::new(31.0, 0.006, 0.30, 6.472_136, 0.52, 270.0, 0.20),
    FiberConfig::new(30.0, 0.006, 0.30, 9.708_204, 0.64, 292.0, 0.18),
    FiberConfig::new(26.0, 0.0075, 0.36, 12.944_272, 0.76, 315.0, 0.15),
];

const MOBILE_FIBERS: [FiberConfig; 4] = [
    FiberConfig::new(30.0, 0.008, 0.30, 0.0, 0.34, 240.0, 0.22),
    FiberConfig::new(35.0, 0.006, 0.24, 4.854_102, 0.48, 262.0, 0.25),
    FiberConfig::new(32.0, 0.007, 0.27, 9.708_204, 0.62, 285.0, 0.22),
    FiberConfig::new(28.0, 0.0085, 0.33, 14.562_306, 0.74, 308.0, 0.18),
];

pub static DESKTOP_PROFILE: TierProfile = TierProfile {
    tier: DeviceTier::Desktop,
    fibers: &DESKTOP_FIBERS,
    sample_step: 3.0,
    stroke_width: 1.5,
    third_harmonic: true,
    ripple_radius: 0.4,
    ripple_exponent: 2.0,
    pointer_smoothing: 0.08,
    bar_count: 48,
    bar_max_height: 85.0,
    bar_gap: 2.0,
    glow: true,
};

pub static TABLET_PROFILE: TierProfile = TierProfile {
    tier: DeviceTier::Tablet,
    fibers: &TABLET_FIBERS,
    sample_step: 4.0,
    stroke_width: 1.5,
    third_harmonic: false,
    ripple_radius: 0.5,
    ripple_exponent: 2.0,
    pointer_smoothing: 0.08,
    bar_count: 36,
    bar_max_height: 78.0,
    bar_gap: 2.0,
    glow: false,
};

pub static MOBILE_PROFILE: TierProfile = TierProfile {
    tier: DeviceTier::Mobile,
    fibers: &MOBILE_FIBERS,
    sample_step: 6.0,
    stroke_width: 2.5,
    third_harmonic: false,
    ripple_radius: 0.6,
    ripple_exponent: 2.0,
    pointer_smoothing: 0.1,
    bar_count: 24,
    bar_max_height: 70.0,
    bar_gap: 1.5,
    glow: false,
};
