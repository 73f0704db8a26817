// Shared simulation tuning constants used by both the wave field and the
// spectrum bars. Tier-specific values live in the profile tables in `tier.rs`.

/// Golden ratio; decorrelates harmonic frequencies and fiber phases.
pub const PHI: f32 = 1.618_034;

// Simulation clock
pub const CLOCK_STEP: f32 = 0.016; // per rendered frame, independent of wall time

// Device tier breakpoints (CSS px)
pub const TABLET_MIN_WIDTH: f32 = 640.0;
pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;

// Pointer
pub const POINTER_REST: [f32; 2] = [0.5, 0.5]; // centre until the first event
pub const INTERACTION_WINDOW_MS: f64 = 1500.0; // pointer forcing fades out over this

// Wave harmonics
pub const SECOND_HARMONIC_GAIN: f32 = 0.3;
pub const SECOND_HARMONIC_SPEED: f32 = 0.7;
pub const THIRD_HARMONIC_GAIN: f32 = 0.18;
pub const THIRD_HARMONIC_SPEED: f32 = 1.3;

// Wave ripple
pub const RIPPLE_WAVENUMBER: f32 = 0.02; // radians per px of distance
pub const RIPPLE_ANGULAR_SPEED: f32 = 2.5;
pub const RIPPLE_STRENGTH: f32 = 35.0; // px at full influence

// Spectrum heights are in percent of the canvas height
pub const BAR_MIN_HEIGHT: f32 = 2.0;
pub const BAR_CEILING_BASE: f32 = 8.0;
pub const FREQ_WEIGHT_EXPONENT: f32 = 0.4;

// Spectrum physics
pub const ATTACK_RATE: f32 = 0.35;
pub const DECAY_RATE: f32 = 0.92;
pub const NEIGHBOR_SMOOTHING: f32 = 0.15;
pub const PEAK_HOLD_SEC: f32 = 0.3;
pub const PEAK_DECAY: f32 = 0.96;

// Spectrum pointer forcing
pub const GAUSSIAN_SPREAD: f32 = 0.12;
pub const PRIMARY_GAIN: f32 = 55.0;
pub const HARMONIC2_DISTANCE: f32 = 2.1;
pub const HARMONIC2_GAIN: f32 = 25.0;
pub const HARMONIC3_DISTANCE: f32 = 3.2;
pub const HARMONIC3_GAIN: f32 = 12.0;
pub const SUB_BASS_POINTER_EDGE: f32 = 0.25;
pub const SUB_BASS_BAND: f32 = 0.15;
pub const SUB_BASS_GAIN: f32 = 25.0;
pub const SHIMMER_POINTER_EDGE: f32 = 0.75;
pub const SHIMMER_BAND: f32 = 0.7;
pub const SHIMMER_GAIN: f32 = 12.0;
pub const SHIMMER_RATE: f32 = 8.0;

// Spectrum colour and decoration
pub const BAR_HUE_BASE: f32 = 220.0;
pub const BAR_HUE_SPAN: f32 = 110.0;
pub const GLOW_MIN_HEIGHT: f32 = 25.0;
pub const PEAK_MARKER_GAP: f32 = 2.0; // marker only drawn this far above the bar
pub const PEAK_MARKER_THICKNESS: f32 = 2.0;
pub const BAR_MAX_CORNER_RADIUS: f32 = 3.0;

// Backing store resolution cap
pub const MAX_PIXEL_RATIO: f32 = 2.0;
