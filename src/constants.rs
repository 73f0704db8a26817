// Browser-side wiring constants. Simulation tuning lives in
// `backdrop_core::constants` and the tier tables.

// Canvas element ids looked up at start-up
pub const WAVES_CANVAS_ID: &str = "backdrop-waves";
pub const SPECTRUM_CANVAS_ID: &str = "backdrop-spectrum";

// Events that move the pointer target; all are registered passive on `window`
pub const POINTER_EVENTS: [&str; 3] = ["mousemove", "touchmove", "touchstart"];

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Spectrum loop policy
pub const SPECTRUM_TARGET_FPS: f64 = 60.0;
pub const VISIBILITY_THRESHOLD: f64 = 0.1; // fraction of the canvas on screen
