use crate::constants::CLOCK_STEP;

/// Frame-count driven simulation time.
///
/// Every rendered frame advances the clock by the same fixed step, so real
/// speed follows the display refresh rate. Phase terms never see wall time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationClock {
    t: f32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.t += CLOCK_STEP;
        self.t
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.t
    }

    pub fn reset(&mut self) {
        self.t = 0.0;
    }
}
