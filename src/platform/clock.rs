//! Fixed-timestep frame clock
//!
//! The host calls `advance` once per rendered frame with the elapsed wall time
//! and runs `sim::tick` as many times as it returns.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame gap we try to catch up on (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulates wall time into whole simulation ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks are due
    ///
    /// Long stalls (tab hidden, debugger) are capped so the sim never tries to
    /// replay more than `max_substeps` ticks in one frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::trace!("Frame clock dropping {:.3}s of backlog", self.accumulator);
            self.accumulator %= self.step;
        }
        substeps
    }

    /// Forget any partial tick (after reset or resize)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
