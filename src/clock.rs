//! Frame timing
//!
//! Turns variable display-refresh deltas into a whole number of fixed
//! simulation steps, so ball speed does not depend on the monitor.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    max_frame_dt: f32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS, MAX_FRAME_DT)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32, max_frame_dt: f32) -> Self {
        Self {
            step,
            max_substeps,
            max_frame_dt,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds of wall-clock time and return how many steps to run
    ///
    /// When the substep cap is hit the remaining backlog is dropped rather
    /// than carried into later frames.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt.min(self.max_frame_dt);
        }

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == self.max_substeps && self.accumulator >= self.step {
            log::debug!(
                "Dropping {:.3}s of simulation backlog",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

const FPS_WINDOW: usize = 60;

/// Frames-per-second estimate over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    /// Record a frame timestamp in milliseconds
    pub fn record(&mut self, now_ms: f64) {
        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the slot we will overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = now_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
