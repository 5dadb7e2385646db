//! Hook motion and the fixed-step tick scheduler
//!
//! The hook is sampled, never integrated: its position depends only on how
//! long the current session has been running, so any tick rate produces the
//! same trajectory.

use super::level::LevelConfig;
use crate::consts::*;

/// Horizontal hook position (percent of field width) for a session that has
/// been running for `elapsed_ms` with `blocks_placed` blocks on the stack.
///
/// Each placed block speeds the swing up by 5%. Time stays in `f64` so the
/// phase does not drift over long sessions.
pub fn hook_position(elapsed_ms: f64, level: &LevelConfig, blocks_placed: usize) -> f32 {
    let difficulty = 1.0 + HOOK_SPEEDUP_PER_BLOCK * blocks_placed as f32;
    let angular_speed = f64::from(level.base_speed * difficulty * HOOK_SPEED_SCALE);
    let swing = (elapsed_ms.max(0.0) * angular_speed).sin() as f32;
    (FIELD_CENTER + HOOK_AMPLITUDE * swing).clamp(HOOK_MIN_X, HOOK_MAX_X)
}

/// Fixed timestep accumulator
///
/// Converts variable frame times into a whole number of simulation ticks.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step_ms: f32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FixedStep {
    pub fn new(step_ms: f32) -> Self {
        Self {
            step_ms: step_ms.max(0.001),
            accumulator: 0.0,
        }
    }

    /// Scheduler for a tick rate in Hz
    pub fn from_hz(hz: u32) -> Self {
        Self::new(1000.0 / hz.max(1) as f32)
    }

    /// Length of one tick in milliseconds
    pub fn step_ms(&self) -> f32 {
        self.step_ms
    }

    /// Feed a frame duration and get back how many ticks to run
    pub fn advance(&mut self, frame_ms: f32) -> u32 {
        self.accumulator += frame_ms.clamp(0.0, MAX_FRAME_MS);

        let mut steps = 0;
        while self.accumulator >= self.step_ms && steps < MAX_SUBSTEPS {
            self.accumulator -= self.step_ms;
            steps += 1;
        }
        // Drop backlog we could not catch up on
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step_ms);
        }
        steps
    }

    /// Forget any partial tick (on session reset)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
