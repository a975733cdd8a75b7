//! Input sources
//!
//! Each source is polled exactly once per frame, before the tick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PADDLE_SPEED;
use crate::sim::{GameState, TickInput};

/// Anything that can report held keys for the next frame
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Replays a fixed list of inputs, then holds nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<TickInput>) -> Self {
        Self { inputs, cursor: 0 }
    }

    /// True once every scripted input has been handed out
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.inputs.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        let input = self.inputs.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        input
    }
}

/// Frames the autopilot stays hands-off after a lapse starts
pub const LAPSE_FRAMES: u32 = 45;

/// Demo player: keeps the paddle centered on the ball, with occasional lapses
/// so rallies end.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    miss_chance: f64,
    lapse_remaining: u32,
}

impl Autopilot {
    /// `miss_chance` is the per-frame probability of starting a lapse and is
    /// clamped to `0.0..=1.0`.
    pub fn new(seed: u64, miss_chance: f64) -> Self {
        let miss_chance = if miss_chance.is_nan() {
            0.0
        } else {
            miss_chance.clamp(0.0, 1.0)
        };
        Self {
            rng: Pcg32::seed_from_u64(seed),
            miss_chance,
            lapse_remaining: 0,
        }
    }

    pub fn is_lapsing(&self) -> bool {
        self.lapse_remaining > 0
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        if self.lapse_remaining > 0 {
            self.lapse_remaining -= 1;
            return TickInput::default();
        }
        if self.rng.random_bool(self.miss_chance) {
            log::debug!("frame {}: autopilot lapse", state.frame);
            self.lapse_remaining = LAPSE_FRAMES - 1;
            return TickInput::default();
        }

        let target = state.ball.rect.center_y();
        let center = state.paddle.rect.center_y();
        // Dead zone avoids jitter around the target
        let delta = target.saturating_sub(center);
        TickInput {
            up: delta < -PADDLE_SPEED,
            down: delta > PADDLE_SPEED,
        }
    }
}
