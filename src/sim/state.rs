//! Game state and core simulation types
//!
//! Everything the renderer reads after a tick lives here.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// The player's paddle, pinned to a fixed column near the right wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(PADDLE_X, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

impl Paddle {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Apply held keys for this frame.
    ///
    /// Up and down are applied independently, so holding both cancels out.
    /// The paddle is not clamped to the playfield.
    pub fn move_on_input(&mut self, input: &TickInput) {
        if input.up {
            self.rect.y = self.rect.y.wrapping_sub(PADDLE_SPEED);
        }
        if input.down {
            self.rect.y = self.rect.y.wrapping_add(PADDLE_SPEED);
        }
    }
}

/// The ball entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in pixels/frame
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect::new(0, 0, BALL_SIZE, BALL_SIZE),
            vel: IVec2::splat(BALL_SPEED),
        }
    }
}

impl Ball {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Move by one frame of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }

    /// Send the ball back to the origin. Velocity is kept as-is.
    pub fn reset(&mut self) {
        self.rect.set_origin(IVec2::ZERO);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield size in pixels
    pub bounds: IVec2,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Paddle hits in the current rally
    pub score: u32,
    /// Best rally this run (never decreases)
    pub high_score: u32,
    /// Simulation tick counter
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state on the standard 640x480 playfield
    pub fn new() -> Self {
        Self::with_entities(Paddle::default(), Ball::default())
    }

    /// State with caller-placed entities on the standard playfield
    pub fn with_entities(paddle: Paddle, ball: Ball) -> Self {
        Self {
            bounds: IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            paddle,
            ball,
            score: 0,
            high_score: 0,
            frame: 0,
        }
    }

    /// End the rally: ball back to the origin, score cleared.
    ///
    /// `high_score` is untouched.
    pub fn reset_rally(&mut self) {
        self.ball.reset();
        self.score = 0;
    }

    /// Count one paddle hit. Returns true if this set a new high score.
    pub fn record_hit(&mut self) -> bool {
        self.score = self.score.saturating_add(1);
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
