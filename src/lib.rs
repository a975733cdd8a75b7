//! Wall Ball - a single-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wall chain, paddle hits, score)
//! - `renderer`: Font loading, HUD draw lists and render sinks
//! - `platform`: Input sources (scripted, autopilot)
//! - `session`: One headless run (font, state, input, sink)
//! - `settings`: Data-driven presentation and run tuning

pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Wall speed: ball velocity magnitude per axis (pixels/frame)
    pub const BALL_SPEED: i32 = 3;
    /// Paddle vertical speed (pixels/frame)
    pub const PADDLE_SPEED: i32 = 6;

    /// Paddle defaults - fixed column near the right wall
    pub const PADDLE_X: i32 = 600;
    pub const PADDLE_Y: i32 = 200;
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 100;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 15;
}
