//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, integer pixels only
//! - Fixed update order (input, movement, walls, paddle)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallContact, paddle_contact, wall_contact};
pub use rect::Rect;
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickEvents, TickInput, run, tick};
