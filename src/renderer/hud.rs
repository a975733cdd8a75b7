//! Draw list generation for one frame
//!
//! Turns a read-only view of the game state into the primitives a sink
//! draws: two filled quads and two text labels.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// RGBA, straight alpha
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// A single draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle
    Quad { rect: Rect, color: Color },
    /// Single line of text, `pos` is the top-left of the line box
    Label {
        text: String,
        pos: Vec2,
        size: f32,
        line_spacing: f32,
        color: Color,
    },
}

/// Everything drawn for one frame, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn quads(&self) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Quad { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn high_score_label(high_score: u32) -> String {
    format!("High Score: {}", high_score)
}

/// Build the frame for the current state: paddle, ball, then the two labels
pub fn build_frame(state: &GameState, settings: &Settings) -> Frame {
    let label = |text: String, pos: Vec2| DrawCommand::Label {
        text,
        pos,
        size: settings.font_size,
        line_spacing: settings.line_spacing,
        color: WHITE,
    };

    Frame {
        commands: vec![
            DrawCommand::Quad {
                rect: state.paddle.rect,
                color: WHITE,
            },
            DrawCommand::Quad {
                rect: state.ball.rect,
                color: WHITE,
            },
            label(score_label(state.score), settings.score_label_pos),
            label(high_score_label(state.high_score), settings.high_score_label_pos),
        ],
    }
}
