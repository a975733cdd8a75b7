//! Rendering module
//!
//! Builds per-frame draw lists from game state and hands them to a sink.
//! The font is loaded once and owned by the sink.

pub mod font;
pub mod hud;
pub mod sink;

pub use font::{FontError, FontSource};
pub use hud::{DrawCommand, Frame, build_frame};
pub use sink::{RenderSink, TextSink};
