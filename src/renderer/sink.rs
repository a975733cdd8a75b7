//! Render sinks
//!
//! A sink owns the font it draws with and consumes one [`Frame`] per tick.

use std::io::{self, Write};

use super::font::FontSource;
use super::hud::{DrawCommand, Frame};

/// Consumer of per-frame draw lists
pub trait RenderSink {
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Headless sink that writes one summary line per frame, with each label's
/// laid-out width
pub struct TextSink<W: Write> {
    out: W,
    font: FontSource,
    frames_drawn: u64,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, font: FontSource) -> Self {
        log::debug!("Text sink using font with {} glyphs", font.glyph_count());
        Self {
            out,
            font,
            frames_drawn: 0,
        }
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames_drawn += 1;
        write!(self.out, "#{}", self.frames_drawn)?;
        for command in &frame.commands {
            match command {
                DrawCommand::Quad { rect, .. } => {
                    write!(self.out, " [{},{} {}x{}]", rect.x, rect.y, rect.w, rect.h)?
                }
                DrawCommand::Label { text, size, .. } => {
                    let width = self.font.text_width(text, *size);
                    write!(self.out, " | {} ({:.0}px)", text, width)?
                }
            }
        }
        writeln!(self.out)
    }
}
