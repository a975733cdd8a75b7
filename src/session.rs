//! Headless game session
//!
//! Owns everything one run needs: state, input source and render sink. The
//! font is loaded in [`Session::start`]; if that fails no sink is built and the
//! caller is expected to stop.

use std::io::{self, Write};

use crate::platform::{Autopilot, InputSource};
use crate::renderer::{FontError, FontSource, RenderSink, TextSink, build_frame};
use crate::settings::Settings;
use crate::sim::{GameState, TickEvents, WallContact, tick};

pub struct Session<W: Write> {
    settings: Settings,
    state: GameState,
    input: Autopilot,
    sink: TextSink<W>,
    rallies_lost: u32,
}

impl<W: Write> Session<W> {
    /// Load the HUD font and set up a fresh game drawing to `out`
    pub fn start(settings: Settings, out: W) -> Result<Self, FontError> {
        let font = FontSource::load(&settings.font_path)?;
        let input = Autopilot::new(settings.autopilot_seed, settings.autopilot_miss_chance);
        Ok(Self {
            sink: TextSink::new(out, font),
            input,
            state: GameState::new(),
            settings,
            rallies_lost: 0,
        })
    }

    /// Poll input, tick once, draw the result
    pub fn step(&mut self) -> io::Result<TickEvents> {
        let keys = self.input.poll(&self.state);
        let events = tick(&mut self.state, &keys);
        if events.wall == Some(WallContact::RightExit) {
            self.rallies_lost += 1;
        }
        self.sink.draw(&build_frame(&self.state, &self.settings))?;
        Ok(events)
    }

    pub fn run(&mut self, frames: u32) -> io::Result<()> {
        for _ in 0..frames {
            self.step()?;
        }
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rallies_lost(&self) -> u32 {
        self.rallies_lost
    }

    pub fn into_sink(self) -> TextSink<W> {
        self.sink
    }
}
