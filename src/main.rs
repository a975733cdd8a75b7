//! Wall Ball entry point
//!
//! Headless host driver: loads settings, starts a session (which loads the HUD
//! font once) and runs the fixed-step loop with the autopilot at the keys.
//!
//! Usage: `wallball [settings.json]`

use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use wallball::session::Session;
use wallball::settings::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path)
            .with_context(|| format!("loading settings from {}", path))?,
        None => Settings::default(),
    };
    let frames = settings.frames;
    log::info!("{} (headless) starting, {} frames", settings.window_title, frames);

    let stdout = io::stdout();
    // Text cannot be drawn without the font, so there is nothing to fall back to
    let mut session = match Session::start(settings, BufWriter::new(stdout.lock())) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    session.run(frames).context("writing frames")?;

    let state = session.state();
    log::info!(
        "Done after {} frames: {} rallies lost, score {}, high score {}",
        state.frame,
        session.rallies_lost(),
        state.score,
        state.high_score
    );
    Ok(())
}
