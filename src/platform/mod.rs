//! Platform abstraction layer
//!
//! Supplies the per-frame key state the simulation samples:
//! - Scripted replays (tests, demos)
//! - Autopilot for headless runs

pub mod input;

pub use input::{Autopilot, InputSource, ScriptedInput};
