//! Platform abstraction layer
//!
//! The window shell only reports which keys are down each frame; this
//! module turns those levels into simulation input:
//! - `input`: edge detection for launch, quit requests
//! - `autopilot`: scripted key presses for headless sessions

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{ControlFrame, Controls, KeyLevels};
