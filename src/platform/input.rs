//! Keyboard levels → per-tick input

use crate::sim::TickInput;

/// Which keys are held down this frame, as polled from the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyLevels {
    pub escape: bool,
    pub left: bool,
    pub right: bool,
    pub space: bool,
}

/// Input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlFrame {
    pub input: TickInput,
    /// Escape was held; the shell should close
    pub quit: bool,
}

/// Converts key levels into tick input.
///
/// Arrow keys repeat every frame they are held. Space only launches on the
/// frame it goes down, so holding it fires once.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    space_held: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, keys: KeyLevels) -> ControlFrame {
        let launch = keys.space && !self.space_held;
        self.space_held = keys.space;

        ControlFrame {
            input: TickInput {
                move_left: keys.left,
                move_right: keys.right,
                launch,
            },
            quit: keys.escape,
        }
    }
}
