//! Keyboard state for driving the brain.
//!
//! Platform code translates its key events into DOM `KeyboardEvent.key`
//! strings and forwards them here; the per-frame update reads the flags.

/// One of the five keys that feed the drive controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriveKey {
    Forward,
    Reverse,
    Left,
    Right,
    Warp,
}

impl DriveKey {
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Forward),
            "ArrowDown" => Some(Self::Reverse),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "Shift" => Some(Self::Warp),
            _ => None,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub reverse: bool,
    pub left: bool,
    pub right: bool,
    pub warp: bool, // Shift
}

impl InputState {
    /// Apply a key-down (`pressed = true`) or key-up event.
    ///
    /// Returns `false` for keys outside the drive mapping, which leave the
    /// state untouched.
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        match DriveKey::from_key(key) {
            Some(k) => {
                self.set(k, pressed);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, key: DriveKey, pressed: bool) {
        let flag = match key {
            DriveKey::Forward => &mut self.forward,
            DriveKey::Reverse => &mut self.reverse,
            DriveKey::Left => &mut self.left,
            DriveKey::Right => &mut self.right,
            DriveKey::Warp => &mut self.warp,
        };
        *flag = pressed;
    }

    #[inline]
    pub fn is_driving(&self) -> bool {
        self.forward || self.reverse
    }

    /// Release every key. Key-up events are lost while the window is blurred.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Keys that toggle debug settings or act on the session rather than driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppCommand {
    ToggleBouncing,
    ToggleBounds,
    ToggleAutoRotate,
    ResetPosition,
    ToggleHelp,
}

#[inline]
pub fn app_command_for_key(key: &str) -> Option<AppCommand> {
    match key {
        "b" | "B" => Some(AppCommand::ToggleBouncing),
        "v" | "V" => Some(AppCommand::ToggleBounds),
        "o" | "O" => Some(AppCommand::ToggleAutoRotate),
        "r" | "R" => Some(AppCommand::ResetPosition),
        "h" | "H" => Some(AppCommand::ToggleHelp),
        _ => None,
    }
}
