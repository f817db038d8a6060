// Copyright 2026 the Premiere Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcuts.

/// A player command bound to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Space: play if paused, pause otherwise.
    TogglePlayback,
    /// F: enter or leave fullscreen.
    ToggleFullscreen,
    /// M: mute or unmute.
    ToggleMute,
}

impl KeyCommand {
    /// Maps a physical key `code` to a command.
    ///
    /// `target_tag` is the tag name of the element the event was aimed at;
    /// shortcuts are ignored while typing into an `INPUT`.
    #[must_use]
    pub fn from_code(code: &str, target_tag: &str) -> Option<Self> {
        if target_tag.eq_ignore_ascii_case("INPUT") {
            return None;
        }
        match code {
            "Space" => Some(Self::TogglePlayback),
            "KeyF" => Some(Self::ToggleFullscreen),
            "KeyM" => Some(Self::ToggleMute),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys() {
        assert_eq!(
            KeyCommand::from_code("Space", "BODY"),
            Some(KeyCommand::TogglePlayback)
        );
        assert_eq!(
            KeyCommand::from_code("KeyF", "DIV"),
            Some(KeyCommand::ToggleFullscreen)
        );
        assert_eq!(
            KeyCommand::from_code("KeyM", "VIDEO"),
            Some(KeyCommand::ToggleMute)
        );
        assert_eq!(KeyCommand::from_code("KeyK", "BODY"), None);
    }

    #[test]
    fn typing_into_inputs_is_left_alone() {
        assert_eq!(KeyCommand::from_code("Space", "INPUT"), None);
        assert_eq!(KeyCommand::from_code("KeyM", "input"), None);
    }
}
