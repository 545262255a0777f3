//! Game action definitions and their default bindings

use macroquad::prelude::KeyCode;
use super::gamepad::button;

/// Everything the player can ask the game to do
///
/// Movement and jump are sampled while held; the toggles fire on the frame
/// their key goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,

    // Toggles
    ToggleHitboxes, // F1
    ToggleFullscreen, // F11
}

impl Action {
    #[cfg(test)]
    pub const ALL: &'static [Action] = &[
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::ToggleHitboxes,
        Action::ToggleFullscreen,
    ];

    /// Keyboard keys bound to this action (any of them triggers it)
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::Jump => &[KeyCode::Space, KeyCode::Up, KeyCode::W],
            Action::ToggleHitboxes => &[KeyCode::F1],
            Action::ToggleFullscreen => &[KeyCode::F11],
        }
    }

    /// Gamepad buttons bound to this action
    pub fn buttons(self) -> &'static [u32] {
        match self {
            Action::MoveLeft => &[button::DPAD_LEFT],
            Action::MoveRight => &[button::DPAD_RIGHT],
            Action::Jump => &[button::A],
            Action::ToggleHitboxes => &[button::SELECT],
            Action::ToggleFullscreen => &[],
        }
    }

    /// Sampled every frame while held, as opposed to on the press edge
    pub fn is_held(self) -> bool {
        matches!(self, Action::MoveLeft | Action::MoveRight | Action::Jump)
    }
}
