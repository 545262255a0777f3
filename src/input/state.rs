//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad input once per frame and folds them
//! into a [`FrameInput`] snapshot for the simulation.

use macroquad::prelude::*;
use super::gamepad::{mask_has, Gamepad};
use super::Action;

/// Stick deflection that counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Everything the simulation reads from input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Held
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Pressed this frame
    pub toggle_hitboxes: bool,
    pub toggle_fullscreen: bool,
    /// Window close was requested
    pub quit: bool,
}

impl FrameInput {
    /// Build a snapshot from per-action queries. Held actions use `down`,
    /// toggles use `pressed`.
    pub fn from_actions(
        down: impl Fn(Action) -> bool,
        pressed: impl Fn(Action) -> bool,
        quit: bool,
    ) -> Self {
        let sample = |action: Action| {
            if action.is_held() {
                down(action)
            } else {
                pressed(action)
            }
        };
        Self {
            left: sample(Action::MoveLeft),
            right: sample(Action::MoveRight),
            jump: sample(Action::Jump),
            toggle_hitboxes: sample(Action::ToggleHitboxes),
            toggle_fullscreen: sample(Action::ToggleFullscreen),
            quit,
        }
    }
}

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
    buttons: u32,
    last_buttons: u32,
    stick: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            buttons: 0,
            last_buttons: 0,
            stick: Vec2::ZERO,
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
        self.last_buttons = self.buttons;
        self.buttons = self.gamepad.button_mask();
        self.stick = self.gamepad.left_stick();
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        action.keys().iter().any(|&k| is_key_down(k))
            || action.buttons().iter().any(|&b| mask_has(self.buttons, b))
            || self.stick_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        action.keys().iter().any(|&k| is_key_pressed(k))
            || action
                .buttons()
                .iter()
                .any(|&b| mask_has(self.buttons, b) && !mask_has(self.last_buttons, b))
    }

    fn stick_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.stick.x < -STICK_THRESHOLD,
            Action::MoveRight => self.stick.x > STICK_THRESHOLD,
            _ => false,
        }
    }

    /// Poll devices and take this frame's snapshot
    pub fn frame_input(&mut self) -> FrameInput {
        self.poll();
        FrameInput::from_actions(
            |a| self.action_down(a),
            |a| self.action_pressed(a),
            is_quit_requested(),
        )
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
