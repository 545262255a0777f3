//! Follow camera for the virtual frame
//!
//! Aims to keep the player centered. When the player's screen position leaves
//! the band between `deadzone` and `viewport - deadzone` on an axis, the aim
//! switches to the nearest band edge instead. Each frame the camera covers a
//! fixed fraction of the remaining distance, then is clamped to the world.

use macroquad::math::Vec2;
use crate::config::CameraConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct FollowCamera {
    /// Top-left of the view in world space
    pub position: Vec2,
    viewport: Vec2,
    /// Band size in pixels on each axis
    deadzone: Vec2,
    smoothing: f32,
}

/// Aim for one axis, given the focus point and current camera coordinate
fn axis_target(focus: f32, camera: f32, view: f32, deadzone: f32) -> f32 {
    let on_screen = focus - camera;
    if on_screen < deadzone {
        focus - deadzone
    } else if on_screen > view - deadzone {
        focus - (view - deadzone)
    } else {
        focus - view * 0.5
    }
}

/// Clamp one axis to `[0, world - view]`; pins to 0 when the world is smaller
fn clamp_axis(camera: f32, world: f32, view: f32) -> f32 {
    camera.min(world - view).max(0.0)
}

impl FollowCamera {
    pub fn new(viewport_width: f32, viewport_height: f32, config: &CameraConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport: Vec2::new(viewport_width, viewport_height),
            deadzone: Vec2::new(
                viewport_width * config.deadzone_width,
                viewport_height * config.deadzone_height,
            ),
            smoothing: config.smoothing,
        }
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Where the camera wants to be for a given focus point
    pub fn target_for(&self, focus: Vec2) -> Vec2 {
        Vec2::new(
            axis_target(focus.x, self.position.x, self.viewport.x, self.deadzone.x),
            axis_target(focus.y, self.position.y, self.viewport.y, self.deadzone.y),
        )
    }

    /// Advance one frame toward `focus`, staying inside a world of `world` size
    pub fn update(&mut self, focus: Vec2, world: Vec2) {
        let target = self.target_for(focus);
        self.position += (target - self.position) * self.smoothing;
        self.position.x = clamp_axis(self.position.x, world.x, self.viewport.x);
        self.position.y = clamp_axis(self.position.y, world.y, self.viewport.y);
    }
}
