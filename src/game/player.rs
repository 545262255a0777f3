//! Player state
//!
//! The player collides with a hitbox that is smaller than the sprite and
//! offset into it. The sprite rectangle is only for drawing and the camera;
//! it is re-derived from the hitbox after every physics step.

use macroquad::math::Vec2;
use crate::config::{PhysicsConfig, PlayerConfig};
use crate::input::FrameInput;
use crate::world::Rect;

/// Fixed placement of the hitbox inside the sprite rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxLayout {
    /// Hitbox left edge, measured from the sprite's left edge
    pub offset_x: f32,
    /// Hitbox top edge, measured from the sprite's top edge
    pub offset_y: f32,
    /// Sprite width minus hitbox width
    pub width_reduction: f32,
    /// Sprite height minus hitbox height
    pub height_reduction: f32,
}

impl HitboxLayout {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            offset_x: config.hitbox_offset_x,
            offset_y: config.hitbox_offset_y,
            width_reduction: config.hitbox_width_reduction,
            height_reduction: config.hitbox_height_reduction,
        }
    }

    /// Hitbox for a sprite placed at `sprite`
    pub fn hitbox_for(&self, sprite: Rect) -> Rect {
        Rect::new(
            sprite.x + self.offset_x,
            sprite.y + self.offset_y,
            (sprite.w - self.width_reduction).max(0.0),
            (sprite.h - self.height_reduction).max(0.0),
        )
    }

    /// Sprite center that corresponds to `hitbox`
    pub fn sprite_center_for(&self, hitbox: Rect) -> (f32, f32) {
        (
            hitbox.center_x() - self.offset_x + self.width_reduction * 0.5,
            hitbox.center_y() - self.offset_y + self.height_reduction * 0.5,
        )
    }
}

/// Player body: hitbox, draw rectangle and motion state
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Collision rectangle (world space)
    pub hitbox: Rect,
    /// Draw rectangle (world space), follows the hitbox
    pub sprite: Rect,
    /// x is set from input every frame; y accumulates gravity
    pub velocity: Vec2,
    /// Standing on a collider after the last vertical resolution
    pub grounded: bool,
    layout: HitboxLayout,
}

impl Player {
    /// Spawn with the sprite's top-left at (x, y)
    pub fn spawn(x: f32, y: f32, sprite_size: f32, layout: HitboxLayout) -> Self {
        let sprite = Rect::square(x, y, sprite_size);
        Self {
            hitbox: layout.hitbox_for(sprite),
            sprite,
            velocity: Vec2::ZERO,
            grounded: false,
            layout,
        }
    }

    pub fn layout(&self) -> HitboxLayout {
        self.layout
    }

    /// Set horizontal velocity from held directions and start a jump if
    /// grounded. Right wins when both directions are held.
    pub fn apply_input(&mut self, input: &FrameInput, physics: &PhysicsConfig) {
        self.velocity.x = 0.0;
        if input.left {
            self.velocity.x = -physics.move_speed;
        }
        if input.right {
            self.velocity.x = physics.move_speed;
        }
        if input.jump && self.grounded {
            self.velocity.y = physics.jump_speed;
            self.grounded = false;
        }
    }

    /// Move the sprite so it sits on the hitbox again
    pub fn sync_sprite(&mut self) {
        let (cx, cy) = self.layout.sprite_center_for(self.hitbox);
        self.sprite.set_center_x(cx);
        self.sprite.set_center_y(cy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HitboxLayout {
        HitboxLayout::from_config(&PlayerConfig::default())
    }

    #[test]
    fn test_spawn_hitbox_layout() {
        let player = Player::spawn(100.0, 100.0, 144.0, layout());
        assert_eq!(player.sprite, Rect::square(100.0, 100.0, 144.0));
        assert_eq!(player.hitbox, Rect::new(135.0, 142.0, 74.0, 102.0));
        assert!(!player.grounded);
    }

    #[test]
    fn test_sync_sprite_follows_hitbox() {
        let mut player = Player::spawn(100.0, 100.0, 144.0, layout());
        player.hitbox.x += 37.0;
        player.hitbox.y -= 12.5;
        player.sync_sprite();
        assert_eq!(player.sprite, Rect::square(137.0, 87.5, 144.0));
        assert_eq!(player.layout().hitbox_for(player.sprite), player.hitbox);
    }

    #[test]
    fn test_horizontal_input_is_set_not_accumulated() {
        let physics = PhysicsConfig::default();
        let mut player = Player::spawn(0.0, 0.0, 144.0, layout());

        let left = FrameInput { left: true, ..Default::default() };
        player.apply_input(&left, &physics);
        player.apply_input(&left, &physics);
        assert_eq!(player.velocity.x, -5.0);

        let both = FrameInput { left: true, right: true, ..Default::default() };
        player.apply_input(&both, &physics);
        assert_eq!(player.velocity.x, 5.0);

        player.apply_input(&FrameInput::default(), &physics);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let physics = PhysicsConfig::default();
        let mut player = Player::spawn(0.0, 0.0, 144.0, layout());
        let jump = FrameInput { jump: true, ..Default::default() };

        player.velocity.y = 1.5;
        player.apply_input(&jump, &physics);
        assert_eq!(player.velocity.y, 1.5);

        player.grounded = true;
        player.velocity.y = 0.0;
        player.apply_input(&jump, &physics);
        assert_eq!(player.velocity.y, -6.0);
        assert!(!player.grounded);
    }
}
