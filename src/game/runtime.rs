//! Game runtime
//!
//! [`GameState`] owns everything the frame loop mutates. The level geometry
//! lives in an immutable [`World`] passed alongside it.
//!
//! Frame order: toggles and quit, input, horizontal move, gravity and vertical
//! move, sprite sync, camera. Drawing happens afterwards from the resulting
//! state.

use macroquad::math::Vec2;
use crate::config::{GameConfig, PhysicsConfig};
use crate::input::FrameInput;
use crate::world::World;
use super::camera::FollowCamera;
use super::collision::{move_and_collide, CollisionResult};
use super::player::{HitboxLayout, Player};

/// Window-level changes requested by this frame's input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRequests {
    /// New fullscreen state, if it flipped this frame
    pub fullscreen: Option<bool>,
    pub quit: bool,
}

/// State for a running game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub camera: FollowCamera,
    /// Draw hitbox and collider outlines
    pub show_hitboxes: bool,
    pub fullscreen: bool,
    /// Frames simulated so far
    pub frame: u64,
    physics: PhysicsConfig,
}

impl GameState {
    pub fn new(config: &GameConfig, world: &World) -> Self {
        let player = Player::spawn(
            config.player.start_x,
            config.player.start_y,
            world.tile_size(),
            HitboxLayout::from_config(&config.player),
        );
        let camera = FollowCamera::new(
            config.display.virtual_width as f32,
            config.display.virtual_height as f32,
            &config.camera,
        );
        Self {
            player,
            camera,
            show_hitboxes: false,
            fullscreen: false,
            frame: 0,
            physics: config.physics.clone(),
        }
    }

    /// Flip toggles on their key-down edges and report window requests
    pub fn handle_toggles(&mut self, input: &FrameInput) -> FrameRequests {
        let mut requests = FrameRequests {
            quit: input.quit,
            ..Default::default()
        };
        if input.toggle_hitboxes {
            self.show_hitboxes = !self.show_hitboxes;
            log::info!("Hitbox overlay {}", if self.show_hitboxes { "on" } else { "off" });
        }
        if input.toggle_fullscreen {
            self.fullscreen = !self.fullscreen;
            requests.fullscreen = Some(self.fullscreen);
        }
        requests
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self, input: &FrameInput, world: &World) -> CollisionResult {
        self.player.apply_input(input, &self.physics);
        let result = move_and_collide(&mut self.player, world.colliders(), self.physics.gravity);
        self.player.sync_sprite();

        let focus = Vec2::new(self.player.sprite.center_x(), self.player.sprite.center_y());
        self.camera.update(focus, Vec2::new(world.width(), world.height()));

        self.frame += 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Level;

    fn setup() -> (GameState, World) {
        let config = GameConfig::default();
        let world = World::new(Level::builtin(), config.display.virtual_height);
        (GameState::new(&config, &world), world)
    }

    /// Run idle frames until the player stands on something
    fn settle(state: &mut GameState, world: &World) {
        for _ in 0..1000 {
            state.step(&FrameInput::default(), world);
            if state.player.grounded {
                return;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn test_spawn_matches_config() {
        let (state, world) = setup();
        assert_eq!(state.player.sprite.x, 100.0);
        assert_eq!(state.player.sprite.w, world.tile_size());
        assert!(!state.show_hitboxes);
        assert!(!state.fullscreen);
    }

    #[test]
    fn test_debug_toggle_twice_restores() {
        let (mut state, _) = setup();
        let press = FrameInput { toggle_hitboxes: true, ..Default::default() };
        state.handle_toggles(&press);
        assert!(state.show_hitboxes);
        state.handle_toggles(&press);
        assert!(!state.show_hitboxes);
        // Toggles are independent
        assert!(!state.fullscreen);
    }

    #[test]
    fn test_fullscreen_toggle_requests() {
        let (mut state, _) = setup();
        let press = FrameInput { toggle_fullscreen: true, ..Default::default() };
        assert_eq!(state.handle_toggles(&press).fullscreen, Some(true));
        assert_eq!(state.handle_toggles(&press).fullscreen, Some(false));
        assert_eq!(state.handle_toggles(&FrameInput::default()), FrameRequests::default());

        let quit = FrameInput { quit: true, ..Default::default() };
        assert!(state.handle_toggles(&quit).quit);
    }

    #[test]
    fn test_player_lands_on_builtin_ground() {
        let (mut state, world) = setup();
        settle(&mut state, &world);
        // Ground row top is 4 * 144
        assert_eq!(state.player.hitbox.bottom(), 576.0);
        assert_eq!(state.player.velocity.y, 0.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let (mut state, world) = setup();
        settle(&mut state, &world);

        let jump = FrameInput { jump: true, ..Default::default() };
        state.player.apply_input(&jump, &GameConfig::default().physics);
        assert_eq!(state.player.velocity.y, -6.0);
        assert!(!state.player.grounded);

        // The full step rises on the same frame
        let (mut state, world) = setup();
        settle(&mut state, &world);
        let before = state.player.hitbox.y;
        state.step(&jump, &world);
        assert!(state.player.hitbox.y < before);
        assert!(!state.player.grounded);
        assert!((state.player.velocity.y - (-5.9)).abs() < 1e-5);
    }

    #[test]
    fn test_sprite_stays_in_sync() {
        let (mut state, world) = setup();
        let layout = state.player.layout();
        let right = FrameInput { right: true, ..Default::default() };
        for i in 0..600 {
            let input = if i % 90 == 0 {
                FrameInput { right: true, jump: true, ..Default::default() }
            } else {
                right
            };
            state.step(&input, &world);
            let expected = layout.hitbox_for(state.player.sprite);
            let hitbox = state.player.hitbox;
            assert!((expected.x - hitbox.x).abs() < 1e-3);
            assert!((expected.y - hitbox.y).abs() < 1e-3);
            assert_eq!((expected.w, expected.h), (hitbox.w, hitbox.h));
        }
    }

    #[test]
    fn test_camera_stays_in_bounds_while_running() {
        let (mut state, world) = setup();
        let max_x = world.width() - 1080.0;
        let right = FrameInput { right: true, jump: true, ..Default::default() };
        for _ in 0..1500 {
            state.step(&right, &world);
            assert!(state.camera.position.x >= 0.0 && state.camera.position.x <= max_x);
            // World is exactly one view tall
            assert_eq!(state.camera.position.y, 0.0);
        }
        assert!(state.camera.position.x > 0.0);
    }
}
