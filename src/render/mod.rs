//! Rendering
//!
//! Each frame is drawn into an offscreen target at the virtual resolution,
//! then scaled into the window with letterbox bars.

pub mod letterbox;

use macroquad::prelude::*;
use crate::asset::GameAssets;
use crate::config::{DisplayConfig, Palette};
use crate::game::GameState;
use crate::world::{self, World};
use letterbox::compute_letterbox;

pub fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Offscreen frame plus the camera that draws into it
pub struct Renderer {
    target: RenderTarget,
    camera: Camera2D,
    virtual_width: f32,
    virtual_height: f32,
    palette: Palette,
}

impl Renderer {
    /// Create the offscreen target. Needs the macroquad context.
    pub fn new(display: &DisplayConfig, palette: &Palette) -> Self {
        let target = render_target(display.virtual_width, display.virtual_height);
        target.texture.set_filter(FilterMode::Linear);

        let virtual_width = display.virtual_width as f32;
        let virtual_height = display.virtual_height as f32;
        let mut camera = Camera2D::from_display_rect(macroquad::math::Rect::new(0.0, 0.0, virtual_width, virtual_height));
        camera.render_target = Some(target.clone());

        Self {
            target,
            camera,
            virtual_width,
            virtual_height,
            palette: palette.clone(),
        }
    }

    fn draw_outline(&self, r: world::Rect, color: Color) {
        draw_rectangle_lines(r.x, r.y, r.w, r.h, self.palette.outline_thickness, color);
    }

    /// Draw background, tiles, player and the optional hitbox overlay into
    /// the offscreen frame
    pub fn draw_frame(&self, world: &World, state: &GameState, assets: &GameAssets) {
        set_camera(&self.camera);

        match &assets.background {
            Some(texture) => {
                clear_background(BLACK);
                draw_texture_ex(
                    texture,
                    0.0,
                    0.0,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(self.virtual_width, self.virtual_height)),
                        ..Default::default()
                    },
                );
            }
            None => clear_background(rgb(self.palette.background_fill)),
        }

        let cam = state.camera.position;
        let view = world::Rect::new(0.0, 0.0, self.virtual_width, self.virtual_height);
        let tile_fill = rgb(self.palette.tile_fill);

        for tile in world.tiles() {
            let r = tile.rect.offset_by(cam.x, cam.y);
            // Off-screen tiles
            if !r.intersects(&view) {
                continue;
            }
            match assets.tiles.get(&tile.code) {
                Some(texture) => draw_texture_ex(
                    texture,
                    r.x,
                    r.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(r.w, r.h)),
                        ..Default::default()
                    },
                ),
                None => draw_rectangle(r.x, r.y, r.w, r.h, tile_fill),
            }
        }

        if let Some(texture) = &assets.player {
            let r = state.player.sprite.offset_by(cam.x, cam.y);
            draw_texture_ex(
                texture,
                r.x,
                r.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(r.w, r.h)),
                    ..Default::default()
                },
            );
        }

        if state.show_hitboxes {
            self.draw_outline(state.player.hitbox.offset_by(cam.x, cam.y), rgb(self.palette.hitbox_outline));
            let collider_color = rgb(self.palette.collider_outline);
            for collider in world.colliders() {
                self.draw_outline(collider.offset_by(cam.x, cam.y), collider_color);
            }
        }
    }

    /// Scale the offscreen frame into the window
    pub fn present(&self) {
        set_default_camera();
        clear_background(rgb(self.palette.letterbox));

        let lb = compute_letterbox(screen_width(), screen_height(), self.virtual_width, self.virtual_height);
        draw_texture_ex(
            &self.target.texture,
            lb.offset_x,
            lb.offset_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(lb.width, lb.height)),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}
