//! tilehop: a side-scrolling tile platformer
//!
//! One player, one tile map, one follow camera. The game runs at a fixed
//! virtual resolution and scales into the window with letterbox bars.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const WINDOW_TITLE: &str = "tilehop";

mod asset;
mod config;
mod game;
mod input;
mod render;
mod world;

use macroquad::prelude::*;
use asset::GameAssets;
use config::{DisplayConfig, GameConfig, CONFIG_PATH};
use game::{FrameLimiter, GameState};
use input::InputState;
use render::Renderer;
use world::{load_level, Level, World};

fn window_conf() -> Conf {
    let display = DisplayConfig::default();
    Conf {
        window_title: format!("{} v{}", WINDOW_TITLE, VERSION),
        window_width: display.virtual_width as i32,
        window_height: display.virtual_height as i32,
        window_resizable: true,
        // Start windowed; F11 toggles
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

/// The configured level file, or the built-in map when there is none or it
/// fails to load
fn load_configured_level(config: &GameConfig) -> Level {
    let Some(path) = config.assets.level_path() else {
        return Level::builtin();
    };
    match load_level(&path) {
        Ok(level) => {
            log::info!("Loaded level {} ({}x{})", path.display(), level.columns(), level.rows());
            level
        }
        Err(e) => {
            log::warn!("Failed to load level {}: {}, using built-in level", path.display(), e);
            Level::builtin()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Closing the window goes through the frame loop like any other input
    prevent_quit();

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let display = &config.display;
    if display.needs_resize() {
        let (w, h) = display.window_size();
        request_new_screen_size(w, h);
    }

    let world = World::new(load_configured_level(&config), display.virtual_height);
    log::info!(
        "World {}x{} px, tile size {}, {} colliders",
        world.width(),
        world.height(),
        world.tile_size(),
        world.colliders().len()
    );

    let assets = GameAssets::load(
        &config.assets,
        (display.virtual_width, display.virtual_height),
        world.tile_size(),
        &world.level().tile_codes(),
    );
    let renderer = Renderer::new(display, &config.colors);
    let mut state = GameState::new(&config, &world);
    let mut input = InputState::new();
    let limiter = FrameLimiter::new(display.fps);

    if input.has_gamepad() {
        log::info!("Gamepad connected");
    }
    log::info!("=== tilehop v{} ===", VERSION);

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        let frame_input = input.frame_input();
        let requests = state.handle_toggles(&frame_input);
        if requests.quit {
            log::info!("Quit after {} frames", state.frame);
            break;
        }
        if let Some(fullscreen) = requests.fullscreen {
            log::info!("Fullscreen {}", if fullscreen { "on" } else { "off" });
            set_fullscreen(fullscreen);
            if !fullscreen {
                let (w, h) = display.window_size();
                request_new_screen_size(w, h);
            }
        }

        state.step(&frame_input, &world);

        renderer.draw_frame(&world, &state, &assets);
        renderer.present();

        limiter.wait(frame_start);
        next_frame().await;
    }
}
