//! Game asset library
//!
//! Finds tile images on disk and loads every texture the game draws. A
//! missing or broken image is logged and skipped; the game falls back to
//! flat fills for it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use macroquad::prelude::Texture2D;
use crate::config::AssetPaths;
use super::asset::{apply_color_key, load_rgba, to_texture, AssetError};

/// Color made transparent in the player sprite
pub const PLAYER_COLOR_KEY: [u8; 3] = [0, 0, 0];

/// A tile image found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFile {
    /// Cell code the image is drawn for
    pub code: char,
    pub path: PathBuf,
}

/// Cell code named by a tile file stem: a single non-zero digit
fn tile_code(stem: &str) -> Option<char> {
    let mut chars = stem.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() && c != '0' => Some(c),
        _ => None,
    }
}

/// List the tile images in `dir`, sorted by path
///
/// Files whose stem is not a single non-zero digit are ignored. When two
/// files map to the same code (`1.png` and `1.jpg`) the first one wins.
pub fn discover_tiles(dir: &Path) -> Result<Vec<TileFile>, std::io::Error> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut tiles: Vec<TileFile> = Vec::new();
    for path in paths {
        let Some(code) = path.file_stem().and_then(|s| s.to_str()).and_then(tile_code) else {
            log::debug!("Ignoring {} in tile directory", path.display());
            continue;
        };
        if let Some(existing) = tiles.iter().find(|t| t.code == code) {
            log::warn!(
                "Tile '{}' has more than one image, using {} over {}",
                code,
                existing.path.display(),
                path.display()
            );
            continue;
        }
        tiles.push(TileFile { code, path });
    }
    Ok(tiles)
}

fn texture_from(path: &Path, size: (u32, u32), color_key: Option<[u8; 3]>) -> Result<Texture2D, AssetError> {
    let mut img = load_rgba(path, Some(size))?;
    if let Some(key) = color_key {
        apply_color_key(&mut img, key);
    }
    to_texture(&img)
}

/// Load a texture, logging and returning `None` on failure
fn load_texture_or_none(what: &str, path: &Path, size: (u32, u32), color_key: Option<[u8; 3]>) -> Option<Texture2D> {
    match texture_from(path, size, color_key) {
        Ok(texture) => {
            log::info!("Loaded {} from {} ({}x{})", what, path.display(), size.0, size.1);
            Some(texture)
        }
        Err(e) => {
            log::warn!("Could not load {}: {}", what, e);
            None
        }
    }
}

/// Every texture drawn by the game, resized to its on-screen size
pub struct GameAssets {
    pub background: Option<Texture2D>,
    pub player: Option<Texture2D>,
    pub tiles: HashMap<char, Texture2D>,
}

impl GameAssets {
    /// Load all images. Needs the macroquad context.
    ///
    /// `tile_codes` are the codes used by the level; codes without an image
    /// are reported once here.
    pub fn load(paths: &AssetPaths, virtual_size: (u32, u32), tile_size: f32, tile_codes: &[char]) -> Self {
        let tile_px = (tile_size.round() as u32).max(1);
        let tile_dims = (tile_px, tile_px);

        let background = load_texture_or_none("background", &paths.background_path(), virtual_size, None);
        let player = load_texture_or_none("player sprite", &paths.player_sprite_path(), tile_dims, Some(PLAYER_COLOR_KEY));

        let mut tiles = HashMap::new();
        let tiles_dir = paths.tiles_path();
        match discover_tiles(&tiles_dir) {
            Ok(files) => {
                for file in files {
                    let what = format!("tile '{}'", file.code);
                    if let Some(texture) = load_texture_or_none(&what, &file.path, tile_dims, None) {
                        tiles.insert(file.code, texture);
                    }
                }
            }
            Err(e) => log::warn!("Cannot read tile directory {}: {}", tiles_dir.display(), e),
        }

        for code in tile_codes.iter().filter(|c| !tiles.contains_key(c)) {
            log::warn!("No image for tile '{}', drawing a flat fill", code);
        }

        Self { background, player, tiles }
    }
}
