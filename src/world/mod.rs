//! World module - static tile geometry
//!
//! Turns a [`Level`] into world-space tiles and colliders. The tile size is
//! derived from the virtual frame height so the whole map fits vertically,
//! and the map is aligned to the bottom of the frame.

mod level;
mod rect;

pub use level::*;
pub use rect::Rect;

/// A drawable tile placed in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    /// Cell code (digit) naming the tile image
    pub code: char,
    pub rect: Rect,
}

/// Level geometry for one session. Never changes after construction.
#[derive(Debug, Clone)]
pub struct World {
    level: Level,
    tile_size: f32,
    tiles: Vec<PlacedTile>,
    /// One collider per non-empty cell, row-major
    colliders: Vec<Rect>,
    width: f32,
    height: f32,
}

impl World {
    /// Lay out `level` for a virtual frame of the given height
    pub fn new(level: Level, virtual_height: u32) -> Self {
        let rows = level.rows().max(1) as u32;
        let tile_size = (virtual_height / rows) as f32;
        let y_offset = virtual_height as f32 - level.rows() as f32 * tile_size;

        let tiles: Vec<PlacedTile> = level
            .solid_cells()
            .map(|(row, column, code)| PlacedTile {
                code,
                rect: Rect::square(
                    column as f32 * tile_size,
                    y_offset + row as f32 * tile_size,
                    tile_size,
                ),
            })
            .collect();
        let colliders = tiles.iter().map(|t| t.rect).collect();

        Self {
            width: level.columns() as f32 * tile_size,
            height: level.rows() as f32 * tile_size,
            level,
            tile_size,
            tiles,
            colliders,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Edge length of one square tile, in virtual pixels
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn tiles(&self) -> &[PlacedTile] {
        &self.tiles
    }

    pub fn colliders(&self) -> &[Rect] {
        &self.colliders
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
