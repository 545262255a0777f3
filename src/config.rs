//! Game configuration
//!
//! Every tunable lives in [`GameConfig`]. The defaults are the values the game
//! ships with; `assets/config.ron` may override any subset of them:
//!
//! ```text
//! (
//!     physics: (gravity: 0.2),
//!     camera: (smoothing: 0.3),
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

/// Default location of the optional override file
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Virtual resolution and frame pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the virtual frame everything is drawn into
    pub virtual_width: u32,
    /// Height of the virtual frame; also decides the tile size
    pub virtual_height: u32,
    /// Target frames per second (physics runs once per frame)
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            virtual_width: 1080,
            virtual_height: 720,
            fps: 60,
        }
    }
}

impl DisplayConfig {
    /// Window size matching the virtual frame at scale 1
    pub fn window_size(&self) -> (f32, f32) {
        (self.virtual_width as f32, self.virtual_height as f32)
    }

    /// The window needs resizing from its startup size
    pub fn needs_resize(&self) -> bool {
        self.window_size() != DisplayConfig::default().window_size()
    }
}

/// Per-frame movement constants (pixels, pixels per frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every frame
    pub gravity: f32,
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            move_speed: 5.0,
            jump_speed: -6.0,
        }
    }
}

/// Follow camera tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Dead-zone band as a fraction of the viewport width
    pub deadzone_width: f32,
    /// Dead-zone band as a fraction of the viewport height
    pub deadzone_height: f32,
    /// Fraction of the remaining distance covered each frame
    pub smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            deadzone_width: 0.2,
            deadzone_height: 0.2,
            smoothing: 0.15,
        }
    }
}

/// Player spawn and hitbox layout relative to the sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Sprite top-left at spawn
    pub start_x: f32,
    pub start_y: f32,
    pub hitbox_offset_x: f32,
    pub hitbox_offset_y: f32,
    pub hitbox_width_reduction: f32,
    pub hitbox_height_reduction: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            start_y: 100.0,
            hitbox_offset_x: 35.0,
            hitbox_offset_y: 42.0,
            hitbox_width_reduction: 70.0,
            hitbox_height_reduction: 42.0,
        }
    }
}

/// Asset file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Root directory; the other paths are relative to it
    pub dir: String,
    pub background: String,
    pub player_sprite: String,
    /// Directory of tile images named after their cell code
    pub tiles_dir: String,
    /// RON level file replacing the built-in map
    pub level_file: Option<String>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
            background: "Background.png".to_string(),
            player_sprite: "nisa-nur-celik-astronaut.gif".to_string(),
            tiles_dir: "tiles".to_string(),
            level_file: None,
        }
    }
}

impl AssetPaths {
    pub fn background_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.background)
    }

    pub fn player_sprite_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.player_sprite)
    }

    pub fn tiles_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.tiles_dir)
    }

    pub fn level_path(&self) -> Option<PathBuf> {
        self.level_file.as_ref().map(|f| Path::new(&self.dir).join(f))
    }
}

/// Fill and outline colors (RGB)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Used when the background image is missing
    pub background_fill: [u8; 3],
    /// Used for tile codes without an image
    pub tile_fill: [u8; 3],
    pub letterbox: [u8; 3],
    pub hitbox_outline: [u8; 3],
    pub collider_outline: [u8; 3],
    pub outline_thickness: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_fill: [100, 150, 200],
            tile_fill: [90, 70, 50],
            letterbox: [0, 0, 0],
            hitbox_outline: [0, 255, 0],
            collider_outline: [255, 0, 0],
            outline_thickness: 2.0,
        }
    }
}

/// All tunables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub display: DisplayConfig,
    pub physics: PhysicsConfig,
    pub camera: CameraConfig,
    pub player: PlayerConfig,
    pub assets: AssetPaths,
    pub colors: Palette,
}

impl GameConfig {
    fn validate(&self) -> Result<(), String> {
        let d = &self.display;
        if d.virtual_width == 0 || d.virtual_height == 0 {
            return Err(format!(
                "virtual resolution must be non-zero ({}x{})",
                d.virtual_width, d.virtual_height
            ));
        }
        if d.fps == 0 {
            return Err("fps must be at least 1".to_string());
        }
        let c = &self.camera;
        if !(c.smoothing > 0.0 && c.smoothing <= 1.0) {
            return Err(format!("camera smoothing {} outside (0, 1]", c.smoothing));
        }
        for (name, v) in [("deadzone_width", c.deadzone_width), ("deadzone_height", c.deadzone_height)] {
            if !(0.0..=0.5).contains(&v) {
                return Err(format!("camera {} {} outside [0, 0.5]", name, v));
            }
        }
        let p = &self.physics;
        if !(p.gravity.is_finite() && p.move_speed.is_finite() && p.jump_speed.is_finite()) {
            return Err("physics constants must be finite".to_string());
        }
        Ok(())
    }

    /// Read the config at `path`, or fall back to defaults.
    /// A missing file is normal; a broken one is reported.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match load_config(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Parse config RON text. Missing fields keep their defaults.
pub fn parse_config(text: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = ron::from_str(text)?;
    config.validate().map_err(ConfigError::ValidationError)?;
    Ok(config)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.display.virtual_width, 1080);
        assert_eq!(config.display.virtual_height, 720);
        assert_eq!(config.display.fps, 60);
        assert_eq!(config.physics.jump_speed, -6.0);
        assert_eq!(config.camera.smoothing, 0.15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config("(physics: (gravity: 0.25), camera: (smoothing: 0.5))").unwrap();
        assert_eq!(config.physics.gravity, 0.25);
        assert_eq!(config.physics.move_speed, 5.0);
        assert_eq!(config.camera.smoothing, 0.5);
        assert_eq!(config.camera.deadzone_width, 0.2);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_only_size_changes_resize_window() {
        assert!(!GameConfig::default().display.needs_resize());
        assert!(!parse_config("(display: (fps: 30))").unwrap().display.needs_resize());

        let config = parse_config("(display: (virtual_width: 640, virtual_height: 480))").unwrap();
        assert!(config.display.needs_resize());
        assert_eq!(config.display.window_size(), (640.0, 480.0));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("()").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            parse_config("(display: (virtual_width: 0))"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            parse_config("(camera: (smoothing: 0.0))"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(parse_config("(display: ("), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_asset_paths() {
        let paths = AssetPaths {
            level_file: Some("level.ron".to_string()),
            ..AssetPaths::default()
        };
        assert_eq!(paths.tiles_path(), Path::new("assets").join("tiles"));
        assert_eq!(paths.level_path(), Some(Path::new("assets").join("level.ron")));
        assert_eq!(AssetPaths::default().level_path(), None);
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());

        fs::write(&path, "(display: (fps: 30))").unwrap();
        assert_eq!(GameConfig::load_or_default(&path).display.fps, 30);

        fs::write(&path, "garbage").unwrap();
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }
}
