//! Demo configuration
//!
//! Uses RON (Rusty Object Notation), read from `pants.ron` in the working
//! directory. Every field has a default, so the file is optional and may be
//! partial.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rasterizer::{Vec2, SCANLINE_ALPHA};

/// Default config file name, looked up relative to the working directory
pub const CONFIG_FILE: &str = "pants.ron";

/// Player movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Acceleration and deceleration, pixels per second squared
    pub accel: f32,
    /// Velocity clamp per axis, pixels per second
    pub max_speed: f32,
    /// Spawn position in world space
    pub start_position: Vec2,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            accel: 900.0,
            max_speed: 300.0,
            start_position: Vec2::new(100.0, 40.5),
        }
    }
}

/// Texture locations for the player demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: PathBuf,
    pub crosshair: PathBuf,
    pub tileset: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: PathBuf::from("assets/player.png"),
            crosshair: PathBuf::from("assets/crosshair.png"),
            tileset: PathBuf::from("assets/tileset.png"),
        }
    }
}

/// CRT demo tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrtTuning {
    /// Cube velocity in game pixels per second
    pub cube_velocity: Vec2,
    /// Cube outline edge length in game pixels
    pub cube_size: f32,
    /// Alpha of the dark scanline rows
    pub scanline_alpha: u8,
}

impl Default for CrtTuning {
    fn default() -> Self {
        Self {
            cube_velocity: Vec2::new(60.0, 45.0),
            cube_size: 10.0,
            scanline_alpha: SCANLINE_ALPHA,
        }
    }
}

/// Top-level config for both demos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub player: PlayerTuning,
    pub assets: AssetPaths,
    pub crt: CrtTuning,
    /// Frame cap; 0 disables the limiter and relies on vsync alone
    pub target_fps: u32,
    /// `env_logger` filter, overrides `RUST_LOG` when set
    pub log_filter: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            assets: AssetPaths::default(),
            crt: CrtTuning::default(),
            target_fps: 60,
            log_filter: None,
        }
    }
}

/// Load config from a RON file. A missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig, ConfigError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => load_config_from_str(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(DemoConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load config from a RON string
pub fn load_config_from_str(s: &str) -> Result<DemoConfig, ConfigError> {
    Ok(ron::from_str(s)?)
}
