//! World state for both demos
//!
//! Plain records mutated once per tick. Nothing in here touches the window,
//! so all of it is unit tested.

mod background;
mod cube;
mod player;
mod scene;

pub use background::*;
pub use cube::*;
pub use player::*;
pub use scene::*;

use crate::rasterizer::{IVec2, Vec2};

pub const WINDOW_WIDTH: i32 = 960;
pub const WINDOW_HEIGHT: i32 = 720;
pub const WINDOW_SIZE: IVec2 = IVec2::new(WINDOW_WIDTH, WINDOW_HEIGHT);

/// Sprite texels are drawn this many pixels wide
pub const WINDOW_SCALE: f32 = 3.0;

/// Edge length of one sprite sheet frame, in texels
pub const FRAME_SIZE: u32 = 16;

/// On-screen player size
pub const PLAYER_SIZE: f32 = FRAME_SIZE as f32 * WINDOW_SCALE;

pub const CROSSHAIR_SIZE: f32 = 28.0;

pub const WINDOW_CENTER: Vec2 = Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0);

/// Top-left of the player sprite, which stays centered in the window
pub const PLAYER_CENTER: Vec2 = Vec2::new(
    WINDOW_CENTER.x - PLAYER_SIZE / 2.0,
    WINDOW_CENTER.y - PLAYER_SIZE / 2.0,
);

/// Seconds between animation frame changes
pub const ANIMATION_INTERVAL: f32 = 0.11;
