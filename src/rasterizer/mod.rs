//! Tiny CPU pixel pipeline
//!
//! Features:
//! - RGBA8 framebuffer uploaded to a streaming texture every frame
//! - Bresenham lines and clipped rectangle outlines
//! - Pre-rendered CRT scanline overlay

mod math;
mod types;
mod render;

pub use math::*;
pub use types::*;
pub use render::*;

/// Native resolution of the CRT demo's game texture
pub const GAME_WIDTH: usize = 320;
pub const GAME_HEIGHT: usize = 240;

/// Window pixels per game pixel in the CRT demo
pub const CRT_SCALE: usize = 3;

/// Scanline overlay resolution (one overlay row per window row)
pub const SCANLINE_WIDTH: usize = GAME_WIDTH;
pub const SCANLINE_HEIGHT: usize = GAME_HEIGHT * CRT_SCALE;
