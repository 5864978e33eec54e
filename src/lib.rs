//! Pants: two tiny real-time rendering demos on macroquad
//!
//! - `pants`: WASD player with acceleration physics, a wrapping tiled
//!   background and a mouse crosshair
//! - `crt`: a square drifting across a streaming pixel texture with a
//!   scanline overlay

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod rasterizer;
pub mod time;
pub mod world;
