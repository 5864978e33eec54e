//! Player demo engine: owns the textures and the scene, drives one frame at
//! a time.

use std::path::Path;

use macroquad::prelude::*;

use super::{quit_requested, upload_texture};
use crate::config::DemoConfig;
use crate::error::{AssetError, DemoError};
use crate::rasterizer::{Color as RasterColor, Texture as RasterTexture, Vec2 as WorldVec2};
use crate::world::{
    tile_origins, FrameInput, MovementInput, Scene, CROSSHAIR_SIZE, FRAME_SIZE, PLAYER_CENTER,
    PLAYER_SIZE, WINDOW_HEIGHT, WINDOW_SIZE, WINDOW_WIDTH,
};

pub struct Engine {
    scene: Scene,
    player_texture: Texture2D,
    crosshair_texture: Texture2D,
    background_texture: Texture2D,
    quit: bool,
}

impl Engine {
    /// Load textures and set up the scene.
    ///
    /// The player and crosshair sheets are required. A missing tileset
    /// falls back to a generated checkerboard.
    pub fn init(config: &DemoConfig) -> Result<Self, DemoError> {
        let player = load_required(&config.assets.player)?;
        let crosshair = load_required(&config.assets.crosshair)?;
        let tileset = match RasterTexture::from_file(&config.assets.tileset) {
            Ok(tex) => tex,
            Err(e) => {
                log::warn!("{}; using a checkerboard background", e);
                RasterTexture::checkerboard(
                    64,
                    64,
                    16,
                    RasterColor::new(34, 32, 52),
                    RasterColor::new(44, 42, 66),
                )
            }
        };

        let frame_count = (player.width as u32 / FRAME_SIZE).max(1);
        log::info!(
            "player sheet {}x{} ({} frames)",
            player.width,
            player.height,
            frame_count
        );

        show_mouse(false);
        prevent_quit();

        Ok(Self {
            scene: Scene::new(config.player.clone(), frame_count),
            player_texture: upload_texture(&player),
            crosshair_texture: upload_texture(&crosshair),
            background_texture: upload_texture(&tileset),
            quit: false,
        })
    }

    pub fn running(&self) -> bool {
        !self.quit
    }

    pub fn handle_events(&mut self) {
        if quit_requested() {
            log::info!("quit requested");
            self.quit = true;
        }
    }

    /// Sample WASD and the mouse, then advance the scene
    pub fn update(&mut self, dt: f32) {
        let (mx, my) = mouse_position();
        let input = FrameInput {
            movement: MovementInput {
                up: is_key_down(KeyCode::W),
                down: is_key_down(KeyCode::S),
                left: is_key_down(KeyCode::A),
                right: is_key_down(KeyCode::D),
            },
            mouse: WorldVec2::new(mx, my),
        };
        self.scene.update(&input, dt);
        log::trace!(
            "pos=({:.1}, {:.1}) vel=({:.1}, {:.1})",
            self.scene.player.position().x,
            self.scene.player.position().y,
            self.scene.player.velocity.x,
            self.scene.player.velocity.y
        );
    }

    pub fn render(&self) {
        clear_background(BLACK);
        self.draw_background();
        self.draw_player();
        self.draw_crosshair();
    }

    fn draw_background(&self) {
        let tile = vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        let offset = self.scene.background_offset();
        for origin in tile_origins(offset, WINDOW_SIZE) {
            draw_texture_ex(
                &self.background_texture,
                origin.x as f32,
                origin.y as f32,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(tile),
                    ..Default::default()
                },
            );
        }
    }

    /// Player is pinned to the window center and rotated toward the mouse
    fn draw_player(&self) {
        let object = &self.scene.player.object;
        let frame = object.current_frame;
        draw_texture_ex(
            &self.player_texture,
            PLAYER_CENTER.x,
            PLAYER_CENTER.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(PLAYER_SIZE, PLAYER_SIZE)),
                source: Some(Rect::new(
                    frame.x as f32,
                    frame.y as f32,
                    frame.w as f32,
                    frame.h as f32,
                )),
                rotation: object.angle.to_radians(),
                ..Default::default()
            },
        );
    }

    fn draw_crosshair(&self) {
        let half = CROSSHAIR_SIZE / 2.0;
        draw_texture_ex(
            &self.crosshair_texture,
            self.scene.mouse.x - half,
            self.scene.mouse.y - half,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(CROSSHAIR_SIZE, CROSSHAIR_SIZE)),
                ..Default::default()
            },
        );
    }
}

fn load_required(path: &Path) -> Result<RasterTexture, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }
    let tex = RasterTexture::from_file(path)?;
    log::info!("loaded texture {} ({}x{})", tex.name, tex.width, tex.height);
    Ok(tex)
}
