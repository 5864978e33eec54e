//! CRT demo window: a streaming game texture with a scanline overlay on top

use macroquad::prelude::*;

use super::{quit_requested, upload_framebuffer};
use crate::config::CrtTuning;
use crate::rasterizer::{
    scanline_overlay, Color as RasterColor, Framebuffer, GAME_HEIGHT, GAME_WIDTH, SCANLINE_HEIGHT,
    SCANLINE_WIDTH,
};
use crate::world::CrtScene;

/// Background of the game texture
const GAME_CLEAR: RasterColor = RasterColor::BLACK;
/// Cube outline color
const CUBE_COLOR: RasterColor = RasterColor::AMBER;

pub struct CrtWindow {
    framebuffer: Framebuffer,
    game_texture: Texture2D,
    scanline_texture: Texture2D,
    quit: bool,
}

impl CrtWindow {
    pub fn init(tuning: &CrtTuning) -> Self {
        let framebuffer = Framebuffer::new(GAME_WIDTH, GAME_HEIGHT);
        let game_texture = create_game_texture(&framebuffer);
        let scanline_texture = create_scanline_texture(tuning.scanline_alpha);
        prevent_quit();
        log::info!(
            "game texture {}x{}, scanlines {}x{}",
            GAME_WIDTH,
            GAME_HEIGHT,
            SCANLINE_WIDTH,
            SCANLINE_HEIGHT
        );

        Self {
            framebuffer,
            game_texture,
            scanline_texture,
            quit: false,
        }
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

    /// Redraw the pixel buffer, stream it to the GPU, then scale both layers
    /// over the whole window
    pub fn render(&mut self, scene: &CrtScene) {
        paint_frame(&mut self.framebuffer, scene);
        self.game_texture.update_from_bytes(
            self.framebuffer.width as u32,
            self.framebuffer.height as u32,
            &self.framebuffer.pixels,
        );

        clear_background(BLACK);
        let dest = vec2(screen_width(), screen_height());
        for texture in [&self.game_texture, &self.scanline_texture] {
            draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(dest),
                    ..Default::default()
                },
            );
        }
    }
}

/// Game-resolution texture rewritten every frame
fn create_game_texture(fb: &Framebuffer) -> Texture2D {
    upload_framebuffer(fb)
}

/// Static overlay, drawn once at startup
fn create_scanline_texture(alpha: u8) -> Texture2D {
    upload_framebuffer(&scanline_overlay(SCANLINE_WIDTH, SCANLINE_HEIGHT, alpha))
}

/// CPU side of one frame: clear and outline the cube
pub fn paint_frame(fb: &mut Framebuffer, scene: &CrtScene) {
    fb.clear(GAME_CLEAR);
    let cube = &scene.cube;
    let size = cube.size.round() as i32;
    fb.draw_rect_outline(
        cube.position.x.round() as i32,
        cube.position.y.round() as i32,
        size,
        size,
        CUBE_COLOR,
    );
}
