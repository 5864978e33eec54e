//! Window-facing wrappers around macroquad
//!
//! Everything that needs a live window lives here: texture uploads, input
//! sampling and draw calls. Simulation state comes from `crate::world`.

mod crt;
mod game;

pub use crt::*;
pub use game::*;

use macroquad::prelude::*;

use crate::config::{load_config, DemoConfig, CONFIG_FILE};
use crate::error::DemoError;
use crate::logging::init_logging;
use crate::rasterizer::{Framebuffer, Texture as RasterTexture};

/// Load `pants.ron` and bring up logging.
///
/// Logging is initialized even when the config fails so the error can be
/// reported.
pub fn bootstrap() -> Result<DemoConfig, DemoError> {
    match load_config(CONFIG_FILE) {
        Ok(config) => {
            init_logging(config.log_filter.as_deref());
            log::info!("config loaded (target {} fps)", config.target_fps);
            Ok(config)
        }
        Err(e) => {
            init_logging(None);
            Err(e.into())
        }
    }
}

/// Log a startup error and exit with status 1
pub fn exit_on_error<T>(result: Result<T, DemoError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("initialization failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// True once the user closes the window or presses Escape.
/// Requires `prevent_quit()` to have been called during init.
pub fn quit_requested() -> bool {
    is_quit_requested() || is_key_pressed(KeyCode::Escape)
}

/// Upload a decoded image as a nearest-filtered GPU texture
pub fn upload_texture(texture: &RasterTexture) -> Texture2D {
    let tex = Texture2D::from_rgba8(
        texture.width as u16,
        texture.height as u16,
        &texture.to_rgba8(),
    );
    tex.set_filter(FilterMode::Nearest);
    tex
}

/// Upload a framebuffer as a nearest-filtered GPU texture
pub fn upload_framebuffer(fb: &Framebuffer) -> Texture2D {
    let tex = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
    tex.set_filter(FilterMode::Nearest);
    tex
}
