//! CRT demo: a square outline drifting over a streaming pixel texture, with
//! scanlines blended on top. Close the window or press Escape to quit.

use macroquad::prelude::*;
use pants::engine::{bootstrap, exit_on_error, CrtWindow};
use pants::rasterizer::{Vec2 as WorldVec2, CRT_SCALE, GAME_HEIGHT, GAME_WIDTH};
use pants::time::{FrameClock, FrameLimiter};
use pants::world::CrtScene;
use pants::VERSION;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pants CRT v{}", VERSION),
        window_width: (GAME_WIDTH * CRT_SCALE) as i32,
        window_height: (GAME_HEIGHT * CRT_SCALE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = exit_on_error(bootstrap());
    let mut window = CrtWindow::init(&config.crt);
    let mut scene = CrtScene::new(
        &config.crt,
        WorldVec2::new(GAME_WIDTH as f32, GAME_HEIGHT as f32),
    );

    let mut clock = FrameClock::new(get_time());
    let mut limiter = FrameLimiter::new(config.target_fps, get_time());

    log::info!("=== Pants CRT v{} ===", VERSION);

    while window.running() {
        window.handle_events();

        let frame = clock.tick(get_time());
        let steps = scene.advance(frame.dt);
        log::trace!("frame {}: {} steps", frame.frame_index, steps);
        window.render(&scene);

        limiter.wait(get_time());
        next_frame().await;
    }

    log::info!("shutting down after {} simulation steps", scene.steps());
}
