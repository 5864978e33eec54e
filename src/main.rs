//! Pants: top-down player demo
//!
//! WASD accelerates the player, the mouse aims, the background scrolls
//! underneath. Close the window or press Escape to quit.

use macroquad::prelude::*;
use pants::engine::{bootstrap, exit_on_error, Engine};
use pants::time::{FrameClock, FrameLimiter};
use pants::world::{WINDOW_HEIGHT, WINDOW_WIDTH};
use pants::VERSION;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pants v{}", VERSION),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = exit_on_error(bootstrap());
    let mut engine = exit_on_error(Engine::init(&config));

    let mut clock = FrameClock::new(get_time());
    let mut limiter = FrameLimiter::new(config.target_fps, get_time());

    log::info!("=== Pants v{} ===", VERSION);

    while engine.running() {
        engine.handle_events();

        let frame = clock.tick(get_time());
        engine.update(frame.dt);
        engine.render();

        limiter.wait(get_time());
        next_frame().await;
    }

    log::info!("shutting down after {} frames", clock.frames());
}
