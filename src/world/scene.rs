//! Player demo state: one player, one crosshair, one background

use crate::config::PlayerTuning;
use crate::rasterizer::{IVec2, Vec2};
use super::background::Background;
use super::player::{MovementInput, Player};
use super::{ANIMATION_INTERVAL, PLAYER_CENTER, WINDOW_CENTER, WINDOW_SIZE};

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub movement: MovementInput,
    pub mouse: Vec2,
}

pub struct Scene {
    pub player: Player,
    pub background: Background,
    pub mouse: Vec2,
    pub tuning: PlayerTuning,
    animation_timer: f32,
}

impl Scene {
    pub fn new(tuning: PlayerTuning, frame_count: u32) -> Self {
        Self {
            player: Player::new(tuning.start_position, frame_count),
            background: Background::new(),
            mouse: WINDOW_CENTER,
            tuning,
            animation_timer: 0.0,
        }
    }

    /// One simulation tick: velocity, animation throttle, then position
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        self.mouse = input.mouse;
        self.player.apply_input(&input.movement, &self.tuning, dt);

        if self.animation_timer >= ANIMATION_INTERVAL {
            self.player.update_animation_frame(self.mouse, WINDOW_CENTER);
            self.animation_timer = 0.0;
        } else {
            self.animation_timer += dt;
        }

        self.player.update_position(dt);
        self.background.wrap(self.camera_transform(), WINDOW_SIZE);
    }

    /// World-to-screen offset: the player is pinned at `PLAYER_CENTER`
    pub fn camera_transform(&self) -> IVec2 {
        (self.player.position() - PLAYER_CENTER).truncate()
    }

    /// Screen position of the anchor background tile
    pub fn background_offset(&self) -> IVec2 {
        self.background.screen_offset(self.camera_transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(PlayerTuning::default(), 4)
    }

    #[test]
    fn test_animation_throttled() {
        let mut s = scene();
        s.player.velocity = Vec2::new(1.0, 0.0);
        let input = FrameInput {
            movement: MovementInput { right: true, ..Default::default() },
            mouse: WINDOW_CENTER,
        };

        // Ten 10ms frames accumulate 0.1s, still under the interval
        for _ in 0..10 {
            s.update(&input, 0.01);
        }
        assert_eq!(s.player.frame_index, 0);

        // Timer passes 0.11 on the next frame, frame after that flips
        s.update(&input, 0.02);
        assert_eq!(s.player.frame_index, 0);
        s.update(&input, 0.01);
        assert_eq!(s.player.frame_index, 1);
    }

    #[test]
    fn test_background_offset_stays_in_window() {
        let mut s = scene();
        let input = FrameInput {
            movement: MovementInput { left: true, down: true, ..Default::default() },
            mouse: Vec2::new(10.0, 10.0),
        };
        for _ in 0..2000 {
            s.update(&input, 1.0 / 60.0);
            let off = s.background_offset();
            assert!(off.x >= 0 && off.x < WINDOW_SIZE.x);
            assert!(off.y >= 0 && off.y < WINDOW_SIZE.y);
        }
        assert!(s.player.position().x < 0.0);
    }

    #[test]
    fn test_player_comes_to_rest() {
        let mut s = scene();
        s.player.velocity = Vec2::new(200.0, -200.0);
        let idle = FrameInput { movement: MovementInput::default(), mouse: WINDOW_CENTER };
        for _ in 0..120 {
            s.update(&idle, 1.0 / 60.0);
        }
        assert_eq!(s.player.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_camera_transform_pins_player() {
        let mut s = scene();
        s.player.object.position = PLAYER_CENTER + Vec2::new(50.5, -20.0);
        assert_eq!(s.camera_transform(), IVec2::new(50, -20));
    }
}
