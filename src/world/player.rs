//! Player sprite: acceleration physics and animation

use crate::config::PlayerTuning;
use crate::rasterizer::{heading_degrees, FrameRect, Vec2};
use super::FRAME_SIZE;

/// WASD snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    /// Per-axis direction in {-1, 0, 1}. Up/left win over down/right.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            axis_direction(self.left, self.right),
            axis_direction(self.up, self.down),
        )
    }
}

/// -1 if the negative key is held, else +1 for the positive key, else 0
pub fn axis_direction(negative: bool, positive: bool) -> f32 {
    if negative {
        -1.0
    } else if positive {
        1.0
    } else {
        0.0
    }
}

/// Advance one velocity component.
///
/// With a direction, accelerate toward it and clamp at `max_speed`.
/// Without one, brake toward zero by the same rate and stop at zero.
pub fn step_axis(v: f32, direction: f32, accel: f32, max_speed: f32, dt: f32) -> f32 {
    let dv = accel * dt;
    if direction < 0.0 {
        (v - dv).max(-max_speed)
    } else if direction > 0.0 {
        (v + dv).min(max_speed)
    } else if v > 0.0 {
        (v - dv).max(0.0)
    } else if v < 0.0 {
        (v + dv).min(0.0)
    } else {
        0.0
    }
}

/// Anything drawn from a sprite sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct Object {
    pub position: Vec2,
    pub current_frame: FrameRect,
    /// Rotation in degrees, clockwise
    pub angle: f32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub object: Object,
    pub velocity: Vec2,
    pub frame_index: u32,
    /// Number of animation frames laid out horizontally on the sheet
    pub frame_count: u32,
}

impl Player {
    pub fn new(position: Vec2, frame_count: u32) -> Self {
        Self {
            object: Object {
                position,
                current_frame: FrameRect::square(FRAME_SIZE),
                angle: 0.0,
            },
            velocity: Vec2::ZERO,
            frame_index: 0,
            frame_count: frame_count.max(1),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.object.position
    }

    pub fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }

    /// Update velocity from this frame's keys
    pub fn apply_input(&mut self, input: &MovementInput, tuning: &PlayerTuning, dt: f32) {
        let dir = input.direction();
        self.velocity.x = step_axis(self.velocity.x, dir.x, tuning.accel, tuning.max_speed, dt);
        self.velocity.y = step_axis(self.velocity.y, dir.y, tuning.accel, tuning.max_speed, dt);
    }

    pub fn update_position(&mut self, dt: f32) {
        self.object.position += self.velocity * dt;
    }

    /// Face the mouse and step the walk cycle.
    ///
    /// `center` is the on-screen point the player is drawn around. The sheet
    /// art faces up, hence the quarter-turn offset.
    pub fn update_animation_frame(&mut self, mouse: Vec2, center: Vec2) {
        if mouse != center {
            self.object.angle = heading_degrees(center, mouse) + 90.0;
        }

        self.frame_index = if self.is_moving() {
            (self.frame_index + 1) % self.frame_count
        } else {
            0
        };
        self.object.current_frame.x = self.frame_index * FRAME_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn tuning() -> PlayerTuning {
        PlayerTuning {
            accel: 600.0,
            max_speed: 200.0,
            start_position: Vec2::ZERO,
        }
    }

    #[test]
    fn test_axis_priority() {
        assert_eq!(axis_direction(true, true), -1.0);
        assert_eq!(axis_direction(false, true), 1.0);
        assert_eq!(axis_direction(false, false), 0.0);

        let both = MovementInput { up: true, down: true, left: true, right: true };
        assert_eq!(both.direction(), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_velocity_clamps_to_max() {
        let t = tuning();
        let mut p = Player::new(Vec2::ZERO, 4);
        let input = MovementInput { right: true, up: true, ..Default::default() };
        for _ in 0..600 {
            p.apply_input(&input, &t, DT);
            assert!(p.velocity.x <= t.max_speed);
            assert!(p.velocity.y >= -t.max_speed);
        }
        assert_eq!(p.velocity.x, t.max_speed);
        assert_eq!(p.velocity.y, -t.max_speed);
    }

    #[test]
    fn test_velocity_decays_to_zero_without_crossing() {
        let t = tuning();
        let mut p = Player::new(Vec2::ZERO, 1);
        p.velocity = Vec2::new(150.0, -37.0);
        let idle = MovementInput::default();
        let mut prev = p.velocity;
        for _ in 0..120 {
            p.apply_input(&idle, &t, DT);
            assert!(p.velocity.x >= 0.0 && p.velocity.x <= prev.x);
            assert!(p.velocity.y <= 0.0 && p.velocity.y >= prev.y);
            prev = p.velocity;
        }
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_released_axis_brakes_while_other_held() {
        let t = tuning();
        let mut p = Player::new(Vec2::ZERO, 1);
        p.velocity = Vec2::new(0.0, 100.0);
        let input = MovementInput { right: true, ..Default::default() };
        p.apply_input(&input, &t, 0.1);
        assert!((p.velocity.x - 60.0).abs() < 0.001);
        assert!((p.velocity.y - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_reversing_direction_passes_through_zero() {
        let t = tuning();
        let mut p = Player::new(Vec2::ZERO, 1);
        p.velocity.x = 30.0;
        let left = MovementInput { left: true, ..Default::default() };
        p.apply_input(&left, &t, 0.1);
        assert!((p.velocity.x + 30.0).abs() < 0.001);
    }

    #[test]
    fn test_update_position_integrates_velocity() {
        let mut p = Player::new(Vec2::new(100.0, 40.5), 1);
        p.velocity = Vec2::new(10.0, -20.0);
        p.update_position(0.5);
        assert!((p.position().x - 105.0).abs() < 0.001);
        assert!((p.position().y - 30.5).abs() < 0.001);
    }

    #[test]
    fn test_animation_cycles_while_moving() {
        let mut p = Player::new(Vec2::ZERO, 3);
        p.velocity = Vec2::new(1.0, 0.0);
        let center = Vec2::new(100.0, 100.0);

        p.update_animation_frame(center, center);
        assert_eq!(p.frame_index, 1);
        assert_eq!(p.object.current_frame.x, FRAME_SIZE);
        p.update_animation_frame(center, center);
        p.update_animation_frame(center, center);
        assert_eq!(p.frame_index, 0);

        p.update_animation_frame(center, center);
        p.velocity = Vec2::ZERO;
        p.update_animation_frame(center, center);
        assert_eq!(p.frame_index, 0);
        assert_eq!(p.object.current_frame.x, 0);
    }

    #[test]
    fn test_faces_mouse() {
        let mut p = Player::new(Vec2::ZERO, 1);
        let center = Vec2::new(100.0, 100.0);

        // Mouse straight above: no rotation
        p.update_animation_frame(Vec2::new(100.0, 20.0), center);
        assert!(p.object.angle.abs() < 0.001);

        // Mouse to the right: quarter turn clockwise
        p.update_animation_frame(Vec2::new(180.0, 100.0), center);
        assert!((p.object.angle - 90.0).abs() < 0.001);

        // Mouse on the center keeps the previous heading
        p.update_animation_frame(center, center);
        assert!((p.object.angle - 90.0).abs() < 0.001);
    }
}
