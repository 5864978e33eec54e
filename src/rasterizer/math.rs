//! 2D vector math for positions, velocities and screen offsets

use std::ops::{Add, AddAssign, Mul, Sub};
use serde::{Serialize, Deserialize};

/// 2D float vector (world space)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Truncate toward zero into integer screen units
    pub fn truncate(self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

/// 2D integer vector (screen pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

impl IVec2 {
    pub const ZERO: IVec2 = IVec2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for IVec2 {
    type Output = IVec2;
    fn add(self, other: IVec2) -> IVec2 {
        IVec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for IVec2 {
    type Output = IVec2;
    fn sub(self, other: IVec2) -> IVec2 {
        IVec2::new(self.x - other.x, self.y - other.y)
    }
}

/// Angle in degrees of the vector from `from` to `to`, measured clockwise
/// from +X in screen space (Y points down)
pub fn heading_degrees(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(Vec2::new(10.9, -3.7).truncate(), IVec2::new(10, -3));
    }

    #[test]
    fn test_heading_screen_space() {
        let origin = Vec2::ZERO;
        assert!(heading_degrees(origin, Vec2::new(1.0, 0.0)).abs() < 0.001);
        // Y grows downward, so "below" is +90
        assert!((heading_degrees(origin, Vec2::new(0.0, 5.0)) - 90.0).abs() < 0.001);
        assert!((heading_degrees(origin, Vec2::new(0.0, -5.0)) + 90.0).abs() < 0.001);
    }
}
