//! CRT demo simulation: one square drifting across the game texture

use crate::config::CrtTuning;
use crate::rasterizer::Vec2;

/// Where the cube re-enters once it leaves the playfield
pub const CUBE_RESET: f32 = -10.0;

/// Simulation step, seconds
pub const FIXED_STEP: f32 = 1.0 / 60.0;

/// Upper bound on catch-up steps in one frame
pub const MAX_STEPS_PER_FRAME: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Positions beyond this on an axis wrap back to `CUBE_RESET`
    pub bounds: Vec2,
}

impl Cube {
    pub fn new(velocity: Vec2, size: f32, bounds: Vec2) -> Self {
        Self {
            position: Vec2::new(CUBE_RESET, CUBE_RESET),
            velocity,
            size,
            bounds,
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        if self.position.x > self.bounds.x {
            self.position.x = CUBE_RESET;
        }
        if self.position.y > self.bounds.y {
            self.position.y = CUBE_RESET;
        }
    }
}

/// Fixed-timestep driver around the cube
#[derive(Debug, Clone)]
pub struct CrtScene {
    pub cube: Cube,
    accumulator: f32,
    steps: u64,
}

impl CrtScene {
    pub fn new(tuning: &CrtTuning, bounds: Vec2) -> Self {
        Self {
            cube: Cube::new(tuning.cube_velocity, tuning.cube_size, bounds),
            accumulator: 0.0,
            steps: 0,
        }
    }

    /// Feed frame time in; run as many whole steps as it covers.
    /// Returns the number of steps taken.
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Keep at most one spare step of backlog past the cap
        let cap = FIXED_STEP * (MAX_STEPS_PER_FRAME + 1) as f32;
        self.accumulator = (self.accumulator + dt).min(cap);

        let mut taken = 0;
        while self.accumulator >= FIXED_STEP && taken < MAX_STEPS_PER_FRAME {
            self.cube.step(FIXED_STEP);
            self.accumulator -= FIXED_STEP;
            taken += 1;
        }
        self.steps += taken as u64;
        taken
    }

    /// Total fixed steps simulated so far
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
