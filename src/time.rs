//! Frame timing
//!
//! Timestamps are plain seconds (`f64`) handed in by the caller, normally
//! `macroquad::time::get_time()`. That keeps the clock deterministic under test
//! and avoids `std::time::Instant`, which is unavailable on wasm.

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Produces clamped delta times.
///
/// The minimum keeps tight loops from feeding a zero dt into the simulation.
/// The maximum stops a long stall (window drag, debugger) from teleporting
/// the player.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: f64,
    frame_index: u64,
    dt_min: f32,
    dt_max: f32,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: f32 = 0.0001;
    pub const DEFAULT_DT_MAX: f32 = 0.25;

    pub fn new(now: f64) -> Self {
        Self::with_clamps(now, Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    pub fn with_clamps(now: f64, dt_min: f32, dt_max: f32) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock to `now`.
    pub fn tick(&mut self, now: f64) -> FrameTime {
        let raw = (now - self.last).max(0.0) as f32;
        let dt = raw.clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

/// Caps the frame rate by sleeping off the rest of each frame interval.
///
/// Sleeping is native-only; on wasm the browser's animation frame paces us.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Option<f64>,
    frame_start: f64,
}

impl FrameLimiter {
    /// Left unslept at the end of each interval for `next_frame` to absorb.
    pub const SLEEP_SLACK: f64 = 0.002;

    /// `target_fps == 0` disables limiting.
    pub fn new(target_fps: u32, now: f64) -> Self {
        let interval = (target_fps > 0).then(|| 1.0 / target_fps as f64);
        Self { interval, frame_start: now }
    }

    /// Seconds left in the current frame interval at time `now`.
    pub fn remaining(&self, now: f64) -> f64 {
        match self.interval {
            Some(interval) => (interval - (now - self.frame_start)).max(0.0),
            None => 0.0,
        }
    }

    /// How long `wait` actually sleeps: the remainder minus `SLEEP_SLACK`,
    /// so the following vsync wait can still land on the frame we aimed for.
    pub fn sleep_time(&self, now: f64) -> f64 {
        (self.remaining(now) - Self::SLEEP_SLACK).max(0.0)
    }

    /// Sleep off the remainder of the interval and start the next frame.
    pub fn wait(&mut self, now: f64) {
        let remaining = self.remaining(now);
        #[cfg(not(target_arch = "wasm32"))]
        {
            let sleep = self.sleep_time(now);
            if sleep > 0.0 {
                std::thread::sleep(std::time::Duration::from_secs_f64(sleep));
            }
        }
        self.frame_start = now + remaining;
    }
}
