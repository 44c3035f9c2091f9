//! Frame clock

use std::time::Instant;

/// Tracks frame timing for the animation loop.
///
/// `tick` measures wall-clock time; `step` advances by a fixed amount for
/// headless playback. Both clamp long frames to `max_delta`.
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Longest frame accepted (default: 250ms)
    pub max_delta: f64,
    /// Frames ticked or stepped so far
    pub frame_count: u64,
    last_instant: Instant,
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            max_delta: 0.25,
            frame_count: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance from the wall clock. Call once per frame.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.frame_count += 1;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.record(elapsed)
    }

    /// Advance by a fixed `dt` without consulting the wall clock.
    pub fn step(&mut self, dt: f64) -> f64 {
        self.first_tick = false;
        self.record(dt)
    }

    fn record(&mut self, dt: f64) -> f64 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.delta_time = dt.min(self.max_delta);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }
}
