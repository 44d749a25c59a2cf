//! Frame clock that turns wall time into per-frame steps.

use web_time::{Duration, Instant};

/// Longest step handed to the rig; longer gaps (breakpoints, suspended
/// tabs) are treated as this.
pub const DEFAULT_MAX_DT: f32 = 0.1;

/// Frame clock producing per-frame time steps and a smoothed FPS.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single time step, in seconds
    max_dt: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose steps never exceed `max_dt` seconds.
    #[must_use]
    pub fn new(max_dt: f32) -> Self {
        Self::starting_at(Instant::now(), max_dt)
    }

    /// Create a clock as if the previous frame ended at `start`.
    #[must_use]
    pub fn starting_at(start: Instant, max_dt: f32) -> Self {
        Self {
            last_frame: start,
            max_dt: max_dt.max(0.0),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Call once per frame. Returns the clamped time step in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now`.
    ///
    /// A timestamp earlier than the previous one yields a zero step.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now
            .checked_duration_since(self.last_frame)
            .unwrap_or(Duration::ZERO);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(self.max_dt)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_gaps_are_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
        let dt = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(dt, 0.1);
    }

    #[test]
    fn backwards_time_is_a_zero_step() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start, 0.1);
        assert_eq!(clock.tick_at(start - Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn fps_drifts_toward_frame_rate() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        for i in 1..=200 {
            let _ = clock.tick_at(start + Duration::from_millis(i * 20));
        }
        assert!((clock.fps() - 50.0).abs() < 1.0);
    }
}
