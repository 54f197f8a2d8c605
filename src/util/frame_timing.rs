//! Frame pacing and smoothed FPS for the status line.

use web_time::{Duration, Instant};

/// How often the window-title status line is refreshed.
const STATUS_INTERVAL: Duration = Duration::from_millis(250);

/// Smoothed frame rate plus a throttle for status updates.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Last time the status line was pushed
    last_status: Option<Instant>,
    /// Exponential moving average of the instantaneous FPS
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Timer whose first frame is measured from `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            last_status: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Record a frame ending at `now` and return its duration.
    pub fn end_frame(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Smoothed FPS.
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// True at most once per status interval; marks the status as pushed.
    pub fn status_due(&mut self, now: Instant) -> bool {
        let due = self.last_status.is_none_or(|last| {
            now.saturating_duration_since(last) >= STATUS_INTERVAL
        });
        if due {
            self.last_status = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_converges_towards_frame_rate() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new(t0);
        for i in 1..=400 {
            let _ = timing.end_frame(t0 + Duration::from_millis(10 * i));
        }
        assert!((timing.fps() - 100.0).abs() < 1.0, "fps = {}", timing.fps());
    }

    #[test]
    fn status_is_throttled() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new(t0);
        assert!(timing.status_due(t0));
        assert!(!timing.status_due(t0 + Duration::from_millis(100)));
        assert!(timing.status_due(t0 + Duration::from_millis(300)));
    }
}
