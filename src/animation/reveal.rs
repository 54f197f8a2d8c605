//! Progressive reveal of a trajectory over a configurable duration.
//!
//! The controller is driven by explicit timestamps so the frame loop can
//! feed it `Instant::now()` while tests feed synthetic clocks.

use web_time::Instant;

/// Lower bound on the reveal duration in seconds.
pub const MIN_SPEED_SECONDS: f64 = 1.0;

/// Where the reveal currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Animation disabled; every point is drawn.
    Idle,
    /// Visible count advancing with time.
    Running,
    /// All points revealed; waits for a re-enable to start over.
    Complete,
}

/// Maps elapsed wall-clock time onto a visible prefix of `N` points.
///
/// `visible_count` never decreases between ticks while running and only
/// returns to zero when the animation is (re)enabled.
#[derive(Debug, Clone)]
pub struct RevealAnimation {
    phase: RevealPhase,
    speed_seconds: f64,
    visible_count: usize,
    start_time: Instant,
}

impl RevealAnimation {
    /// Controller that starts running at `now` when `enabled`.
    #[must_use]
    pub fn new(enabled: bool, speed_seconds: f64, now: Instant) -> Self {
        Self {
            phase: if enabled {
                RevealPhase::Running
            } else {
                RevealPhase::Idle
            },
            speed_seconds: clamp_speed(speed_seconds),
            visible_count: 0,
            start_time: now,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Whether the animation flag is on (running or complete).
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.phase != RevealPhase::Idle
    }

    /// Effective reveal duration in seconds (already clamped).
    #[must_use]
    pub fn speed_seconds(&self) -> f64 {
        self.speed_seconds
    }

    /// Points revealed as of the last tick.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Timestamp the current reveal is measured from.
    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Set the reveal duration; values below [`MIN_SPEED_SECONDS`] (and NaN)
    /// are raised to it.
    pub fn set_speed(&mut self, seconds: f64) {
        self.speed_seconds = clamp_speed(seconds);
    }

    /// Turn the animation on, restarting from zero at `now`.
    ///
    /// Also restarts when already running or complete.
    pub fn enable(&mut self, now: Instant) {
        self.phase = RevealPhase::Running;
        self.visible_count = 0;
        self.start_time = now;
        log::debug!("reveal restarted over {:.1}s", self.speed_seconds);
    }

    /// Turn the animation off; the renderer falls back to all points.
    pub fn disable(&mut self) {
        self.phase = RevealPhase::Idle;
    }

    /// Flip between idle and a fresh reveal.
    pub fn toggle(&mut self, now: Instant) {
        if self.is_enabled() {
            self.disable();
        } else {
            self.enable(now);
        }
    }

    /// Advance to `now` for a trajectory of `total` points and return the
    /// visible count.
    pub fn tick(&mut self, now: Instant, total: usize) -> usize {
        match self.phase {
            RevealPhase::Idle => {}
            RevealPhase::Complete => self.visible_count = total,
            RevealPhase::Running => {
                let elapsed =
                    now.saturating_duration_since(self.start_time).as_secs_f64();
                let revealed = (total as f64 * (elapsed / self.speed_seconds))
                    .floor()
                    .clamp(0.0, total as f64) as usize;
                self.visible_count = self.visible_count.max(revealed).min(total);

                if revealed >= total {
                    self.visible_count = total;
                    self.start_time = now;
                    self.phase = RevealPhase::Complete;
                    log::debug!("reveal complete ({total} points)");
                }
            }
        }
        self.visible_count
    }

    /// How many of `total` points the renderer should draw.
    #[must_use]
    pub fn points_to_draw(&self, total: usize) -> usize {
        if self.is_enabled() {
            self.visible_count.min(total)
        } else {
            total
        }
    }

    /// Fraction of the reveal completed, in [0, 1].
    #[must_use]
    pub fn progress(&self, total: usize) -> f64 {
        if total == 0 {
            return 1.0;
        }
        self.visible_count.min(total) as f64 / total as f64
    }
}

fn clamp_speed(seconds: f64) -> f64 {
    if seconds.is_nan() {
        MIN_SPEED_SECONDS
    } else {
        seconds.max(MIN_SPEED_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    const N: usize = 50_000;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn starts_at_zero_when_enabled() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 10.0, t0);
        assert_eq!(reveal.phase(), RevealPhase::Running);
        assert_eq!(reveal.tick(t0, N), 0);
    }

    #[test]
    fn count_is_linear_in_elapsed_time() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 10.0, t0);
        assert_eq!(reveal.tick(t0 + secs(2.5), N), 12_500);
        assert_eq!(reveal.tick(t0 + secs(5.0), N), 25_000);
    }

    #[test]
    fn monotonic_over_increasing_ticks() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 3.0, t0);
        let mut last = 0;
        for ms in (0..4000).step_by(37) {
            let count = reveal.tick(t0 + Duration::from_millis(ms), N);
            assert!(count >= last, "{count} < {last} at {ms}ms");
            assert!(count <= N);
            last = count;
        }
    }

    #[test]
    fn slowing_down_mid_reveal_never_lowers_the_count() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 2.0, t0);
        let before = reveal.tick(t0 + secs(1.0), N);
        reveal.set_speed(20.0);
        let after = reveal.tick(t0 + secs(1.1), N);
        assert!(after >= before);
    }

    #[test]
    fn saturates_and_stays_complete() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 4.0, t0);
        let done_at = t0 + secs(4.0);
        assert_eq!(reveal.tick(done_at, N), N);
        assert_eq!(reveal.phase(), RevealPhase::Complete);
        assert_eq!(reveal.start_time(), done_at);

        assert_eq!(reveal.tick(done_at + secs(0.01), N), N);
        assert_eq!(reveal.tick(done_at + secs(100.0), N), N);
        assert_eq!(reveal.phase(), RevealPhase::Complete);
    }

    #[test]
    fn progress_tracks_the_visible_fraction() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 10.0, t0);
        assert_eq!(reveal.progress(N), 0.0);
        let _ = reveal.tick(t0 + secs(2.5), N);
        assert_eq!(reveal.progress(N), 0.25);
        let _ = reveal.tick(t0 + secs(10.0), N);
        assert_eq!(reveal.progress(N), 1.0);
        assert_eq!(reveal.progress(0), 1.0);
    }

    #[test]
    fn re_enable_restarts_from_zero() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 1.0, t0);
        let _ = reveal.tick(t0 + secs(5.0), N);
        assert_eq!(reveal.phase(), RevealPhase::Complete);

        let t1 = t0 + secs(6.0);
        reveal.enable(t1);
        assert_eq!(reveal.visible_count(), 0);
        assert_eq!(reveal.phase(), RevealPhase::Running);
        assert_eq!(reveal.tick(t1 + secs(0.5), N), N / 2);
    }

    #[test]
    fn speed_is_clamped_to_one_second() {
        let mut reveal = RevealAnimation::new(true, 0.0, Instant::now());
        assert_eq!(reveal.speed_seconds(), 1.0);
        reveal.set_speed(0.2);
        assert_eq!(reveal.speed_seconds(), 1.0);
        reveal.set_speed(f64::NAN);
        assert_eq!(reveal.speed_seconds(), 1.0);
        reveal.set_speed(3600.0);
        assert_eq!(reveal.speed_seconds(), 3600.0);
    }

    #[test]
    fn idle_draws_everything_and_does_not_advance() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(false, 5.0, t0);
        assert_eq!(reveal.tick(t0 + secs(3.0), N), 0);
        assert_eq!(reveal.points_to_draw(N), N);
    }

    #[test]
    fn toggle_alternates_idle_and_running() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 5.0, t0);
        let _ = reveal.tick(t0 + secs(1.0), N);
        reveal.toggle(t0 + secs(1.0));
        assert_eq!(reveal.phase(), RevealPhase::Idle);
        reveal.toggle(t0 + secs(2.0));
        assert_eq!(reveal.phase(), RevealPhase::Running);
        assert_eq!(reveal.visible_count(), 0);
        assert_eq!(reveal.start_time(), t0 + secs(2.0));
    }

    #[test]
    fn enabling_at_zero_only_moves_the_start_time() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 5.0, t0);
        let t1 = t0 + secs(0.25);
        reveal.enable(t1);
        assert_eq!(reveal.visible_count(), 0);
        assert_eq!(reveal.phase(), RevealPhase::Running);
        assert_eq!(reveal.start_time(), t1);
    }

    #[test]
    fn empty_trajectory_stays_at_zero() {
        let t0 = Instant::now();
        let mut reveal = RevealAnimation::new(true, 1.0, t0);
        assert_eq!(reveal.tick(t0 + secs(10.0), 0), 0);
        assert_eq!(reveal.points_to_draw(0), 0);
    }

    #[test]
    fn clock_going_backwards_is_ignored() {
        let t0 = Instant::now() + secs(10.0);
        let mut reveal = RevealAnimation::new(true, 10.0, t0);
        let _ = reveal.tick(t0 + secs(1.0), N);
        assert_eq!(reveal.tick(t0 - secs(5.0), N), 5_000);
    }
}
