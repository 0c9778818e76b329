//! Frame timing.
//!
//! Every per-frame update in the crate takes explicit (elapsed, delta)
//! arguments; [`FrameClock`] is the single place those values come from.
//! No component reads the wall clock on its own.

use std::time::{Duration, Instant};

/// Wall-clock tracker for the render loop.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    paused: bool,
    /// Total time spent paused, subtracted from elapsed.
    pause_accum: Duration,
    /// Overrides measured frame time when set; used for deterministic steps.
    fixed_delta: Option<f32>,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            paused: false,
            pause_accum: Duration::ZERO,
            fixed_delta: None,
        }
    }

    /// Advance the clock. Call once per frame; returns `(elapsed, delta)`.
    ///
    /// While paused, delta is zero and elapsed holds still, so downstream
    /// interpolation freezes instead of jumping when the card resumes.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }

        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta);
        self.last_frame = now;
        self.elapsed_secs = (now.duration_since(self.start) - self.pause_accum).as_secs_f32();

        (self.elapsed_secs, self.delta_secs)
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause. The paused span is excluded from elapsed time.
    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_accum += now.duration_since(self.last_frame);
            self.last_frame = now;
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Force a fixed delta per tick; `None` returns to measured timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_tick_advances() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = clock.tick();
        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.pause();

        let frozen = clock.elapsed();
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = clock.tick();

        assert_eq!(elapsed, frozen);
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn test_resume_excludes_paused_span() {
        let mut clock = FrameClock::new();
        clock.tick();
        let before = clock.elapsed();

        clock.pause();
        thread::sleep(Duration::from_millis(50));
        clock.resume();
        clock.tick();

        // Elapsed moved by far less than the paused span.
        assert!(clock.elapsed() - before < 0.04);
    }

    #[test]
    fn test_fixed_delta_overrides_measurement() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(1.0 / 60.0));
        thread::sleep(Duration::from_millis(30));
        let (_, delta) = clock.tick();
        assert!((delta - 1.0 / 60.0).abs() < 1e-6);
    }
}
