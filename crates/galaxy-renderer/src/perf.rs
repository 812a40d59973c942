//! Frame timing for the FPS readout.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: usize = 60;

/// Rolling average of recent frame intervals.
pub struct FrameTimer {
    intervals: VecDeque<Duration>,
    total: Duration,
    last_frame: Option<Instant>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            intervals: VecDeque::with_capacity(WINDOW),
            total: Duration::ZERO,
            last_frame: None,
        }
    }

    /// Mark a frame boundary at the current time.
    pub fn begin_frame(&mut self) {
        self.record(Instant::now());
    }

    /// Mark a frame boundary at `now`. The first call only sets the baseline.
    pub fn record(&mut self, now: Instant) {
        if let Some(last) = self.last_frame.replace(now) {
            let dt = now.saturating_duration_since(last);
            self.intervals.push_back(dt);
            self.total += dt;
            if self.intervals.len() > WINDOW {
                if let Some(old) = self.intervals.pop_front() {
                    self.total -= old;
                }
            }
        }
    }

    pub fn fps(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if self.intervals.is_empty() || secs <= 0.0 {
            return 0.0;
        }
        self.intervals.len() as f64 / secs
    }

    pub fn sample_count(&self) -> usize {
        self.intervals.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
