//! Rolling frame-rate tracker for the on-screen counter.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frames averaged for the displayed rate
const WINDOW: usize = 60;

pub struct FpsTracker {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_log: Instant,
    min_fps: f32,
    max_fps: f32,
}

impl FpsTracker {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::with_capacity(WINDOW + 1),
            last_frame: now,
            last_log: now,
            min_fps: f32::MAX,
            max_fps: 0.0,
        }
    }

    pub fn record_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now - self.last_frame;
        self.last_frame = now;
        self.push(frame_time);

        // Log a summary every second
        if now - self.last_log > Duration::from_secs(1) {
            let (min, avg, max) = self.stats();
            log::debug!("FPS - Min: {:.1}, Avg: {:.1}, Max: {:.1}", min, avg, max);
            self.last_log = now;
        }
    }

    fn push(&mut self, frame_time: Duration) {
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }

        let current_fps = self.current_fps();
        if current_fps > 0.0 {
            self.min_fps = self.min_fps.min(current_fps);
            self.max_fps = self.max_fps.max(current_fps);
        }
    }

    /// Average rate over the last `WINDOW` frames
    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f32() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }

    fn stats(&self) -> (f32, f32, f32) {
        (self.min_fps, self.current_fps(), self.max_fps)
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_reports_zero() {
        assert_eq!(FpsTracker::new().current_fps(), 0.0);
    }

    #[test]
    fn test_average_over_window() {
        let mut fps = FpsTracker::new();
        for _ in 0..10 {
            fps.push(Duration::from_millis(20));
        }
        assert!((fps.current_fps() - 50.0).abs() < 0.01);

        // Old frames fall out of the window
        for _ in 0..WINDOW {
            fps.push(Duration::from_millis(10));
        }
        assert_eq!(fps.frame_times.len(), WINDOW);
        assert!((fps.current_fps() - 100.0).abs() < 0.01);
        assert!((fps.min_fps - 50.0).abs() < 0.01);
    }
}
