//! Frame pacing
//!
//! Physics advances once per frame, so the frame rate is the simulation rate.
//! The limiter sleeps out whatever is left of the frame budget before the
//! frame is presented.

use std::time::Duration;

/// Time left in the current frame, if any
pub fn remaining(frame_start: f64, now: f64, frame_time: f64) -> Option<Duration> {
    let left = frame_time - (now - frame_start);
    (left > 0.0).then(|| Duration::from_secs_f64(left))
}

/// Fixed-rate frame limiter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimiter {
    /// Target frame time in seconds
    frame_time: f64,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: 1.0 / f64::from(fps.max(1)),
        }
    }

    #[cfg(test)]
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Block until `frame_time` has passed since `frame_start`
    /// (seconds, on macroquad's clock)
    pub fn wait(&self, frame_start: f64) {
        use macroquad::prelude::get_time;

        #[cfg(not(target_arch = "wasm32"))]
        {
            // Sleep for the bulk, then spin for precision
            let spin_margin = 0.002;
            while get_time() - frame_start + spin_margin < self.frame_time {
                std::thread::sleep(Duration::from_millis(1));
            }
        }
        while remaining(frame_start, get_time(), self.frame_time).is_some() {
            std::hint::spin_loop();
        }
    }
}
