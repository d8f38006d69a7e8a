//! Frame timing.
//!
//! A single source of truth for the host's clock: elapsed seconds (which
//! the engine's jitter and deactivation deadline consume), per-frame
//! delta and frame count. Uses `std::time` only.
//!
//! # Example
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // In your frame loop:
//! let (elapsed, _delta) = time.update();
//! intro.advance(elapsed);
//! ```

use std::time::{Duration, Instant};

/// Wall-clock frame timer.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
}

impl Time {
    /// Start the clock now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock. Call once per frame.
    ///
    /// Returns `(elapsed, delta)` in seconds.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.frame_count += 1;
        (self.elapsed_secs, self.delta_secs)
    }

    /// Seconds since the timer started, as of the last `update`.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds between the last two `update` calls.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Elapsed time as a `Duration`, live rather than cached.
    #[inline]
    pub fn elapsed_duration(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
