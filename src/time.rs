//! Frame clock for the display.
//!
//! The scene measures time as a [`Duration`] since the window opened. `Time`
//! provides that clock plus frame counting and an FPS estimate for the
//! window title.
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // Once per frame:
//! let (now, _) = time.update();
//! scene.advance(now);
//! println!("FPS: {:.1}", time.fps());
//! ```

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Time {
    /// When the clock was created.
    start: Instant,
    /// Elapsed time at the last frame.
    elapsed: Duration,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl Time {
    /// Create a new clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            elapsed: Duration::ZERO,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record a frame. Returns the elapsed time since start.
    ///
    /// The FPS estimate is refreshed every half second; returns `true` in
    /// the second slot when it changed.
    pub fn update(&mut self) -> (Duration, bool) {
        let now = Instant::now();
        self.elapsed = now.duration_since(self.start);
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        let refreshed = fps_elapsed >= self.fps_update_interval;
        if refreshed {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        (self.elapsed, refreshed)
    }

    /// Time since start right now, without recording a frame.
    ///
    /// Used for input events that arrive between frames.
    #[inline]
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time as of the last frame.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// The instant corresponding to `elapsed` on this clock.
    #[inline]
    pub fn instant_at(&self, elapsed: Duration) -> Instant {
        self.start + elapsed
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
