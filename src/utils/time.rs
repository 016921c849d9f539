#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Session clock: elapsed time since the scene was mounted.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since the session started
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a timer whose session starts now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Advances to the current instant.
    ///
    /// Never moves `elapsed` backwards, even after [`tick_to`](Self::tick_to)
    /// jumped ahead of the wall clock.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = (now - self.start_time).max(self.elapsed);
        self.delta = elapsed - self.elapsed;
        self.elapsed = elapsed;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// Advances to an explicit elapsed time instead of reading the clock.
    ///
    /// Times earlier than the current `elapsed` are clamped so the session
    /// clock never runs backwards.
    pub fn tick_to(&mut self, elapsed: Duration) {
        let elapsed = elapsed.max(self.elapsed);
        self.delta = elapsed - self.elapsed;
        self.elapsed = elapsed;
        self.last_update = self.start_time.checked_add(elapsed).unwrap_or(self.last_update);
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
