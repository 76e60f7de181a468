use std::time::{Duration, Instant};

/// Timer for tracking frame timing and elapsed time.
#[derive(Debug, Clone)]
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
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
    /// Creates a new timer starting from now.
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

    /// Measures the time since the previous tick.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Like [`tick`](Self::tick) with an explicit timestamp. Timestamps
    /// earlier than the previous tick yield a zero delta.
    pub fn tick_at(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last_update);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_update = self.last_update.max(now);
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

    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }
}
