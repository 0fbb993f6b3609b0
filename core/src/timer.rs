use core::time::Duration;
use web_time::Instant;

/// Pausable wall-clock stopwatch.
///
/// Time is accumulated per running segment, so paused intervals never count.
/// The `*_at` variants take the current instant explicitly.
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    accumulated: Duration,
    segment_start: Option<Instant>,
}

impl Stopwatch {
    pub const fn start_at(now: Instant) -> Self {
        Self {
            accumulated: Duration::ZERO,
            segment_start: Some(now),
        }
    }

    pub const fn is_running(&self) -> bool {
        self.segment_start.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match self.segment_start {
            Some(start) => self.accumulated + now.saturating_duration_since(start),
            None => self.accumulated,
        }
    }

    /// Folds the running segment into the total, no-op when already paused.
    pub fn pause_at(&mut self, now: Instant) {
        if let Some(start) = self.segment_start.take() {
            self.accumulated += now.saturating_duration_since(start);
        }
    }

    pub fn resume_at(&mut self, now: Instant) {
        if self.segment_start.is_none() {
            self.segment_start = Some(now);
        }
    }
}
