//! Animation loop
//!
//! A repeating frame request driven by the host's clock. Cancelling bumps
//! the generation, so a handle from an earlier loop can never fire again.

use std::time::{Duration, Instant};
use wallpaper_render::FrameClock;

/// Identifies one scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle {
    generation: u64,
    due: Instant,
}

impl FrameHandle {
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// Cancellable per-frame callback loop
#[derive(Debug)]
pub struct AnimationLoop {
    interval: Duration,
    generation: u64,
    scheduled: Option<FrameHandle>,
    clock: FrameClock,
}

impl AnimationLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            scheduled: None,
            clock: FrameClock::new(),
        }
    }

    /// Schedule the next frame at `due`, replacing any scheduled one
    pub fn request_frame(&mut self, due: Instant) -> FrameHandle {
        let handle = FrameHandle { generation: self.generation, due };
        self.scheduled = Some(handle);
        handle
    }

    /// Cancel the whole loop; the next tick starts a fresh clock
    pub fn cancel(&mut self) {
        if self.scheduled.take().is_some() {
            tracing::debug!(generation = self.generation, "animation loop cancelled");
        }
        self.generation += 1;
        self.clock.reset();
    }

    /// Cancel one scheduled frame if it is still the pending one
    pub fn cancel_frame(&mut self, handle: FrameHandle) -> bool {
        if self.scheduled == Some(handle) {
            self.scheduled = None;
            true
        } else {
            false
        }
    }

    /// Run the scheduled frame if it is due.
    ///
    /// Returns the time elapsed since the previous frame of this loop and
    /// schedules the next one an interval later.
    pub fn fire(&mut self, now: Instant) -> Option<Duration> {
        let handle = self.scheduled?;
        if handle.generation != self.generation || now < handle.due {
            return None;
        }
        let elapsed = self.clock.tick(now);
        self.request_frame(now + self.interval);
        Some(elapsed)
    }

    /// Due time of the pending frame
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduled.map(|handle| handle.due)
    }

    pub fn is_running(&self) -> bool {
        self.scheduled.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
