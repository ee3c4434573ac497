//! Particle animation timing

use std::time::{Duration, Instant};

/// Particle velocity units advanced per elapsed millisecond
pub const PARTICLE_SPEED_PER_MS: f32 = 0.01;

/// Measures the time between consecutive animation ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Elapsed time since the previous tick; the first tick after a reset is zero
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        elapsed
    }

    /// Forget the previous tick, e.g. when the loop restarts
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(Instant::now()), Duration::ZERO);
        assert!(clock.is_running());
    }

    #[test]
    fn test_ticks_measure_gaps() {
        let start = Instant::now();
        let mut clock = FrameClock::new();
        clock.tick(start);
        assert_eq!(clock.tick(start + Duration::from_millis(16)), Duration::from_millis(16));
        assert_eq!(clock.tick(start + Duration::from_millis(50)), Duration::from_millis(34));
    }

    #[test]
    fn test_reset_and_clock_going_backwards() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::new();
        clock.tick(start);
        assert_eq!(clock.tick(start - Duration::from_millis(5)), Duration::ZERO);

        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.tick(start + Duration::from_secs(3)), Duration::ZERO);
    }
}
