//! Frame-advanced countdown

use std::time::Duration;

#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// A countdown advanced explicitly by the host's frame delta
#[derive(Debug, Clone)]
pub struct Timer {
    elapsed: Duration,
    duration: Duration,
}

impl Timer {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_finishes_after_duration() {
        let mut timer = Timer::new(Duration::from_millis(500));
        assert!(!timer.is_finished());

        timer.advance(Duration::from_millis(250));
        assert!(!timer.is_finished());
        assert!((timer.progress() - 0.5).abs() < 1e-6);
        assert_eq!(timer.remaining(), Duration::from_millis(250));

        timer.advance(Duration::from_millis(250));
        assert!(timer.is_finished());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn zero_duration_is_finished() {
        let timer = Timer::new(Duration::ZERO);
        assert!(timer.is_finished());
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_clamps_past_end() {
        let mut timer = Timer::new(Duration::from_millis(100));
        timer.advance(Duration::from_secs(3));
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }
}
