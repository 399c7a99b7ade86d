//! Wrong-guess counter

/// Counts incorrect submissions within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptCounter {
    initial: u32,
    current: u32,
}

impl AttemptCounter {
    #[must_use]
    pub const fn new(initial: u32) -> Self {
        Self {
            initial,
            current: initial,
        }
    }

    /// Back to the configured initial value
    pub const fn reset(&mut self) {
        self.current = self.initial;
    }

    pub const fn increment(&mut self) {
        self.current = self.current.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Wrong guesses made since the last reset
    #[inline]
    #[must_use]
    pub const fn wrong_this_round(&self) -> u32 {
        self.current.saturating_sub(self.initial)
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Wrong Attempts: {}", self.current)
    }
}
