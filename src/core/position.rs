//! Slot positions on the board

use std::fmt;

/// A 2-D resting or animated coordinate of a slot
///
/// Units are whatever the host surface uses; the terminal host uses grid
/// cells, so resting positions are whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `target`
    ///
    /// `t` is clamped to `[0, 1]`, so `lerp(target, 1.0)` is exactly `target`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return target;
        }
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(4.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Position::new(0.0, 2.0);
        let b = Position::new(4.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Position::new(2.0, 1.0));
    }

    #[test]
    fn lerp_clamps() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(3.0, 3.0);
        assert_eq!(a.lerp(b, 7.5), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }
}
