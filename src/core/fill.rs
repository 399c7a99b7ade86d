//! Slot fill colors
//!
//! Visual states a slot can be in, independent of any renderer.

/// Solved-group palette, indexed by solve order within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupColor {
    Magenta,
    Blue,
    Amber,
    Red,
}

impl GroupColor {
    pub const PALETTE: [Self; 4] = [Self::Magenta, Self::Blue, Self::Amber, Self::Red];

    /// Color for the group solved after `solved_before` others
    ///
    /// Wraps around the palette past the fourth group.
    #[must_use]
    pub const fn for_solved_index(solved_before: usize) -> Self {
        Self::PALETTE[solved_before % Self::PALETTE.len()]
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Magenta => (255, 0, 255),
            Self::Blue => (0, 0, 255),
            Self::Amber => (255, 235, 4),
            Self::Red => (255, 0, 0),
        }
    }
}

/// Fill state of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotFill {
    #[default]
    Default,
    Selected,
    Incorrect,
    Solved(GroupColor),
}

impl SlotFill {
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Default => (255, 255, 255),
            Self::Selected => (128, 128, 128),
            Self::Incorrect => (0, 0, 0),
            Self::Solved(color) => color.rgb(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_solve_order() {
        assert_eq!(GroupColor::for_solved_index(0), GroupColor::Magenta);
        assert_eq!(GroupColor::for_solved_index(1), GroupColor::Blue);
        assert_eq!(GroupColor::for_solved_index(2), GroupColor::Amber);
        assert_eq!(GroupColor::for_solved_index(3), GroupColor::Red);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(GroupColor::for_solved_index(4), GroupColor::Magenta);
        assert_eq!(GroupColor::for_solved_index(7), GroupColor::Red);
    }

    #[test]
    fn fill_colors() {
        assert_eq!(SlotFill::default(), SlotFill::Default);
        assert_eq!(SlotFill::Default.rgb(), (255, 255, 255));
        assert_eq!(SlotFill::Incorrect.rgb(), (0, 0, 0));
        assert_eq!(SlotFill::Solved(GroupColor::Amber).rgb(), (255, 235, 4));
    }
}
