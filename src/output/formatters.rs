//! Formatting utilities for terminal output

use crate::core::SlotFill;
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center `text` in a field of `width` columns, truncating if needed
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Readable foreground for a fill: black on light fills, white on dark ones
#[must_use]
pub fn contrast_rgb(fill: SlotFill) -> (u8, u8, u8) {
    let (r, g, b) = fill.rgb();
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    if luma >= 128_000 {
        (0, 0, 0)
    } else {
        (255, 255, 255)
    }
}

/// A word cell painted with its slot fill
#[must_use]
pub fn styled_cell(word: &str, fill: SlotFill, width: usize) -> ColoredString {
    let (r, g, b) = fill.rgb();
    let (fr, fg, fb) = contrast_rgb(fill);
    let cell = center(&word.to_uppercase(), width)
        .on_truecolor(r, g, b)
        .truecolor(fr, fg, fb);
    if matches!(fill, SlotFill::Solved(_)) {
        cell.bold()
    } else {
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GroupColor;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn center_pads_evenly() {
        assert_eq!(center("cat", 7), "  cat  ");
        assert_eq!(center("cat", 6), " cat  ");
        assert_eq!(center("mercury", 4), "merc");
    }

    #[test]
    fn contrast_follows_fill_brightness() {
        assert_eq!(contrast_rgb(SlotFill::Default), (0, 0, 0));
        assert_eq!(contrast_rgb(SlotFill::Incorrect), (255, 255, 255));
        assert_eq!(contrast_rgb(SlotFill::Solved(GroupColor::Blue)), (255, 255, 255));
        assert_eq!(contrast_rgb(SlotFill::Solved(GroupColor::Amber)), (0, 0, 0));
    }
}
