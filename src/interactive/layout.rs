//! Screen geometry shared by rendering and mouse hit-testing

use crate::core::Position;
use crate::game::{BoardSurface, GridSurface, SlotId};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// On-screen buttons under the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Submit,
    Shuffle,
    NewGame,
    DevPanel,
    Quit,
}

impl Button {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Shuffle => "Shuffle",
            Self::NewGame => "New Game",
            Self::DevPanel => "Dev",
            Self::Quit => "Quit",
        }
    }

    /// Keyboard alias shown next to the label
    #[must_use]
    pub const fn key_hint(self) -> &'static str {
        match self {
            Self::Submit => "Enter",
            Self::Shuffle => "s",
            Self::NewGame => "n",
            Self::DevPanel => "d",
            Self::Quit => "q",
        }
    }
}

/// Where each part of the screen goes for a given terminal size
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    /// Board including its border
    pub board_frame: Rect,
    /// Area the tiles are laid out in
    pub board: Rect,
    pub messages: Rect,
    pub dev_panel: Option<Rect>,
    pub buttons: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect, show_dev_panel: bool) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board and side panel
            Constraint::Length(3), // Buttons
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let (messages, dev_panel) = if show_dev_panel {
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main[1]);
        (side[0], Some(side[1]))
    } else {
        (main[1], None)
    };

    ScreenLayout {
        header: chunks[0],
        board_frame: main[0],
        board: main[0].inner(Margin {
            horizontal: 1,
            vertical: 1,
        }),
        messages,
        dev_panel,
        buttons: chunks[2],
        status: chunks[3],
    }
}

impl ScreenLayout {
    fn cell_size(&self, surface: &GridSurface) -> Option<(u16, u16)> {
        let columns = u16::try_from(surface.columns()).ok()?;
        let rows = u16::try_from(surface.rows()).ok()?;
        let width = self.board.width.checked_div(columns)?;
        let height = self.board.height.checked_div(rows)?;
        (width > 0 && height > 0).then_some((width, height))
    }

    /// Screen rectangle of a tile at board `position`
    ///
    /// Tiles keep a one cell gap to their right and, when there is room,
    /// below them.
    #[must_use]
    pub fn tile_rect(&self, surface: &GridSurface, position: Position) -> Rect {
        let Some((width, height)) = self.cell_size(surface) else {
            return Rect::default();
        };

        // Positions stay within the grid, so the offsets fit the board
        let x = self.board.x + (position.x.max(0.0) * f32::from(width)).round() as u16;
        let y = self.board.y + (position.y.max(0.0) * f32::from(height)).round() as u16;
        let tile = Rect::new(
            x,
            y,
            width.saturating_sub(1).max(1),
            if height >= 4 { height - 1 } else { height },
        );
        tile.intersection(self.board)
    }

    /// Slot whose tile is drawn under the terminal cell `(column, row)`
    #[must_use]
    pub fn slot_at(&self, surface: &GridSurface, column: u16, row: u16) -> Option<SlotId> {
        let (width, height) = self.cell_size(surface)?;
        if !contains(self.board, column, row) {
            return None;
        }

        let x = f32::from(column - self.board.x) / f32::from(width);
        let y = f32::from(row - self.board.y) / f32::from(height);
        let slot = surface.slot_at(x, y)?;

        // Gaps between tiles are not part of any tile
        contains(self.tile_rect(surface, surface.position(slot)), column, row).then_some(slot)
    }
}

/// Split the button bar evenly between `count` buttons
#[must_use]
pub fn button_rects(area: Rect, count: usize) -> Vec<Rect> {
    let count = u32::try_from(count.max(1)).unwrap_or(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

/// The button drawn under the terminal cell `(column, row)`
#[must_use]
pub fn button_at(area: Rect, buttons: &[Button], column: u16, row: u16) -> Option<Button> {
    button_rects(area, buttons.len())
        .into_iter()
        .zip(buttons)
        .find_map(|(rect, &button)| contains(rect, column, row).then_some(button))
}

const fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn board_inside_frame() {
        let layout = screen_layout(SCREEN, false);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.board.x, layout.board_frame.x + 1);
        assert_eq!(layout.board.width, layout.board_frame.width - 2);
        assert!(layout.dev_panel.is_none());
    }

    #[test]
    fn dev_panel_does_not_move_board() {
        let closed = screen_layout(SCREEN, false);
        let open = screen_layout(SCREEN, true);
        assert_eq!(closed.board, open.board);
        assert!(open.dev_panel.is_some());
    }

    #[test]
    fn tiles_hit_test_back_to_their_slot() {
        let layout = screen_layout(SCREEN, false);
        let grid = GridSurface::new(4, 4);

        for slot in 0..16 {
            let rect = layout.tile_rect(&grid, grid.position(slot));
            assert!(rect.width > 0 && rect.height > 0);
            assert_eq!(layout.slot_at(&grid, rect.x, rect.y), Some(slot));
            assert_eq!(
                layout.slot_at(&grid, rect.x + rect.width - 1, rect.y + rect.height - 1),
                Some(slot)
            );
        }
    }

    #[test]
    fn gaps_and_outside_miss() {
        let layout = screen_layout(SCREEN, false);
        let grid = GridSurface::new(4, 4);
        let rect = layout.tile_rect(&grid, grid.position(0));

        assert_eq!(layout.slot_at(&grid, rect.x + rect.width, rect.y), None);
        assert_eq!(layout.slot_at(&grid, 0, 0), None);
        assert_eq!(layout.slot_at(&grid, SCREEN.width - 1, layout.board.y), None);
    }

    #[test]
    fn tiny_terminal_has_no_tiles() {
        let layout = screen_layout(Rect::new(0, 0, 4, 4), false);
        let grid = GridSurface::new(4, 4);
        assert_eq!(layout.tile_rect(&grid, grid.position(5)), Rect::default());
        assert_eq!(layout.slot_at(&grid, 1, 1), None);
    }

    #[test]
    fn buttons_split_bar() {
        let area = Rect::new(0, 30, 100, 3);
        let buttons = [Button::Submit, Button::Shuffle, Button::NewGame, Button::Quit];
        let rects = button_rects(area, buttons.len());

        assert_eq!(rects.len(), 4);
        assert_eq!(button_at(area, &buttons, rects[0].x, 31), Some(Button::Submit));
        assert_eq!(button_at(area, &buttons, rects[3].x + 1, 32), Some(Button::Quit));
        assert_eq!(button_at(area, &buttons, 10, 29), None);
    }
}
