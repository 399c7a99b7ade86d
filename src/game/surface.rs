//! Host surface the puzzle draws onto
//!
//! The controller never touches a renderer directly. Hosts implement
//! [`BoardSurface`] for whatever holds their widgets; [`GridSurface`] is the
//! in-memory tile board used by the terminal hosts.

use crate::core::{Position, SlotFill};

/// Index of a slot on the host surface
pub type SlotId = usize;

/// Per-slot widget operations the puzzle needs from its host
///
/// Out-of-range slot ids must be ignored by setters.
pub trait BoardSurface {
    /// Number of slots the host created
    fn slot_count(&self) -> usize;

    /// Current position of a slot
    fn position(&self, slot: SlotId) -> Position;

    fn set_position(&mut self, slot: SlotId, position: Position);

    /// Assign the display string of a slot
    fn set_label(&mut self, slot: SlotId, label: &str);

    fn set_fill(&mut self, slot: SlotId, fill: SlotFill);

    /// Enable or disable clicks on a slot
    fn set_interactable(&mut self, slot: SlotId, interactable: bool);
}

/// Visual state of one tile
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub label: String,
    pub fill: SlotFill,
    pub interactable: bool,
    pub position: Position,
}

/// A rectangular board of unit-sized tiles
///
/// Slot `i` rests at column `i % columns`, row `i / columns` until moved.
#[derive(Debug, Clone)]
pub struct GridSurface {
    columns: usize,
    rows: usize,
    tiles: Vec<Tile>,
}

impl GridSurface {
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        let tiles = (0..columns * rows)
            .map(|slot| Tile {
                label: String::new(),
                fill: SlotFill::Default,
                interactable: true,
                position: Position::new((slot % columns) as f32, (slot / columns) as f32),
            })
            .collect();

        Self {
            columns,
            rows,
            tiles,
        }
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, slot: SlotId) -> Option<&Tile> {
        self.tiles.get(slot)
    }

    /// Slot whose unit cell currently covers the board point `(x, y)`
    ///
    /// Later slots win when animated tiles overlap, matching draw order.
    #[must_use]
    pub fn slot_at(&self, x: f32, y: f32) -> Option<SlotId> {
        self.tiles.iter().enumerate().rev().find_map(|(slot, tile)| {
            let p = tile.position;
            (x >= p.x && x < p.x + 1.0 && y >= p.y && y < p.y + 1.0).then_some(slot)
        })
    }

    /// Slots ordered top-to-bottom, left-to-right by current position
    #[must_use]
    pub fn reading_order(&self) -> Vec<SlotId> {
        let mut order: Vec<SlotId> = (0..self.tiles.len()).collect();
        order.sort_by(|&a, &b| {
            let pa = self.tiles[a].position;
            let pb = self.tiles[b].position;
            pa.y.total_cmp(&pb.y).then(pa.x.total_cmp(&pb.x))
        });
        order
    }
}

impl BoardSurface for GridSurface {
    fn slot_count(&self) -> usize {
        self.tiles.len()
    }

    fn position(&self, slot: SlotId) -> Position {
        self.tiles.get(slot).map(|t| t.position).unwrap_or_default()
    }

    fn set_position(&mut self, slot: SlotId, position: Position) {
        if let Some(tile) = self.tiles.get_mut(slot) {
            tile.position = position;
        }
    }

    fn set_label(&mut self, slot: SlotId, label: &str) {
        if let Some(tile) = self.tiles.get_mut(slot) {
            label.clone_into(&mut tile.label);
        }
    }

    fn set_fill(&mut self, slot: SlotId, fill: SlotFill) {
        if let Some(tile) = self.tiles.get_mut(slot) {
            tile.fill = fill;
        }
    }

    fn set_interactable(&mut self, slot: SlotId, interactable: bool) {
        if let Some(tile) = self.tiles.get_mut(slot) {
            tile.interactable = interactable;
        }
    }
}
