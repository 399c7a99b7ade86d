//! Slot positions and the animated shuffle
//!
//! A shuffle permutes the resting positions of unsolved slots and then moves
//! each slot there by linear interpolation, one step per host frame. Solved
//! slots never move. A cooldown runs alongside the animation and drops any
//! shuffle requested before it expires.

use super::surface::{BoardSurface, SlotId};
use crate::core::{Position, Timer};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::time::Duration;
use tracing::debug;

/// Animation and cooldown lengths for shuffles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleTimings {
    pub duration: Duration,
    pub cooldown: Duration,
}

impl Default for ShuffleTimings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            cooldown: Duration::from_millis(750),
        }
    }
}

#[derive(Debug, Clone)]
struct SlotMove {
    slot: SlotId,
    start: Position,
    target: Position,
}

#[derive(Debug, Clone)]
struct ShuffleAnimation {
    moves: Vec<SlotMove>,
    timer: Timer,
}

impl ShuffleAnimation {
    fn apply<S: BoardSurface + ?Sized>(&self, surface: &mut S) {
        let t = self.timer.progress();
        for m in &self.moves {
            surface.set_position(m.slot, m.start.lerp(m.target, t));
        }
    }

    /// Write exact targets, dropping any interpolation drift
    fn snap<S: BoardSurface + ?Sized>(&self, surface: &mut S) {
        for m in &self.moves {
            surface.set_position(m.slot, m.target);
        }
    }
}

/// Owns canonical slot positions and the solved set
#[derive(Debug, Clone, Default)]
pub struct BoardLayout {
    original_positions: Vec<Position>,
    solved: FxHashSet<SlotId>,
    cooldown: Option<Timer>,
    animation: Option<ShuffleAnimation>,
    timings: ShuffleTimings,
}

impl BoardLayout {
    #[must_use]
    pub fn new(timings: ShuffleTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Snapshot the current position of every slot
    pub fn capture_original_positions<S: BoardSurface + ?Sized>(&mut self, surface: &S) {
        self.original_positions = (0..surface.slot_count())
            .map(|slot| surface.position(slot))
            .collect();
    }

    #[must_use]
    pub fn original_positions(&self) -> &[Position] {
        &self.original_positions
    }

    /// Exclude slots from every future shuffle until [`Self::reset_solved`]
    pub fn mark_solved<I: IntoIterator<Item = SlotId>>(&mut self, slots: I) {
        self.solved.extend(slots);
    }

    pub fn reset_solved(&mut self) {
        self.solved.clear();
    }

    #[must_use]
    pub fn is_solved(&self, slot: SlotId) -> bool {
        self.solved.contains(&slot)
    }

    /// Diagnostic: whether a shuffle request would be dropped right now
    #[must_use]
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Diagnostic: time left before another shuffle is accepted
    #[must_use]
    pub fn cooldown_remaining(&self) -> Duration {
        self.cooldown.as_ref().map_or(Duration::ZERO, Timer::remaining)
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start an animated permutation of the unsolved slots
    ///
    /// Returns `false` without doing anything while the cooldown from the
    /// previous shuffle is running. Requests are never queued.
    pub fn shuffle<S, R>(&mut self, surface: &mut S, rng: &mut R) -> bool
    where
        S: BoardSurface + ?Sized,
        R: Rng + ?Sized,
    {
        if self.is_cooling_down() {
            debug!("Shuffle dropped during cooldown");
            return false;
        }

        self.cooldown = Some(Timer::new(self.timings.cooldown));

        // A previous animation may still be in flight if the cooldown is
        // shorter than the animation; land it so positions stay a permutation.
        self.settle(surface);
        self.capture_original_positions(surface);

        let unsolved: Vec<SlotId> = (0..self.original_positions.len())
            .filter(|slot| !self.solved.contains(slot))
            .collect();

        let mut targets: Vec<Position> = unsolved
            .iter()
            .map(|&slot| self.original_positions[slot])
            .collect();
        targets.shuffle(rng);

        let moves = unsolved
            .into_iter()
            .zip(targets)
            .map(|(slot, target)| SlotMove {
                slot,
                start: surface.position(slot),
                target,
            })
            .collect::<Vec<_>>();

        debug!(slots = moves.len(), "Shuffling unsolved slots");

        self.animation = Some(ShuffleAnimation {
            moves,
            timer: Timer::new(self.timings.duration),
        });
        true
    }

    /// Advance the cooldown and animation by one frame
    pub fn tick<S: BoardSurface + ?Sized>(&mut self, delta: Duration, surface: &mut S) {
        if let Some(cooldown) = &mut self.cooldown {
            cooldown.advance(delta);
        }
        if self.cooldown.as_ref().is_some_and(Timer::is_finished) {
            self.cooldown = None;
        }

        let finished = match &mut self.animation {
            Some(animation) => {
                animation.timer.advance(delta);
                if animation.timer.is_finished() {
                    animation.snap(surface);
                    true
                } else {
                    animation.apply(surface);
                    false
                }
            }
            None => false,
        };

        if finished {
            self.animation = None;
        }
    }

    /// Land any in-flight animation on its targets immediately
    pub fn settle<S: BoardSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(animation) = self.animation.take() {
            animation.snap(surface);
        }
    }

    /// Settle the animation and drop the cooldown
    pub fn cancel<S: BoardSurface + ?Sized>(&mut self, surface: &mut S) {
        self.settle(surface);
        self.cooldown = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::surface::GridSurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const HALF: Duration = Duration::from_millis(250);
    const FULL: Duration = Duration::from_millis(500);

    fn cells(surface: &GridSurface, slots: impl Iterator<Item = SlotId>) -> Vec<(i32, i32)> {
        let mut cells: Vec<(i32, i32)> = slots
            .map(|slot| {
                let p = surface.position(slot);
                (p.x as i32, p.y as i32)
            })
            .collect();
        cells.sort_unstable();
        cells
    }

    fn setup() -> (BoardLayout, GridSurface, StdRng) {
        let surface = GridSurface::new(4, 4);
        let mut layout = BoardLayout::new(ShuffleTimings::default());
        layout.capture_original_positions(&surface);
        (layout, surface, StdRng::seed_from_u64(11))
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let (mut layout, mut surface, mut rng) = setup();
        let before = cells(&surface, 0..16);

        assert!(layout.shuffle(&mut surface, &mut rng));
        layout.tick(FULL, &mut surface);

        assert!(!layout.is_animating());
        assert_eq!(cells(&surface, 0..16), before);
    }

    #[test]
    fn final_frame_snaps_to_whole_cells() {
        let (mut layout, mut surface, mut rng) = setup();
        layout.shuffle(&mut surface, &mut rng);

        for _ in 0..40 {
            layout.tick(Duration::from_millis(13), &mut surface);
        }

        for tile in surface.tiles() {
            assert_eq!(tile.position.x.fract(), 0.0);
            assert_eq!(tile.position.y.fract(), 0.0);
        }
    }

    #[test]
    fn solved_slots_never_move() {
        let (mut layout, mut surface, mut rng) = setup();
        let solved = [0, 5, 10, 15];
        layout.mark_solved(solved);
        let pinned: Vec<Position> = solved.iter().map(|&s| surface.position(s)).collect();
        let unsolved: Vec<SlotId> = (0..16).filter(|s| !solved.contains(s)).collect();
        let before = cells(&surface, unsolved.iter().copied());

        for _ in 0..5 {
            assert!(layout.shuffle(&mut surface, &mut rng));
            layout.tick(HALF, &mut surface);
            let now: Vec<Position> = solved.iter().map(|&s| surface.position(s)).collect();
            assert_eq!(now, pinned);
            layout.tick(Duration::from_secs(1), &mut surface);
        }

        assert_eq!(cells(&surface, unsolved.iter().copied()), before);
        assert!(layout.is_solved(5));
        layout.reset_solved();
        assert!(!layout.is_solved(5));
    }

    #[test]
    fn animation_interpolates_linearly() {
        let (mut layout, mut surface, mut rng) = setup();
        let starts: Vec<Position> = (0..16).map(|s| surface.position(s)).collect();

        layout.shuffle(&mut surface, &mut rng);
        layout.tick(HALF, &mut surface);
        let mids: Vec<Position> = (0..16).map(|s| surface.position(s)).collect();
        assert!(layout.is_animating());

        layout.tick(HALF, &mut surface);
        for slot in 0..16 {
            let expected = starts[slot].lerp(surface.position(slot), 0.5);
            assert!((mids[slot].x - expected.x).abs() < 1e-4);
            assert!((mids[slot].y - expected.y).abs() < 1e-4);
        }
    }

    #[test]
    fn cooldown_drops_reentrant_shuffles() {
        let (mut layout, mut surface, mut rng) = setup();

        assert!(layout.shuffle(&mut surface, &mut rng));
        assert!(layout.is_cooling_down());
        assert!(!layout.shuffle(&mut surface, &mut rng));

        layout.tick(FULL, &mut surface);
        assert!(!layout.is_animating());
        assert!(layout.is_cooling_down());
        assert!(!layout.shuffle(&mut surface, &mut rng));
        assert_eq!(layout.cooldown_remaining(), HALF);

        layout.tick(HALF, &mut surface);
        assert!(!layout.is_cooling_down());
        assert_eq!(layout.cooldown_remaining(), Duration::ZERO);
        assert!(layout.shuffle(&mut surface, &mut rng));
    }

    #[test]
    fn short_cooldown_settles_previous_animation() {
        let timings = ShuffleTimings {
            duration: Duration::from_secs(1),
            cooldown: Duration::ZERO,
        };
        let mut surface = GridSurface::new(4, 4);
        let mut layout = BoardLayout::new(timings);
        let mut rng = StdRng::seed_from_u64(5);
        let before = cells(&surface, 0..16);

        layout.shuffle(&mut surface, &mut rng);
        layout.tick(Duration::from_millis(300), &mut surface);
        assert!(layout.shuffle(&mut surface, &mut rng));
        layout.tick(Duration::from_secs(1), &mut surface);

        assert_eq!(cells(&surface, 0..16), before);
    }

    #[test]
    fn cancel_lands_animation_and_clears_cooldown() {
        let (mut layout, mut surface, mut rng) = setup();
        let before = cells(&surface, 0..16);

        layout.shuffle(&mut surface, &mut rng);
        layout.tick(Duration::from_millis(100), &mut surface);
        layout.cancel(&mut surface);

        assert!(!layout.is_animating());
        assert!(!layout.is_cooling_down());
        assert_eq!(cells(&surface, 0..16), before);
    }

    #[test]
    fn capture_tracks_external_moves() {
        let (mut layout, mut surface, _) = setup();
        surface.set_position(3, Position::new(9.0, 9.0));
        layout.capture_original_positions(&surface);
        assert_eq!(layout.original_positions()[3], Position::new(9.0, 9.0));
        assert_eq!(layout.original_positions().len(), 16);
    }
}
