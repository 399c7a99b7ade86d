//! Round orchestration and the selection state machine
//!
//! The controller binds dealt words to host slots, tracks the player's
//! selection, checks submissions against the authored pool and drives all
//! visual feedback through the injected [`BoardSurface`]. Timed behavior
//! (shuffle animation, shuffle cooldown, incorrect flash) only advances when
//! the host calls [`PuzzleController::tick`].

use super::attempts::AttemptCounter;
use super::layout::BoardLayout;
use super::repository::{GROUPS_PER_ROUND, RepositoryError, Round, WordSetRepository};
use super::selection::{Selection, Toggle};
use super::surface::{BoardSurface, SlotId};
use crate::config::GameConfig;
use crate::core::{GroupColor, SlotFill, Timer};
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Observable state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting clicks; up to four words selected
    Idle,
    /// Wrong guess flashing; input ignored until the delay elapses
    FeedbackIncorrect,
    /// All four groups found
    RoundComplete,
}

/// Result of a slot click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected,
    Deselected,
    Ignored,
}

/// Result of submitting the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Fewer than four words selected, or feedback still showing
    NotReady,
    /// Matched the pool group at index `group`
    Solved { group: usize, color: GroupColor },
    Incorrect { attempts: u32 },
}

/// What the host should do when the player quits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitAction {
    /// Terminate the process
    Exit,
    /// Developer mode: end the play session and return to the caller
    StopSession,
}

#[derive(Debug, Clone, Default)]
struct SlotState {
    word: Option<String>,
    solved: bool,
}

/// Drives one board of slots through rounds of the puzzle
pub struct PuzzleController<S: BoardSurface> {
    repository: WordSetRepository,
    layout: BoardLayout,
    attempts: AttemptCounter,
    surface: S,
    slots: Vec<SlotState>,
    selection: Selection,
    solved_groups: usize,
    feedback: Option<Timer>,
    round: Option<Round>,
    config: GameConfig,
    rng: StdRng,
}

impl<S: BoardSurface> PuzzleController<S> {
    /// Wrap a host surface; call [`Self::setup_round`] to deal the first round
    #[must_use]
    pub fn new(repository: WordSetRepository, surface: S, config: GameConfig, rng: StdRng) -> Self {
        let mut layout = BoardLayout::new(config.timings.shuffle());
        layout.capture_original_positions(&surface);

        Self {
            repository,
            layout,
            attempts: AttemptCounter::new(config.initial_attempts),
            slots: vec![SlotState::default(); surface.slot_count()],
            surface,
            selection: Selection::new(),
            solved_groups: 0,
            feedback: None,
            round: None,
            config,
            rng,
        }
    }

    /// Deal a round, bind its words to slots and shuffle them in
    ///
    /// Slot `i` receives the `i`-th dealt word. Slots beyond the sixteenth
    /// are left blank and disabled.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InsufficientGroups` if the pool cannot fill a
    /// round; no slot is touched in that case.
    pub fn setup_round(&mut self) -> Result<(), RepositoryError> {
        let round = self.repository.sample_round(&mut self.rng).inspect_err(|err| {
            warn!(%err, "Cannot deal a round");
        })?;

        let words: Vec<&str> = round.words().collect();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let word = words.get(idx).copied();
            slot.word = word.map(str::to_string);
            slot.solved = false;
            self.surface.set_label(idx, word.unwrap_or_default());
            self.surface.set_fill(idx, SlotFill::Default);
            self.surface.set_interactable(idx, word.is_some());
        }

        info!(
            groups = ?round.pool_indices(),
            slots = self.slots.len(),
            "Round dealt"
        );
        self.round = Some(round);

        self.layout.capture_original_positions(&self.surface);
        self.layout.shuffle(&mut self.surface, &mut self.rng);
        Ok(())
    }

    /// Start over: fresh attempts, nothing selected or solved, new words
    ///
    /// Any shuffle animation, shuffle cooldown or incorrect flash still
    /// pending from the previous round is cancelled first.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`Self::setup_round`].
    pub fn reset_round(&mut self) -> Result<(), RepositoryError> {
        self.attempts.reset();
        self.feedback = None;
        self.clear_selection();

        for (idx, slot) in self.slots.iter_mut().enumerate() {
            slot.solved = false;
            self.surface.set_interactable(idx, true);
            self.surface.set_fill(idx, SlotFill::Default);
        }

        self.layout.cancel(&mut self.surface);
        self.layout.reset_solved();
        self.solved_groups = 0;

        info!("Round reset");
        self.setup_round()
    }

    /// Toggle the word on `slot` in or out of the selection
    ///
    /// Clicks on unknown, blank or solved slots, and any click while a wrong
    /// guess is flashing, are ignored.
    pub fn on_slot_clicked(&mut self, slot: SlotId) -> ClickOutcome {
        if self.feedback.is_some() {
            return ClickOutcome::Ignored;
        }

        let Some(state) = self.slots.get(slot) else {
            return ClickOutcome::Ignored;
        };
        if state.solved {
            return ClickOutcome::Ignored;
        }
        let Some(word) = state.word.clone() else {
            return ClickOutcome::Ignored;
        };

        match self.selection.toggle(&word, slot) {
            Toggle::Added => {
                self.surface.set_fill(slot, SlotFill::Selected);
                debug!(word = %word, slot, selected = self.selection.len(), "Selected");
                ClickOutcome::Selected
            }
            Toggle::Removed(entry) => {
                self.surface.set_fill(entry.slot, SlotFill::Default);
                debug!(word = %word, slot, selected = self.selection.len(), "Deselected");
                ClickOutcome::Deselected
            }
            Toggle::Full => ClickOutcome::Ignored,
        }
    }

    /// Check the four selected words against every authored group
    pub fn evaluate(&mut self) -> Evaluation {
        if self.feedback.is_some() || !self.selection.is_full() {
            return Evaluation::NotReady;
        }

        let matched = self.repository.find_group(self.selection.words());
        match matched {
            Some(group) => self.accept_group(group),
            None => self.reject_selection(),
        }
    }

    fn accept_group(&mut self, group: usize) -> Evaluation {
        let color = GroupColor::for_solved_index(self.solved_groups);
        let mut solved_slots = Vec::with_capacity(GROUPS_PER_ROUND);

        for entry in self.selection.clear() {
            let Some(state) = self.slots.get_mut(entry.slot) else {
                continue;
            };
            // The slot was rebound since it was clicked
            if state.word.as_deref() != Some(entry.word.as_str()) {
                continue;
            }
            state.solved = true;
            self.surface.set_interactable(entry.slot, false);
            self.surface.set_fill(entry.slot, SlotFill::Solved(color));
            solved_slots.push(entry.slot);
        }

        self.solved_groups += 1;
        self.layout.mark_solved(solved_slots);

        info!(group, solved = self.solved_groups, "Group solved");
        if self.solved_groups >= GROUPS_PER_ROUND {
            info!(attempts = self.attempts.current(), "Round complete");
        }

        Evaluation::Solved { group, color }
    }

    fn reject_selection(&mut self) -> Evaluation {
        self.attempts.increment();
        for entry in self.selection.entries() {
            self.surface.set_fill(entry.slot, SlotFill::Incorrect);
        }
        self.feedback = Some(Timer::new(self.config.timings.incorrect_feedback));

        info!(attempts = self.attempts.current(), "Incorrect group");
        Evaluation::Incorrect {
            attempts: self.attempts.current(),
        }
    }

    /// Request an animated shuffle of the unsolved slots
    ///
    /// Returns `false` if dropped because the cooldown is still running.
    pub fn shuffle(&mut self) -> bool {
        self.layout.shuffle(&mut self.surface, &mut self.rng)
    }

    /// Advance every pending timer by one host frame
    pub fn tick(&mut self, delta: Duration) {
        self.layout.tick(delta, &mut self.surface);

        if let Some(feedback) = &mut self.feedback {
            feedback.advance(delta);
        }
        if self.feedback.as_ref().is_some_and(Timer::is_finished) {
            self.feedback = None;
            self.clear_selection();
        }
    }

    /// Run every pending timer to completion
    pub fn settle(&mut self) {
        self.tick(self.config.timings.longest());
    }

    /// Whether anything is still animating or flashing
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.feedback.is_none() && !self.layout.is_animating()
    }

    fn clear_selection(&mut self) {
        for entry in self.selection.clear() {
            let still_unsolved = self.slots.get(entry.slot).is_some_and(|s| !s.solved);
            if still_unsolved {
                self.surface.set_fill(entry.slot, SlotFill::Default);
            }
        }
    }

    /// The host action for a quit request
    #[must_use]
    pub fn quit(&self) -> QuitAction {
        if self.config.dev_mode {
            info!("Quit requested in dev mode, stopping session only");
            QuitAction::StopSession
        } else {
            QuitAction::Exit
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.feedback.is_some() {
            Phase::FeedbackIncorrect
        } else if self.solved_groups >= GROUPS_PER_ROUND {
            Phase::RoundComplete
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn attempts(&self) -> &AttemptCounter {
        &self.attempts
    }

    #[must_use]
    pub const fn solved_groups(&self) -> usize {
        self.solved_groups
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn repository(&self) -> &WordSetRepository {
        &self.repository
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Word currently bound to `slot`
    #[must_use]
    pub fn word_at(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.word.as_deref())
    }

    #[must_use]
    pub fn is_solved(&self, slot: SlotId) -> bool {
        self.slots.get(slot).is_some_and(|s| s.solved)
    }

    /// Slot showing `word`, for hosts that take typed input
    #[must_use]
    pub fn slot_for_word(&self, word: &str) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|s| s.word.as_deref().is_some_and(|w| w.eq_ignore_ascii_case(word)))
    }
}
