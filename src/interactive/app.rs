//! TUI application state and logic

use super::layout::{Button, button_at, screen_layout};
use crate::game::{
    BoardSurface, ClickOutcome, Evaluation, GridSurface, Phase, PuzzleController, QuitAction,
    SlotId,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Time between frames while no input arrives
const FRAME: Duration = Duration::from_millis(16);

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub controller: PuzzleController<GridSurface>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub quit: Option<QuitAction>,
    pub show_dev_panel: bool,
    completion_recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Counters for one play session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: u32,
    pub rounds_completed: u32,
    pub wrong_attempts: u32,
    /// Fewest wrong guesses in a completed round
    pub best_round: Option<u32>,
}

impl Statistics {
    pub const fn record_deal(&mut self) {
        self.rounds_played += 1;
    }

    pub const fn record_wrong(&mut self) {
        self.wrong_attempts += 1;
    }

    pub fn record_completed(&mut self, wrong: u32) {
        self.rounds_completed += 1;
        self.best_round = Some(self.best_round.map_or(wrong, |best| best.min(wrong)));
    }
}

impl App {
    /// Wrap a controller that already has a round dealt
    #[must_use]
    pub fn new(controller: PuzzleController<GridSurface>) -> Self {
        let mut stats = Statistics::default();
        stats.record_deal();

        Self {
            controller,
            messages: vec![
                Message {
                    text: "Find four groups of four words.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Click words to select them, then Submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            quit: None,
            show_dev_panel: false,
            completion_recorded: false,
        }
    }

    /// Buttons shown under the board
    #[must_use]
    pub fn buttons(&self) -> &'static [Button] {
        if self.controller.config().dev_mode {
            &[
                Button::Submit,
                Button::Shuffle,
                Button::NewGame,
                Button::DevPanel,
                Button::Quit,
            ]
        } else {
            &[Button::Submit, Button::Shuffle, Button::NewGame, Button::Quit]
        }
    }

    /// Whether pressing `button` would currently do anything
    #[must_use]
    pub fn is_enabled(&self, button: Button) -> bool {
        match button {
            Button::Submit => {
                self.controller.selection().is_full()
                    && self.controller.phase() == Phase::Idle
            }
            Button::Shuffle => !self.controller.layout().is_cooling_down(),
            Button::NewGame | Button::Quit => true,
            Button::DevPanel => self.controller.config().dev_mode,
        }
    }

    pub fn press(&mut self, button: Button) {
        debug!(?button, "Button pressed");
        match button {
            Button::Submit => self.submit(),
            Button::Shuffle => self.shuffle(),
            Button::NewGame => self.new_game(),
            Button::DevPanel => {
                if self.controller.config().dev_mode {
                    self.show_dev_panel = !self.show_dev_panel;
                }
            }
            Button::Quit => self.quit = Some(self.controller.quit()),
        }
    }

    pub fn click_slot(&mut self, slot: SlotId) {
        if self.controller.on_slot_clicked(slot) == ClickOutcome::Ignored
            && self.controller.phase() == Phase::Idle
            && self.controller.selection().is_full()
            && !self.controller.is_solved(slot)
        {
            self.add_message("Four words already selected", MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        match self.controller.evaluate() {
            Evaluation::NotReady => {
                if self.controller.phase() == Phase::Idle {
                    self.add_message("Select exactly four words", MessageStyle::Error);
                }
            }
            Evaluation::Solved { group, .. } => {
                let theme = self.controller.repository().groups()[group]
                    .theme()
                    .unwrap_or("Group found")
                    .to_string();
                self.add_message(&format!("✅ {theme}"), MessageStyle::Success);
            }
            Evaluation::Incorrect { .. } => {
                self.stats.record_wrong();
                self.add_message("❌ Not a group", MessageStyle::Error);
            }
        }

        if self.controller.phase() == Phase::RoundComplete && !self.completion_recorded {
            self.completion_recorded = true;
            let wrong = self.controller.attempts().wrong_this_round();
            self.stats.record_completed(wrong);

            let celebration = match wrong {
                0 => "🏆 PERFECT! No wrong guesses! 🏆",
                1 => "🔥 MAGNIFICENT! Only one slip! 🔥",
                2 | 3 => "✨ SPLENDID! All groups found! ✨",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("New Game to play again.", MessageStyle::Info);
        }
    }

    pub fn shuffle(&mut self) {
        if !self.controller.shuffle() {
            self.add_message("Shuffle is cooling down", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match self.controller.reset_round() {
            Ok(()) => {
                self.stats.record_deal();
                self.completion_recorded = false;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.controller.tick(delta);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Keyboard aliases for the on-screen buttons
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let button = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Button::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Button::Quit,
            KeyCode::Enter => Button::Submit,
            KeyCode::Char('s') => Button::Shuffle,
            KeyCode::Char('n') => Button::NewGame,
            KeyCode::Char('d') => Button::DevPanel,
            _ => return,
        };
        self.press(button);
    }

    /// Route a left click inside a terminal of size `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = screen_layout(area, self.show_dev_panel);
        if let Some(slot) = layout.slot_at(self.controller.surface(), mouse.column, mouse.row) {
            self.click_slot(slot);
        } else if let Some(button) = button_at(layout.buttons, self.buttons(), mouse.column, mouse.row)
        {
            self.press(button);
        }
    }
}

/// Run the TUI application
///
/// Returns the quit action chosen by the player together with the session
/// counters.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<(QuitAction, Statistics)> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<(QuitAction, Statistics)> {
    info!(
        slots = app.controller.surface().slot_count(),
        "Interactive session started"
    );
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        if let Some(action) = app.quit {
            info!(?action, stats = ?app.stats, "Interactive session ended");
            return Ok((action, app.stats));
        }
    }
}
