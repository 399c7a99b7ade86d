//! TUI rendering with ratatui
//!
//! Draws the tile board at the current animated positions, the button bar
//! and the side panels.

use super::app::{App, MessageStyle};
use super::layout::{Button, ScreenLayout, button_rects, screen_layout};
use crate::core::SlotFill;
use crate::game::Phase;
use crate::output::formatters::contrast_rgb;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area(), app.show_dev_panel);

    render_header(f, layout.header);
    render_board(f, app, &layout);
    render_messages(f, app, layout.messages);
    if let Some(area) = layout.dev_panel {
        render_dev_panel(f, app, area);
    }
    render_buttons(f, app, layout.buttons);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 CONNECTIONS - Find the four groups")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn fill_color(fill: SlotFill) -> Color {
    let (r, g, b) = fill.rgb();
    Color::Rgb(r, g, b)
}

fn render_board(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let title = match app.controller.phase() {
        Phase::RoundComplete => " 🎉 All groups found! ",
        Phase::FeedbackIncorrect => " Not a group ",
        Phase::Idle => " Board ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, layout.board_frame);

    let surface = app.controller.surface();
    // Draw in slot order so later slots cover earlier ones, as hit-testing expects
    for tile in surface.tiles() {
        let rect = layout.tile_rect(surface, tile.position);
        if rect.area() == 0 {
            continue;
        }
        render_tile(f, rect, &tile.label, tile.fill);
    }
}

fn render_tile(f: &mut Frame, rect: Rect, label: &str, fill: SlotFill) {
    let (fr, fg, fb) = contrast_rgb(fill);
    let mut style = Style::default()
        .bg(fill_color(fill))
        .fg(Color::Rgb(fr, fg, fb));
    if matches!(fill, SlotFill::Solved(_)) {
        style = style.add_modifier(Modifier::BOLD);
    }

    // Vertically center the label
    let padding = rect.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(label.to_uppercase()));

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center),
        rect,
    );
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_dev_panel(f: &mut Frame, app: &App, area: Rect) {
    let controller = &app.controller;
    let mut lines = vec![Line::from(vec![
        Span::raw("Pool: "),
        Span::styled(
            format!("{} groups", controller.repository().len()),
            Style::default().fg(Color::Cyan),
        ),
    ])];

    if let Some(round) = controller.round() {
        for (group, pool_idx) in round.groups().iter().zip(round.pool_indices()) {
            lines.push(Line::from(Span::styled(
                format!("#{pool_idx} {}", group.theme().unwrap_or("(no theme)")),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "   {}",
                group.words().join(", ").to_uppercase()
            )));
        }
    }

    lines.push(Line::from(""));
    if let Some(round) = controller.round() {
        for word in controller.selection().words() {
            let theme = round
                .group_of(word)
                .and_then(|g| g.theme())
                .unwrap_or("?");
            lines.push(Line::from(format!("Selected {} -> {theme}", word.to_uppercase())));
        }
    }

    let layout = controller.layout();
    lines.push(Line::from(format!(
        "Animating: {} | Cooldown: {:.2}s",
        if layout.is_animating() { "yes" } else { "no" },
        layout.cooldown_remaining().as_secs_f32()
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Developer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_buttons(f: &mut Frame, app: &App, area: Rect) {
    let buttons = app.buttons();
    for (rect, &button) in button_rects(area, buttons.len()).into_iter().zip(buttons) {
        let active = button == Button::DevPanel && app.show_dev_panel;
        let color = if !app.is_enabled(button) {
            Color::DarkGray
        } else if active {
            Color::Magenta
        } else {
            Color::Yellow
        };

        let text = Line::from(vec![
            Span::styled(
                button.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", button.key_hint()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let widget = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
        f.render_widget(widget, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts = Paragraph::new(app.controller.attempts().label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(attempts, chunks[0]);

    let found = Paragraph::new(format!(
        "Groups found: {}/4",
        app.controller.solved_groups()
    ))
    .alignment(Alignment::Center);
    f.render_widget(found, chunks[1]);

    let stats_text = format!(
        "Rounds: {} | Completed: {}",
        app.stats.rounds_played, app.stats.rounds_completed
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("Click words to select | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::WordGroup;
    use crate::game::{GridSurface, PuzzleController, WordSetRepository};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app(dev_mode: bool) -> App {
        let repository = WordSetRepository::new(vec![
            WordGroup::new(["cat", "dog", "bird", "fish"]).unwrap().with_theme("pets"),
            WordGroup::new(["mars", "venus", "saturn", "mercury"]).unwrap(),
            WordGroup::new(["oak", "maple", "birch", "willow"]).unwrap(),
            WordGroup::new(["copper", "nickel", "zinc", "tin"]).unwrap(),
        ]);
        let config = GameConfig {
            dev_mode,
            ..GameConfig::default()
        };
        let mut controller = PuzzleController::new(
            repository,
            GridSurface::new(4, 4),
            config,
            StdRng::seed_from_u64(2),
        );
        controller.setup_round().unwrap();
        controller.settle();
        App::new(controller)
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn draws_words_and_attempts() {
        let text = screen_text(&app(false));
        for word in ["CAT", "MERCURY", "WILLOW", "ZINC"] {
            assert!(text.contains(word), "{word} missing");
        }
        assert!(text.contains("Wrong Attempts: 0"));
        assert!(text.contains("Submit"));
        assert!(!text.contains("Developer"));
    }

    #[test]
    fn dev_panel_lists_themes() {
        let mut app = app(true);
        app.press(Button::DevPanel);
        let slot = app.controller.slot_for_word("cat").unwrap();
        app.click_slot(slot);

        let text = screen_text(&app);
        assert!(text.contains("Developer"));
        assert!(text.contains("Selected CAT -> pets"));
    }

    #[test]
    fn tile_uses_fill_color() {
        let mut app = app(false);
        let slot = app.controller.slot_for_word("cat").unwrap();
        app.click_slot(slot);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let layout = screen_layout(Rect::new(0, 0, 120, 40), false);
        let surface = app.controller.surface();
        let rect = layout.tile_rect(surface, surface.tile(slot).unwrap().position);
        let cell = &terminal.backend().buffer()[(rect.x, rect.y)];
        assert_eq!(cell.bg, Color::Rgb(128, 128, 128));
    }
}
