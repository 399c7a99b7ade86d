//! Simple interactive CLI mode
//!
//! Text-based play without the TUI. Typing a word toggles it, the remaining
//! buttons of the board are typed commands.

use crate::game::{Evaluation, GridSurface, Phase, PuzzleController, QuitAction};
use crate::interactive::Statistics;
use crate::output::print_board;
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Words to toggle, in the order typed
    Toggle(Vec<String>),
    Submit,
    Shuffle,
    NewGame,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input; anything that is not a command is a word list
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let command = match input.as_str() {
            "" => return None,
            "submit" | "s" => Self::Submit,
            "shuffle" | "sh" => Self::Shuffle,
            "new" | "n" | "reset" => Self::NewGame,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            words => Self::Toggle(
                words
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        };
        Some(command)
    }
}

fn print_help() {
    println!("Type a word to select it, type it again to deselect it.");
    println!("Several words may be typed at once: 'cat dog bird fish'.\n");
    println!("Commands: 'submit' (s), 'shuffle' (sh), 'new' (n), 'help' (h), 'quit' (q)\n");
}

/// Run the simple interactive CLI mode
///
/// The controller must already have a round dealt.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// round cannot be dealt.
pub fn run_simple(
    controller: &mut PuzzleController<GridSurface>,
) -> Result<(QuitAction, Statistics), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Connections - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find four groups of four words that share something in common.\n");
    print_help();

    let mut stats = Statistics::default();
    stats.record_deal();
    controller.settle();

    loop {
        print_board(controller);

        let input = get_user_input("\nWords or command")?;
        let Some(command) = Command::parse(&input) else {
            continue;
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok((controller.quit(), stats));
            }
            Command::Help => print_help(),
            Command::NewGame => {
                controller.reset_round().map_err(|e| e.to_string())?;
                stats.record_deal();
                println!("\n🔄 New game started!");
            }
            Command::Shuffle => {
                if !controller.shuffle() {
                    println!("⏳ Shuffle is cooling down");
                }
            }
            Command::Toggle(words) => {
                for word in words {
                    match controller.slot_for_word(&word) {
                        Some(slot) => {
                            controller.on_slot_clicked(slot);
                        }
                        None => println!("❓ '{word}' is not on the board"),
                    }
                }
            }
            Command::Submit => match controller.evaluate() {
                Evaluation::NotReady => {
                    println!(
                        "Select exactly four words first ({} selected)",
                        controller.selection().len()
                    );
                }
                Evaluation::Solved { group, .. } => {
                    let theme = controller.repository().groups()[group]
                        .theme()
                        .unwrap_or("a group");
                    println!("{} {}", "✅ Correct:".green().bold(), theme.bright_white());
                }
                Evaluation::Incorrect { .. } => {
                    stats.record_wrong();
                    print_board(controller);
                    println!("{}", "❌ Not a group".red().bold());
                }
            },
        }

        controller.settle();

        if controller.phase() == Phase::RoundComplete {
            stats.record_completed(controller.attempts().wrong_this_round());
            print_board(controller);
            celebrate(controller);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    controller.reset_round().map_err(|e| e.to_string())?;
                    controller.settle();
                    stats.record_deal();
                    println!("\n🔄 New game started!");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok((controller.quit(), stats));
                }
            }
        }
    }
}

fn celebrate(controller: &PuzzleController<GridSurface>) {
    let wrong = controller.attempts().wrong_this_round();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  A L L   G R O U P S   F O U N D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match wrong {
        0 => ("🏆 Perfect!", "Not a single wrong guess!"),
        1 => ("⭐ Excellent!", "Outstanding performance!"),
        2 | 3 => ("💫 Great!", "Very well played!"),
        _ => ("✓ Complete!", "Success!"),
    };
    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  {} wrong {}",
        wrong.to_string().bright_cyan().bold(),
        if wrong == 1 { "guess" } else { "guesses" }
    );

    if let Some(round) = controller.round() {
        println!("\n  Groups:");
        for group in round.groups() {
            println!(
                "    • {} {}",
                group.theme().unwrap_or("-").bright_white().bold(),
                group.words().join(", ").to_uppercase().bright_black()
            );
        }
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("submit"), Some(Command::Submit));
        assert_eq!(Command::parse(" S "), Some(Command::Submit));
        assert_eq!(Command::parse("shuffle"), Some(Command::Shuffle));
        assert_eq!(Command::parse("n"), Some(Command::NewGame));
        assert_eq!(Command::parse("reset"), Some(Command::NewGame));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn parse_word_list() {
        assert_eq!(
            Command::parse("Cat, dog  bird,fish"),
            Some(Command::Toggle(vec![
                "cat".to_string(),
                "dog".to_string(),
                "bird".to_string(),
                "fish".to_string()
            ]))
        );
    }
}
