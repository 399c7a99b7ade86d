//! Display functions for command results

use super::formatters::{create_progress_bar, styled_cell};
use crate::commands::{SamplingResult, ValidationReport};
use crate::game::{GridSurface, PuzzleController};
use crate::interactive::Statistics;
use colored::Colorize;

const CELL_WIDTH: usize = 12;

/// Print the board in on-screen order with slot fills
pub fn print_board(controller: &PuzzleController<GridSurface>) {
    let surface = controller.surface();

    println!();
    for row in surface.reading_order().chunks(surface.columns().max(1)) {
        let cells: Vec<String> = row
            .iter()
            .filter_map(|&slot| surface.tile(slot))
            .map(|tile| styled_cell(&tile.label, tile.fill, CELL_WIDTH).to_string())
            .collect();
        println!("  {}", cells.join(" "));
    }

    let selection: Vec<String> = controller
        .selection()
        .words()
        .map(str::to_uppercase)
        .collect();
    println!(
        "\n  {}  |  Groups found: {}/4  |  Selected: {}",
        controller.attempts().label().yellow(),
        controller.solved_groups().to_string().bright_cyan(),
        if selection.is_empty() {
            "-".bright_black().to_string()
        } else {
            selection.join(", ").bright_white().to_string()
        }
    );
}

/// Print the result of a pool validation
pub fn print_validation_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD POOL CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 Groups:          {}", report.total_groups);
    if !report.has_enough_groups() {
        println!(
            "   {}",
            "At least 4 groups are needed to deal a round".red().bold()
        );
    }

    if report.duplicate_words.is_empty() {
        println!("🔤 Repeated words:  {}", "none".green());
    } else {
        println!("🔤 Repeated words:  {}", report.duplicate_words.len().to_string().red());
        for dup in &report.duplicate_words {
            let groups: Vec<String> = dup.groups.iter().map(|g| (g + 1).to_string()).collect();
            println!(
                "   • {} in groups {}",
                dup.word.to_uppercase().bright_white().bold(),
                groups.join(", ")
            );
        }
    }

    if report.equal_groups.is_empty() {
        println!("🧩 Identical groups: {}", "none".green());
    } else {
        println!("🧩 Identical groups: {}", report.equal_groups.len().to_string().red());
        for (a, b) in &report.equal_groups {
            println!("   • groups {} and {}", a + 1, b + 1);
        }
    }

    println!();
    if report.is_valid() {
        println!("{}", "✅ Pool is ready to play".green().bold());
    } else {
        println!("{}", "❌ Pool has problems".red().bold());
    }
}

/// Print how often each group was dealt
pub fn print_sampling_result(result: &SamplingResult, themes: &[String]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DEALING DISTRIBUTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds dealt:     {}", result.rounds);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    let expected = result.expected_per_group();
    let max = result.group_counts.iter().copied().max().unwrap_or(0) as f64;

    println!("\n📈 {}", "Group frequency:".bright_cyan().bold());
    for (idx, &count) in result.group_counts.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max, 30);
        let theme = themes.get(idx).map_or("", String::as_str);
        println!(
            "   {:>3} {:<24} {} {count:6}",
            idx + 1,
            theme,
            bar.green()
        );
    }

    println!(
        "\n   Expected per group: {:.1}  |  Largest deviation: {}",
        expected,
        format!("{:.2}%", result.max_deviation() * 100.0)
            .bright_yellow()
            .bold()
    );
}

/// Print the developer session summary shown when play stops in dev mode
pub fn print_session_summary(stats: &Statistics) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "SESSION SUMMARY".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("   Rounds dealt:      {}", stats.rounds_played);
    println!("   Rounds completed:  {}", stats.rounds_completed);
    println!("   Wrong attempts:    {}", stats.wrong_attempts);
    match stats.best_round {
        Some(best) => println!("   Best round:        {best} wrong"),
        None => println!("   Best round:        -"),
    }
}
