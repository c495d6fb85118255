//! Display functions for game state and command results

use super::formatters::{cell_text, create_progress_bar, fit};
use crate::commands::SimulationResult;
use crate::core::Attribute;
use crate::game::{GameSession, GuessRow, Status};
use crate::roster::Roster;
use colored::Colorize;

const NAME_WIDTH: usize = 18;
const CELL_WIDTH: usize = 14;

/// Print the how-to-play text shown on a first visit
pub fn print_instructions(max_guesses: usize) {
    println!("\n{}", "How to play".bright_cyan().bold());
    println!("  Guess the mystery athlete in {max_guesses} tries or less!");
    println!("  {} cells match the mystery athlete.", "Green".green().bold());
    println!("  For numbers, ↑ means the mystery's value is higher and ↓ lower.\n");
}

/// Print the guess table
pub fn print_guess_table(rows: &[GuessRow<'_>]) {
    if rows.is_empty() {
        return;
    }

    let mut header = fit("Name", NAME_WIDTH);
    for attribute in Attribute::ALL {
        header.push_str(&fit(attribute.label(), CELL_WIDTH));
    }
    println!("\n{}", header.bright_white().bold());
    println!("{}", "─".repeat(NAME_WIDTH + CELL_WIDTH * 5).cyan());

    for row in rows {
        let mut line = fit(row.entry.name(), NAME_WIDTH).bright_white().to_string();
        for fb in row.feedback.attributes() {
            let cell = fit(&cell_text(row.entry, *fb), CELL_WIDTH);
            if fb.matched {
                line.push_str(&cell.black().on_green().to_string());
            } else {
                line.push_str(&cell);
            }
        }
        println!("{line}");
    }
}

/// Print the guess counter line
pub fn print_guess_count(session: &GameSession) {
    println!(
        "\nGuesses: {}/{}",
        session.guess_count().to_string().bright_cyan().bold(),
        session.max_guesses()
    );
}

/// Print the end-of-game reveal
pub fn print_game_over(session: &GameSession) {
    let Some(mystery) = session.mystery() else {
        return;
    };

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("The mystery athlete was:");
    println!("  {}", mystery.name().to_uppercase().bright_yellow().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    let guesses = session.guess_count();
    match session.status() {
        Status::Won => println!(
            "{}",
            format!("✅ You got it in {guesses} tries!").green().bold()
        ),
        Status::GaveUp => println!(
            "{}",
            format!("🏳  You gave up after {guesses} guesses.").yellow()
        ),
        Status::Lost => println!(
            "{}",
            format!("❌ You ran out of guesses after {guesses} guesses.")
                .red()
                .bold()
        ),
        Status::Active => {}
    }
}

/// Print share text between rules so it is easy to copy
pub fn print_share(text: &str) {
    println!("\n{}", "─".repeat(40).bright_black());
    println!("{text}");
    println!("{}", "─".repeat(40).bright_black());
}

/// Print every roster entry
pub fn print_roster(roster: &Roster) {
    println!("\n{}", "═".repeat(NAME_WIDTH + CELL_WIDTH * 5).cyan());
    println!(
        " {} ({} athletes)",
        "ROSTER".bright_cyan().bold(),
        roster.len()
    );
    println!("{}", "═".repeat(NAME_WIDTH + CELL_WIDTH * 5).cyan());

    let mut header = fit("Name", NAME_WIDTH);
    for attribute in Attribute::ALL {
        header.push_str(&fit(attribute.label(), CELL_WIDTH));
    }
    println!("{}", header.bold());

    for entry in roster {
        let mut line = fit(entry.name(), NAME_WIDTH);
        for attribute in Attribute::ALL {
            line.push_str(&fit(&entry.display_value(attribute), CELL_WIDTH));
        }
        println!("{line}");
    }

    println!("\nSports: {}", roster.sports().join(", ").bright_yellow());
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let stats = &result.statistics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    if let Some(average) = stats.average_winning_guesses() {
        println!("   Average guesses:  {average:.2}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guess_count, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        if count == 0 {
            continue;
        }
        let pct = (count as f64 / stats.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
    let lost = stats.total_games - stats.games_won;
    if lost > 0 {
        println!("   {}", format!("✗: {lost} not found").red());
    }
}
