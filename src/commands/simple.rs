//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{GameSession, GuessOutcome, Statistics, launch, share_text};
use crate::output::{
    print_game_over, print_guess_count, print_guess_table, print_instructions, print_share,
};
use crate::roster::Roster;
use crate::solver::{MinimaxStrategy, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Most candidates listed for an ambiguous query
const MAX_LISTED: usize = 10;

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Quit,
    NewGame,
    GiveUp,
    Share,
    Hint,
    Help,
    UnknownCommand(String),
    /// Resolved to exactly one roster name
    Guess(String),
    /// Several names match the query
    Ambiguous(Vec<String>),
    NoMatch,
}

/// Interpret a line of input against the current session
///
/// An exact name (any case) is a guess; otherwise the text is run through the
/// candidate filter and only a unique match is accepted.
#[must_use]
pub fn parse_input(session: &GameSession, line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    if let Some(command) = line.strip_prefix('/') {
        return match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Input::Quit,
            "new" | "n" => Input::NewGame,
            "giveup" | "give up" | "g" => Input::GiveUp,
            "share" | "s" => Input::Share,
            "hint" | "h" => Input::Hint,
            "help" | "?" => Input::Help,
            other => Input::UnknownCommand(other.to_string()),
        };
    }

    if let Some(entry) = session.roster().find(line) {
        return Input::Guess(entry.name().to_string());
    }

    let matches = session.filter_candidates(line);
    match matches.as_slice() {
        [] => Input::NoMatch,
        [only] => Input::Guess(only.name().to_string()),
        many => Input::Ambiguous(many.iter().map(|e| e.name().to_string()).collect()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails, the roster is empty, or the
/// visitor store cannot be accessed.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(roster: &Roster, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Sports Wordle - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut rng = config.rng();
    let mut store = config.store();
    let started = launch(roster, config.max_guesses, &mut rng, &mut store)?;

    if started.first_visit {
        print_instructions(config.max_guesses);
    }
    print_help();

    let solver = Solver::new(MinimaxStrategy, roster);
    let mut session = started.session;
    let mut stats = Statistics::new();

    loop {
        if session.is_over() {
            stats.record(&session);
            print_game_over(&session);
            print_stats(&stats);

            match get_user_input("Play again? (yes/no/share)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session = GameSession::start(roster, config.max_guesses, &mut rng)?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                "share" | "s" => {
                    if let Some(text) = share_text(&session) {
                        print_share(&text);
                    }
                    if confirm("Play again? (yes/no)")? {
                        session = GameSession::start(roster, config.max_guesses, &mut rng)?;
                        println!("\n🔄 New game started!\n");
                        continue;
                    }
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_guess_count(&session);
        let line = get_user_input("Guess an athlete")?;

        match parse_input(&session, &line) {
            Input::Empty => {}
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Help => print_help(),
            Input::NewGame => {
                session = GameSession::start(roster, config.max_guesses, &mut rng)?;
                println!("\n🔄 New game started!\n");
            }
            Input::GiveUp => match session.give_up() {
                Ok(()) => {}
                Err(GameError::InvalidState(reason)) => {
                    println!("{}", format!("❌ {reason}").red());
                }
                Err(err) => return Err(err.into()),
            },
            Input::Share => {
                println!("{}", "Finish the game first, then share!".yellow());
            }
            Input::Hint => match solver.next_guess(&session.rows(), &mut rng) {
                Some(entry) => println!(
                    "💡 {} candidates left. Try: {}",
                    solver.count_candidates(&session.rows()),
                    entry.name().bright_yellow().bold()
                ),
                None => println!("{}", "No consistent athletes left!".red()),
            },
            Input::UnknownCommand(command) => {
                println!("{}", format!("❌ Unknown command '/{command}'").red());
            }
            Input::NoMatch => {
                println!("{}", format!("❌ No athlete matches '{}'", line.trim()).red());
            }
            Input::Ambiguous(names) => {
                println!("Did you mean:");
                for name in names.iter().take(MAX_LISTED) {
                    println!("  • {name}");
                }
                if names.len() > MAX_LISTED {
                    println!("  … and {} more", names.len() - MAX_LISTED);
                }
            }
            Input::Guess(name) => match session.submit_guess(&name)? {
                GuessOutcome::Accepted(_) => print_guess_table(&session.rows()),
                GuessOutcome::AlreadyGuessed => {
                    println!("{}", format!("You already guessed {name}.").yellow());
                }
            },
        }
    }
}

fn print_help() {
    println!("Type part of a name and press Enter. A unique match is submitted.");
    println!("Commands: /hint, /giveup, /new, /share, /help, /quit\n");
}

fn print_stats(stats: &Statistics) {
    println!(
        "\nGames: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(matches!(
        get_user_input(prompt)?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
