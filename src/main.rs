//! Sports Wordle - CLI
//!
//! Guess the mystery athlete in a TUI or plain CLI, list the roster, or let
//! the hint solver play many games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sports_wordle::{
    commands::{SimulationConfig, run_simple, run_simulation},
    config::GameConfig,
    game::{DEFAULT_MAX_GUESSES, FileStore, launch},
    logging,
    output::{print_roster, print_simulation_result},
    roster::Roster,
    solver::{Solver, Strategy, StrategyType},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "sports_wordle",
    about = "Guess the mystery athlete from attribute feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// CSV roster file (default: embedded roster)
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_GUESSES as u16,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    max_guesses: u16,

    /// Only play athletes from this sport
    #[arg(long, global = true)]
    sport: Option<String>,

    /// Seed for reproducible mystery selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Where the first-visit flag is stored
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Hint strategy: minimax (default), random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// List the athletes in the roster
    Roster,

    /// Let the hint solver play many games
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            roster_path: self.roster.clone(),
            sport: self.sport.clone(),
            max_guesses: usize::from(self.max_guesses),
            seed: self.seed,
            state_file: self
                .state_file
                .clone()
                .unwrap_or_else(FileStore::default_path),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.game_config();
    let roster = config.load_roster()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&roster, &config),
        Commands::Simple => run_simple(&roster, &config),
        Commands::Roster => {
            print_roster(&roster);
            Ok(())
        }
        Commands::Simulate { count } => {
            let strategy = StrategyType::from_name(&cli.strategy);
            simulate_command(strategy, &roster, &config, count)
        }
    }
}

fn run_play_command(roster: &Roster, config: &GameConfig) -> Result<()> {
    use sports_wordle::interactive::{App, run_tui};

    let mut rng = config.rng();
    let mut store = config.store();
    let started = launch(roster, config.max_guesses, &mut rng, &mut store)?;

    let app = App::new(roster, started.session, started.first_visit, rng);
    run_tui(app)
}

fn simulate_command(
    strategy: StrategyType,
    roster: &Roster,
    config: &GameConfig,
    count: usize,
) -> Result<()> {
    let solver = Solver::new(strategy, roster);
    simulate_with(&solver, strategy.name(), roster, config, count)
}

fn simulate_with<S: Strategy + Sync>(
    solver: &Solver<S>,
    strategy_name: &str,
    roster: &Roster,
    config: &GameConfig,
    count: usize,
) -> Result<()> {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    info!(games = count, base_seed, strategy = strategy_name, "simulating");
    println!(
        "Simulating {count} games over {} athletes with the {strategy_name} strategy...",
        roster.len()
    );

    let sim_config = SimulationConfig {
        games: count,
        max_guesses: config.max_guesses,
        base_seed,
        show_progress: true,
    };
    let result = run_simulation(solver, roster, strategy_name, &sim_config)?;
    print_simulation_result(&result);
    Ok(())
}
