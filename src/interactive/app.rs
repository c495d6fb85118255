//! TUI application state and logic

use crate::core::Entry;
use crate::error::GameError;
use crate::game::{GameSession, GuessOutcome, Statistics, share_text};
use crate::roster::Roster;
use crate::solver::{MinimaxStrategy, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'r> {
    pub roster: &'r Roster,
    pub session: GameSession<'r>,
    pub solver: Solver<'r, MinimaxStrategy>,
    pub rng: StdRng,
    pub max_guesses: usize,
    pub input_mode: InputMode,
    pub search: String,
    pub candidates: Vec<&'r Entry>,
    pub selected: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub share: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Instructions,
    Search,
    GameOver,
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

impl<'r> App<'r> {
    #[must_use]
    pub fn new(
        roster: &'r Roster,
        session: GameSession<'r>,
        first_visit: bool,
        rng: StdRng,
    ) -> Self {
        let max_guesses = session.max_guesses();
        let mut app = Self {
            roster,
            session,
            solver: Solver::new(MinimaxStrategy, roster),
            rng,
            max_guesses,
            input_mode: if first_visit {
                InputMode::Instructions
            } else {
                InputMode::Search
            },
            search: String::new(),
            candidates: Vec::new(),
            selected: 0,
            messages: Vec::new(),
            stats: Statistics::default(),
            share: None,
            should_quit: false,
        };
        app.add_message(
            &format!("Guess the mystery athlete in {max_guesses} tries!"),
            MessageStyle::Info,
        );
        app
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Instructions => {
                // Any key dismisses the instructions
                self.input_mode = InputMode::Search;
            }
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('s') => self.toggle_share(),
                _ => {}
            },
            InputMode::Search => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('g') => self.give_up(),
                        KeyCode::Char('n') => self.new_game(),
                        _ => {}
                    }
                    return;
                }

                match key.code {
                    KeyCode::Esc => self.should_quit = true,
                    KeyCode::Char(c) => {
                        self.search.push(c);
                        self.refresh_candidates();
                    }
                    KeyCode::Backspace => {
                        self.search.pop();
                        self.refresh_candidates();
                    }
                    KeyCode::Up => self.select_previous(),
                    KeyCode::Down => self.select_next(),
                    KeyCode::Tab => self.hint(),
                    KeyCode::F(1) => self.input_mode = InputMode::Instructions,
                    KeyCode::Enter => self.submit_selected(),
                    _ => {}
                }
            }
        }
    }

    /// Re-run the candidate filter for the current search text
    pub fn refresh_candidates(&mut self) {
        self.candidates = self.session.filter_candidates(&self.search);
        if self.selected >= self.candidates.len() {
            self.selected = 0;
        }
    }

    pub fn select_next(&mut self) {
        if !self.candidates.is_empty() {
            self.selected = (self.selected + 1) % self.candidates.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.candidates.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.candidates.len() - 1);
        }
    }

    /// The dropdown entry Enter would submit
    #[must_use]
    pub fn selected_candidate(&self) -> Option<&'r Entry> {
        self.candidates.get(self.selected).copied()
    }

    pub fn submit_selected(&mut self) {
        let Some(entry) = self.selected_candidate() else {
            if !self.search.is_empty() {
                self.add_message(
                    &format!("No athlete matches '{}'", self.search),
                    MessageStyle::Error,
                );
            }
            return;
        };

        self.search.clear();
        self.candidates.clear();
        self.selected = 0;

        match self.session.submit_guess(entry.name()) {
            Ok(GuessOutcome::Accepted(feedback)) => {
                if feedback.is_correct() {
                    let celebration = match self.session.guess_count() {
                        1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                        n => format!("🎉 Got it in {n} guesses! 🎉"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                } else if self.session.is_over() {
                    self.add_message("Out of guesses!", MessageStyle::Error);
                } else {
                    self.add_message(
                        &format!(
                            "{}: {} of 5 attributes match",
                            entry.name(),
                            feedback.count_matches()
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Ok(GuessOutcome::AlreadyGuessed) => {
                self.add_message(
                    &format!("Already guessed {}", entry.name()),
                    MessageStyle::Error,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }

        self.check_game_over();
    }

    pub fn give_up(&mut self) {
        match self.session.give_up() {
            Ok(()) => {
                self.add_message("You gave up.", MessageStyle::Info);
                self.check_game_over();
            }
            Err(GameError::InvalidState(reason)) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn check_game_over(&mut self) {
        if self.session.is_over() && self.input_mode != InputMode::GameOver {
            self.stats.record(&self.session);
            self.input_mode = InputMode::GameOver;
            self.add_message(
                "Press 's' to share, 'n' for new game or 'q' to quit.",
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        match GameSession::start(self.roster, self.max_guesses, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.search.clear();
                self.candidates.clear();
                self.selected = 0;
                self.share = None;
                self.messages.clear();
                self.input_mode = InputMode::Search;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_share(&mut self) {
        self.share = match self.share {
            Some(_) => None,
            None => share_text(&self.session),
        };
    }

    pub fn hint(&mut self) {
        let rows = self.session.rows();
        let remaining = self.solver.count_candidates(&rows);
        match self.solver.next_guess(&rows, &mut self.rng) {
            Some(entry) => self.add_message(
                &format!("Hint: {remaining} possible. Try {}", entry.name()),
                MessageStyle::Info,
            ),
            None => self.add_message("No consistent athletes left!", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
