//! TUI rendering with ratatui
//!
//! Guess grid, search dropdown and game-over reveal.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Attribute, AttributeKind};
use crate::game::Status;
use crate::output::formatters::cell_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row,
        Table, Wrap,
    },
};

/// Room for the " ↑" hint after a numeric value
const ARROW_WIDTH: usize = 2;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Guess grid
            Constraint::Percentage(35), // Side panel
        ])
        .split(chunks[1]);

    render_guess_table(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::Instructions {
        render_instructions(f, app, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🏆 SPORTS WORDLE - Guess the Mystery Athlete")
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

fn render_guess_table(f: &mut Frame, app: &App, area: Rect) {
    let header_cells = std::iter::once("Name")
        .chain(Attribute::ALL.iter().map(|a| a.label()))
        .map(|label| Cell::from(label).style(Style::default().add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells).bottom_margin(1);

    let rows = app.session.rows().into_iter().map(|row| {
        let mut cells = vec![Cell::from(row.entry.name().to_string())];
        for fb in row.feedback.attributes() {
            let style = if fb.matched {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };
            cells.push(Cell::from(cell_text(row.entry, *fb)).style(style));
        }
        Row::new(cells)
    });

    let widths = column_widths(app);

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(table, area);
}

/// Column minimums wide enough for every roster value, its hint arrow and the
/// header label
fn column_widths(app: &App) -> Vec<Constraint> {
    let name = app
        .roster
        .iter()
        .map(|e| e.name().chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or_default();

    let mut widths = vec![Constraint::Min(to_u16(name))];
    for attribute in Attribute::ALL {
        let arrow = match attribute.kind() {
            AttributeKind::Numeric => ARROW_WIDTH,
            AttributeKind::Categorical => 0,
        };
        let width = app
            .roster
            .iter()
            .map(|e| e.display_value(attribute).chars().count() + arrow)
            .chain(std::iter::once(attribute.label().chars().count()))
            .max()
            .unwrap_or_default();
        widths.push(Constraint::Min(to_u16(width)));
    }
    widths
}

fn to_u16(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Guesses used
            Constraint::Percentage(60), // Dropdown or reveal
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_guess_gauge(f, app, chunks[0]);
    if app.input_mode == InputMode::GameOver {
        render_reveal(f, app, chunks[1]);
    } else {
        render_dropdown(f, app, chunks[1]);
    }
    render_messages(f, app, chunks[2]);
}

fn render_guess_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.guess_count();
    let max = app.session.max_guesses();
    let percent = u16::try_from(used * 100 / max.max(1)).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} guesses"));

    f.render_widget(gauge, area);
}

fn render_dropdown(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Green));

    if app.search.is_empty() || app.candidates.is_empty() {
        let item = if app.search.is_empty() {
            ListItem::new("Start typing a name...").style(Style::default().fg(Color::DarkGray))
        } else {
            ListItem::new("No matching athletes").style(Style::default().fg(Color::Red))
        };
        f.render_widget(List::new([item]).block(block.title(" Matches ")), area);
        return;
    }

    let items: Vec<ListItem> = app
        .candidates
        .iter()
        .map(|entry| ListItem::new(format!("{} ({})", entry.name(), entry.sport())))
        .collect();

    let list = List::new(items)
        .block(block.title(format!(" Matches ({}) ", app.candidates.len())))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    // The list scrolls to keep the selection in view
    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_reveal(f: &mut Frame, app: &App, area: Rect) {
    let Some(mystery) = app.session.mystery() else {
        return;
    };

    let (verdict, color) = match app.session.status() {
        Status::Won => ("You got it!", Color::Green),
        Status::Lost => ("Out of guesses", Color::Red),
        _ => ("You gave up", Color::Yellow),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Mystery: "),
            Span::styled(
                mystery.name().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    match &app.share {
        Some(text) => lines.extend(text.lines().map(|l| Line::from(l.to_string()))),
        None => {
            for attribute in Attribute::ALL {
                lines.push(Line::from(format!(
                    "{:<14}{}",
                    attribute.label(),
                    mystery.display_value(attribute)
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 's' share, 'n' new game, 'q' quit ",
            "",
            Color::Green,
        ),
        InputMode::Search | InputMode::Instructions => (
            " Search athlete | ↑/↓ select, Enter guess ",
            app.search.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let remaining = format!("Remaining: {}", app.session.remaining_guesses());
    f.render_widget(
        Paragraph::new(remaining).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game | s: Share"
    } else {
        "Esc: Quit | Tab: Hint | ^G: Give Up | ^N: New | F1: Help"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_instructions(f: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 50, area);

    let lines = vec![
        Line::from(Span::styled(
            "How to play",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Guess the mystery athlete in {} tries or less!",
            app.max_guesses
        )),
        Line::from(vec![
            Span::styled("Green", Style::default().fg(Color::Green)),
            Span::raw(" cells match the mystery athlete."),
        ]),
        Line::from("↑ means the mystery's number is higher, ↓ lower."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Welcome ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// A rectangle of the given percentage size centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entry;
    use crate::game::GameSession;
    use crate::roster::Roster;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        screen_text_sized(app, 120, 40)
    }

    fn screen_text_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_guess_rows() {
        let roster = Roster::embedded().unwrap();
        let mut session = GameSession::with_mystery(&roster, "Rafael Nadal", 8).unwrap();
        session.submit_guess("Serena Williams").unwrap();
        let app = App::new(&roster, session, false, StdRng::seed_from_u64(1));

        let text = screen_text(&app);
        assert!(text.contains("SPORTS WORDLE"));
        assert!(text.contains("Serena Williams"));
        assert!(text.contains("Championships"));
        assert!(text.contains("42 ↓"));
        assert!(text.contains("1/8 guesses"));
    }

    #[test]
    fn columns_fit_longest_roster_values() {
        let roster = Roster::embedded().unwrap();
        let session = GameSession::with_mystery(&roster, "Rafael Nadal", 8).unwrap();
        let app = App::new(&roster, session, false, StdRng::seed_from_u64(1));

        let widths = column_widths(&app);
        assert_eq!(widths[0], Constraint::Min(15)); // Serena Williams
        assert_eq!(widths[1], Constraint::Min(10)); // Basketball
        assert_eq!(widths[3], Constraint::Min(4)); // "39 ↑"
        assert_eq!(widths[5], Constraint::Min(13)); // Championships
    }

    #[test]
    fn dropdown_scrolls_to_selection() {
        let entries = (0..30)
            .map(|i| Entry::new(format!("Player {i:02}"), "Tennis", 20, "USA", 1, 1))
            .collect();
        let roster = Roster::new(entries).unwrap();
        let session = GameSession::with_mystery(&roster, "Player 00", 8).unwrap();
        let mut app = App::new(&roster, session, false, StdRng::seed_from_u64(1));

        app.search = "player".to_string();
        app.refresh_candidates();
        for _ in 0..25 {
            app.select_next();
        }
        assert_eq!(app.selected_candidate().unwrap().name(), "Player 25");

        let text = screen_text_sized(&app, 120, 30);
        assert!(text.contains("▶ Player 25"));
        assert!(text.contains("Matches (30)"));
    }

    #[test]
    fn renders_instructions_on_first_visit() {
        let roster = Roster::embedded().unwrap();
        let session = GameSession::with_mystery(&roster, "Rafael Nadal", 8).unwrap();
        let app = App::new(&roster, session, true, StdRng::seed_from_u64(1));

        assert!(screen_text(&app).contains("How to play"));
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, area);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
    }
}
