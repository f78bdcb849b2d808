//! TUI rendering with ratatui
//!
//! Board, family table and round status for the evil hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::spaced_pattern;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Families listed in the table before it is cut short
const MAX_FAMILY_ROWS: usize = 10;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and families
            Constraint::Percentage(40), // Guesses and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "😈 EVIL HANGMAN - {} letters, {} difficulty",
        app.settings.word_length, app.settings.difficulty
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Board
            Constraint::Min(4),    // Families
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_families(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let pattern = app
        .engine
        .pattern()
        .map(spaced_pattern)
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(
            pattern,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Guessed: {}", app.engine.guessed_letters_display())),
    ];

    if let Some(secret) = &app.secret {
        lines.push(Line::from(vec![
            Span::raw("Secret:  "),
            Span::styled(
                secret.to_uppercase(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_families(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Families of the last guess ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Green));

    let Some(report) = &app.last_report else {
        let paragraph = Paragraph::new("No guesses yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut rows: Vec<_> = report.family_sizes.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

    let mut lines: Vec<Line> = rows
        .iter()
        .take(MAX_FAMILY_ROWS)
        .map(|(pattern, size)| {
            let text = format!("{:<14} {size:>6}", pattern.as_str());
            if **pattern == report.selected {
                Line::from(Span::styled(
                    format!("▶ {text}"),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect();

    if rows.len() > MAX_FAMILY_ROWS {
        lines.push(Line::from(format!(
            "  … {} more",
            rows.len() - MAX_FAMILY_ROWS
        )));
    }
    if report.eased {
        lines.push(Line::from(Span::styled(
            "  (easing turn: second hardest kept)",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Guess gauge
            Constraint::Percentage(50), // History
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_guesses_gauge(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guesses_gauge(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.engine.guesses_remaining();
    let max = app.settings.max_wrong_guesses.max(1);
    let percent = ((remaining * 100) / max).min(100) as u16;

    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{}", app.settings.max_wrong_guesses));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let mark = if entry.hit { "✓" } else { "✗" };
            let eased = if entry.eased { " *" } else { "" };
            let style = if entry.hit {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            ListItem::new(format!(
                "{mark} {}  {} → {}{eased}",
                entry.letter.to_ascii_uppercase(),
                entry.candidates_before,
                entry.candidates_after
            ))
            .style(style)
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
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

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
        InputMode::RoundOver => (" Round over | Press 'n' for a new round or 'q' to quit ", Color::Cyan),
    };

    let prompt = Paragraph::new("")
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(prompt, area);
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

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Guessing",
        InputMode::RoundOver => "Mode: Round over",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Rounds: {} | Won: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates_text = format!("Candidates: {}", app.engine.candidate_count());
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
        InputMode::RoundOver => "n: New Round | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
