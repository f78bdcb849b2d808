//! TUI application state and logic

use crate::commands::GameSettings;
use crate::engine::{Dictionary, EngineError, GuessReport, RoundEngine, RoundStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App {
    pub engine: RoundEngine,
    pub settings: GameSettings,
    pub input_mode: InputMode,
    pub history: Vec<HistoryEntry>,
    pub last_report: Option<GuessReport>,
    pub secret: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letter: char,
    pub hit: bool,
    pub eased: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns an engine error if `settings` do not fit the dictionary.
    pub fn new(dictionary: Dictionary, settings: GameSettings) -> Result<Self, EngineError> {
        let mut engine = RoundEngine::new(dictionary);
        engine.begin_round(settings.round_config())?;

        let mut app = Self {
            engine,
            settings,
            input_mode: InputMode::Guessing,
            history: Vec::new(),
            last_report: None,
            secret: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "I'm thinking of a {}-letter word. Type a letter to guess.",
                settings.word_length
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn handle_guess(&mut self, letter: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        if !letter.is_ascii_alphabetic() {
            self.add_message("Letters only!", MessageStyle::Error);
            return;
        }

        let letter = letter.to_ascii_lowercase();
        if self.engine.has_been_guessed(letter) {
            self.add_message(
                &format!("Already guessed {}", letter.to_ascii_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let candidates_before = self.engine.candidate_count();
        match self.engine.apply_guess(letter) {
            Ok(report) => {
                let text = if report.hit {
                    format!("Yes, there is a {}", letter.to_ascii_uppercase())
                } else {
                    format!("No {} in the word", letter.to_ascii_uppercase())
                };
                let style = if report.hit {
                    MessageStyle::Success
                } else {
                    MessageStyle::Info
                };
                self.add_message(&text, style);

                self.history.push(HistoryEntry {
                    letter,
                    hit: report.hit,
                    eased: report.eased,
                    candidates_before,
                    candidates_after: self.engine.candidate_count(),
                });
                self.last_report = Some(report);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        if self.engine.status() != Some(RoundStatus::InProgress) {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let won = self.engine.status() == Some(RoundStatus::Won);

        match self.engine.resolve_secret_word() {
            Ok(secret) => {
                self.stats.rounds_played += 1;
                if won {
                    self.stats.rounds_won += 1;
                    self.add_message(
                        &format!("🎉 You got it: {}!", secret.to_uppercase()),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!("💀 Out of guesses! The word was {}", secret.to_uppercase()),
                        MessageStyle::Error,
                    );
                }
                self.secret = Some(secret);
            }
            Err(e) => {
                warn!(error = %e, "could not resolve secret word");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }

        self.input_mode = InputMode::RoundOver;
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_round(&mut self) {
        self.history.clear();
        self.last_report = None;
        self.secret = None;
        self.messages.clear();

        match self.engine.begin_round(self.settings.round_config()) {
            Ok(()) => {
                self.input_mode = InputMode::Guessing;
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.should_quit = true;
            }
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

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => match app.input_mode {
                    InputMode::Guessing => app.handle_guess(c),
                    InputMode::RoundOver => match c {
                        'q' => app.should_quit = true,
                        'n' => app.new_round(),
                        _ => {}
                    },
                },
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn app(max_wrong_guesses: usize) -> App {
        let dictionary = Dictionary::new(["cat", "car", "can", "cap"]).unwrap();
        App::new(dictionary, GameSettings::new(3, max_wrong_guesses, Difficulty::Hard)).unwrap()
    }

    #[test]
    fn guess_records_history() {
        let mut app = app(5);
        app.handle_guess('c');

        assert_eq!(app.history.len(), 1);
        assert!(app.history[0].hit);
        assert_eq!(app.history[0].candidates_before, 4);
        assert_eq!(app.history[0].candidates_after, 4);
        assert!(app.last_report.is_some());
    }

    #[test]
    fn duplicate_guess_is_rejected_without_cost() {
        let mut app = app(5);
        app.handle_guess('c');
        app.handle_guess('C');

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.engine.guesses_remaining(), 4);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn non_letter_is_rejected() {
        let mut app = app(5);
        app.handle_guess('7');

        assert!(app.history.is_empty());
        assert_eq!(app.engine.guesses_remaining(), 5);
    }

    #[test]
    fn running_out_ends_round() {
        let mut app = app(2);
        app.handle_guess('x');
        app.handle_guess('y');

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 0);
        let secret = app.secret.clone().unwrap();
        assert!(["cat", "car", "can", "cap"].contains(&secret.as_str()));

        // Letters are ignored until a new round starts
        app.handle_guess('z');
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn new_round_resets_state() {
        let mut app = app(1);
        app.handle_guess('x');
        assert_eq!(app.input_mode, InputMode::RoundOver);

        app.new_round();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert!(app.secret.is_none());
        assert_eq!(app.engine.guesses_remaining(), 1);
        assert_eq!(app.stats.rounds_played, 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(26);
        for letter in ['x', 'y', 'z', 'q', 'w', 'v'] {
            app.handle_guess(letter);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
