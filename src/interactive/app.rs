//! TUI application state and event loop
//!
//! The shell layer: buffers keystrokes into lines, hands completed lines to
//! the session, and renders from its accessors. Game rules never live here.

use crate::session::{GameSession, Mode};
use crate::suggest::{random_hint, used_words};
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

/// Application state
pub struct App<'a> {
    pub session: GameSession,
    pub words: &'a [String],
    pub input_buffer: String,
    pub last_hint: Option<String>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [String]) -> Self {
        Self {
            session: GameSession::new(),
            words,
            input_buffer: String::new(),
            last_hint: None,
            should_quit: false,
        }
    }

    /// Submit the buffered line to the session
    pub fn submit_line(&mut self) {
        let line = self.input_buffer.clone();
        match self.session.mode() {
            Mode::SelectingDifficulty => {
                self.session.submit_difficulty(&line);
            }
            Mode::Playing => {
                self.session.submit_move(&line);
                self.last_hint = None;
            }
            Mode::Over => {}
        }
        self.input_buffer.clear();
    }

    /// Ask the suggest engine for a legal word against the current head
    pub fn request_hint(&mut self) {
        let Some(threshold) = self.session.threshold() else {
            return;
        };
        let exclude = used_words(self.session.chain());

        self.last_hint = random_hint(
            self.words,
            self.session.head(),
            threshold,
            &exclude,
            &mut rand::rng(),
        )
        .map(String::from);
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.input_buffer.clear();
        self.last_hint = None;
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

            match app.session.mode() {
                Mode::SelectingDifficulty => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_line();
                    }
                    _ => {}
                },
                Mode::Playing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    // Words may contain 'q', so only Esc/ctrl-c quit mid-game
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.request_hint();
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_line();
                    }
                    _ => {}
                },
                Mode::Over => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Game over screen ignores other keys
                    }
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
