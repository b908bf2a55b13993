//! TUI rendering with ratatui

use super::app::App;
use crate::output::formatters::difficulty_bar;
use crate::session::Mode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

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

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪨 ROCK CHAIN - Word Association")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Message
            Constraint::Percentage(60), // Chain
        ])
        .split(area);

    render_message(f, app, chunks[0]);
    render_chain(f, app, chunks[1]);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.session.mode() {
        Mode::SelectingDifficulty => Color::White,
        Mode::Playing => Color::Green,
        Mode::Over => Color::Red,
    };

    let paragraph = Paragraph::new(app.session.message())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Message ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_chain(f: &mut Frame, app: &App, area: Rect) {
    let chain_len = app.session.chain_len();
    let items: Vec<ListItem> = app
        .session
        .chain()
        .enumerate()
        .map(|(i, word)| {
            let move_no = chain_len - 1 - i;
            let (label, style) = if move_no == 0 {
                (
                    format!("start: {word}"),
                    Style::default().fg(Color::DarkGray),
                )
            } else if i == 0 {
                (
                    format!("{move_no:>5}: {word} ←"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (format!("{move_no:>5}: {word}"), Style::default().fg(Color::White))
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let chain = List::new(items).block(
        Block::default()
            .title(" Chain (most recent first) ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(chain, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Difficulty gauge
            Constraint::Min(4),         // Hint
        ])
        .split(area);

    render_difficulty(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
}

fn render_difficulty(f: &mut Frame, app: &App, area: Rect) {
    let (percent, label) = match app.session.difficulty() {
        Some(difficulty) => (
            u16::from(difficulty.level()) * 10,
            format!(
                "{} level {} | threshold {}",
                difficulty_bar(difficulty.level()),
                difficulty.level(),
                difficulty.threshold()
            ),
        ),
        None => (0, "choose 1-10".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Difficulty ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.last_hint, app.session.mode()) {
        (Some(hint), _) => vec![Line::from(vec![
            Span::raw("💡 Try: "),
            Span::styled(
                hint.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])],
        (None, Mode::Playing) => vec![Line::from("Press TAB for a hint")],
        (None, _) => vec![Line::from("")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.session.mode() {
        Mode::SelectingDifficulty => (
            " Difficulty (1-10) | Enter to confirm | q to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        Mode::Playing => (
            " Your answer | Enter to submit | TAB for a hint | ESC to quit ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        Mode::Over => (
            " 🪨 GAME OVER | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.session.mode() {
        Mode::SelectingDifficulty => "Mode: Selecting",
        Mode::Playing => "Mode: Playing",
        Mode::Over => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let threshold_text = app.session.threshold().map_or_else(
        || "Threshold: -".to_string(),
        |threshold| format!("Threshold: {threshold}"),
    );
    let threshold = Paragraph::new(threshold_text).alignment(Alignment::Center);
    f.render_widget(threshold, chunks[1]);

    let score_text = format!("Score: {}", app.session.score());
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let help_text = match app.session.mode() {
        Mode::SelectingDifficulty => "q: Quit | Enter: Confirm",
        Mode::Playing => "ESC: Quit | TAB: Hint | Enter: Submit",
        Mode::Over => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
