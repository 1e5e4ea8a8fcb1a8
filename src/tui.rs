//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Title with the root word, the input field, the accepted-word count, the
//! accepted words (most recent first, each with its letter count), an alert
//! panel for rejected words, a status line and key help. Up/Down scroll the
//! word list when it overflows the panel.
//!
//! # State Machine
//! - `EnteringWord` → `ShowingAlert` (word rejected) → any key → `EnteringWord`
//! - `ESC` from either state exits.

use crate::game_state::{GameInterface, GameSession, UserAction};
use crate::validator::Rejection;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const ALERT_TITLE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    ShowingAlert { title: String, message: String },
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    current_input: &'a str,
    state: &'a TuiState,
    used_words: &'a [String],
    word_scroll: usize,
    count_label: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    current_input: String,
    state: TuiState,
    used_words: Vec<String>,
    word_scroll: usize,
    count_label: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            root_word: String::new(),
            current_input: String::new(),
            state: TuiState::EnteringWord,
            used_words: Vec::new(),
            word_scroll: 0,
            count_label: "0 words".to_string(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    ///
    /// Returns an error if rendering fails.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            current_input: &self.current_input,
            state: &self.state,
            used_words: &self.used_words,
            word_scroll: self.word_scroll,
            count_label: &self.count_label,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::warn!("Draw error: {e}");
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input
                Constraint::Min(6),    // Used words
                Constraint::Length(4), // Alert
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.current_input, ctx.state);
        Self::render_used_words(f, chunks[2], ctx.used_words, ctx.word_scroll, ctx.count_label);
        Self::render_alert(f, chunks[3], ctx.state, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_string())
            .style(HEADER_STYLE)
            .block(Block::default().title("WORD SCRAMBLE").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: &TuiState) {
        let caret = if matches!(state, TuiState::EnteringWord) {
            "_"
        } else {
            ""
        };
        let input = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(current_input.to_string(), SUCCESS_STYLE),
            Span::raw(caret),
        ]))
        .block(Block::default().title("Enter your word").borders(Borders::ALL));
        f.render_widget(input, area);
    }

    fn render_used_words(
        f: &mut Frame,
        area: Rect,
        used_words: &[String],
        scroll: usize,
        count_label: &str,
    ) {
        let mut lines = vec![Line::from(vec![Span::styled(
            count_label.to_string(),
            INFO_STYLE,
        )])];

        // Borders and the count label take three rows
        let rows = usize::from(area.height.saturating_sub(3));
        let (start, end) = visible_word_range(used_words.len(), rows, scroll);
        for word in &used_words[start..end] {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>2} ", word.chars().count()),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(format!(" {word}")),
            ]));
        }
        if let Some(more) = hidden_words_line(start, used_words.len() - end) {
            lines.push(Line::from(vec![Span::styled(
                more,
                Style::default().fg(Color::Gray),
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Your words").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_alert(f: &mut Frame, area: Rect, state: &TuiState, error_message: &str) {
        let lines = match state {
            TuiState::ShowingAlert { title, message } => vec![
                Line::from(vec![Span::styled(title.clone(), ALERT_TITLE_STYLE)]),
                Line::from(message.clone()),
            ],
            TuiState::EnteringWord if !error_message.is_empty() => {
                vec![Line::from(vec![Span::styled(
                    error_message.to_string(),
                    ERROR_STYLE,
                )])]
            }
            TuiState::EnteringWord => Vec::new(),
        };

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => {
                "ENTER: Submit | UP/DOWN: Scroll words | CTRL-N/F2: New Game | ESC: Quit"
            }
            TuiState::ShowingAlert { .. } => "Press any key to continue | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let key = match event::read()? {
            Event::Key(key) => key,
            other => {
                debug_log!("handle_input() - Ignoring non-key event: {:?}", other);
                return Ok(None);
            }
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Garbage from escape sequences when alt-tabbing
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        Ok(match self.state {
            TuiState::EnteringWord => self.handle_word_input(key),
            TuiState::ShowingAlert { .. } => self.handle_alert_input(key),
        })
    }

    fn is_new_game_key(key: &KeyEvent) -> bool {
        key.code == KeyCode::F(2)
            || (key.code == KeyCode::Char('n') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        if Self::is_new_game_key(&key) {
            info_log!("handle_word_input() - New game requested");
            return Some(UserAction::NewGame);
        }

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.current_input);
                info_log!("handle_word_input() - Submitting '{}'", word);
                Some(UserAction::Submit(word))
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Up => {
                self.word_scroll = self.word_scroll.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let last = self.used_words.len().saturating_sub(1);
                self.word_scroll = (self.word_scroll + 1).min(last);
                None
            }
            KeyCode::Char(c)
                if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) =>
            {
                debug_log!("handle_word_input() - Ignoring '{}' with modifier", c);
                None
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.current_input.chars().count() < MAX_INPUT_LENGTH {
                    self.current_input.extend(c.to_lowercase());
                } else {
                    self.error_message = "That's long enough!".to_string();
                }
                None
            }
            KeyCode::Char(' ') => None,
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            _ => None,
        }
    }

    fn handle_alert_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Esc {
            return Some(UserAction::Exit);
        }
        self.state = TuiState::EnteringWord;
        self.status = "Enter another word".to_string();
        None
    }

    fn sync_session(&mut self, session: &GameSession) {
        self.used_words = session.used_words().to_vec();
        self.count_label = session.word_count_label();
    }
}

impl GameInterface for TuiInterface {
    fn display_new_game(&mut self, root_word: &str, word_list_len: usize) {
        self.root_word = root_word.to_string();
        self.current_input.clear();
        self.used_words.clear();
        self.word_scroll = 0;
        self.count_label = "0 words".to_string();
        self.error_message.clear();
        self.state = TuiState::EnteringWord;
        self.status = format!("New game from {word_list_len} root words - make words from '{root_word}'");
        self.draw_or_log();
    }

    fn read_action(&mut self, session: &GameSession) -> Option<UserAction> {
        self.sync_session(session);
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("read_action() - Input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, word: &str, session: &GameSession) {
        self.sync_session(session);
        // Newest words are at the top
        self.word_scroll = 0;
        self.status = format!("Nice! '{word}' added");
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: Rejection, root_word: &str) {
        self.state = TuiState::ShowingAlert {
            title: rejection.title().to_string(),
            message: rejection.message(root_word),
        };
        self.status = format!("Rejected: {rejection}");
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Range of word indices shown in a panel with `rows` free lines.
///
/// When the words don't all fit, one line is kept for the hidden-word notice
/// and `scroll` is clamped so the last page stays full.
fn visible_word_range(total: usize, rows: usize, scroll: usize) -> (usize, usize) {
    if total <= rows {
        return (0, total);
    }
    let window = rows.saturating_sub(1).max(1);
    let start = scroll.min(total - window);
    (start, start + window)
}

fn hidden_words_line(above: usize, below: usize) -> Option<String> {
    match (above, below) {
        (0, 0) => None,
        (0, below) => Some(format!(" +{below} more")),
        (above, 0) => Some(format!(" {above} above")),
        (above, below) => Some(format!(" {above} above, +{below} more")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_words_fit() {
        assert_eq!(visible_word_range(3, 5, 0), (0, 3));
        assert_eq!(visible_word_range(5, 5, 2), (0, 5));
        assert_eq!(hidden_words_line(0, 0), None);
    }

    #[test]
    fn test_overflow_leaves_room_for_notice() {
        // Ten words, four free lines: three words plus the notice
        assert_eq!(visible_word_range(10, 4, 0), (0, 3));
        assert_eq!(hidden_words_line(0, 7), Some(" +7 more".to_string()));
    }

    #[test]
    fn test_scroll_is_clamped_to_last_page() {
        assert_eq!(visible_word_range(10, 4, 2), (2, 5));
        assert_eq!(visible_word_range(10, 4, 100), (7, 10));
        assert_eq!(hidden_words_line(7, 0), Some(" 7 above".to_string()));
        assert_eq!(
            hidden_words_line(2, 5),
            Some(" 2 above, +5 more".to_string())
        );
    }

    #[test]
    fn test_tiny_panel_still_shows_a_word() {
        assert_eq!(visible_word_range(4, 0, 0), (0, 1));
    }
}
