//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides a full-screen interface using Ratatui.
//!
//! # Architecture
//! - `TuiInterface`: owns the terminal, renders the screen and collects input lines
//!
//! # Input
//! Characters are buffered until ENTER. ESC, Ctrl-C and Ctrl-D close the
//! input, which ends the session.

use crate::game_state::{GameInterface, Pause};
use crate::narrator::{Emphasis, Narration};
use crate::stage::normalize_guess;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LEN: usize = 32;
const MAX_TRANSCRIPT_LINES: usize = 200;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const BANNER_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const INPUT_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

fn emphasis_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Neutral => Style::new().fg(Color::White),
        Emphasis::Success => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        Emphasis::Warning => Style::new().fg(Color::Yellow),
        Emphasis::Danger => Style::new().fg(Color::Red),
    }
}

/// What a key press means for the line being typed.
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Submit(String),
    Close,
    Edited,
    Ignored,
}

/// Buffers typed characters into a guess line.
#[derive(Debug, Default)]
struct LineEditor {
    buffer: String,
}

impl LineEditor {
    fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => KeyAction::Close,
            KeyCode::Char('c' | 'd') if ctrl => KeyAction::Close,
            KeyCode::Enter => KeyAction::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Backspace if !self.buffer.is_empty() => {
                self.buffer.pop();
                KeyAction::Edited
            }
            KeyCode::Char(c)
                if !ctrl
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && !c.is_control()
                    && c != '\u{FFFD}'
                    && self.buffer.chars().count() < MAX_INPUT_LEN =>
            {
                self.buffer.push(c);
                KeyAction::Edited
            }
            _ => KeyAction::Ignored,
        }
    }
}

/// Calls `rollback` if `result` is an error, then passes it through.
fn or_rollback<T>(result: io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    result.inspect_err(|_| rollback())
}

/// Best-effort restore used before a `TuiInterface` exists.
fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    let _ = disable_raw_mode();
}

/// Which key help the bottom line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    Guess,
    Continue,
    Exit,
}

/// Context for rendering the UI - groups related parameters.
struct RenderContext<'a> {
    banner: &'a str,
    transcript: &'a [Narration],
    input: &'a str,
    status: &'a str,
    prompt: Prompt,
}

/// Full-screen implementation of the GameInterface trait.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    editor: LineEditor,
    banner: String,
    transcript: Vec<Narration>,
    status: String,
    prompt: Prompt,
    /// False once the player asked to quit
    input_open: bool,
    /// True while raw mode and the alternate screen are active
    active: bool,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let terminal = or_rollback(Self::enter_screen(), restore_terminal)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            editor: LineEditor::default(),
            banner: String::new(),
            transcript: Vec::new(),
            status: "Ready".to_string(),
            prompt: Prompt::Guess,
            input_open: true,
            active: true,
        })
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Restores the terminal. Safe to call more than once.
    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        info_log!("Terminal restored");
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            banner: &self.banner,
            transcript: &self.transcript,
            input: &self.editor.buffer,
            status: &self.status,
            prompt: self.prompt,
        };
        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Banner
                Constraint::Min(6),    // Transcript
                Constraint::Length(3), // Input
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_banner(f, chunks[1], ctx.banner);
        Self::render_transcript(f, chunks[2], ctx.transcript);
        Self::render_input(f, chunks[3], ctx.input, ctx.status);
        Self::render_instructions(f, chunks[4], ctx.prompt);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_banner(f: &mut Frame, area: Rect, banner: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(banner.to_uppercase(), BANNER_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_transcript(f: &mut Frame, area: Rect, transcript: &[Narration]) {
        let block = Block::default().title("Messages").borders(Borders::ALL);
        let visible = block.inner(area).height as usize;
        let skip = transcript.len().saturating_sub(visible);
        let lines: Vec<Line> = transcript
            .iter()
            .skip(skip)
            .map(|n| Line::from(Span::styled(n.text.as_str(), emphasis_style(n.emphasis))))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, input: &str, status: &str) {
        let line = Line::from(vec![
            Span::raw("> "),
            Span::styled(format!("{input}_"), INPUT_STYLE),
        ]);
        let paragraph = Paragraph::new(line)
            .block(Block::default().title(status.to_string()).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, prompt: Prompt) {
        let text = match prompt {
            Prompt::Guess => "Type a letter or a word | ENTER: Guess | BACKSPACE: Edit | ESC: Quit",
            Prompt::Continue => "ENTER: Next word | ESC: Quit",
            Prompt::Exit => "Press any key to exit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Waits up to one poll interval for a key press.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn push_transcript(&mut self, narration: &Narration) {
        self.transcript.push(narration.clone());
        if self.transcript.len() > MAX_TRANSCRIPT_LINES {
            let excess = self.transcript.len() - MAX_TRANSCRIPT_LINES;
            self.transcript.drain(..excess);
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if !self.input_open {
            return Ok(None);
        }
        self.status = "Your guess".to_string();
        self.prompt = Prompt::Guess;
        loop {
            self.draw()?;
            let Some(key) = self.next_key()? else {
                continue;
            };
            match self.editor.handle_key(key) {
                KeyAction::Submit(line) => {
                    info_log!("TuiInterface::read_line() - Submitted '{}'", line);
                    return Ok(Some(normalize_guess(&line)));
                }
                KeyAction::Close => {
                    info_log!("TuiInterface::read_line() - Input closed by player");
                    self.input_open = false;
                    return Ok(None);
                }
                KeyAction::Edited | KeyAction::Ignored => {}
            }
        }
    }

    fn write_line(&mut self, narration: &Narration) -> io::Result<()> {
        self.push_transcript(narration);
        self.draw()
    }

    fn reveal_banner(&mut self, text: &str) -> io::Result<()> {
        self.banner = text.to_string();
        self.draw()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.transcript.clear();
        self.banner.clear();
        self.draw()
    }

    fn pause(&mut self, reason: Pause) -> io::Result<bool> {
        if !self.input_open {
            return Ok(false);
        }
        match reason {
            Pause::BeforeNextQuestion => {
                self.status = "Word revealed".to_string();
                self.prompt = Prompt::Continue;
                loop {
                    self.draw()?;
                    let Some(key) = self.next_key()? else {
                        continue;
                    };
                    match self.editor.handle_key(key) {
                        KeyAction::Submit(_) => return Ok(true),
                        KeyAction::Close => {
                            info_log!("TuiInterface::pause() - Input closed by player");
                            self.input_open = false;
                            return Ok(false);
                        }
                        KeyAction::Edited | KeyAction::Ignored => self.editor.buffer.clear(),
                    }
                }
            }
            Pause::SessionOver => {
                self.status = "Session over".to_string();
                self.prompt = Prompt::Exit;
                self.draw()?;
                while self.next_key()?.is_none() {}
                Ok(true)
            }
        }
    }

    fn dispose(&mut self) -> io::Result<()> {
        self.cleanup()
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
