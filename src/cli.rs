use crate::game_state::{GameInterface, Pause};
use crate::narrator::{Emphasis, Narration};
use crate::stage::normalize_guess;
use clap::Parser;
use crossterm::style::{Color, Stylize};
use crossterm::{cursor, queue, terminal};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Guess a letter or a word: ";
const CONTINUE_PROMPT: &str = "Press ENTER for the next word...";

/// Hangman: guess the word from its hint
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a question file, one `word|hint` pair per line
    #[arg(short = 'i', long = "input")]
    pub questions_path: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Disable colors and screen clearing
    #[arg(long)]
    pub plain: bool,

    /// Seed for the question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn emphasis_color(emphasis: Emphasis) -> Color {
    match emphasis {
        Emphasis::Neutral => Color::White,
        Emphasis::Success => Color::Green,
        Emphasis::Warning => Color::Yellow,
        Emphasis::Danger => Color::Red,
    }
}

/// The banner text uppercased inside a double-line frame.
pub fn banner_lines(text: &str) -> Vec<String> {
    let body = text.to_uppercase();
    let border = "═".repeat(body.chars().count() + 4);
    vec![
        format!("╔{border}╗"),
        format!("║  {body}  ║"),
        format!("╚{border}╝"),
    ]
}

/// Line-based console implementation of the GameInterface trait.
///
/// Plain by default; [`CliInterface::styled`] turns on colors and clears the
/// screen between questions, waiting for ENTER before each clear.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    #[must_use]
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.writer, "{PROMPT}")?;
        self.writer.flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(normalize_guess(&input)))
    }

    fn write_line(&mut self, narration: &Narration) -> io::Result<()> {
        if self.styled {
            let color = emphasis_color(narration.emphasis);
            writeln!(self.writer, "{}\n", narration.text.as_str().with(color))
        } else {
            writeln!(self.writer, "{}\n", narration.text)
        }
    }

    fn reveal_banner(&mut self, text: &str) -> io::Result<()> {
        for line in banner_lines(text) {
            if self.styled {
                writeln!(self.writer, "{}", line.as_str().bold())?;
            } else {
                writeln!(self.writer, "{line}")?;
            }
        }
        writeln!(self.writer)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.styled {
            queue!(
                self.writer,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        Ok(())
    }

    fn pause(&mut self, reason: Pause) -> io::Result<bool> {
        if !self.styled || reason == Pause::SessionOver {
            return Ok(true);
        }
        write!(self.writer, "{CONTINUE_PROMPT}")?;
        self.writer.flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            writeln!(self.writer)?;
            return Ok(false);
        }
        Ok(true)
    }

    fn dispose(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn interface(input: &str) -> CliInterface<Cursor<&str>, Vec<u8>> {
        CliInterface::new(Cursor::new(input), Vec::new())
    }

    fn output(cli: &CliInterface<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(cli.writer().clone()).unwrap()
    }

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        assert_eq!(cli.questions_path, None);
        assert!(!cli.tui);
        assert!(!cli.plain);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "hangman", "-i", "words.txt", "--tui", "--seed", "42", "--log-file", "/tmp/h.log",
        ])
        .unwrap();
        assert_eq!(cli.questions_path, Some("words.txt".to_string()));
        assert!(cli.tui);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/h.log")));
    }

    #[test]
    fn test_read_line_normalizes() {
        let mut cli = interface("  U n \n");
        assert_eq!(cli.read_line().unwrap(), Some("un".to_string()));
        assert!(output(&cli).contains(PROMPT));
    }

    #[test]
    fn test_read_line_blank_is_empty_string() {
        let mut cli = interface("\n");
        assert_eq!(cli.read_line().unwrap(), Some(String::new()));
    }

    #[test]
    fn test_read_line_eof_is_closed() {
        let mut cli = interface("");
        assert_eq!(cli.read_line().unwrap(), None);
    }

    #[test]
    fn test_plain_write_line_has_no_escape_codes() {
        let mut cli = interface("");
        cli.write_line(&Narration {
            text: "\"n\" is a hit!".to_string(),
            emphasis: Emphasis::Success,
        })
        .unwrap();
        let out = output(&cli);
        assert!(out.starts_with("\"n\" is a hit!"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_styled_write_line_is_colored() {
        let mut cli = interface("").styled(true);
        cli.write_line(&Narration {
            text: "miss".to_string(),
            emphasis: Emphasis::Danger,
        })
        .unwrap();
        let out = output(&cli);
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("miss"));
    }

    #[test]
    fn test_plain_clear_writes_nothing() {
        let mut cli = interface("");
        cli.clear().unwrap();
        assert!(output(&cli).is_empty());
    }

    #[test]
    fn test_styled_pause_waits_for_enter() {
        let mut cli = interface("\nn\n").styled(true);
        assert!(cli.pause(Pause::BeforeNextQuestion).unwrap());
        assert!(output(&cli).contains(CONTINUE_PROMPT));
        // The guess after the pause is still there to read
        assert_eq!(cli.read_line().unwrap(), Some("n".to_string()));
    }

    #[test]
    fn test_styled_pause_reports_closed_input() {
        let mut cli = interface("").styled(true);
        assert!(!cli.pause(Pause::BeforeNextQuestion).unwrap());
    }

    #[test]
    fn test_plain_and_final_pauses_do_not_read() {
        let mut plain = interface("n\n");
        assert!(plain.pause(Pause::BeforeNextQuestion).unwrap());
        assert_eq!(plain.read_line().unwrap(), Some("n".to_string()));

        let mut styled = interface("n\n").styled(true);
        assert!(styled.pause(Pause::SessionOver).unwrap());
        assert_eq!(styled.read_line().unwrap(), Some("n".to_string()));
    }

    #[test]
    fn test_banner_lines() {
        let lines = banner_lines("_ n _ _ n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "║  _ N _ _ N  ║");
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[2].chars().count(), lines[1].chars().count());
    }
}
