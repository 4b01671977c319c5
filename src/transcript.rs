//! A scripted [`GameInterface`] that records everything it is asked to show.

use crate::game_state::{GameInterface, Pause};
use crate::narrator::Narration;
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Line(Narration),
    Banner(String),
    Prompted(Option<String>),
    Cleared,
    Paused(Pause),
    Disposed,
}

/// Feeds canned input lines and keeps a log of every call.
///
/// Once the script runs out, `read_line` reports the input as closed.
#[derive(Debug, Default)]
pub struct TranscriptInterface {
    script: VecDeque<String>,
    events: Vec<Event>,
    reads_before_failure: Option<usize>,
    close_on_pause: bool,
}

impl TranscriptInterface {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            script: lines.iter().map(|l| (*l).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Makes every read after the first `reads` fail with an I/O error.
    #[must_use]
    pub fn fail_reads_after(mut self, reads: usize) -> Self {
        self.reads_before_failure = Some(reads);
        self
    }

    /// Reports the input as closed whenever the loop pauses.
    #[must_use]
    pub fn close_on_pause(mut self) -> Self {
        self.close_on_pause = true;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn narrations(&self) -> Vec<Narration> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Line(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn banners(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Banner(b) => Some(b.clone()),
                _ => None,
            })
            .collect()
    }

    /// True if any narration has exactly this text.
    pub fn contains(&self, text: &str) -> bool {
        self.narrations().iter().any(|n| n.text == text)
    }

    pub fn clear_count(&self) -> usize {
        self.events.iter().filter(|e| **e == Event::Cleared).count()
    }

    pub fn dispose_count(&self) -> usize {
        self.events.iter().filter(|e| **e == Event::Disposed).count()
    }
}

impl GameInterface for TranscriptInterface {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(remaining) = self.reads_before_failure.as_mut() {
            if *remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "input device failed"));
            }
            *remaining -= 1;
        }
        let line = self.script.pop_front();
        self.events.push(Event::Prompted(line.clone()));
        Ok(line)
    }

    fn write_line(&mut self, narration: &Narration) -> io::Result<()> {
        self.events.push(Event::Line(narration.clone()));
        Ok(())
    }

    fn reveal_banner(&mut self, text: &str) -> io::Result<()> {
        self.events.push(Event::Banner(text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(Event::Cleared);
        Ok(())
    }

    fn pause(&mut self, reason: Pause) -> io::Result<bool> {
        self.events.push(Event::Paused(reason));
        Ok(!self.close_on_pause)
    }

    fn dispose(&mut self) -> io::Result<()> {
        self.events.push(Event::Disposed);
        Ok(())
    }
}
