use crate::debug_log;
use crate::error::HangmanError;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_QUESTIONS: &str = include_str!("resources/questions.txt");

const HINT_SEPARATOR: char = '|';
const COMMENT_PREFIX: char = '#';

/// A word to guess together with the hint shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    word: String,
    hint: String,
}

impl Question {
    /// Builds a question, trimming both fields and lowercasing the word.
    ///
    /// The word must be non-empty and free of inner whitespace.
    pub fn new(word: &str, hint: &str) -> Result<Self, HangmanError> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(HangmanError::EmptyWord);
        }
        if word.chars().any(char::is_whitespace) {
            return Err(HangmanError::WordHasWhitespace);
        }
        Ok(Self {
            word,
            hint: hint.trim().to_string(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }
}

/// Source of indices used to pick the next question.
pub trait IndexSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform random indices from any `rand` generator.
pub struct RandomIndex<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomIndex<rand::rngs::ThreadRng> {
    /// Draws from the process-wide thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> IndexSource for RandomIndex<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, then keeps returning 0.
///
/// Indices past the end of the remaining questions are clamped to the last one.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIndices {
    indices: Vec<usize>,
    position: usize,
}

impl ScriptedIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, len: usize) -> usize {
        let index = self.indices.get(self.position).copied().unwrap_or(0);
        self.position += 1;
        index.min(len.saturating_sub(1))
    }
}

/// Questions not yet asked in the current session.
pub struct QuestionBank {
    questions: Vec<Question>,
    picker: Box<dyn IndexSource>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>, picker: Box<dyn IndexSource>) -> Self {
        Self { questions, picker }
    }

    /// A bank drawing through the thread-local random generator.
    pub fn with_thread_rng(questions: Vec<Question>) -> Self {
        Self::new(questions, Box::new(RandomIndex::thread_local()))
    }

    pub fn has_next(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn remaining_count(&self) -> usize {
        self.questions.len()
    }

    /// Removes and returns a randomly chosen question.
    pub fn draw_random(&mut self) -> Result<Question, HangmanError> {
        if self.questions.is_empty() {
            return Err(HangmanError::EmptyBank);
        }
        let index = self.picker.next_index(self.questions.len());
        debug_log!(
            "draw_random() - picked index {} of {}",
            index,
            self.questions.len()
        );
        Ok(self.questions.remove(index))
    }
}

fn parse_question_line(line: &str, line_number: usize) -> Option<Question> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }
    let Some((word, hint)) = line.split_once(HINT_SEPARATOR) else {
        log::warn!("line {line_number}: missing '{HINT_SEPARATOR}' separator, skipped");
        return None;
    };
    match Question::new(word, hint) {
        Ok(question) => Some(question),
        Err(e) => {
            log::warn!("line {line_number}: {e}, skipped");
            None
        }
    }
}

pub fn load_questions_from_str(data: &str) -> Vec<Question> {
    data.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_question_line(line, i + 1))
        .collect()
}

pub fn load_questions_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, HangmanError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut questions = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(question) = parse_question_line(&line?, i + 1) {
            questions.push(question);
        }
    }
    Ok(questions)
}
