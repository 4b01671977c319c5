use crate::question_bank::Question;

pub const INITIAL_ATTEMPTS: u8 = 5;
pub const PLACEHOLDER: char = '_';

/// Result of classifying one guess against the current word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Nothing was entered; ask again
    EmptyInput,
    /// The word is already fully revealed
    AlreadySolved,
    /// The guess is longer than the word; no attempt is consumed
    TooLong,
    /// The guess does not occur in the word; one attempt is consumed
    NotIncluded,
    /// The guess occurs in the word `occurrences` times (non-overlapping)
    Hit { occurrences: usize },
}

/// Strips every whitespace character and lowercases the rest.
pub fn normalize_guess(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Progress on guessing a single word.
#[derive(Debug, Clone)]
pub struct GameStage {
    question: Question,
    word: Vec<char>,
    /// Same length as `word`; `Some(c)` once position is revealed
    revealed: Vec<Option<char>>,
    remaining_attempts: u8,
}

impl GameStage {
    pub fn new(question: Question) -> Self {
        let word: Vec<char> = question.word().chars().collect();
        let revealed = vec![None; word.len()];
        Self {
            question,
            word,
            revealed,
            remaining_attempts: INITIAL_ATTEMPTS,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn into_question(self) -> Question {
        self.question
    }

    pub fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    /// The word with unrevealed positions shown as [`PLACEHOLDER`].
    pub fn masked_answer(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_attempts == 0
    }

    /// Classifies `input` and updates the stage accordingly.
    ///
    /// Only [`GuessOutcome::NotIncluded`] consumes an attempt, and attempts
    /// never drop below zero. A hit reveals every non-overlapping occurrence
    /// of the guess, scanning left to right.
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        let guess: Vec<char> = normalize_guess(input).chars().collect();

        if guess.is_empty() {
            return GuessOutcome::EmptyInput;
        }
        if self.is_solved() {
            return GuessOutcome::AlreadySolved;
        }
        if guess.len() > self.word.len() {
            return GuessOutcome::TooLong;
        }

        let starts = self.occurrences(&guess);
        if starts.is_empty() {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            return GuessOutcome::NotIncluded;
        }

        for &start in &starts {
            for (slot, &c) in self.revealed[start..start + guess.len()]
                .iter_mut()
                .zip(&guess)
            {
                *slot = Some(c);
            }
        }
        GuessOutcome::Hit {
            occurrences: starts.len(),
        }
    }

    fn occurrences(&self, guess: &[char]) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut i = 0;
        while i + guess.len() <= self.word.len() {
            if self.word[i..i + guess.len()] == *guess {
                starts.push(i);
                i += guess.len();
            } else {
                i += 1;
            }
        }
        starts
    }
}
