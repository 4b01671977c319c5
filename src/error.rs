use std::io;
use thiserror::Error;

/// Errors that end a hangman session or prevent one from starting.
///
/// Guess classification is not an error; see [`crate::stage::GuessOutcome`].
#[derive(Debug, Error)]
pub enum HangmanError {
    /// A question was drawn from a bank with nothing left in it
    #[error("no questions left to draw")]
    EmptyBank,
    #[error("question word must not be empty")]
    EmptyWord,
    /// A question word with whitespace inside it
    #[error("question word must not contain whitespace")]
    WordHasWhitespace,
    #[error("no questions were loaded")]
    NoQuestions,
    #[error(transparent)]
    Io(#[from] io::Error),
}
