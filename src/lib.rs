// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod narrator;
pub mod question_bank;
pub mod stage;
pub mod transcript;
pub mod tui;

// Re-export commonly used items for easier testing
pub use error::HangmanError;
pub use game_state::{GameInterface, GameLoop, LoopState, SessionSummary, game_loop};
pub use narrator::{Emphasis, Narration, Narrator};
pub use question_bank::{
    IndexSource, Question, QuestionBank, RandomIndex, ScriptedIndices, load_questions_from_file,
    load_questions_from_str,
};
pub use stage::{GameStage, GuessOutcome, INITIAL_ATTEMPTS};
