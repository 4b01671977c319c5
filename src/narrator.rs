//! Player-facing text for every game event.
//!
//! Nothing here touches the terminal; interfaces decide how an [`Emphasis`]
//! is drawn.

use crate::question_bank::Question;
use crate::stage::GameStage;

/// How strongly a line should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Neutral,
    Success,
    Warning,
    Danger,
}

/// One line of output and its emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Narration {
    fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

/// Everything shown while waiting for a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub hint: Narration,
    /// Masked answer with a space between characters, for the banner
    pub masked: String,
    pub attempts: Narration,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator;

impl Narrator {
    pub fn announce_start(&self) -> Narration {
        Narration::new("Game Start!!", Emphasis::Neutral)
    }

    pub fn announce_end(&self) -> Narration {
        Narration::new("That's the last word. Thanks for playing!", Emphasis::Neutral)
    }

    pub fn present_question(&self, stage: &GameStage) -> QuestionCard {
        let masked = stage
            .masked_answer()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        QuestionCard {
            hint: Narration::new(
                format!("Hint: {}", stage.question().hint()),
                Emphasis::Warning,
            ),
            masked,
            attempts: Narration::new(
                format!("(Attempts left: {})", stage.remaining_attempts()),
                Emphasis::Neutral,
            ),
        }
    }

    pub fn remaining_questions_notice(&self, count: usize) -> Narration {
        let noun = if count == 1 { "question" } else { "questions" };
        Narration::new(format!("{count} {noun} left"), Emphasis::Neutral)
    }

    pub fn on_empty_input(&self) -> Narration {
        Narration::new("Please type a letter or a word.", Emphasis::Danger)
    }

    pub fn on_too_long(&self, input: &str) -> Narration {
        Narration::new(
            format!("\"{input}\" is longer than the word. Try something shorter."),
            Emphasis::Danger,
        )
    }

    pub fn on_not_included(&self, input: &str) -> Narration {
        Narration::new(format!("\"{input}\" is not in the word."), Emphasis::Danger)
    }

    pub fn on_hit(&self, input: &str) -> Narration {
        Narration::new(format!("\"{input}\" is a hit!"), Emphasis::Success)
    }

    pub fn on_already_solved(&self) -> Narration {
        Narration::new("This word is already solved.", Emphasis::Neutral)
    }

    pub fn on_solved(&self, question: &Question) -> Narration {
        Narration::new(
            format!("Correct! The word was \"{}\".", question.word()),
            Emphasis::Success,
        )
    }

    pub fn on_exhausted(&self, question: &Question) -> Narration {
        Narration::new(
            format!("Out of attempts. The answer was \"{}\".", question.word()),
            Emphasis::Neutral,
        )
    }

    pub fn on_input_closed(&self) -> Narration {
        Narration::new("Input closed. See you next time!", Emphasis::Neutral)
    }
}
