use crate::error::HangmanError;
use crate::narrator::{Narration, Narrator};
use crate::question_bank::{Question, QuestionBank};
use crate::stage::{GameStage, GuessOutcome, normalize_guess};
use crate::{debug_log, info_log};
use std::io;

/// Why the loop is waiting for the player to acknowledge the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    /// A word was just revealed and another question follows
    BeforeNextQuestion,
    /// The last word is done and the session is about to close
    SessionOver,
}

/// The device a session talks through.
///
/// Implementations: [`crate::cli::CliInterface`] for line-based consoles,
/// [`crate::tui::TuiInterface`] for the full-screen terminal and
/// [`crate::transcript::TranscriptInterface`] for tests.
pub trait GameInterface {
    /// Blocks until the player enters a line. `Ok(None)` means the input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, narration: &Narration) -> io::Result<()>;

    /// Shows `text` in large print (the masked or revealed word).
    fn reveal_banner(&mut self, text: &str) -> io::Result<()>;

    /// Called before each new question.
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Holds the current screen until the player acknowledges it.
    /// `Ok(false)` means the input closed while waiting.
    fn pause(&mut self, _reason: Pause) -> io::Result<bool> {
        Ok(true)
    }

    /// Releases the device. Called exactly once per session.
    fn dispose(&mut self) -> io::Result<()>;
}

/// Where the session currently stands.
#[derive(Debug, Clone)]
pub enum LoopState {
    AwaitingNextQuestion,
    PlayingStage(GameStage),
    Solved(Question),
    Exhausted(Question),
    Finished,
}

/// Tally of the words played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub solved: usize,
    pub exhausted: usize,
    /// True if the input closed before the bank ran out
    pub abandoned: bool,
}

/// Runs one session: every question in the bank, one guess at a time.
pub struct GameLoop<I: GameInterface> {
    bank: QuestionBank,
    interface: I,
    narrator: Narrator,
    state: LoopState,
    summary: SessionSummary,
    disposed: bool,
}

impl<I: GameInterface> GameLoop<I> {
    pub fn new(bank: QuestionBank, interface: I) -> Self {
        Self {
            bank,
            interface,
            narrator: Narrator,
            state: LoopState::AwaitingNextQuestion,
            summary: SessionSummary::default(),
            disposed: false,
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn interface(&self) -> &I {
        &self.interface
    }

    pub fn into_interface(self) -> I {
        self.interface
    }

    /// Plays until the bank is empty or the input closes.
    ///
    /// The interface is disposed on every exit path, including errors. When
    /// both the session and the disposal fail, the session error wins.
    pub fn run(&mut self) -> Result<SessionSummary, HangmanError> {
        let played = self.play();
        let disposed = self.dispose();
        let summary = played?;
        disposed?;
        info_log!(
            "Session finished: {} solved, {} exhausted, abandoned={}",
            summary.solved,
            summary.exhausted,
            summary.abandoned
        );
        Ok(summary)
    }

    fn dispose(&mut self) -> io::Result<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        debug_log!("dispose() - releasing interface");
        self.interface.dispose()
    }

    fn play(&mut self) -> Result<SessionSummary, HangmanError> {
        self.say(self.narrator.announce_start())?;
        while !matches!(self.state, LoopState::Finished) {
            // A failing step leaves the loop in `Finished`
            let state = std::mem::replace(&mut self.state, LoopState::Finished);
            self.state = self.step(state)?;
        }
        Ok(self.summary)
    }

    fn step(&mut self, state: LoopState) -> Result<LoopState, HangmanError> {
        match state {
            LoopState::AwaitingNextQuestion => self.next_question(),
            LoopState::PlayingStage(stage) => self.take_turn(stage),
            LoopState::Solved(question) | LoopState::Exhausted(question) => {
                self.interface.reveal_banner(question.word())?;
                if self.bank.has_next() && !self.interface.pause(Pause::BeforeNextQuestion)? {
                    info_log!("Input closed between questions, ending session");
                    self.summary.abandoned = true;
                    return Ok(LoopState::Finished);
                }
                Ok(LoopState::AwaitingNextQuestion)
            }
            LoopState::Finished => Ok(LoopState::Finished),
        }
    }

    fn next_question(&mut self) -> Result<LoopState, HangmanError> {
        if !self.bank.has_next() {
            self.say(self.narrator.announce_end())?;
            self.interface.pause(Pause::SessionOver)?;
            return Ok(LoopState::Finished);
        }
        self.interface.clear()?;
        self.say(self.narrator.remaining_questions_notice(self.bank.remaining_count()))?;
        let question = self.bank.draw_random()?;
        info_log!("New stage: {} letters", question.word().chars().count());
        Ok(LoopState::PlayingStage(GameStage::new(question)))
    }

    fn take_turn(&mut self, mut stage: GameStage) -> Result<LoopState, HangmanError> {
        let card = self.narrator.present_question(&stage);
        self.say(card.hint)?;
        self.interface.reveal_banner(&card.masked)?;
        self.say(card.attempts)?;

        let Some(line) = self.interface.read_line()? else {
            info_log!("Input closed, ending session");
            self.summary.abandoned = true;
            self.say(self.narrator.on_input_closed())?;
            return Ok(LoopState::Finished);
        };
        let guess = normalize_guess(&line);
        let outcome = stage.submit_guess(&guess);
        debug_log!("take_turn() - guess '{}' -> {:?}", guess, outcome);

        let narration = match outcome {
            GuessOutcome::EmptyInput => self.narrator.on_empty_input(),
            GuessOutcome::AlreadySolved => self.narrator.on_already_solved(),
            GuessOutcome::TooLong => self.narrator.on_too_long(&guess),
            GuessOutcome::NotIncluded => self.narrator.on_not_included(&guess),
            GuessOutcome::Hit { .. } => self.narrator.on_hit(&guess),
        };
        self.say(narration)?;

        if stage.is_solved() {
            self.summary.solved += 1;
            self.say(self.narrator.on_solved(stage.question()))?;
            return Ok(LoopState::Solved(stage.into_question()));
        }
        if stage.is_exhausted() {
            self.summary.exhausted += 1;
            self.say(self.narrator.on_exhausted(stage.question()))?;
            return Ok(LoopState::Exhausted(stage.into_question()));
        }
        Ok(LoopState::PlayingStage(stage))
    }

    fn say(&mut self, narration: Narration) -> io::Result<()> {
        self.interface.write_line(&narration)
    }
}

/// Runs a whole session over `bank` through `interface`.
pub fn game_loop<I: GameInterface>(
    bank: QuestionBank,
    interface: I,
) -> Result<SessionSummary, HangmanError> {
    GameLoop::new(bank, interface).run()
}
