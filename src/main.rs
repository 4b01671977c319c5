use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{default_log_path, init_logging};
use hangman::question_bank::EMBEDDED_QUESTIONS;
use hangman::tui::TuiInterface;
use hangman::{
    HangmanError, IndexSource, Question, QuestionBank, RandomIndex, SessionSummary, game_loop,
    load_questions_from_file, load_questions_from_str,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn load_questions(path: Option<&str>) -> Result<Vec<Question>, HangmanError> {
    let questions = match path {
        Some(path) => load_questions_from_file(path)?,
        None => load_questions_from_str(EMBEDDED_QUESTIONS),
    };
    if questions.is_empty() {
        return Err(HangmanError::NoQuestions);
    }
    Ok(questions)
}

fn play(
    questions: Vec<Question>,
    picker: Box<dyn IndexSource>,
    tui: bool,
    plain: bool,
) -> Result<SessionSummary, HangmanError> {
    let bank = QuestionBank::new(questions, picker);
    if tui {
        game_loop(bank, TuiInterface::new()?)
    } else {
        let interface = CliInterface::new(io::stdin().lock(), io::stdout()).styled(!plain);
        game_loop(bank, interface)
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path, !cli.tui) {
        eprintln!("Logging disabled: {e}");
    }

    let questions = match load_questions(cli.questions_path.as_deref()) {
        Ok(questions) => questions,
        Err(e) => {
            let source = cli.questions_path.as_deref().unwrap_or("embedded list");
            log::error!("Failed to load questions from '{source}': {e}");
            eprintln!("Failed to load questions from '{source}': {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} questions", questions.len());

    let picker: Box<dyn IndexSource> = match cli.seed {
        Some(seed) => Box::new(RandomIndex::new(StdRng::seed_from_u64(seed))),
        None => Box::new(RandomIndex::thread_local()),
    };

    match play(questions, picker, cli.tui, cli.plain) {
        Ok(summary) => {
            log::info!(
                "Solved {} of {} words",
                summary.solved,
                summary.solved + summary.exhausted
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Session failed: {e}");
            eprintln!("Session failed: {e}");
            ExitCode::FAILURE
        }
    }
}
