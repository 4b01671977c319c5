// Integration tests for the hangman application
// These tests drive whole sessions through the public interfaces

use hangman::cli::CliInterface;
use hangman::transcript::TranscriptInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

fn scripted_bank(pairs: &[(&str, &str)], indices: Vec<usize>) -> QuestionBank {
    let questions = pairs
        .iter()
        .map(|(word, hint)| Question::new(word, hint).unwrap())
        .collect();
    QuestionBank::new(questions, Box::new(ScriptedIndices::new(indices)))
}

#[test]
fn test_end_to_end_console_session() {
    // Two words: "union" solved letter by letter, "cat" lost
    let bank = scripted_bank(&[("union", "not split"), ("cat", "meows")], vec![0, 0]);
    let input = "n\nz\nunion\nx\ny\nz\nq\nw\n";
    let interface = CliInterface::new(Cursor::new(input), Vec::new());

    let mut game = GameLoop::new(bank, interface);
    let summary = game.run().unwrap();
    assert_eq!(
        summary,
        SessionSummary {
            solved: 1,
            exhausted: 1,
            abandoned: false
        }
    );

    let output = String::from_utf8(game.into_interface().writer().clone()).unwrap();
    assert!(output.contains("Game Start!!"));
    assert!(output.contains("2 questions left"));
    assert!(output.contains("Hint: not split"));
    assert!(output.contains("║  _ N _ _ N  ║"));
    assert!(output.contains("\"n\" is a hit!"));
    assert!(output.contains("\"z\" is not in the word."));
    assert!(output.contains("(Attempts left: 4)"));
    assert!(output.contains("Correct! The word was \"union\"."));
    assert!(output.contains("║  UNION  ║"));
    assert!(output.contains("1 question left"));
    assert!(output.contains("Out of attempts. The answer was \"cat\"."));
    assert!(output.contains("║  CAT  ║"));
    assert!(output.contains("That's the last word. Thanks for playing!"));
}

#[test]
fn test_console_eof_ends_session() {
    let bank = scripted_bank(&[("union", "not split")], vec![]);
    let interface = CliInterface::new(Cursor::new("n\n"), Vec::new());

    let summary = game_loop(bank, interface).unwrap();
    assert!(summary.abandoned);
    assert_eq!(summary.solved, 0);
}

#[test]
fn test_console_input_is_normalized() {
    let bank = scripted_bank(&[("union", "not split")], vec![]);
    let interface = CliInterface::new(Cursor::new("  UN ION \n"), Vec::new());

    let summary = game_loop(bank, interface).unwrap();
    assert_eq!(summary.solved, 1);
}

#[test]
fn test_every_question_is_played_once() {
    let words = ["cat", "dog", "owl", "emu", "yak"];
    let pairs: Vec<(&str, &str)> = words.iter().map(|w| (*w, "animal")).collect();
    let questions = pairs
        .iter()
        .map(|(w, h)| Question::new(w, h).unwrap())
        .collect();
    let bank = QuestionBank::new(
        questions,
        Box::new(RandomIndex::new(StdRng::seed_from_u64(2024))),
    );
    // Guessing every word in turn solves whichever one is current
    let lines: Vec<&str> = words
        .iter()
        .copied()
        .cycle()
        .take(words.len() * words.len())
        .collect();

    let mut game = GameLoop::new(bank, TranscriptInterface::new(&lines));
    let summary = game.run().unwrap();
    assert_eq!(summary.solved, words.len());
    assert_eq!(summary.exhausted, 0);

    let mut revealed: Vec<String> = game
        .into_interface()
        .banners()
        .into_iter()
        .filter(|b| !b.contains('_'))
        .collect();
    revealed.sort();
    let mut expected: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    expected.sort();
    assert_eq!(revealed, expected);
}

#[test]
fn test_failing_device_is_disposed() {
    let bank = scripted_bank(&[("cat", "meows")], vec![]);
    let interface = TranscriptInterface::new(&["x", "y"]).fail_reads_after(0);

    let mut game = GameLoop::new(bank, interface);
    assert!(matches!(game.run(), Err(HangmanError::Io(_))));
    assert_eq!(game.interface().dispose_count(), 1);
}

#[test]
fn test_custom_question_file_to_game() {
    // Integration test: Load custom question file -> play game
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("hangman_test_questions.txt");

    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# test questions").unwrap();
        writeln!(file, "Rust|a language and a kind of corrosion").unwrap();
        writeln!(file, "malformed line").unwrap();
    }

    let questions = load_questions_from_file(&path).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].word(), "rust");

    let bank = QuestionBank::new(questions, Box::new(ScriptedIndices::default()));
    let interface = CliInterface::new(Cursor::new("r\nust\n"), Vec::new());
    let summary = game_loop(bank, interface).unwrap();
    assert_eq!(summary.solved, 1);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_question_file_is_an_io_error() {
    let result = load_questions_from_file("/definitely/not/here/questions.txt");
    assert!(matches!(result, Err(HangmanError::Io(_))));
}

#[test]
fn test_too_long_guesses_never_exhaust() {
    let bank = scripted_bank(&[("ox", "pulls carts")], vec![]);
    let lines = ["oxen"; 10];
    let interface = TranscriptInterface::new(&lines);

    let mut game = GameLoop::new(bank, interface);
    let summary = game.run().unwrap();
    assert!(summary.abandoned);
    assert_eq!(summary.exhausted, 0);
    let transcript = game.into_interface();
    assert!(transcript.contains("(Attempts left: 5)"));
    assert!(!transcript.contains("(Attempts left: 4)"));
}
