//! End-to-end play through the public API.

use chrono::NaiveDate;
use daily_puzzles::boggle::{BoggleEngine, BoggleSubmission, GridPosition, LetterGrid};
use daily_puzzles::config::Config;
use daily_puzzles::game::dictionary::{boggle_words, ladder_words};
use daily_puzzles::game::seed::daily_seed;
use daily_puzzles::game::{Difficulty, GameConfig, PuzzleSession};
use daily_puzzles::ladder::{StepOutcome, StepRejection, WordLadderEngine, WordLadderPuzzle};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn cold_to_warm() -> WordLadderEngine {
    let mut engine = WordLadderEngine::with_puzzle(
        ladder_words(),
        GameConfig::word_ladder(),
        date(),
        WordLadderPuzzle::new("cold", "warm", 4, Difficulty::Medium),
    );
    engine.start_game();
    engine
}

#[test]
fn test_daily_seed_format() {
    assert_eq!(daily_seed(date()), "puzzle-2024-01-01");
}

#[test]
fn test_same_date_same_puzzles() {
    let config = Config::default();
    let a = config.boggle_engine(date());
    let b = config.boggle_engine(date());
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.possible_words(), b.possible_words());

    let a = config.word_ladder_engine(date());
    let b = config.word_ladder_engine(date());
    assert_eq!(a.puzzle(), b.puzzle());
}

#[test]
fn test_boggle_three_letter_word() {
    let grid = LetterGrid::from_rows(&["catq", "qqqq", "qqqq", "qqqq"]).unwrap();
    let mut engine = BoggleEngine::with_grid(boggle_words(), GameConfig::boggle(), date(), grid);
    engine.start_game();

    for col in 0..3 {
        engine.select_letter(GridPosition::new(0, col)).unwrap();
    }
    assert_eq!(engine.current_word(), "cat");

    let outcome = engine.submit_word();
    assert!(outcome.is_accepted());
    assert_eq!(outcome.points(), 1);
    assert_eq!(engine.session().score, 1);
    assert!(engine.current_path().is_empty());
    assert_eq!(engine.boggle_state().found_words, vec!["cat".to_string()]);

    for col in 0..3 {
        engine.select_letter(GridPosition::new(0, col)).unwrap();
    }
    assert!(matches!(
        engine.submit_word(),
        BoggleSubmission::AlreadyFound { .. }
    ));
    assert_eq!(engine.session().score, 1);
}

#[test]
fn test_boggle_full_session() {
    let mut engine = Config::default().boggle_engine(date());
    engine.start_game();
    // "giant" on the 2024-01-01 board
    for (row, col) in [(0, 2), (1, 1), (2, 1), (2, 2), (2, 3)] {
        engine.select_letter(GridPosition::new(row, col)).unwrap();
    }
    assert_eq!(engine.submit_word().points(), 2);

    for _ in 0..180 {
        engine.tick();
    }
    let result = engine.game_result().expect("finished");
    assert_eq!(result.score, 2);
    assert!(result.share_text.starts_with("Boggle 2024-01-01\nScore: 2/11\n"));
    assert!(engine.current_path().is_empty());
}

#[test]
fn test_ladder_rejects_two_letter_change() {
    let mut engine = cold_to_warm();

    assert_eq!(
        engine.submit_word("corn"),
        Err(StepRejection::NotOneLetterChange)
    );
    assert_eq!(engine.current_path().len(), 1);

    assert_eq!(engine.submit_word("cord"), Ok(StepOutcome::Advanced));
    assert_eq!(engine.current_path().len(), 2);
    assert_eq!(engine.current_word(), "cord");
}

#[test]
fn test_ladder_solve_and_share() {
    let mut engine = cold_to_warm();
    for word in ["cord", "card", "ward"] {
        assert_eq!(engine.submit_word(word), Ok(StepOutcome::Advanced));
    }
    assert_eq!(engine.submit_word("warm"), Ok(StepOutcome::Solved));
    assert!(engine.session().is_complete());

    let result = engine.word_ladder_result();
    assert_eq!(result.steps, 4);
    assert_eq!(result.score, 1500);
    assert_eq!(result.path, vec!["cold", "cord", "card", "ward", "warm"]);

    let share = engine.shareable_result().text;
    assert!(share.contains("COLD → WARM"));
    assert!(share.contains("✅ 4/4 steps"));
}

#[test]
fn test_ladder_hints_exhaust() {
    let mut engine = cold_to_warm();
    for _ in 0..3 {
        assert!(engine.get_hint().is_some());
    }
    assert!(engine.get_hint().is_none());
    assert_eq!(engine.hints_used(), 3);
    assert_eq!(engine.hints_remaining(), 0);
}
