//! Boggle session engine
//!
//! Holds one board for the session's lifetime plus the player's in-progress
//! path. The full solution set is computed once per board so efficiency and
//! metadata never re-run the search.

use super::grid::{GridPosition, LetterCell, LetterGrid};
use super::search::{find_all_words, total_score, word_score, MIN_WORD_LENGTH};
use crate::game::dictionary::{boggle_words, Dictionary};
use crate::game::seed::daily_seed;
use crate::game::share::SHARE_FOOTER;
use crate::game::{
    Difficulty, GameConfig, GameKind, PuzzleMetadata, PuzzleSession, SessionState,
    ShareableResult,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

/// Why a cell selection was refused. The path is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is not in progress")]
    NotPlaying,
    #[error("{0} is off the board")]
    OutOfBounds(GridPosition),
    #[error("{0} is already in the current word")]
    AlreadyInPath(GridPosition),
    #[error("{to} does not touch {from}")]
    NotAdjacent { from: GridPosition, to: GridPosition },
}

/// Outcome of submitting the current path as a word.
///
/// Every outcome clears the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoggleSubmission {
    /// Word added to the found list
    Accepted { word: String, points: u32 },
    /// Game not in progress
    NotPlaying,
    /// Fewer letters than the minimum
    TooShort { length: usize },
    /// Already credited this session
    AlreadyFound { word: String },
    /// Not in the dictionary
    NotInDictionary { word: String },
}

impl BoggleSubmission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BoggleSubmission::Accepted { .. })
    }

    /// Points awarded, 0 for any rejection
    pub fn points(&self) -> u32 {
        match self {
            BoggleSubmission::Accepted { points, .. } => *points,
            _ => 0,
        }
    }

    /// Short line for the status bar
    pub fn message(&self) -> String {
        match self {
            BoggleSubmission::Accepted { word, points } => {
                format!("{} +{}", word.to_uppercase(), points)
            }
            BoggleSubmission::NotPlaying => "Game not in progress".to_string(),
            BoggleSubmission::TooShort { length } => {
                format!("Too short ({} letters, need {}+)", length, MIN_WORD_LENGTH)
            }
            BoggleSubmission::AlreadyFound { word } => {
                format!("Already found {}", word.to_uppercase())
            }
            BoggleSubmission::NotInDictionary { word } => {
                format!("{} is not in the dictionary", word.to_uppercase())
            }
        }
    }
}

/// A credited word with the cells the player traced for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<GridPosition>,
    pub score: u32,
    pub length: usize,
}

/// Read-only snapshot for a renderer. Owns all of its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoggleState {
    pub grid: Vec<Vec<LetterCell>>,
    pub current_path: Vec<GridPosition>,
    pub found_words: Vec<String>,
    pub current_word: String,
    pub score: u32,
    pub time_remaining: u32,
    pub is_playing: bool,
    pub is_complete: bool,
}

/// End-of-session summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoggleResult {
    pub found_words: Vec<FoundWord>,
    pub total_score: u32,
    pub possible_words: Vec<String>,
    pub total_possible_score: u32,
    pub duration_ms: i64,
    /// Percentage of the possible score achieved
    pub efficiency: f64,
}

pub struct BoggleEngine {
    dictionary: Arc<dyn Dictionary>,
    config: GameConfig,
    session: SessionState,
    puzzle_date: NaiveDate,
    /// `None` for caller-supplied boards
    seed: Option<String>,
    grid: LetterGrid,
    path: Vec<GridPosition>,
    found_words: Vec<FoundWord>,
    found_set: HashSet<String>,
    possible_words: Vec<String>,
    total_possible_score: u32,
}

impl BoggleEngine {
    /// Engine for the daily board of `date`.
    pub fn new(dictionary: Arc<dyn Dictionary>, config: GameConfig, date: NaiveDate) -> Self {
        let seed = daily_seed(date);
        let grid = LetterGrid::generate(&seed);
        let mut engine = Self::build(dictionary, config, date, grid);
        engine.seed = Some(seed);
        engine
    }

    /// Daily board with the embedded dictionary and default settings.
    pub fn daily(date: NaiveDate) -> Self {
        Self::new(boggle_words(), GameConfig::boggle(), date)
    }

    /// Engine for a fixed board. Resetting keeps the same board.
    pub fn with_grid(
        dictionary: Arc<dyn Dictionary>,
        config: GameConfig,
        date: NaiveDate,
        grid: LetterGrid,
    ) -> Self {
        Self::build(dictionary, config, date, grid)
    }

    fn build(
        dictionary: Arc<dyn Dictionary>,
        config: GameConfig,
        date: NaiveDate,
        grid: LetterGrid,
    ) -> Self {
        let mut engine = BoggleEngine {
            dictionary,
            session: SessionState::new(config.time_limit),
            config,
            puzzle_date: date,
            seed: None,
            grid,
            path: Vec::new(),
            found_words: Vec::new(),
            found_set: HashSet::new(),
            possible_words: Vec::new(),
            total_possible_score: 0,
        };
        engine.solve();
        engine
    }

    fn solve(&mut self) {
        let words = find_all_words(&self.grid, self.dictionary.as_ref());
        self.total_possible_score = total_score(&words);
        self.possible_words = words.into_iter().collect();
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_path(&self) -> &[GridPosition] {
        &self.path
    }

    /// Letters along the current path, lowercase.
    pub fn current_word(&self) -> String {
        self.grid.word_for_path(&self.path)
    }

    /// Every word on the board, sorted.
    pub fn possible_words(&self) -> &[String] {
        &self.possible_words
    }

    pub fn total_possible_score(&self) -> u32 {
        self.total_possible_score
    }

    /// Whether `position` may extend the current path.
    pub fn validate_move(&self, position: GridPosition) -> Result<(), MoveError> {
        if !position.in_bounds() {
            return Err(MoveError::OutOfBounds(position));
        }
        let Some(last) = self.path.last() else {
            return Ok(());
        };
        if self.path.contains(&position) {
            return Err(MoveError::AlreadyInPath(position));
        }
        if !last.is_adjacent(&position) {
            return Err(MoveError::NotAdjacent {
                from: *last,
                to: position,
            });
        }
        Ok(())
    }

    /// Extend the path with a cell.
    #[instrument(skip(self))]
    pub fn select_letter(&mut self, position: GridPosition) -> Result<(), MoveError> {
        if !self.session.is_playing() {
            return Err(MoveError::NotPlaying);
        }
        if let Err(e) = self.validate_move(position) {
            debug!(error = %e, "selection rejected");
            return Err(e);
        }
        self.path.push(position);
        Ok(())
    }

    /// Drop the last cell of the path, if any.
    pub fn deselect_last_letter(&mut self) -> Option<GridPosition> {
        self.path.pop()
    }

    pub fn clear_current_path(&mut self) {
        self.path.clear();
    }

    /// Try to credit the current path as a word.
    #[instrument(skip(self))]
    pub fn submit_word(&mut self) -> BoggleSubmission {
        let path = std::mem::take(&mut self.path);
        let word = self.grid.word_for_path(&path);

        let outcome = if !self.session.is_playing() {
            BoggleSubmission::NotPlaying
        } else if word.chars().count() < MIN_WORD_LENGTH {
            BoggleSubmission::TooShort {
                length: word.chars().count(),
            }
        } else if self.found_set.contains(&word) {
            BoggleSubmission::AlreadyFound { word }
        } else if !self.dictionary.is_valid_word(&word) {
            BoggleSubmission::NotInDictionary { word }
        } else {
            let points = word_score(&word);
            self.session.score += points;
            self.found_set.insert(word.clone());
            self.found_words.push(FoundWord {
                length: word.chars().count(),
                word: word.clone(),
                path,
                score: points,
            });
            BoggleSubmission::Accepted { word, points }
        };

        debug!(?outcome, "word submitted");
        outcome
    }

    /// Credited words in the order they were found.
    pub fn found_words(&self) -> Vec<FoundWord> {
        self.found_words.clone()
    }

    pub fn boggle_state(&self) -> BoggleState {
        BoggleState {
            grid: self.grid.annotate(&self.path),
            current_path: self.path.clone(),
            found_words: self.found_words.iter().map(|f| f.word.clone()).collect(),
            current_word: self.current_word(),
            score: self.session.score,
            time_remaining: self.session.time_remaining,
            is_playing: self.session.is_playing(),
            is_complete: self.session.is_complete(),
        }
    }

    pub fn boggle_result(&self) -> BoggleResult {
        BoggleResult {
            found_words: self.found_words(),
            total_score: self.session.score,
            possible_words: self.possible_words.clone(),
            total_possible_score: self.total_possible_score,
            duration_ms: self.session.duration_ms(),
            efficiency: self.efficiency(),
        }
    }

    fn efficiency(&self) -> f64 {
        if self.total_possible_score == 0 {
            0.0
        } else {
            self.session.score as f64 / self.total_possible_score as f64 * 100.0
        }
    }
}

/// Medal row for an efficiency percentage.
pub fn efficiency_emoji(efficiency: f64) -> &'static str {
    if efficiency >= 90.0 {
        "🏆🏆🏆🏆"
    } else if efficiency >= 75.0 {
        "🥇🥇🥇⭐"
    } else if efficiency >= 60.0 {
        "🥈🥈⭐⭐"
    } else if efficiency >= 45.0 {
        "🥉⭐⭐⭐"
    } else if efficiency >= 30.0 {
        "👍⭐⭐⭐"
    } else {
        "💪💪💪💪"
    }
}

impl PuzzleSession for BoggleEngine {
    fn kind(&self) -> GameKind {
        GameKind::Boggle
    }

    fn session(&self) -> &SessionState {
        &self.session
    }

    fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    fn puzzle_date(&self) -> NaiveDate {
        self.puzzle_date
    }

    #[instrument(skip(self))]
    fn generate_puzzle(&mut self, seed: &str) {
        self.grid = LetterGrid::generate(seed);
        self.seed = Some(seed.to_string());
        self.path.clear();
        self.solve();
        debug!(words = self.possible_words.len(), "board generated");
    }

    fn calculate_score(&self) -> u32 {
        self.session.score
    }

    fn shareable_result(&self) -> ShareableResult {
        let result = self.boggle_result();
        let date = self.puzzle_date.format("%Y-%m-%d").to_string();
        let emoji_grid = efficiency_emoji(result.efficiency).to_string();
        let text = format!(
            "Boggle {}\nScore: {}/{}\nWords found: {}/{}\nEfficiency: {}%\n\n{}\n\n{}",
            date,
            result.total_score,
            result.total_possible_score,
            result.found_words.len(),
            result.possible_words.len(),
            result.efficiency.round(),
            emoji_grid,
            SHARE_FOOTER
        );
        ShareableResult {
            game_type: GameKind::Boggle.label().to_string(),
            date,
            score: result.total_score,
            max_score: result.total_possible_score,
            emoji_grid: Some(emoji_grid),
            text,
        }
    }

    fn puzzle_metadata(&self) -> PuzzleMetadata {
        let total = self.total_possible_score;
        let difficulty = if total < 50 {
            Difficulty::Easy
        } else if total > 100 {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        };
        PuzzleMetadata {
            date: self.puzzle_date.format("%Y-%m-%d").to_string(),
            difficulty,
            expected_score: (total as f64 * 0.4).round() as u32,
            total_possible_score: total,
        }
    }

    fn reset_game(&mut self) {
        self.session = SessionState::new(self.config.time_limit);
        self.path.clear();
        self.found_words.clear();
        self.found_set.clear();
        if let Some(seed) = self.seed.clone() {
            self.generate_puzzle(&seed);
        }
    }

    fn on_game_end(&mut self) {
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::WordList;
    use crate::game::SessionPhase;
    use rand::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn p(row: usize, col: usize) -> GridPosition {
        GridPosition::new(row, col)
    }

    /// "cat" across the top row, nothing else useful
    fn cat_engine() -> BoggleEngine {
        let grid = LetterGrid::from_rows(&["catz", "zzzz", "zzzz", "zzzz"]).unwrap();
        BoggleEngine::with_grid(boggle_words(), GameConfig::boggle(), date(), grid)
    }

    fn spell(engine: &mut BoggleEngine, cells: &[GridPosition]) {
        for cell in cells {
            engine.select_letter(*cell).unwrap();
        }
    }

    #[test]
    fn test_selection_requires_playing() {
        let mut engine = cat_engine();
        assert_eq!(engine.select_letter(p(0, 0)), Err(MoveError::NotPlaying));
        assert!(engine.current_path().is_empty());
    }

    #[test]
    fn test_submit_cat() {
        let mut engine = cat_engine();
        engine.start_game();
        spell(&mut engine, &[p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(engine.current_word(), "cat");

        let outcome = engine.submit_word();
        assert_eq!(
            outcome,
            BoggleSubmission::Accepted {
                word: "cat".to_string(),
                points: 1
            }
        );
        assert!(engine.current_path().is_empty());
        assert_eq!(engine.boggle_state().score, 1);
        assert_eq!(engine.boggle_state().found_words, vec!["cat".to_string()]);
        assert_eq!(engine.found_words()[0].path, vec![p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn test_no_double_credit() {
        let mut engine = cat_engine();
        engine.start_game();
        spell(&mut engine, &[p(0, 0), p(0, 1), p(0, 2)]);
        assert!(engine.submit_word().is_accepted());
        spell(&mut engine, &[p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(
            engine.submit_word(),
            BoggleSubmission::AlreadyFound {
                word: "cat".to_string()
            }
        );
        assert_eq!(engine.found_words().len(), 1);
        assert_eq!(engine.calculate_score(), 1);
        assert!(engine.current_path().is_empty());
    }

    #[test]
    fn test_rejected_moves_leave_path() {
        let mut engine = cat_engine();
        engine.start_game();
        spell(&mut engine, &[p(0, 0), p(0, 1)]);

        assert_eq!(
            engine.select_letter(p(0, 3)),
            Err(MoveError::NotAdjacent {
                from: p(0, 1),
                to: p(0, 3)
            })
        );
        assert_eq!(engine.select_letter(p(0, 0)), Err(MoveError::AlreadyInPath(p(0, 0))));
        assert_eq!(engine.select_letter(p(4, 0)), Err(MoveError::OutOfBounds(p(4, 0))));
        assert_eq!(engine.current_path(), &[p(0, 0), p(0, 1)]);
    }

    #[test]
    fn test_first_selection_anywhere() {
        let mut engine = cat_engine();
        engine.start_game();
        assert!(engine.select_letter(p(3, 3)).is_ok());
    }

    #[test]
    fn test_failed_submissions_clear_path() {
        let mut engine = cat_engine();
        engine.start_game();

        spell(&mut engine, &[p(0, 0), p(0, 1)]);
        assert_eq!(engine.submit_word(), BoggleSubmission::TooShort { length: 2 });
        assert!(engine.current_path().is_empty());

        spell(&mut engine, &[p(1, 0), p(1, 1), p(1, 2)]);
        assert_eq!(
            engine.submit_word(),
            BoggleSubmission::NotInDictionary {
                word: "zzz".to_string()
            }
        );
        assert!(engine.current_path().is_empty());
        assert_eq!(engine.calculate_score(), 0);
    }

    #[test]
    fn test_deselect_and_clear() {
        let mut engine = cat_engine();
        engine.start_game();
        assert_eq!(engine.deselect_last_letter(), None);

        spell(&mut engine, &[p(0, 0), p(0, 1)]);
        assert_eq!(engine.deselect_last_letter(), Some(p(0, 1)));
        assert_eq!(engine.current_word(), "c");

        engine.clear_current_path();
        assert!(engine.current_path().is_empty());
        assert_eq!(engine.current_word(), "");
    }

    #[test]
    fn test_state_snapshot_flags() {
        let mut engine = cat_engine();
        engine.start_game();
        spell(&mut engine, &[p(0, 0), p(1, 1)]);

        let mut state = engine.boggle_state();
        assert!(state.grid[0][0].is_in_current_path);
        assert!(!state.grid[0][0].is_selected);
        assert!(state.grid[1][1].is_selected);
        assert_eq!(state.current_word, "cz");

        state.current_path.clear();
        state.grid[0][0].is_selected = true;
        assert_eq!(engine.current_path().len(), 2);
        assert!(!engine.boggle_state().grid[0][0].is_selected);
    }

    #[test]
    fn test_end_game_clears_path_and_freezes() {
        let mut engine = cat_engine();
        engine.start_game();
        spell(&mut engine, &[p(0, 0), p(0, 1), p(0, 2)]);
        assert!(engine.submit_word().is_accepted());
        spell(&mut engine, &[p(0, 0), p(0, 1)]);

        engine.end_game();
        assert!(engine.current_path().is_empty());
        assert_eq!(engine.session().phase, SessionPhase::Complete);
        assert_eq!(engine.session().score, 1);
        assert_eq!(engine.select_letter(p(0, 0)), Err(MoveError::NotPlaying));
        assert_eq!(engine.submit_word(), BoggleSubmission::NotPlaying);

        let result = engine.game_result().unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.game_type, GameKind::Boggle);
        assert_eq!(result.puzzle_date, "2024-01-01");
    }

    #[test]
    fn test_paused_rejects_moves() {
        let mut engine = cat_engine();
        engine.start_game();
        engine.pause_game();
        assert_eq!(engine.select_letter(p(0, 0)), Err(MoveError::NotPlaying));
        engine.resume_game();
        assert!(engine.select_letter(p(0, 0)).is_ok());
    }

    #[test]
    fn test_tick_runs_out_the_clock() {
        let config = GameConfig {
            time_limit: 2,
            ..GameConfig::boggle()
        };
        let grid = LetterGrid::from_rows(&["catz", "zzzz", "zzzz", "zzzz"]).unwrap();
        let mut engine = BoggleEngine::with_grid(boggle_words(), config, date(), grid);
        engine.start_game();
        engine.tick();
        assert!(engine.session().is_playing());
        engine.tick();
        assert!(engine.session().is_complete());
        assert_eq!(engine.boggle_state().time_remaining, 0);
    }

    #[test]
    fn test_daily_board_metadata_and_share() {
        let engine = BoggleEngine::daily(date());
        assert_eq!(engine.seed(), Some("puzzle-2024-01-01"));
        assert_eq!(engine.possible_words().len(), 10);
        assert_eq!(engine.total_possible_score(), 11);

        let metadata = engine.puzzle_metadata();
        assert_eq!(metadata.difficulty, Difficulty::Easy);
        assert_eq!(metadata.expected_score, 4);
        assert_eq!(metadata.total_possible_score, 11);

        let share = engine.shareable_result();
        assert_eq!(share.max_score, 11);
        assert_eq!(
            share.text,
            "Boggle 2024-01-01\nScore: 0/11\nWords found: 0/10\nEfficiency: 0%\n\n💪💪💪💪\n\n🎮 Play at nerdcube.games"
        );
    }

    #[test]
    fn test_efficiency() {
        let mut engine = BoggleEngine::daily(date());
        engine.start_game();
        // "giant": g(0,2) i(1,1) a(2,1) n(2,2) t(2,3)
        spell(&mut engine, &[p(0, 2), p(1, 1), p(2, 1), p(2, 2), p(2, 3)]);
        assert_eq!(engine.submit_word().points(), 2);
        let result = engine.boggle_result();
        assert!((result.efficiency - 2.0 / 11.0 * 100.0).abs() < 1e-9);
        assert_eq!(efficiency_emoji(result.efficiency), "💪💪💪💪");
        assert_eq!(efficiency_emoji(50.0), "🥉⭐⭐⭐");
        assert_eq!(efficiency_emoji(95.0), "🏆🏆🏆🏆");
    }

    #[test]
    fn test_reset_regenerates_same_board() {
        let mut engine = BoggleEngine::daily(date());
        let board = engine.grid().clone();
        engine.start_game();
        spell(&mut engine, &[p(0, 2), p(1, 1), p(2, 1), p(2, 2), p(2, 3)]);
        assert!(engine.submit_word().is_accepted());

        engine.reset_game();
        assert_eq!(engine.grid(), &board);
        assert_eq!(engine.session().phase, SessionPhase::Idle);
        assert!(engine.found_words().is_empty());
        assert_eq!(engine.boggle_state().score, 0);
    }

    #[test]
    fn test_generate_puzzle_reseeds() {
        let mut engine = BoggleEngine::daily(date());
        engine.generate_puzzle("test-seed");
        assert_eq!(engine.grid().to_string(), "naas\netce\ndwoe\nrrlt");
        assert_eq!(engine.possible_words().len(), 20);
        assert_eq!(engine.total_possible_score(), 21);
        assert_eq!(engine.seed(), Some("test-seed"));
    }

    #[test]
    fn test_empty_dictionary_rejects_everything() {
        let grid = LetterGrid::from_rows(&["catz", "zzzz", "zzzz", "zzzz"]).unwrap();
        let mut engine =
            BoggleEngine::with_grid(Arc::new(WordList::empty(3)), GameConfig::boggle(), date(), grid);
        assert!(engine.possible_words().is_empty());
        engine.start_game();
        spell(&mut engine, &[p(0, 0), p(0, 1), p(0, 2)]);
        assert!(matches!(
            engine.submit_word(),
            BoggleSubmission::NotInDictionary { .. }
        ));
    }

    #[test]
    fn test_random_selections_keep_path_valid() {
        let mut rng = rand::rng();
        let mut engine = BoggleEngine::daily(date());
        engine.start_game();

        for _ in 0..500 {
            let before = engine.current_path().to_vec();
            let position = p(rng.random_range(0..4), rng.random_range(0..4));
            if engine.select_letter(position).is_err() {
                assert_eq!(engine.current_path(), before.as_slice());
            }

            let path = engine.current_path();
            for pair in path.windows(2) {
                assert!(pair[0].is_adjacent(&pair[1]));
            }
            let unique: HashSet<_> = path.iter().collect();
            assert_eq!(unique.len(), path.len());

            if rng.random_bool(0.1) {
                engine.submit_word();
            }
        }
    }
}
