//! Word Ladder session engine
//!
//! The ladder always starts with the puzzle's start word and only grows by
//! validated one-letter steps. Reaching the target word solves the puzzle
//! and ends the session.

use super::puzzles::{generate_puzzle, WordLadderPuzzle};
use super::validation::{LadderValidation, StepRejection};
use crate::game::dictionary::{ladder_words, Dictionary};
use crate::game::seed::daily_seed;
use crate::game::share::SHARE_FOOTER;
use crate::game::{
    GameConfig, GameKind, PuzzleMetadata, PuzzleSession, SessionState, ShareableResult,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Hints available per session unless configured otherwise
pub const DEFAULT_MAX_HINTS: u32 = 3;

/// Score for a perfect solve before any time bonus
pub const BASE_SCORE: u32 = 1000;
const STEP_PENALTY: u32 = 50;
const HINT_PENALTY: u32 = 100;
/// Solves within this many seconds earn the 1.5x bonus
pub const TIME_BONUS_THRESHOLD: u32 = 120;

/// One rung of the ladder. Index 0 is the start word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderStep {
    pub word: String,
    pub index: usize,
}

/// What an accepted submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Letter,
    Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub kind: HintKind,
    pub message: String,
    pub target_position: Option<usize>,
    pub suggested_letter: Option<char>,
}

/// Read-only snapshot for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLadderState {
    pub puzzle: WordLadderPuzzle,
    pub current_path: Vec<LadderStep>,
    pub current_word: String,
    pub is_complete: bool,
    pub is_solved: bool,
    pub score: u32,
    pub time_remaining: u32,
    pub is_playing: bool,
    /// Hints still available
    pub hints: u32,
    pub hints_used: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLadderResult {
    pub solved: bool,
    pub steps: u32,
    pub minimum_steps: u32,
    pub score: u32,
    /// `minimum_steps / steps * 100`, 0 before any step
    pub efficiency: f64,
    pub duration_ms: i64,
    pub hints_used: u32,
    pub path: Vec<String>,
}

pub struct WordLadderEngine {
    dictionary: Arc<dyn Dictionary>,
    config: GameConfig,
    session: SessionState,
    puzzle_date: NaiveDate,
    seed: Option<String>,
    puzzle: WordLadderPuzzle,
    path: Vec<LadderStep>,
    solved: bool,
    max_hints: u32,
    hints_used: u32,
}

impl WordLadderEngine {
    /// Engine for the daily puzzle of `date`.
    pub fn new(dictionary: Arc<dyn Dictionary>, config: GameConfig, date: NaiveDate) -> Self {
        let seed = daily_seed(date);
        let mut engine = Self::with_puzzle(dictionary, config, date, generate_puzzle(&seed));
        engine.seed = Some(seed);
        engine
    }

    /// Daily puzzle with the embedded dictionary and default settings.
    pub fn daily(date: NaiveDate) -> Self {
        Self::new(ladder_words(), GameConfig::word_ladder(), date)
    }

    /// Engine for a fixed puzzle. Resetting keeps the same puzzle.
    pub fn with_puzzle(
        dictionary: Arc<dyn Dictionary>,
        config: GameConfig,
        date: NaiveDate,
        puzzle: WordLadderPuzzle,
    ) -> Self {
        WordLadderEngine {
            dictionary,
            session: SessionState::new(config.time_limit),
            config,
            puzzle_date: date,
            seed: None,
            path: vec![LadderStep {
                word: puzzle.start_word.clone(),
                index: 0,
            }],
            puzzle,
            solved: false,
            max_hints: DEFAULT_MAX_HINTS,
            hints_used: 0,
        }
    }

    /// Replace the hint budget.
    pub fn with_max_hints(mut self, max_hints: u32) -> Self {
        self.max_hints = max_hints;
        self
    }

    pub fn puzzle(&self) -> &WordLadderPuzzle {
        &self.puzzle
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_path(&self) -> &[LadderStep] {
        &self.path
    }

    /// Last word on the ladder.
    pub fn current_word(&self) -> &str {
        self.path
            .last()
            .map(|step| step.word.as_str())
            .unwrap_or(&self.puzzle.start_word)
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn hints_remaining(&self) -> u32 {
        self.max_hints.saturating_sub(self.hints_used)
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Steps taken, not counting the start word.
    pub fn steps(&self) -> u32 {
        self.path.len().saturating_sub(1) as u32
    }

    fn restart_path(&mut self) {
        self.path = vec![LadderStep {
            word: self.puzzle.start_word.clone(),
            index: 0,
        }];
    }

    /// Check a candidate as the next rung without changing anything.
    pub fn validate_word(&self, word: &str) -> LadderValidation {
        let candidate = word.trim().to_lowercase();
        let ladder: Vec<&str> = self.path.iter().map(|step| step.word.as_str()).collect();
        LadderValidation::check(
            self.current_word(),
            &candidate,
            &ladder,
            self.dictionary.as_ref(),
        )
    }

    /// Add a rung. Reaching the target solves the puzzle and ends the game.
    #[instrument(skip(self))]
    pub fn submit_word(&mut self, word: &str) -> Result<StepOutcome, StepRejection> {
        if !self.session.is_playing() {
            return Err(StepRejection::NotPlaying);
        }

        let validation = self.validate_word(word);
        if let Some(rejection) = validation.rejection {
            debug!(?rejection, "step rejected");
            return Err(rejection);
        }

        let word = word.trim().to_lowercase();
        self.path.push(LadderStep {
            index: self.path.len(),
            word: word.clone(),
        });

        if word == self.puzzle.target_word {
            self.solved = true;
            info!(steps = self.steps(), "ladder solved");
            self.end_game();
            return Ok(StepOutcome::Solved);
        }
        Ok(StepOutcome::Advanced)
    }

    /// Pop the last rung. The start word cannot be removed, and a finished
    /// ladder is frozen.
    pub fn remove_last_step(&mut self) -> Option<String> {
        if self.path.len() <= 1 || self.session.is_complete() {
            return None;
        }
        self.path.pop().map(|step| step.word)
    }

    /// Spend a hint: the first position where the current word and the
    /// target differ. `None` once the budget is spent.
    pub fn get_hint(&mut self) -> Option<Hint> {
        if self.hints_remaining() == 0 {
            return None;
        }
        self.hints_used += 1;

        let differing = self
            .current_word()
            .chars()
            .zip(self.puzzle.target_word.chars())
            .position(|(current, target)| current != target);

        let hint = match differing {
            Some(index) => Hint {
                kind: HintKind::Letter,
                message: format!("Try changing the letter at position {}", index + 1),
                target_position: Some(index),
                suggested_letter: self.puzzle.target_word.chars().nth(index),
            },
            None => Hint {
                kind: HintKind::Direction,
                message: "You're on the right track! Keep going.".to_string(),
                target_position: None,
                suggested_letter: None,
            },
        };
        debug!(hints_used = self.hints_used, "hint given");
        Some(hint)
    }

    pub fn word_ladder_state(&self) -> WordLadderState {
        WordLadderState {
            puzzle: self.puzzle.clone(),
            current_path: self.path.clone(),
            current_word: self.current_word().to_string(),
            is_complete: self.session.is_complete(),
            is_solved: self.solved,
            score: self.session.score,
            time_remaining: self.session.time_remaining,
            is_playing: self.session.is_playing(),
            hints: self.hints_remaining(),
            hints_used: self.hints_used,
        }
    }

    pub fn word_ladder_result(&self) -> WordLadderResult {
        let steps = self.steps();
        let minimum_steps = self.puzzle.minimum_steps;
        let efficiency = if minimum_steps == 0 || steps == 0 {
            0.0
        } else {
            minimum_steps as f64 * 100.0 / steps as f64
        };
        WordLadderResult {
            solved: self.solved,
            steps,
            minimum_steps,
            score: self.session.score,
            efficiency,
            duration_ms: self.session.duration_ms(),
            hints_used: self.hints_used,
            path: self.path.iter().map(|step| step.word.clone()).collect(),
        }
    }

    fn emoji_path(result: &WordLadderResult) -> &'static str {
        if !result.solved {
            return "❌🔀❓";
        }
        if result.efficiency >= 100.0 {
            "🏆⚡🎯"
        } else if result.efficiency >= 80.0 {
            "🥇⭐🎯"
        } else if result.efficiency >= 60.0 {
            "🥈⭐✨"
        } else if result.efficiency >= 40.0 {
            "🥉💪🔀"
        } else {
            "✅🔀💫"
        }
    }
}

impl PuzzleSession for WordLadderEngine {
    fn kind(&self) -> GameKind {
        GameKind::WordLadder
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

    fn generate_puzzle(&mut self, seed: &str) {
        self.puzzle = generate_puzzle(seed);
        self.seed = Some(seed.to_string());
        self.solved = false;
        self.restart_path();
        debug!(
            start = %self.puzzle.start_word,
            target = %self.puzzle.target_word,
            "ladder generated"
        );
    }

    /// `max(0, 1000 - 50 * extra steps - 100 * hints)`, times 1.5 (floored)
    /// when solved within the bonus window. Unsolved ladders score 0.
    fn calculate_score(&self) -> u32 {
        if !self.solved {
            return 0;
        }
        let extra_steps = self.steps().saturating_sub(self.puzzle.minimum_steps);
        let score = BASE_SCORE
            .saturating_sub(extra_steps * STEP_PENALTY)
            .saturating_sub(self.hints_used * HINT_PENALTY);
        if self.session.elapsed_seconds() <= TIME_BONUS_THRESHOLD {
            score * 3 / 2
        } else {
            score
        }
    }

    fn shareable_result(&self) -> ShareableResult {
        let result = self.word_ladder_result();
        let date = self.puzzle_date.format("%Y-%m-%d").to_string();
        let emoji_path = Self::emoji_path(&result);
        let text = format!(
            "Word Ladder {}\n{} → {}\n{} {}/{} steps\nScore: {}\n{}\n\n{}",
            date,
            self.puzzle.start_word.to_uppercase(),
            self.puzzle.target_word.to_uppercase(),
            if result.solved { "✅" } else { "❌" },
            result.steps,
            result.minimum_steps,
            result.score,
            emoji_path,
            SHARE_FOOTER
        );
        ShareableResult {
            game_type: GameKind::WordLadder.label().to_string(),
            date,
            score: result.score,
            max_score: BASE_SCORE,
            emoji_grid: Some(emoji_path.to_string()),
            text,
        }
    }

    fn puzzle_metadata(&self) -> PuzzleMetadata {
        PuzzleMetadata {
            date: self.puzzle_date.format("%Y-%m-%d").to_string(),
            difficulty: self.puzzle.difficulty,
            expected_score: BASE_SCORE.saturating_sub(self.puzzle.minimum_steps * STEP_PENALTY),
            total_possible_score: BASE_SCORE,
        }
    }

    fn reset_game(&mut self) {
        self.session = SessionState::new(self.config.time_limit);
        self.hints_used = 0;
        self.solved = false;
        match self.seed.clone() {
            Some(seed) => self.generate_puzzle(&seed),
            None => self.restart_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, SessionPhase};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn cold_warm() -> WordLadderEngine {
        WordLadderEngine::with_puzzle(
            ladder_words(),
            GameConfig::word_ladder(),
            date(),
            WordLadderPuzzle::new("cold", "warm", 4, Difficulty::Easy),
        )
    }

    fn climb(engine: &mut WordLadderEngine, words: &[&str]) {
        for word in words {
            engine.submit_word(word).unwrap();
        }
    }

    #[test]
    fn test_initial_path_is_start_word() {
        let engine = cold_warm();
        assert_eq!(engine.current_path().len(), 1);
        assert_eq!(engine.current_word(), "cold");
        assert_eq!(engine.current_path()[0].index, 0);
    }

    #[test]
    fn test_submit_requires_playing() {
        let mut engine = cold_warm();
        assert_eq!(engine.submit_word("cord"), Err(StepRejection::NotPlaying));
        engine.start_game();
        engine.pause_game();
        assert_eq!(engine.submit_word("cord"), Err(StepRejection::NotPlaying));
    }

    #[test]
    fn test_two_letter_change_rejected() {
        let mut engine = cold_warm();
        engine.start_game();
        assert_eq!(
            engine.submit_word("corn"),
            Err(StepRejection::NotOneLetterChange)
        );
        assert_eq!(engine.current_path().len(), 1);
    }

    #[test]
    fn test_single_step_accepted() {
        let mut engine = cold_warm();
        engine.start_game();
        assert_eq!(engine.submit_word("CORD"), Ok(StepOutcome::Advanced));
        assert_eq!(engine.current_path().len(), 2);
        assert_eq!(engine.current_word(), "cord");
        assert_eq!(engine.current_path()[1].index, 1);
    }

    #[test]
    fn test_revisit_rejected() {
        let mut engine = cold_warm();
        engine.start_game();
        climb(&mut engine, &["cord"]);
        assert_eq!(engine.submit_word("cold"), Err(StepRejection::AlreadyUsed));
        assert_eq!(engine.submit_word("cqrd"), Err(StepRejection::NotAWord));
    }

    #[test]
    fn test_remove_last_step() {
        let mut engine = cold_warm();
        engine.start_game();
        assert_eq!(engine.remove_last_step(), None);
        climb(&mut engine, &["cord", "word"]);
        assert_eq!(engine.remove_last_step(), Some("word".to_string()));
        assert_eq!(engine.current_word(), "cord");
        assert_eq!(engine.remove_last_step(), Some("cord".to_string()));
        assert_eq!(engine.remove_last_step(), None);
        assert_eq!(engine.current_word(), "cold");
    }

    #[test]
    fn test_perfect_fast_solve() {
        let mut engine = cold_warm();
        engine.start_game();
        climb(&mut engine, &["cord", "word", "ward"]);
        assert_eq!(engine.submit_word("warm"), Ok(StepOutcome::Solved));

        assert!(engine.is_solved());
        assert_eq!(engine.session().phase, SessionPhase::Complete);
        assert_eq!(engine.word_ladder_state().score, 1500);
        assert_eq!(engine.remove_last_step(), None);

        let result = engine.word_ladder_result();
        assert_eq!(result.steps, 4);
        assert_eq!(result.efficiency, 100.0);
        assert_eq!(result.path, vec!["cold", "cord", "word", "ward", "warm"]);
    }

    #[test]
    fn test_penalties_and_slow_solve() {
        let mut engine = cold_warm();
        engine.start_game();
        engine.get_hint();
        engine.get_hint();
        for _ in 0..=TIME_BONUS_THRESHOLD {
            engine.tick();
        }
        climb(&mut engine, &["cord", "lord", "word", "ward", "warm"]);
        // one extra step, two hints, no bonus
        assert_eq!(engine.word_ladder_state().score, 1000 - 50 - 200);
        assert_eq!(engine.word_ladder_result().efficiency, 80.0);
    }

    #[test]
    fn test_bonus_applies_after_penalties() {
        let mut engine = cold_warm();
        engine.start_game();
        climb(&mut engine, &["cord", "lord", "word", "ward", "warm"]);
        assert_eq!(engine.word_ladder_state().score, 950 * 3 / 2);
    }

    #[test]
    fn test_unsolved_scores_zero() {
        let mut engine = cold_warm();
        engine.start_game();
        climb(&mut engine, &["cord"]);
        engine.end_game();
        assert_eq!(engine.word_ladder_state().score, 0);
        assert!(engine.word_ladder_state().is_complete);
        assert!(!engine.is_solved());
        assert_eq!(engine.submit_word("word"), Err(StepRejection::NotPlaying));
    }

    #[test]
    fn test_hints() {
        let mut engine = cold_warm();
        let hint = engine.get_hint().unwrap();
        assert_eq!(hint.kind, HintKind::Letter);
        assert_eq!(hint.target_position, Some(0));
        assert_eq!(hint.suggested_letter, Some('w'));
        assert_eq!(hint.message, "Try changing the letter at position 1");

        engine.get_hint().unwrap();
        engine.get_hint().unwrap();
        assert_eq!(engine.get_hint(), None);
        assert_eq!(engine.hints_used(), 3);
        assert_eq!(engine.hints_remaining(), 0);
    }

    #[test]
    fn test_configurable_hint_budget() {
        let mut engine = cold_warm().with_max_hints(1);
        assert!(engine.get_hint().is_some());
        assert!(engine.get_hint().is_none());
        assert_eq!(engine.word_ladder_state().hints, 0);
    }

    #[test]
    fn test_share_text() {
        let mut engine = cold_warm();
        engine.start_game();
        climb(&mut engine, &["cord", "word", "ward", "warm"]);
        let share = engine.shareable_result();
        assert_eq!(
            share.text,
            "Word Ladder 2024-01-01\nCOLD → WARM\n✅ 4/4 steps\nScore: 1500\n🏆⚡🎯\n\n🎮 Play at nerdcube.games"
        );
        assert_eq!(share.max_score, 1000);

        let unsolved = cold_warm().shareable_result();
        assert!(unsolved.text.contains("❌ 0/4 steps"));
        assert_eq!(unsolved.emoji_grid.as_deref(), Some("❌🔀❓"));
    }

    #[test]
    fn test_daily_puzzle_and_metadata() {
        let engine = WordLadderEngine::daily(date());
        assert_eq!(engine.puzzle().start_word, "black");
        assert_eq!(engine.puzzle().target_word, "white");

        let metadata = engine.puzzle_metadata();
        assert_eq!(metadata.difficulty, Difficulty::Medium);
        assert_eq!(metadata.expected_score, 1000 - 7 * 50);
        assert_eq!(metadata.total_possible_score, 1000);
    }

    #[test]
    fn test_reset() {
        let mut engine = WordLadderEngine::daily(date());
        engine.start_game();
        engine.get_hint();
        engine.submit_word("blank").unwrap();
        engine.reset_game();

        assert_eq!(engine.session().phase, SessionPhase::Idle);
        assert_eq!(engine.current_path().len(), 1);
        assert_eq!(engine.current_word(), "black");
        assert_eq!(engine.hints_remaining(), 3);
    }

    #[test]
    fn test_validate_word_is_read_only() {
        let engine = cold_warm();
        let validation = engine.validate_word("cord");
        assert!(validation.is_valid);
        assert_eq!(engine.current_path().len(), 1);
    }
}
