//! Shared game machinery: session lifecycle, results, seeds, dictionaries
//!
//! Both puzzles share one lifecycle record ([`SessionState`]) and one
//! capability set ([`PuzzleSession`]). Each game composes the record with
//! its own puzzle payload instead of inheriting from a base engine.

pub mod dictionary;
pub mod seed;
pub mod share;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// The games this crate can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    Boggle,
    WordLadder,
}

impl GameKind {
    /// Stable identifier (`boggle`, `word-ladder`)
    pub fn id(&self) -> &'static str {
        match self {
            GameKind::Boggle => "boggle",
            GameKind::WordLadder => "word-ladder",
        }
    }

    /// Display name used in share texts
    pub fn label(&self) -> &'static str {
        match self {
            GameKind::Boggle => "Boggle",
            GameKind::WordLadder => "Word Ladder",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Puzzle difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Per-game session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Countdown length in seconds
    pub time_limit: u32,
    pub kind: GameKind,
    pub version: String,
}

impl GameConfig {
    /// Boggle defaults: three minutes.
    pub fn boggle() -> Self {
        GameConfig {
            time_limit: 180,
            kind: GameKind::Boggle,
            version: "1.0.0".to_string(),
        }
    }

    /// Word Ladder defaults: five minutes.
    pub fn word_ladder() -> Self {
        GameConfig {
            time_limit: 300,
            kind: GameKind::WordLadder,
            version: "1.0.0".to_string(),
        }
    }
}

/// Where a session is in its lifecycle.
///
/// `Idle -> Playing <-> Paused`, `Playing -> Complete`. Only a reset leaves
/// `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Playing,
    Paused,
    Complete,
}

/// Lifecycle record shared by both games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub score: u32,
    pub time_limit: u32,
    pub time_remaining: u32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl SessionState {
    /// A session that has not started.
    pub fn new(time_limit: u32) -> Self {
        SessionState {
            phase: SessionPhase::Idle,
            score: 0,
            time_limit,
            time_remaining: time_limit,
            start_time: None,
            end_time: None,
        }
    }

    /// Actively accepting moves (started and not paused).
    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// Idle -> Playing. Returns false (no change) from any other phase.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if self.phase != SessionPhase::Idle {
            return false;
        }
        self.phase = SessionPhase::Playing;
        self.start_time = Some(now);
        self.time_remaining = self.time_limit;
        true
    }

    /// Playing -> Paused.
    pub fn pause(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.phase = SessionPhase::Paused;
        true
    }

    /// Paused -> Playing.
    pub fn resume(&mut self) -> bool {
        if self.phase != SessionPhase::Paused {
            return false;
        }
        self.phase = SessionPhase::Playing;
        true
    }

    /// Playing -> Complete with a final score.
    pub fn finish(&mut self, now: DateTime<Utc>, score: u32) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.phase = SessionPhase::Complete;
        self.end_time = Some(now);
        self.score = score;
        true
    }

    /// Count down one second while playing. Returns true when the clock
    /// has just run out.
    pub fn tick(&mut self) -> bool {
        if self.phase != SessionPhase::Playing || self.time_remaining == 0 {
            return false;
        }
        self.time_remaining -= 1;
        self.time_remaining == 0
    }

    /// Seconds of the countdown consumed so far.
    pub fn elapsed_seconds(&self) -> u32 {
        self.time_limit.saturating_sub(self.time_remaining)
    }

    /// Wall-clock milliseconds between start and end, 0 if either is unset.
    pub fn duration_ms(&self) -> i64 {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => (end - start).num_milliseconds(),
            _ => 0,
        }
    }
}

/// Text and numbers for a share sheet or clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareableResult {
    pub game_type: String,
    pub date: String,
    pub score: u32,
    pub max_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_grid: Option<String>,
    pub text: String,
}

/// Facts about a puzzle known before play starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleMetadata {
    pub date: String,
    pub difficulty: Difficulty,
    pub expected_score: u32,
    pub total_possible_score: u32,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub score: u32,
    pub duration_ms: i64,
    pub completed_at: DateTime<Utc>,
    pub game_type: GameKind,
    pub puzzle_date: String,
    pub share_text: String,
}

/// Capability set shared by the Boggle and Word Ladder engines.
///
/// Implementors provide access to their [`SessionState`] and the
/// game-specific pieces; lifecycle transitions are provided.
pub trait PuzzleSession {
    fn kind(&self) -> GameKind;

    fn session(&self) -> &SessionState;

    fn session_mut(&mut self) -> &mut SessionState;

    /// Date the puzzle belongs to (used in share texts).
    fn puzzle_date(&self) -> NaiveDate;

    /// Re-seed and rebuild the puzzle.
    fn generate_puzzle(&mut self, seed: &str);

    /// Score to record when the session completes.
    fn calculate_score(&self) -> u32;

    fn shareable_result(&self) -> ShareableResult;

    fn puzzle_metadata(&self) -> PuzzleMetadata;

    /// Discard all session and puzzle state and regenerate the puzzle.
    fn reset_game(&mut self);

    /// Runs just before the session is marked complete.
    fn on_game_end(&mut self) {}

    fn start_game(&mut self) {
        let kind = self.kind();
        if self.session_mut().start(Utc::now()) {
            info!(game = kind.id(), "game started");
        }
    }

    fn pause_game(&mut self) {
        self.session_mut().pause();
    }

    fn resume_game(&mut self) {
        self.session_mut().resume();
    }

    fn end_game(&mut self) {
        if !self.session().is_playing() {
            return;
        }
        self.on_game_end();
        let score = self.calculate_score();
        let kind = self.kind();
        if self.session_mut().finish(Utc::now(), score) {
            info!(game = kind.id(), score, "game ended");
        }
    }

    /// One second of countdown; ends the game when time runs out.
    fn tick(&mut self) {
        if self.session_mut().tick() {
            self.end_game();
        }
    }

    /// Copy of the lifecycle record.
    fn state(&self) -> SessionState {
        self.session().clone()
    }

    /// Result of a completed session, `None` until then.
    fn game_result(&self) -> Option<GameResult> {
        let session = self.session();
        if !session.is_complete() || session.start_time.is_none() {
            return None;
        }
        let completed_at = session.end_time?;
        Some(GameResult {
            score: session.score,
            duration_ms: session.duration_ms(),
            completed_at,
            game_type: self.kind(),
            puzzle_date: self.puzzle_date().format("%Y-%m-%d").to_string(),
            share_text: self.shareable_result().text,
        })
    }
}
