//! In-game state for the terminal shell
//!
//! Wraps one session engine with the bits only a keyboard UI needs: a grid
//! cursor, a typed-word buffer and the last feedback line. The shell owns
//! the countdown and calls [`Play::tick`] once per second.

use daily_puzzles::boggle::{BoggleEngine, BoggleSubmission, GridPosition, GRID_SIZE};
use daily_puzzles::game::PuzzleSession;
use daily_puzzles::ladder::{StepOutcome, WordLadderEngine};

/// How a feedback line should read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: Tone,
}

impl Feedback {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Feedback {
            text: text.into(),
            tone,
        }
    }
}

/// The game being played
pub enum Game {
    Boggle(BoggleEngine),
    Ladder(WordLadderEngine),
}

/// Cursor movement on the Boggle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// One running game plus its input state
pub struct Play {
    pub game: Game,
    /// Highlighted Boggle cell
    pub cursor: GridPosition,
    /// Typed Word Ladder candidate
    pub input: String,
    pub feedback: Option<Feedback>,
}

impl Play {
    /// Wrap an engine and start its session.
    pub fn new(mut game: Game) -> Self {
        match &mut game {
            Game::Boggle(engine) => engine.start_game(),
            Game::Ladder(engine) => engine.start_game(),
        }
        Play {
            game,
            cursor: GridPosition::new(0, 0),
            input: String::new(),
            feedback: None,
        }
    }

    fn engine(&self) -> &dyn PuzzleSession {
        match &self.game {
            Game::Boggle(engine) => engine as &dyn PuzzleSession,
            Game::Ladder(engine) => engine,
        }
    }

    fn engine_mut(&mut self) -> &mut dyn PuzzleSession {
        match &mut self.game {
            Game::Boggle(engine) => engine as &mut dyn PuzzleSession,
            Game::Ladder(engine) => engine,
        }
    }

    pub fn is_over(&self) -> bool {
        self.engine().session().is_complete()
    }

    pub fn is_paused(&self) -> bool {
        self.engine().session().is_paused()
    }

    pub fn time_remaining(&self) -> u32 {
        self.engine().session().time_remaining
    }

    pub fn score(&self) -> u32 {
        self.engine().session().score
    }

    /// Share text once the game is over.
    pub fn share_text(&self) -> Option<String> {
        self.engine().game_result().map(|result| result.share_text)
    }

    /// One second of countdown.
    pub fn tick(&mut self) {
        let was_over = self.is_over();
        self.engine_mut().tick();
        if !was_over && self.is_over() {
            self.feedback = Some(Feedback::new("Time's up!", Tone::Info));
        }
    }

    pub fn toggle_pause(&mut self) {
        let engine = self.engine_mut();
        if engine.session().is_paused() {
            engine.resume_game();
        } else {
            engine.pause_game();
        }
    }

    /// Finish now instead of waiting for the clock.
    pub fn give_up(&mut self) {
        self.engine_mut().end_game();
    }

    pub fn move_cursor(&mut self, direction: Move) {
        let GridPosition { row, col } = self.cursor;
        let last = GRID_SIZE - 1;
        self.cursor = match direction {
            Move::Up => GridPosition::new(row.saturating_sub(1), col),
            Move::Down => GridPosition::new((row + 1).min(last), col),
            Move::Left => GridPosition::new(row, col.saturating_sub(1)),
            Move::Right => GridPosition::new(row, (col + 1).min(last)),
        };
    }

    /// Boggle: select the cursor cell, or drop it if it ends the path.
    pub fn on_select(&mut self) {
        let cursor = self.cursor;
        let Game::Boggle(engine) = &mut self.game else {
            return;
        };
        if engine.current_path().last() == Some(&cursor) {
            engine.deselect_last_letter();
            self.feedback = None;
            return;
        }
        self.feedback = match engine.select_letter(cursor) {
            Ok(()) => None,
            Err(e) => Some(Feedback::new(e.to_string(), Tone::Bad)),
        };
    }

    /// Typed letter. Ladder only.
    pub fn on_char(&mut self, c: char) {
        if self.is_over() {
            return;
        }
        if let Game::Ladder(engine) = &self.game {
            if self.input.chars().count() < engine.puzzle().start_word.chars().count() {
                self.input.push(c.to_ascii_lowercase());
                self.feedback = None;
            }
        }
    }

    /// Backspace: trims the typed word, then the ladder or Boggle path.
    pub fn on_backspace(&mut self) {
        if self.is_over() {
            return;
        }
        match &mut self.game {
            Game::Boggle(engine) => {
                engine.deselect_last_letter();
            }
            Game::Ladder(engine) => {
                if self.input.pop().is_none() {
                    engine.remove_last_step();
                }
            }
        }
        self.feedback = None;
    }

    pub fn on_submit(&mut self) {
        if self.is_over() {
            return;
        }
        match &mut self.game {
            Game::Boggle(engine) => {
                if engine.current_path().is_empty() {
                    return;
                }
                let outcome = engine.submit_word();
                let tone = match outcome {
                    BoggleSubmission::Accepted { .. } => Tone::Good,
                    BoggleSubmission::AlreadyFound { .. } => Tone::Info,
                    _ => Tone::Bad,
                };
                self.feedback = Some(Feedback::new(outcome.message(), tone));
            }
            Game::Ladder(engine) => {
                if self.input.is_empty() {
                    return;
                }
                let word = std::mem::take(&mut self.input);
                self.feedback = Some(match engine.submit_word(&word) {
                    Ok(StepOutcome::Solved) => Feedback::new("Solved!", Tone::Good),
                    Ok(StepOutcome::Advanced) => {
                        Feedback::new(format!("{} ✓", word.to_uppercase()), Tone::Good)
                    }
                    Err(rejection) => Feedback::new(rejection.message(), Tone::Bad),
                });
            }
        }
    }

    /// Ladder hint.
    pub fn on_hint(&mut self) {
        if self.is_over() {
            return;
        }
        if let Game::Ladder(engine) = &mut self.game {
            self.feedback = Some(match engine.get_hint() {
                Some(hint) => {
                    let text = match hint.suggested_letter {
                        Some(letter) => {
                            format!("{} (try '{}')", hint.message, letter.to_ascii_uppercase())
                        }
                        None => hint.message,
                    };
                    Feedback::new(text, Tone::Info)
                }
                None => Feedback::new("No hints left", Tone::Bad),
            });
        }
    }

    /// Esc in Boggle clears the path first.
    pub fn on_cancel(&mut self) -> bool {
        let over = self.is_over();
        if let Game::Boggle(engine) = &mut self.game {
            if !engine.current_path().is_empty() && !over {
                engine.clear_current_path();
                return true;
            }
        }
        false
    }
}
