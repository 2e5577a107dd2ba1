//! Word Ladder: turn one word into another, one letter at a time

pub mod engine;
pub mod puzzles;
pub mod validation;

pub use engine::{Hint, HintKind, LadderStep, StepOutcome, WordLadderEngine, WordLadderResult, WordLadderState};
pub use puzzles::{generate_puzzle, WordLadderPuzzle};
pub use validation::{LadderValidation, StepRejection};
