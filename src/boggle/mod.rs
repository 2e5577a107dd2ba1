//! Boggle: find words by tracing paths through a 4x4 letter grid

pub mod engine;
pub mod grid;
pub mod search;

pub use engine::{BoggleEngine, BoggleResult, BoggleState, BoggleSubmission, FoundWord, MoveError};
pub use grid::{GridPosition, LetterCell, LetterGrid, GRID_SIZE};
pub use search::{find_all_words, word_score};
