//! Curated Word Ladder puzzles and daily selection
//!
//! Every entry's `minimum_steps` is the length of the shortest ladder over
//! the embedded ladder dictionary. The daily puzzle index is
//! `|hash(seed)| mod count`, so every player on a date gets the same pair.

use crate::game::seed::{seed_hash, SeededRandom};
use crate::game::Difficulty;
use serde::Serialize;
use thiserror::Error;

/// Shortest word a puzzle may use
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest word a puzzle may use
pub const MAX_WORD_LENGTH: usize = 6;

/// One start/target pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLadderPuzzle {
    pub start_word: String,
    pub target_word: String,
    pub minimum_steps: u32,
    pub difficulty: Difficulty,
}

impl WordLadderPuzzle {
    pub fn new(start: &str, target: &str, minimum_steps: u32, difficulty: Difficulty) -> Self {
        WordLadderPuzzle {
            start_word: start.to_lowercase(),
            target_word: target.to_lowercase(),
            minimum_steps,
            difficulty,
        }
    }
}

/// Structural problems with a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("{start} and {target} differ in length")]
    LengthMismatch { start: String, target: String },
    #[error("{length}-letter words are outside {}..={}", MIN_WORD_LENGTH, MAX_WORD_LENGTH)]
    LengthOutOfRange { length: usize },
    #[error("start and target are both {0}")]
    SameWords(String),
}

const PUZZLES: [(&str, &str, u32, Difficulty); 30] = [
    ("cold", "warm", 4, Difficulty::Easy),
    ("head", "tail", 5, Difficulty::Easy),
    ("love", "hate", 4, Difficulty::Easy),
    ("dark", "lite", 4, Difficulty::Easy),
    ("lost", "find", 5, Difficulty::Easy),
    ("word", "maze", 4, Difficulty::Easy),
    ("mind", "body", 5, Difficulty::Easy),
    ("lead", "gold", 3, Difficulty::Easy),
    ("card", "game", 3, Difficulty::Easy),
    ("fire", "wood", 4, Difficulty::Easy),
    ("fast", "slow", 6, Difficulty::Medium),
    ("sick", "well", 6, Difficulty::Medium),
    ("flour", "bread", 6, Difficulty::Medium),
    ("black", "white", 7, Difficulty::Medium),
    ("hope", "fear", 6, Difficulty::Medium),
    ("teach", "plank", 5, Difficulty::Medium),
    ("wind", "rain", 6, Difficulty::Medium),
    ("help", "team", 6, Difficulty::Medium),
    ("sail", "boat", 6, Difficulty::Medium),
    ("fool", "wise", 6, Difficulty::Medium),
    ("work", "play", 9, Difficulty::Hard),
    ("rich", "poor", 8, Difficulty::Hard),
    ("ship", "band", 8, Difficulty::Hard),
    ("seed", "tree", 10, Difficulty::Hard),
    ("dusk", "dawn", 9, Difficulty::Hard),
    ("tree", "wood", 10, Difficulty::Hard),
    ("boat", "ship", 7, Difficulty::Hard),
    ("door", "room", 7, Difficulty::Hard),
    ("book", "page", 7, Difficulty::Hard),
    ("wave", "calm", 7, Difficulty::Hard),
];

/// Every curated puzzle, in selection order.
pub fn all_puzzles() -> Vec<WordLadderPuzzle> {
    PUZZLES
        .iter()
        .map(|(start, target, steps, difficulty)| {
            WordLadderPuzzle::new(start, target, *steps, *difficulty)
        })
        .collect()
}

/// Index into [`all_puzzles`] for a seed.
pub fn puzzle_index(seed: &str) -> usize {
    let hash = (seed_hash(seed) as i64).unsigned_abs();
    (hash % PUZZLES.len() as u64) as usize
}

/// The puzzle for a seed.
pub fn generate_puzzle(seed: &str) -> WordLadderPuzzle {
    let (start, target, steps, difficulty) = PUZZLES[puzzle_index(seed)];
    WordLadderPuzzle::new(start, target, steps, difficulty)
}

/// A random puzzle of the given difficulty, drawn from `rng`.
pub fn puzzle_by_difficulty(
    difficulty: Difficulty,
    rng: &mut SeededRandom,
) -> Option<WordLadderPuzzle> {
    let matching: Vec<WordLadderPuzzle> = all_puzzles()
        .into_iter()
        .filter(|puzzle| puzzle.difficulty == difficulty)
        .collect();
    let index = rng.next_index(matching.len());
    matching.into_iter().nth(index)
}

/// Check lengths and distinctness.
pub fn validate_puzzle(puzzle: &WordLadderPuzzle) -> Result<(), PuzzleError> {
    let length = puzzle.start_word.chars().count();
    if length != puzzle.target_word.chars().count() {
        return Err(PuzzleError::LengthMismatch {
            start: puzzle.start_word.clone(),
            target: puzzle.target_word.clone(),
        });
    }
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
        return Err(PuzzleError::LengthOutOfRange { length });
    }
    if puzzle.start_word == puzzle.target_word {
        return Err(PuzzleError::SameWords(puzzle.start_word.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::{ladder_words, Dictionary};
    use crate::ladder::validation::shortest_ladder;

    #[test]
    fn test_catalogue_shape() {
        let puzzles = all_puzzles();
        assert_eq!(puzzles.len(), 30);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                puzzles.iter().filter(|p| p.difficulty == difficulty).count(),
                10
            );
        }
    }

    #[test]
    fn test_every_puzzle_validates() {
        for puzzle in all_puzzles() {
            assert_eq!(validate_puzzle(&puzzle), Ok(()), "{:?}", puzzle);
        }
    }

    #[test]
    fn test_minimum_steps_are_shortest_ladders() {
        let dictionary = ladder_words();
        for puzzle in all_puzzles() {
            assert!(dictionary.is_valid_word(&puzzle.start_word));
            assert!(dictionary.is_valid_word(&puzzle.target_word));
            let ladder = shortest_ladder(&puzzle.start_word, &puzzle.target_word, dictionary.as_ref())
                .unwrap_or_else(|| panic!("no ladder for {:?}", puzzle));
            assert_eq!(ladder.len() as u32 - 1, puzzle.minimum_steps, "{:?}", puzzle);
        }
    }

    #[test]
    fn test_daily_selection() {
        assert_eq!(puzzle_index("puzzle-2024-01-01"), 13);
        assert_eq!(puzzle_index("puzzle-2024-01-02"), 12);
        assert_eq!(puzzle_index("puzzle-2024-03-15"), 6);
        assert_eq!(puzzle_index("puzzle-2025-12-25"), 4);

        let puzzle = generate_puzzle("puzzle-2024-01-01");
        assert_eq!(puzzle.start_word, "black");
        assert_eq!(puzzle.target_word, "white");
        assert_eq!(puzzle, generate_puzzle("puzzle-2024-01-01"));
    }

    #[test]
    fn test_by_difficulty() {
        let mut rng = SeededRandom::new("difficulty");
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let puzzle = puzzle_by_difficulty(difficulty, &mut rng).unwrap();
            assert_eq!(puzzle.difficulty, difficulty);
        }

        let first = puzzle_by_difficulty(Difficulty::Hard, &mut SeededRandom::new("x"));
        let second = puzzle_by_difficulty(Difficulty::Hard, &mut SeededRandom::new("x"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_puzzle_errors() {
        let mismatch = WordLadderPuzzle::new("cold", "warmth", 4, Difficulty::Easy);
        assert!(matches!(
            validate_puzzle(&mismatch),
            Err(PuzzleError::LengthMismatch { .. })
        ));

        let short = WordLadderPuzzle::new("cat", "dog", 3, Difficulty::Easy);
        assert_eq!(
            validate_puzzle(&short),
            Err(PuzzleError::LengthOutOfRange { length: 3 })
        );

        let long = WordLadderPuzzle::new("brother", "sisters", 3, Difficulty::Easy);
        assert_eq!(
            validate_puzzle(&long),
            Err(PuzzleError::LengthOutOfRange { length: 7 })
        );

        let same = WordLadderPuzzle::new("cold", "COLD", 0, Difficulty::Easy);
        assert_eq!(
            validate_puzzle(&same),
            Err(PuzzleError::SameWords("cold".to_string()))
        );
    }
}
