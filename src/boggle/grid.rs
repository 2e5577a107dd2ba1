//! Letter grid generation and adjacency geometry
//!
//! Letters are drawn from a pool in which each letter appears
//! `round(frequency * 10)` times (at least once), following a fixed
//! English letter-frequency table. Draws use the seeded stream so the
//! same seed always yields the same board.

use crate::game::seed::SeededRandom;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Board side length
pub const GRID_SIZE: usize = 4;

/// English letter frequencies in percent, in alphabetical order.
/// Pool order follows this table, which matters for determinism.
const LETTER_FREQUENCIES: [(char, f64); 26] = [
    ('a', 8.12),
    ('b', 1.49),
    ('c', 2.78),
    ('d', 4.25),
    ('e', 12.02),
    ('f', 2.23),
    ('g', 2.02),
    ('h', 6.09),
    ('i', 6.97),
    ('j', 0.15),
    ('k', 0.77),
    ('l', 4.03),
    ('m', 2.41),
    ('n', 6.75),
    ('o', 7.51),
    ('p', 1.93),
    ('q', 0.10),
    ('r', 5.99),
    ('s', 6.33),
    ('t', 9.06),
    ('u', 2.76),
    ('v', 0.98),
    ('w', 2.36),
    ('x', 0.15),
    ('y', 1.97),
    ('z', 0.07),
];

/// A cell coordinate, `0 <= row, col < GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        GridPosition { row, col }
    }

    /// Whether the position lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Chebyshev distance exactly 1: touching horizontally, vertically or
    /// diagonally, and not the same cell.
    pub fn is_adjacent(&self, other: &GridPosition) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        row_diff <= 1 && col_diff <= 1 && (row_diff != 0 || col_diff != 0)
    }

    /// All in-bounds neighbours in row-major order: 3 for corners, 5 for
    /// edges, 8 for interior cells.
    pub fn neighbours(&self) -> Vec<GridPosition> {
        let mut adjacent = Vec::with_capacity(8);
        let row_end = (self.row + 1).min(GRID_SIZE - 1);
        let col_end = (self.col + 1).min(GRID_SIZE - 1);
        for row in self.row.saturating_sub(1)..=row_end {
            for col in self.col.saturating_sub(1)..=col_end {
                if row != self.row || col != self.col {
                    adjacent.push(GridPosition { row, col });
                }
            }
        }
        adjacent
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Free-function form of [`GridPosition::is_adjacent`].
pub fn is_adjacent(a: GridPosition, b: GridPosition) -> bool {
    a.is_adjacent(&b)
}

/// Free-function form of [`GridPosition::neighbours`].
pub fn adjacent_positions(position: GridPosition) -> Vec<GridPosition> {
    position.neighbours()
}

/// Structural equality of two positions.
pub fn positions_equal(a: GridPosition, b: GridPosition) -> bool {
    a == b
}

/// Problems with a caller-supplied board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} letters, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("'{letter}' at {position} is not a letter")]
    NotALetter { letter: char, position: GridPosition },
}

/// The immutable letters of a board, row-major, lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LetterGrid {
    letters: [[char; GRID_SIZE]; GRID_SIZE],
}

impl LetterGrid {
    /// Draw a board from the seed.
    pub fn generate(seed: &str) -> Self {
        Self::generate_with_rng(&mut SeededRandom::new(seed))
    }

    /// Draw a board from an existing stream.
    pub fn generate_with_rng(rng: &mut SeededRandom) -> Self {
        let pool = letter_pool();
        let mut letters = [[' '; GRID_SIZE]; GRID_SIZE];
        for row in letters.iter_mut() {
            for cell in row.iter_mut() {
                *cell = pool[rng.next_index(pool.len())];
            }
        }
        LetterGrid { letters }
    }

    /// Build a board from `GRID_SIZE` rows of `GRID_SIZE` letters each.
    /// Letters are lowercased.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::RowCount {
                expected: GRID_SIZE,
                found: rows.len(),
            });
        }

        let mut letters = [[' '; GRID_SIZE]; GRID_SIZE];
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.as_ref().chars().collect();
            if chars.len() != GRID_SIZE {
                return Err(GridError::RowLength {
                    row,
                    expected: GRID_SIZE,
                    found: chars.len(),
                });
            }
            for (col, letter) in chars.into_iter().enumerate() {
                if !letter.is_alphabetic() {
                    return Err(GridError::NotALetter {
                        letter,
                        position: GridPosition::new(row, col),
                    });
                }
                letters[row][col] = letter.to_ascii_lowercase();
            }
        }
        Ok(LetterGrid { letters })
    }

    /// Letter at a position, `None` if out of bounds.
    pub fn get(&self, position: GridPosition) -> Option<char> {
        self.letters
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Letter at an in-bounds position.
    pub fn letter(&self, position: GridPosition) -> char {
        self.letters[position.row][position.col]
    }

    /// Raw rows.
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.letters
    }

    /// Every position in row-major order.
    pub fn positions() -> impl Iterator<Item = GridPosition> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| GridPosition { row, col }))
    }

    /// Spell out a path, lowercase. Out-of-bounds positions are skipped.
    pub fn word_for_path(&self, path: &[GridPosition]) -> String {
        path.iter().filter_map(|pos| self.get(*pos)).collect()
    }

    /// Display cells with selection flags derived from `path`: every path
    /// cell is in the current path, only the last one is selected.
    pub fn annotate(&self, path: &[GridPosition]) -> Vec<Vec<LetterCell>> {
        let last = path.last();
        (0..GRID_SIZE)
            .map(|row| {
                (0..GRID_SIZE)
                    .map(|col| {
                        let position = GridPosition { row, col };
                        LetterCell {
                            letter: self.letters[row][col],
                            position,
                            is_selected: last == Some(&position),
                            is_in_current_path: path.contains(&position),
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.letters.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// A board cell as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterCell {
    pub letter: char,
    pub position: GridPosition,
    pub is_selected: bool,
    pub is_in_current_path: bool,
}

/// The weighted pool letters are drawn from.
pub fn letter_pool() -> Vec<char> {
    let mut pool = Vec::with_capacity(1000);
    for (letter, frequency) in LETTER_FREQUENCIES {
        let count = ((frequency * 10.0).round() as usize).max(1);
        pool.extend(std::iter::repeat(letter).take(count));
    }
    pool
}
