//! Exhaustive word search over the letter grid
//!
//! Depth-first search from every cell over the 8-connected cell graph.
//! The visited flags are scoped to the current path: a cell is marked on
//! the way down and unmarked on backtrack, so no word reuses a cell but
//! different words may share cells.
//!
//! Every dictionary word met along a path is recorded, not just maximal
//! ones, so a path spelling "cats" yields both "cat" and "cats". Branches
//! whose letters are not a prefix of any dictionary word are cut early;
//! this never changes the result, only the amount of work.

use super::grid::{GridPosition, LetterGrid, GRID_SIZE};
use crate::game::dictionary::Dictionary;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Minimum length of a scoring word
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word the search will build; bounds recursion depth
pub const MAX_WORD_LENGTH: usize = 16;

/// Points for a word by length: 3-4 -> 1, 5 -> 2, 6 -> 3, 7 -> 5, 8+ -> 11.
///
/// Lengths below the minimum score nothing; submissions never get there
/// because they are length-gated first.
pub fn word_score(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Sum of [`word_score`] over a collection of words.
pub fn total_score<'a, I>(words: I) -> u32
where
    I: IntoIterator<Item = &'a String>,
{
    words.into_iter().map(|word| word_score(word)).sum()
}

/// Every dictionary word spelled by a simple path of adjacent cells.
///
/// The result is sorted and free of duplicates however many paths spell
/// the same word.
#[instrument(skip_all)]
pub fn find_all_words(grid: &LetterGrid, dictionary: &dyn Dictionary) -> BTreeSet<String> {
    let mut search = Search {
        grid,
        dictionary,
        visited: [[false; GRID_SIZE]; GRID_SIZE],
        word: String::with_capacity(MAX_WORD_LENGTH),
        found: BTreeSet::new(),
    };

    for position in LetterGrid::positions() {
        search.visit(position);
    }

    debug!(words = search.found.len(), "grid solved");
    search.found
}

struct Search<'a> {
    grid: &'a LetterGrid,
    dictionary: &'a dyn Dictionary,
    visited: [[bool; GRID_SIZE]; GRID_SIZE],
    word: String,
    found: BTreeSet<String>,
}

impl Search<'_> {
    fn visit(&mut self, position: GridPosition) {
        if self.visited[position.row][position.col] {
            return;
        }

        self.word.push(self.grid.letter(position));

        if self.dictionary.has_prefix(&self.word) {
            if self.word.len() >= MIN_WORD_LENGTH && self.dictionary.is_valid_word(&self.word) {
                self.found.insert(self.word.clone());
            }

            if self.word.len() < MAX_WORD_LENGTH {
                self.visited[position.row][position.col] = true;
                for next in position.neighbours() {
                    self.visit(next);
                }
                self.visited[position.row][position.col] = false;
            }
        }

        self.word.pop();
    }
}
