//! Word Ladder move rules
//!
//! A legal step changes exactly one letter in place, lands on a dictionary
//! word and does not revisit a word already on the ladder. Checks report
//! which rule failed instead of a bare yes/no.

use crate::game::dictionary::Dictionary;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};

/// Why a candidate step was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepRejection {
    /// Game not in progress
    NotPlaying,
    /// Candidate is not in the dictionary
    NotAWord,
    /// Candidate changes zero letters, several letters, or its length
    NotOneLetterChange,
    /// Candidate already appears on the ladder
    AlreadyUsed,
}

impl StepRejection {
    /// Returns a user-friendly error message
    pub fn message(&self) -> &'static str {
        match self {
            StepRejection::NotPlaying => "Game not in progress",
            StepRejection::NotAWord => "Not a valid word",
            StepRejection::NotOneLetterChange => "Must change exactly one letter",
            StepRejection::AlreadyUsed => "Word already used in this path",
        }
    }
}

/// Full report for one candidate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderValidation {
    pub is_valid: bool,
    pub is_valid_word: bool,
    pub is_one_letter_diff: bool,
    pub already_used: bool,
    /// Indices where candidate and current word differ
    pub changed_positions: Vec<usize>,
    /// First failing rule, checked in the order word, change, reuse
    pub rejection: Option<StepRejection>,
}

impl LadderValidation {
    /// Check `candidate` (lowercase) as the step after `current`, given the
    /// words already on the ladder.
    pub fn check<S: AsRef<str>>(
        current: &str,
        candidate: &str,
        ladder: &[S],
        dictionary: &dyn Dictionary,
    ) -> Self {
        let is_valid_word = dictionary.is_valid_word(candidate);
        let changed_positions = changed_positions(current, candidate);
        let is_one_letter_diff = changed_positions.len() == 1;
        let already_used = ladder.iter().any(|word| word.as_ref() == candidate);

        let rejection = if !is_valid_word {
            Some(StepRejection::NotAWord)
        } else if !is_one_letter_diff {
            Some(StepRejection::NotOneLetterChange)
        } else if already_used {
            Some(StepRejection::AlreadyUsed)
        } else {
            None
        };

        LadderValidation {
            is_valid: rejection.is_none(),
            is_valid_word,
            is_one_letter_diff,
            already_used,
            changed_positions,
            rejection,
        }
    }
}

/// Indices at which two equal-length words differ. Words of different
/// length have no comparable positions and yield an empty list.
pub fn changed_positions(from: &str, to: &str) -> Vec<usize> {
    if from.chars().count() != to.chars().count() {
        return Vec::new();
    }
    from.chars()
        .zip(to.chars())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(index, _)| index)
        .collect()
}

/// Same length and exactly one position differs.
pub fn is_one_letter_difference(a: &str, b: &str) -> bool {
    changed_positions(a, b).len() == 1
}

/// Dictionary words one substitution away from `word`, by position then
/// letter.
pub fn one_letter_neighbours(word: &str, dictionary: &dyn Dictionary) -> Vec<String> {
    let letters: Vec<char> = word.chars().collect();
    let mut neighbours = Vec::new();
    for index in 0..letters.len() {
        for replacement in 'a'..='z' {
            if replacement == letters[index] {
                continue;
            }
            let mut candidate = letters.clone();
            candidate[index] = replacement;
            let candidate: String = candidate.into_iter().collect();
            if dictionary.is_valid_word(&candidate) {
                neighbours.push(candidate);
            }
        }
    }
    neighbours
}

/// Breadth-first shortest ladder from `start` to `target`, both ends
/// included. `None` when the words are unconnected.
pub fn shortest_ladder(
    start: &str,
    target: &str,
    dictionary: &dyn Dictionary,
) -> Option<Vec<String>> {
    if start == target {
        return Some(vec![start.to_string()]);
    }

    let mut previous: HashMap<String, Option<String>> = HashMap::new();
    let mut queue = VecDeque::new();
    previous.insert(start.to_string(), None);
    queue.push_back(start.to_string());

    while let Some(word) = queue.pop_front() {
        for next in one_letter_neighbours(&word, dictionary) {
            if previous.contains_key(&next) {
                continue;
            }
            previous.insert(next.clone(), Some(word.clone()));
            if next == target {
                return Some(unwind(&previous, next));
            }
            queue.push_back(next);
        }
    }
    None
}

fn unwind(previous: &HashMap<String, Option<String>>, end: String) -> Vec<String> {
    let mut ladder = vec![end];
    while let Some(Some(prior)) = ladder.last().and_then(|word| previous.get(word)) {
        ladder.push(prior.clone());
    }
    ladder.reverse();
    ladder
}
