//! Dictionary module for word validation
//!
//! Two word lists are embedded at build time, one for each game. Both are
//! lowercase, alphabetic only, one word per line. Lookups are O(1) hash set
//! hits with case-insensitive matching.
//!
//! A dictionary that cannot be loaded is not an error for gameplay: it
//! degrades to an empty list that rejects every word, so the game stays
//! responsive and the failure shows up in the logs instead.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Embedded Boggle word list
static BOGGLE_WORDS_DATA: &str = include_str!("../../data/boggle_words.txt");

/// Embedded Word Ladder word list
static LADDER_WORDS_DATA: &str = include_str!("../../data/ladder_words.txt");

/// Minimum word length accepted by either game's dictionary
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

static BOGGLE_WORDS: Lazy<Arc<WordList>> = Lazy::new(|| {
    Arc::new(WordList::from_lines(BOGGLE_WORDS_DATA, DEFAULT_MIN_WORD_LENGTH))
});

static LADDER_WORDS: Lazy<Arc<WordList>> = Lazy::new(|| {
    Arc::new(WordList::from_lines(LADDER_WORDS_DATA, DEFAULT_MIN_WORD_LENGTH))
});

/// Errors from loading a word list off disk.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Set-membership collaborator consulted by the word search and both
/// session engines.
pub trait Dictionary {
    /// Exact membership of an already-lowercased word.
    fn contains(&self, word: &str) -> bool;

    /// Whether some word starts with `prefix` (lowercase).
    ///
    /// Used only to prune searches; implementations that cannot answer
    /// must return `true`.
    fn has_prefix(&self, _prefix: &str) -> bool {
        true
    }

    /// Shortest word this dictionary will accept.
    fn min_word_length(&self) -> usize {
        DEFAULT_MIN_WORD_LENGTH
    }

    /// Case-insensitive, length-gated validity check.
    fn is_valid_word(&self, word: &str) -> bool {
        if word.chars().count() < self.min_word_length() {
            return false;
        }
        self.contains(&word.to_lowercase())
    }
}

/// In-memory word list with prefix index.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
    prefixes: HashSet<String>,
    min_word_length: usize,
}

impl WordList {
    /// Build from any collection of words. Words are lowercased and blank
    /// entries dropped.
    pub fn new<I, S>(words: I, min_word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList {
            min_word_length,
            ..Default::default()
        };
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Build from newline-separated text.
    pub fn from_lines(text: &str, min_word_length: usize) -> Self {
        Self::new(text.lines(), min_word_length)
    }

    /// Read a newline-separated word list from disk.
    pub fn from_path(path: &Path, min_word_length: usize) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_lines(&text, min_word_length);
        debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Read a word list, falling back to an empty (always-invalid) list if
    /// the file cannot be read.
    pub fn load_or_empty(path: &Path, min_word_length: usize) -> Self {
        match Self::from_path(path, min_word_length) {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "dictionary unavailable, every word will be rejected");
                Self::empty(min_word_length)
            }
        }
    }

    /// A list that rejects everything.
    pub fn empty(min_word_length: usize) -> Self {
        Self::new(std::iter::empty::<&str>(), min_word_length)
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        for (index, _) in word.char_indices().skip(1) {
            self.prefixes.insert(word[..index].to_string());
        }
        self.prefixes.insert(word.clone());
        self.words.insert(word);
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.prefixes.contains(prefix)
    }

    fn min_word_length(&self) -> usize {
        self.min_word_length
    }
}

/// Shared handle to the embedded Boggle word list.
pub fn boggle_words() -> Arc<WordList> {
    Arc::clone(&BOGGLE_WORDS)
}

/// Shared handle to the embedded Word Ladder word list.
pub fn ladder_words() -> Arc<WordList> {
    Arc::clone(&LADDER_WORDS)
}
