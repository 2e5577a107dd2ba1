//! TOML configuration
//!
//! Every key is optional; an empty file gives the built-in settings.
//!
//! ```toml
//! [boggle]
//! time_limit = 180
//!
//! [word_ladder]
//! time_limit = 300
//! max_hints = 3
//!
//! [dictionary]
//! boggle_words = "/usr/share/puzzles/boggle.txt"
//! ladder_words = "/usr/share/puzzles/ladder.txt"
//! ```

use crate::boggle::engine::BoggleEngine;
use crate::game::dictionary::{
    boggle_words, ladder_words, Dictionary, WordList, DEFAULT_MIN_WORD_LENGTH,
};
use crate::game::GameConfig;
use crate::ladder::engine::{WordLadderEngine, DEFAULT_MAX_HINTS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub boggle: BoggleSettings,
    pub word_ladder: LadderSettings,
    pub dictionary: DictionarySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoggleSettings {
    /// Seconds on the clock
    pub time_limit: u32,
}

impl Default for BoggleSettings {
    fn default() -> Self {
        BoggleSettings {
            time_limit: GameConfig::boggle().time_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderSettings {
    /// Seconds on the clock
    pub time_limit: u32,
    pub max_hints: u32,
}

impl Default for LadderSettings {
    fn default() -> Self {
        LadderSettings {
            time_limit: GameConfig::word_ladder().time_limit,
            max_hints: DEFAULT_MAX_HINTS,
        }
    }
}

/// Word list overrides. Unset paths use the embedded lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionarySettings {
    pub boggle_words: Option<PathBuf>,
    pub ladder_words: Option<PathBuf>,
}

impl Config {
    /// Read and validate a config file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(?config, "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boggle.time_limit == 0 {
            return Err(ConfigError::Invalid(
                "boggle.time_limit must be greater than 0".to_string(),
            ));
        }
        if self.word_ladder.time_limit == 0 {
            return Err(ConfigError::Invalid(
                "word_ladder.time_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn boggle_config(&self) -> GameConfig {
        GameConfig {
            time_limit: self.boggle.time_limit,
            ..GameConfig::boggle()
        }
    }

    pub fn word_ladder_config(&self) -> GameConfig {
        GameConfig {
            time_limit: self.word_ladder.time_limit,
            ..GameConfig::word_ladder()
        }
    }

    /// The Boggle dictionary. An unreadable override rejects every word.
    pub fn boggle_dictionary(&self) -> Arc<dyn Dictionary> {
        match &self.dictionary.boggle_words {
            Some(path) => Arc::new(WordList::load_or_empty(path, DEFAULT_MIN_WORD_LENGTH)),
            None => boggle_words(),
        }
    }

    /// The Word Ladder dictionary. An unreadable override rejects every word.
    pub fn ladder_dictionary(&self) -> Arc<dyn Dictionary> {
        match &self.dictionary.ladder_words {
            Some(path) => Arc::new(WordList::load_or_empty(path, DEFAULT_MIN_WORD_LENGTH)),
            None => ladder_words(),
        }
    }

    /// Daily Boggle engine built from these settings.
    pub fn boggle_engine(&self, date: NaiveDate) -> BoggleEngine {
        BoggleEngine::new(self.boggle_dictionary(), self.boggle_config(), date)
    }

    /// Daily Word Ladder engine built from these settings.
    pub fn word_ladder_engine(&self, date: NaiveDate) -> WordLadderEngine {
        WordLadderEngine::new(self.ladder_dictionary(), self.word_ladder_config(), date)
            .with_max_hints(self.word_ladder.max_hints)
    }
}
