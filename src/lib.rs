//! Daily word puzzles
//!
//! Two deterministic daily games share one session lifecycle:
//! - Boggle: a seeded 4x4 letter grid, exhaustive word search, path-building play
//! - Word Ladder: a curated start/target pair chosen by date, one-letter steps
//!
//! The same calendar date always produces the same puzzles on every machine.

pub mod boggle;
pub mod config;
pub mod game;
pub mod ladder;
