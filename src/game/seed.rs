//! Deterministic seeds and the puzzle random stream
//!
//! Every player on a given calendar date must see the same puzzle, so all
//! randomness flows from a string seed through a tiny linear-congruential
//! generator. The arithmetic is fixed: a 32-bit polynomial string hash
//! followed by `state = (state * 9301 + 49297) mod 233280`.
//!
//! This is a fairness mechanism, not a source of security-grade randomness.

use chrono::{NaiveDate, Utc};
use rand::RngCore;

/// LCG multiplier
const MULTIPLIER: i64 = 9301;
/// LCG increment
const INCREMENT: i64 = 49297;
/// LCG modulus; outputs are `state / MODULUS`
const MODULUS: i64 = 233_280;

/// Prefix shared by all daily seeds
const SEED_PREFIX: &str = "puzzle-";

/// Build the seed for a calendar date: `puzzle-YYYY-MM-DD`.
pub fn daily_seed(date: NaiveDate) -> String {
    format!("{}{}", SEED_PREFIX, date.format("%Y-%m-%d"))
}

/// Seed for today's UTC date.
pub fn today_seed() -> String {
    daily_seed(today())
}

/// Today's UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 32-bit signed polynomial hash of a string (`h = h * 31 + unit`).
///
/// Iterates UTF-16 code units and wraps at 32 bits so that the value is
/// identical on every platform.
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Seeded pseudo-random stream.
///
/// The state is a plain integer so it can be inspected and replayed in
/// tests. Outputs are always in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    /// Create a stream from a string seed.
    pub fn new(seed: &str) -> Self {
        Self::from_state(seed_hash(seed) as i64)
    }

    /// Resume a stream from a previously observed state.
    pub fn from_state(state: i64) -> Self {
        Self { state }
    }

    /// Current raw state.
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Advance the generator and return the new raw state in `0..233280`.
    ///
    /// Negative hashes are folded with a Euclidean remainder so that the
    /// stream never leaves the unit interval.
    pub fn next_state(&mut self) -> i64 {
        self.state = (self.state * MULTIPLIER + INCREMENT).rem_euclid(MODULUS);
        self.state
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_state() as f64 / MODULUS as f64
    }

    /// Uniform index in `0..len` as `floor(next_f64() * len)`.
    ///
    /// Returns 0 for an empty range without consuming a value.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len - 1)
    }

    /// Deterministic Fisher-Yates shuffle, walking from the back.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.next_index(i + 1);
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// Shuffle then keep the first `count` items.
    pub fn select<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut shuffled = self.shuffle(items);
        shuffled.truncate(count);
        shuffled
    }

    /// Draw `count` items by weight.
    ///
    /// Each draw subtracts weights from `next_f64() * total` until the
    /// remainder drops to zero or below; a walk that never gets there picks
    /// the first item. Returns `None` when `items` and `weights` differ in
    /// length.
    pub fn weighted_selection<T: Clone>(
        &mut self,
        items: &[T],
        weights: &[f64],
        count: usize,
    ) -> Option<Vec<T>> {
        if items.len() != weights.len() {
            return None;
        }
        if items.is_empty() {
            return Some(Vec::new());
        }

        let total: f64 = weights.iter().sum();
        let mut selected = Vec::with_capacity(count);

        for _ in 0..count {
            let mut remaining = self.next_f64() * total;
            let mut chosen = 0;
            for (index, weight) in weights.iter().enumerate() {
                remaining -= weight;
                if remaining <= 0.0 {
                    chosen = index;
                    break;
                }
            }
            selected.push(items[chosen].clone());
        }

        Some(selected)
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * u32::MAX as f64) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.next_u32() as u64;
        let low = self.next_u32() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
