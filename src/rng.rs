//! Per-request random stream.
//!
//! Every randomized decision of one render (palette, layer placement, shape
//! jitter) is drawn from a single `RngStream`, in a fixed order. Streams are
//! passed around as `&mut` and never shared between renders, so two renders
//! with the same seed always produce the same poster.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seeded (or entropy-initialized) pseudo-random sequence.
#[derive(Debug)]
pub struct RngStream {
    rng: StdRng,
    seed: Option<i64>,
}

impl RngStream {
    /// Create a stream from an optional integer seed.
    ///
    /// `None` initializes from ambient entropy.
    pub fn new(seed: Option<i64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        };
        Self { rng, seed }
    }

    /// Create a stream from raw seed input such as a CLI argument.
    ///
    /// Blank input, or input that is not an integer, falls back to entropy.
    pub fn from_input(input: Option<&str>) -> Self {
        Self::new(input.and_then(parse_seed))
    }

    /// The seed this stream was created with, if any.
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    /// Draw a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draw a float in `[lo, hi)`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Draw an integer in `lo..=hi`.
    pub fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }

    /// Draw an index in `0..len`. Returns `None` for an empty range.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

/// Parse seed input, ignoring surrounding whitespace.
///
/// Returns `None` for blank or non-integer input; a warning is logged for
/// the latter since the caller asked for a seed and is not getting one.
pub fn parse_seed(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.parse::<i64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            tracing::warn!(seed = input, "seed is not an integer, using a random seed");
            None
        }
    }
}

/// Fold a regeneration counter into seed input.
///
/// - blank input: the counter itself becomes the seed once it is non-zero
/// - integer input: `base + reroll`
/// - anything else: no seed
pub fn effective_seed(input: Option<&str>, reroll: u64) -> Option<i64> {
    let input = input.map(str::trim).unwrap_or("");
    if input.is_empty() {
        return (reroll > 0).then_some(reroll as i64);
    }
    parse_seed(input).map(|base| base.wrapping_add(reroll as i64))
}
