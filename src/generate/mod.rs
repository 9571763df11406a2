//! ## Seeded random inputs
//!
//! [`SequenceGenerator`] produces encoded symbol sequences, weight matrices,
//! and gap penalties from a fixed seed, so that randomized tests are
//! reproducible.
#![allow(clippy::cast_possible_truncation)]

use crate::data::{ALPHABET_SIZE, WeightMatrix};
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// A seeded source of alignment inputs.
#[derive(Clone, Debug)]
pub struct SequenceGenerator {
    rng: Xoshiro256PlusPlus,
}

impl SequenceGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        SequenceGenerator {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// A value in `0..bound`.
    ///
    /// ## Panics
    ///
    /// `bound` must be nonzero.
    #[inline]
    pub fn below(&mut self, bound: usize) -> usize {
        self.rng.next_u32() as usize % bound
    }

    /// A length in `1..=max`.
    ///
    /// ## Panics
    ///
    /// `max` must be nonzero.
    #[inline]
    pub fn length(&mut self, max: usize) -> usize {
        self.below(max) + 1
    }

    /// `len` encoded symbols, including the ambiguous symbol.
    #[must_use]
    pub fn symbols(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| (self.rng.next_u32() % ALPHABET_SIZE as u32) as u8).collect()
    }

    /// A copy of `seq` with roughly `percent` of its positions substituted,
    /// inserted after, or deleted.
    #[must_use]
    pub fn mutate(&mut self, seq: &[u8], percent: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(seq.len() + seq.len() / 4);
        for &symbol in seq {
            if self.below(100) >= percent {
                out.push(symbol);
                continue;
            }
            match self.below(3) {
                0 => out.extend(self.symbols(1)),
                1 => {
                    out.push(symbol);
                    out.extend(self.symbols(1));
                }
                _ => {}
            }
        }
        out
    }

    /// A matrix with every weight in `-max..=max`.
    #[must_use]
    pub fn weight_matrix(&mut self, max: i8) -> WeightMatrix {
        let max = max.clamp(0, i8::MAX);
        let span = 2 * usize::from(max.unsigned_abs()) + 1;
        WeightMatrix::new_from_fn(|_, _| {
            let offset = i16::try_from(self.below(span)).unwrap_or(0);
            i8::try_from(offset - i16::from(max)).unwrap_or(0)
        })
    }

    /// A `(gap_open, gap_extend)` pair with `gap_extend <= gap_open <=
    /// max_open`.
    #[must_use]
    pub fn gap_penalties(&mut self, max_open: u8) -> (u8, u8) {
        let gap_open = self.below(usize::from(max_open) + 1);
        let gap_extend = self.below(gap_open + 1);
        // Both are at most max_open
        (
            u8::try_from(gap_open).unwrap_or(max_open),
            u8::try_from(gap_extend).unwrap_or(max_open),
        )
    }
}
