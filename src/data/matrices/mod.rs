//! ## Substitution/Scoring Matrices for Alignment
//!
//! A [`WeightMatrix`] holds the score for aligning every reference symbol
//! against every query symbol. Rows are indexed by the reference symbol and
//! columns by the query symbol. The matrix need not be symmetric.
//!
//! Pairs involving the ambiguous symbol may either score 0 or carry a fixed
//! penalty; both are used in practice, so [`WeightMatrix::new_dna_matrix`]
//! takes the ambiguous score as an option rather than hardcoding it.

use crate::data::{ALPHABET_SIZE, AMBIGUOUS_SYMBOL, DNA_PROFILE_MAP};
use std::fmt::Display;

/// A 5x5 matrix of signed weights used to score aligned symbols.
///
/// ## Example
///
/// ```
/// # use ssw_lite::data::WeightMatrix;
/// const WEIGHTS: WeightMatrix = WeightMatrix::new_dna_matrix(2, -2, None);
/// assert_eq!(
///     WEIGHTS.weights,
///     [
///         [2, -2, -2, -2, 0],
///         [-2, 2, -2, -2, 0],
///         [-2, -2, 2, -2, 0],
///         [-2, -2, -2, 2, 0],
///         [0, 0, 0, 0, 0],
///     ]
/// );
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WeightMatrix {
    pub weights: [[i8; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl WeightMatrix {
    /// Creates a new [`WeightMatrix`] with a fixed `matching` score and
    /// `mismatch` score for the four nucleotides. Any pair involving the
    /// ambiguous symbol scores `ambiguous`, or 0 if it is [`None`].
    ///
    /// `mismatch` is used as given, so a penalty should be passed as a
    /// negative number.
    #[must_use]
    pub const fn new_dna_matrix(matching: i8, mismatch: i8, ambiguous: Option<i8>) -> Self {
        let ambiguous = match ambiguous {
            Some(weight) => weight,
            None => 0,
        };

        let mut weights = [[0i8; ALPHABET_SIZE]; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let mut j = 0;
            while j < ALPHABET_SIZE {
                weights[i][j] = if i == AMBIGUOUS_SYMBOL as usize || j == AMBIGUOUS_SYMBOL as usize {
                    ambiguous
                } else if i == j {
                    matching
                } else {
                    mismatch
                };
                j += 1;
            }
            i += 1;
        }

        WeightMatrix { weights }
    }

    /// Creates a new [`WeightMatrix`] from an arbitrary table.
    #[inline]
    #[must_use]
    pub const fn new_custom(weights: [[i8; ALPHABET_SIZE]; ALPHABET_SIZE]) -> Self {
        WeightMatrix { weights }
    }

    /// Creates a new [`WeightMatrix`] from a closure accepting the reference
    /// symbol as the first argument and the query symbol as the second.
    pub fn new_from_fn<F>(mut weight_fn: F) -> Self
    where
        F: FnMut(u8, u8) -> i8, {
        let mut weights = [[0i8; ALPHABET_SIZE]; ALPHABET_SIZE];
        for (ref_symbol, row) in (0u8..).zip(weights.iter_mut()) {
            for (query_symbol, weight) in (0u8..).zip(row.iter_mut()) {
                *weight = weight_fn(ref_symbol, query_symbol);
            }
        }
        WeightMatrix { weights }
    }

    /// For a given `ref_symbol` and `query_symbol`, retrieves the weight
    /// stored in the matrix.
    ///
    /// ## Panics
    ///
    /// Both symbols must be less than [`ALPHABET_SIZE`].
    #[inline]
    #[must_use]
    pub const fn get_weight(&self, ref_symbol: u8, query_symbol: u8) -> i8 {
        self.weights[ref_symbol as usize][query_symbol as usize]
    }

    /// The largest weight in the matrix. A query of length `m` cannot score
    /// more than `m` times this value.
    #[must_use]
    pub const fn max_weight(&self) -> i8 {
        let mut max = i8::MIN;
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let mut j = 0;
            while j < ALPHABET_SIZE {
                if self.weights[i][j] > max {
                    max = self.weights[i][j];
                }
                j += 1;
            }
            i += 1;
        }
        max
    }
}

impl Display for WeightMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .weights
            .iter()
            .flatten()
            .map(|val| val.to_string().len())
            .max()
            .unwrap_or(1)
            + 1;

        let residues = DNA_PROFILE_MAP.byte_keys();

        write!(f, "  ")?;
        for residue in residues {
            write!(f, "{residue:>width$}", residue = *residue as char)?;
        }
        writeln!(f)?;

        for (row, residue) in self.weights.iter().zip(residues) {
            write!(f, "{residue} ", residue = *residue as char)?;
            for val in row {
                write!(f, "{val:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ambiguous_variants() {
        let zero = WeightMatrix::new_dna_matrix(2, -2, None);
        let penalized = WeightMatrix::new_dna_matrix(2, -2, Some(-1));

        assert_eq!(zero.get_weight(4, 4), 0);
        assert_eq!(zero.get_weight(2, 4), 0);
        assert_eq!(penalized.get_weight(4, 4), -1);
        assert_eq!(penalized.get_weight(4, 0), -1);
        assert_eq!(penalized.get_weight(1, 1), 2);
        assert_eq!(penalized.get_weight(1, 2), -2);
    }

    #[test]
    fn from_fn_matches_custom() {
        let asymmetric = WeightMatrix::new_from_fn(|r, q| if r == q { 3 } else { i8::try_from(r).unwrap() - 5 });
        assert_eq!(asymmetric.get_weight(1, 0), -4);
        assert_eq!(asymmetric.get_weight(0, 1), -5);
        assert_eq!(asymmetric, WeightMatrix::new_custom(asymmetric.weights));
        assert_eq!(asymmetric.max_weight(), 3);
    }

    #[test]
    fn display() {
        let matrix = WeightMatrix::new_dna_matrix(2, -2, None);
        let expected = "    A  C  G  T  N\n\
                        A   2 -2 -2 -2  0\n\
                        C  -2  2 -2 -2  0\n\
                        G  -2 -2  2 -2  0\n\
                        T  -2 -2 -2  2  0\n\
                        N   0  0  0  0  0\n";
        assert_eq!(matrix.to_string(), expected);
    }
}
