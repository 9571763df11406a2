//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the aligner's inputs, as well as wrapper types with stronger
//! guarantees.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::data::{ALPHABET_SIZE, WeightMatrix};
use arbitrary::{Arbitrary, Result, Unstructured};

/// An encoded sequence where every symbol is less than [`ALPHABET_SIZE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSequence(pub Vec<u8>);

impl<'a> Arbitrary<'a> for SymbolSequence {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let len = u.arbitrary_len::<u8>()?;
        let mut symbols = Vec::with_capacity(len);
        for _ in 0..len {
            symbols.push(u.int_in_range(0..=(ALPHABET_SIZE as u8 - 1))?);
        }
        Ok(SymbolSequence(symbols))
    }
}

/// Wrapper for a [`WeightMatrix`] whose weights lie in `-MAX..=MAX`, so that
/// short alignments cannot come near the 16-bit score ceiling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedWeightMatrix<const MAX: i8>(pub WeightMatrix);

impl<'a, const MAX: i8> Arbitrary<'a> for BoundedWeightMatrix<MAX> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut weights = [[0i8; ALPHABET_SIZE]; ALPHABET_SIZE];
        for weight in weights.iter_mut().flatten() {
            *weight = u.int_in_range(-MAX..=MAX)?;
        }
        Ok(BoundedWeightMatrix(WeightMatrix::new_custom(weights)))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (ALPHABET_SIZE * ALPHABET_SIZE, Some(ALPHABET_SIZE * ALPHABET_SIZE))
    }
}

impl<'a> Arbitrary<'a> for WeightMatrix {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(WeightMatrix::new_custom(<[[i8; ALPHABET_SIZE]; ALPHABET_SIZE]>::arbitrary(u)?))
    }
}

/// A pair of gap penalties satisfying `gap_extend <= gap_open`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GapPenalties {
    pub gap_open:   u8,
    pub gap_extend: u8,
}

impl<'a> Arbitrary<'a> for GapPenalties {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let gap_open = u.int_in_range(0..=u8::MAX)?;
        let gap_extend = u.int_in_range(0..=gap_open)?;
        Ok(GapPenalties { gap_open, gap_extend })
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (2, Some(2))
    }
}

/// A complete set of inputs for one call to [`align`](crate::align).
#[derive(Clone, Debug, Arbitrary)]
pub struct AlignmentInputs {
    pub query:     SymbolSequence,
    pub reference: SymbolSequence,
    pub matrix:    BoundedWeightMatrix<8>,
    pub gaps:      GapPenalties,
}
