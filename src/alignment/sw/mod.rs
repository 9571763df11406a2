//! ## Smith-Waterman Alignment
//!
//! For the optimal local alignment with both its start and end coordinates,
//! use [`align`] (or [`sw_align`] to choose the number of lanes). For the
//! score and end coordinates only, build a [`StripedProfile`] and call
//! [`StripedProfile::smith_waterman_ends`].
//!
//! ### Affine Gap Penalties
//!
//! We use the affine gap formula, $W(k) = u(k-1) + v$, where $k$ is the gap
//! length, $u$ is the gap extend penalty, $v$ is the gap open penalty, and
//! $W(k)$ is the total penalty for the gap. Penalties are passed as positive
//! values, and the gap extend penalty may not exceed the gap open penalty.
//!
//! ### Usage Note
//!
//! 1. Encode the sequences with [`encode_dna`] (or any mapping onto the
//!    five-symbol alphabet, with 4 as the ambiguous symbol).
//!
//! 2. Specify the [`WeightMatrix`] used for scoring matches and mismatches. For
//!    DNA, [`new_dna_matrix`] is a convenient constructor.
//!
//! 3. Either call [`align`] directly, or build the query profile with
//!    [`StripedProfile::new`] and reuse it against any number of references.
//!
//! Note: Scalar versions ([`sw_scalar_score_ends`], [`sw_scalar_align`], and
//! [`ScalarProfile`]) are also available for fuzzing and testing purposes.
//!
//! ```
//! # use ssw_lite::{alignment::{LocalAlignment, MaybeAligned}, align, data::{WeightMatrix, encode_dna}};
//! let reference = encode_dna(b"AATCGTCAGATCNNAGTCTGC");
//! let query = encode_dna(b"ATCGN");
//!
//! const WEIGHTS: WeightMatrix = WeightMatrix::new_dna_matrix(2, -2, None);
//! const GAP_OPEN: u8 = 3;
//! const GAP_EXTEND: u8 = 1;
//!
//! let alignment = align(&query, &reference, &WEIGHTS, GAP_OPEN, GAP_EXTEND).unwrap();
//! assert_eq!(
//!     alignment,
//!     MaybeAligned::Some(LocalAlignment {
//!         score:       8,
//!         ref_begin:   1,
//!         ref_end:     4,
//!         query_begin: 0,
//!         query_end:   3,
//!     })
//! );
//! ```
//!
//! Scores are 16-bit and saturate. If the best score reaches [`u16::MAX`] the
//! result is [`MaybeAligned::Overflowed`].
//!
//! ## Module Citations
//!
//! 1. Smith, Temple F. & Waterman, Michael S. (1981). "Identification of
//!    Common Molecular Subsequences" (PDF). Journal of Molecular Biology. 147
//!    (1): 195–197.
//!
//! 2. Osamu Gotoh, An improved algorithm for matching biological sequences,
//!    Journal of Molecular Biology, Volume 162, Issue 3, 1982, Pages 705-708.
//!
//! 3. Michael Farrar, Striped Smith–Waterman speeds database searches six times
//!    over other SIMD implementations, Bioinformatics, Volume 23, Issue 2,
//!    January 2007, Pages 156–161.
//!
//! 4. Mengyao Zhao, Wan-Ping Lee, Erik P. Garrison, Gabor T. Marth, SSW
//!    Library: An SIMD Smith-Waterman C/C++ Library for Use in Genomic
//!    Applications, PLOS ONE, 2013. <https://github.com/mengyao/Complete-Striped-Smith-Waterman-Library>
//!
//! [`encode_dna`]: crate::data::encode_dna
//! [`WeightMatrix`]: crate::data::WeightMatrix
//! [`new_dna_matrix`]: crate::data::WeightMatrix::new_dna_matrix
//! [`StripedProfile`]: crate::alignment::StripedProfile
//! [`StripedProfile::new`]: crate::alignment::StripedProfile::new
//! [`StripedProfile::smith_waterman_ends`]: crate::alignment::StripedProfile::smith_waterman_ends
//! [`ScalarProfile`]: crate::alignment::ScalarProfile

use crate::alignment::*;

/// The number of lanes used by [`align`].
pub const LANES: usize = 8;

#[cfg(test)]
pub(crate) mod test_data {
    use crate::data::{WeightMatrix, encode_dna};
    use std::sync::LazyLock;

    pub(crate) static REFERENCE: LazyLock<Vec<u8>> = LazyLock::new(|| encode_dna(b"AATCGTCAGATCNNAGTCTGC"));
    pub(crate) static QUERY: LazyLock<Vec<u8>> = LazyLock::new(|| encode_dna(b"ATCGN"));

    pub(crate) static WEIGHTS: WeightMatrix = WeightMatrix::new_dna_matrix(2, -2, None);

    pub(crate) const GAP_OPEN: u8 = 3;
    pub(crate) const GAP_EXTEND: u8 = 1;
}


mod scalar;
mod striped;
mod two_pass;

pub use scalar::*;
pub use striped::*;
pub use two_pass::*;
