//! ## Symbol encoding, weight matrices, and error utilities.
//!
//! The aligner works on a fixed alphabet of [`ALPHABET_SIZE`] small integer
//! symbols: the four nucleotides `A`, `C`, `G`, `T` as 0 through 3 and a
//! catch-all ambiguous symbol 4 (written `N`). Raw sequences are converted
//! with [`encode_dna`] (or any other [`ByteIndexMap`]) and scored with a
//! [`WeightMatrix`].
//!
//! ```
//! # use ssw_lite::data::{WeightMatrix, encode_dna};
//! assert_eq!(encode_dna(b"ATCGN"), vec![0, 3, 1, 2, 4]);
//! assert_eq!(encode_dna(b"acgu-"), vec![0, 1, 2, 4, 4]);
//!
//! const WEIGHTS: WeightMatrix = WeightMatrix::new_dna_matrix(2, -2, None);
//! assert_eq!(WEIGHTS.get_weight(0, 0), 2);
//! assert_eq!(WEIGHTS.get_weight(0, 3), -2);
//! assert_eq!(WEIGHTS.get_weight(4, 1), 0);
//! ```

/// Error traits shared across the crate.
pub mod err;
/// Substitution/scoring matrices.
pub mod matrices;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;

mod mappings;
pub(crate) mod vec_types;

pub use mappings::*;
pub use matrices::WeightMatrix;

/// Number of symbols in the alphabet: `A`, `C`, `G`, `T`, and the ambiguous
/// catch-all.
pub const ALPHABET_SIZE: usize = 5;

/// The symbol used for any byte that is not a recognized nucleotide.
pub const AMBIGUOUS_SYMBOL: u8 = 4;
