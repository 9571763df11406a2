#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Alignment functions
pub mod alignment;
/// Symbol encoding, weight matrices, and error utilities.
pub mod data;
/// Fixed-width lane vectors used by the striped algorithm.
pub mod simd;

/// Seeded generation of random inputs.
#[cfg(feature = "rand")]
pub mod generate;

pub use alignment::sw::{LANES, align};

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{
        AlignmentError, LocalAlignment, MaybeAligned, ScanDirection, ScoreAndEnds, StripedProfile,
        sw::{LANES, align, sw_align},
    };
    pub use crate::data::{DNA_PROFILE_MAP, WeightMatrix, encode_dna, err::GetCode};
}
