//! ## Functions for aligning sequence data.
//!
//! - [Smith-Waterman]: Optimal local alignment score and coordinates in the
//!   [`sw`] module.
//!
//! [Smith-Waterman]: https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm

pub mod sw;

mod errors;
mod profile;
mod types;

pub use errors::*;
pub use profile::*;
pub use types::*;
