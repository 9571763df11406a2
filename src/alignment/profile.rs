use crate::{
    alignment::{
        AlignmentError, LocalAlignment, MaybeAligned, ScanDirection, ScoreAndEnds,
        sw::{sw_scalar_align, sw_scalar_score_ends, sw_striped_align, sw_striped_score_ends},
    },
    data::{
        ALPHABET_SIZE, WeightMatrix,
        vec_types::{try_copied, try_filled_vec, try_reversed},
    },
    simd::Lanes,
};

/// Validate the arguments for [`ScalarProfile`] or [`StripedProfile`].
///
/// ## Errors
///
/// The following errors are possible:
/// * [`AlignmentError::EmptyQuery`] if `query` is empty
/// * [`AlignmentError::InvalidSymbol`] if `query` contains a symbol outside of
///   the alphabet
/// * [`AlignmentError::BadGapWeights`] if `gap_extend` is greater than
///   `gap_open`
#[inline]
pub(crate) fn validate_profile_args(query: &[u8], gap_open: u8, gap_extend: u8) -> Result<(), AlignmentError> {
    if query.is_empty() {
        Err(AlignmentError::EmptyQuery)
    } else if gap_extend > gap_open {
        Err(AlignmentError::BadGapWeights { gap_open, gap_extend })
    } else {
        validate_symbols(query)
    }
}

/// Checks that every symbol of `seq` is an index into the alphabet.
///
/// ## Errors
///
/// Returns [`AlignmentError::InvalidSymbol`] for the first symbol that is not.
#[inline]
pub(crate) fn validate_symbols(seq: &[u8]) -> Result<(), AlignmentError> {
    match seq.iter().position(|&s| usize::from(s) >= ALPHABET_SIZE) {
        Some(position) => Err(AlignmentError::InvalidSymbol {
            symbol: seq[position],
            position,
        }),
        None => Ok(()),
    }
}

/// Maps a query position to its `(vector, lane)` slot in a striped profile
/// with `number_vectors` vectors.
///
/// Position `p` lives in vector `p % number_vectors` and lane
/// `p / number_vectors`, so consecutive positions are spread across vectors
/// rather than packed into one.
///
/// ## Panics
///
/// `number_vectors` must be nonzero.
///
/// ## Example
///
/// ```
/// # use ssw_lite::alignment::{logical_index, striped_index};
/// // A query of length 10 striped over 4 lanes uses 3 vectors
/// assert_eq!(striped_index(0, 3), (0, 0));
/// assert_eq!(striped_index(4, 3), (1, 1));
/// assert_eq!(striped_index(9, 3), (0, 3));
/// assert_eq!(logical_index(1, 1, 3), 4);
/// ```
#[inline]
#[must_use]
pub const fn striped_index(position: usize, number_vectors: usize) -> (usize, usize) {
    (position % number_vectors, position / number_vectors)
}

/// The inverse of [`striped_index`]: the query position stored at `lane` of
/// `vector`. Positions at or past the query length are padding.
#[inline]
#[must_use]
pub const fn logical_index(vector: usize, lane: usize, number_vectors: usize) -> usize {
    vector + lane * number_vectors
}

/// A profile for sequence alignment using scalar operations.
///
/// The profile stores the query, weight matrix, and gap penalties to be used in
/// an alignment. The API mirrors that of [`StripedProfile`], but this profile
/// does not create a striped layout. It is mostly useful for testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarProfile<'a> {
    pub(crate) query:      &'a [u8],
    pub(crate) matrix:     WeightMatrix,
    pub(crate) gap_open:   i32,
    pub(crate) gap_extend: i32,
}

impl<'a> ScalarProfile<'a> {
    /// Create a new profile for use with the scalar alignment algorithm.
    ///
    /// ## Errors
    ///
    /// The same as [`StripedProfile::new`], apart from allocation failures.
    pub fn new(query: &'a [u8], matrix: &WeightMatrix, gap_open: u8, gap_extend: u8) -> Result<Self, AlignmentError> {
        validate_profile_args(query, gap_open, gap_extend)?;

        Ok(ScalarProfile {
            query,
            matrix: *matrix,
            gap_open: i32::from(gap_open),
            gap_extend: i32::from(gap_extend),
        })
    }

    /// The best local score against `reference` and where it ends.
    ///
    /// For more info, see: [`sw_scalar_score_ends`].
    ///
    /// ## Errors
    ///
    /// [`AlignmentError::InvalidSymbol`] if `reference` contains a symbol
    /// outside of the alphabet.
    #[inline]
    pub fn smith_waterman_ends(&self, reference: &[u8]) -> Result<MaybeAligned<ScoreAndEnds>, AlignmentError> {
        sw_scalar_score_ends(reference, self, ScanDirection::Forward, None)
    }

    /// The best local alignment against `reference`, with both its start and
    /// end coordinates.
    ///
    /// For more info, see: [`sw_scalar_align`].
    ///
    /// ## Errors
    ///
    /// See [`sw_scalar_align`].
    #[inline]
    pub fn smith_waterman_alignment(&self, reference: &[u8]) -> Result<MaybeAligned<LocalAlignment>, AlignmentError> {
        sw_scalar_align(reference, self)
    }
}

/// A striped profile for DNA sequence alignment using lane vectors.
///
/// The profile contains pre-computed scoring vectors for each symbol of the
/// alphabet, arranged in a striped pattern: the vector for reference symbol
/// `s` and index `v` holds, in lane `k`, the weight of aligning `s` against
/// query position `v + k * number_vectors` (see [`striped_index`]). Lanes past
/// the end of the query hold 0.
///
/// The query symbols and weight matrix are kept alongside the vectors so the
/// reverse profile used to locate an alignment's start can be derived from
/// the profile alone (see [`StripedProfile::reverse_from_forward`]).
///
/// ## Type Parameters
/// * `N` - The number of lanes (usually 8 or 16)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StripedProfile<const N: usize> {
    pub(crate) profile:    Vec<Lanes<i8, N>>,
    pub(crate) query:      Vec<u8>,
    pub(crate) matrix:     WeightMatrix,
    pub(crate) gap_open:   u8,
    pub(crate) gap_extend: u8,
}

impl<const N: usize> StripedProfile<N> {
    /// Creates a new striped profile from an encoded query and scoring matrix.
    ///
    /// ## Errors
    ///
    /// The following errors are possible:
    /// * [`AlignmentError::EmptyQuery`] if `query` is empty
    /// * [`AlignmentError::InvalidSymbol`] if `query` contains a symbol outside
    ///   of the alphabet
    /// * [`AlignmentError::BadGapWeights`] if `gap_extend` is greater than
    ///   `gap_open`
    /// * [`AlignmentError::AllocationFailed`] if the profile could not be
    ///   allocated
    ///
    /// ## Example
    ///
    /// ```
    /// # use ssw_lite::{alignment::StripedProfile, data::{WeightMatrix, encode_dna}};
    /// let query = encode_dna(b"ACGTACGTAC");
    /// let matrix = WeightMatrix::new_dna_matrix(2, -2, None);
    ///
    /// let profile = StripedProfile::<4>::new(&query, &matrix, 3, 1).unwrap();
    /// assert_eq!(profile.number_vectors(), 3);
    /// assert_eq!(profile.seq_len(), 10);
    /// ```
    pub fn new(query: &[u8], matrix: &WeightMatrix, gap_open: u8, gap_extend: u8) -> Result<Self, AlignmentError> {
        validate_profile_args(query, gap_open, gap_extend)?;
        Self::new_unchecked(try_copied(query)?, *matrix, gap_open, gap_extend)
    }

    /// Builds the profile from arguments already checked by
    /// [`validate_profile_args`].
    fn new_unchecked(query: Vec<u8>, matrix: WeightMatrix, gap_open: u8, gap_extend: u8) -> Result<Self, AlignmentError> {
        const { assert!(N > 0, "a striped profile needs at least one lane") };

        let number_vectors = query.len().div_ceil(N);
        let mut profile = try_filled_vec(Lanes::splat(0i8), ALPHABET_SIZE * number_vectors)?;

        for (ref_symbol, vectors) in (0u8..).zip(profile.chunks_exact_mut(number_vectors)) {
            for (v, vector) in vectors.iter_mut().enumerate() {
                let mut lanes = [0i8; N];
                for (lane, weight) in lanes.iter_mut().enumerate() {
                    let q = logical_index(v, lane, number_vectors);
                    if q < query.len() {
                        *weight = matrix.get_weight(ref_symbol, query[q]);
                    }
                }
                *vector = Lanes::from_array(lanes);
            }
        }

        let ceiling = query.len().saturating_mul(usize::from(matrix.max_weight().unsigned_abs()));
        if matrix.max_weight() > 0 && ceiling >= usize::from(u16::MAX) {
            log::warn!(
                "A query of length {} with a maximum weight of {} may saturate the 16-bit score range",
                query.len(),
                matrix.max_weight()
            );
        }

        Ok(StripedProfile {
            profile,
            query,
            matrix,
            gap_open,
            gap_extend,
        })
    }

    /// Builds the profile of the reversed query prefix ending at `query_end`,
    /// with the same weight matrix and gap penalties. This is the profile of
    /// the reverse pass that locates an alignment's start.
    ///
    /// Returns `Ok(None)` if `query_end` is not a position of the query.
    ///
    /// ## Errors
    ///
    /// [`AlignmentError::AllocationFailed`] if the reversed prefix or its
    /// profile could not be allocated.
    ///
    /// ## Example
    ///
    /// ```
    /// # use ssw_lite::{alignment::StripedProfile, data::{WeightMatrix, encode_dna}};
    /// let matrix = WeightMatrix::new_dna_matrix(2, -2, None);
    /// let profile = StripedProfile::<4>::new(&encode_dna(b"ACGTT"), &matrix, 3, 1).unwrap();
    ///
    /// let reverse = profile.reverse_from_forward(2).unwrap().unwrap();
    /// assert_eq!(reverse, StripedProfile::<4>::new(&encode_dna(b"GCA"), &matrix, 3, 1).unwrap());
    /// assert_eq!(profile.reverse_from_forward(5), Ok(None));
    /// ```
    pub fn reverse_from_forward(&self, query_end: usize) -> Result<Option<Self>, AlignmentError> {
        let Some(prefix) = self.query.get(..=query_end) else {
            return Ok(None);
        };
        Self::new_unchecked(try_reversed(prefix)?, self.matrix, self.gap_open, self.gap_extend).map(Some)
    }

    /// Returns the number of lane vectors per alphabet symbol.
    #[inline]
    #[must_use]
    pub fn number_vectors(&self) -> usize {
        self.profile.len() / ALPHABET_SIZE
    }

    /// The length of the query this profile was built from.
    #[inline]
    #[must_use]
    pub fn seq_len(&self) -> usize {
        self.query.len()
    }

    /// The weight matrix the profile was built with.
    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    /// The vectors scoring every query position against `ref_symbol`.
    ///
    /// ## Panics
    ///
    /// `ref_symbol` must be less than [`ALPHABET_SIZE`].
    #[inline]
    #[must_use]
    pub fn symbol_vectors(&self, ref_symbol: u8) -> &[Lanes<i8, N>] {
        let num_vecs = self.number_vectors();
        let start = usize::from(ref_symbol) * num_vecs;
        &self.profile[start..start + num_vecs]
    }

    /// The gap open and gap extend penalties of the profile.
    #[inline]
    #[must_use]
    pub fn gap_penalties(&self) -> (u8, u8) {
        (self.gap_open, self.gap_extend)
    }

    /// Computes the best local alignment score between the profile and
    /// `reference`, with the 0-based inclusive end coordinates where it is
    /// first reached.
    ///
    /// For more info, see: [`sw_striped_score_ends`].
    ///
    /// ## Errors
    ///
    /// See [`sw_striped_score_ends`].
    ///
    /// ## Example
    ///
    /// ```
    /// # use ssw_lite::{alignment::{MaybeAligned, ScoreAndEnds, StripedProfile}, data::{WeightMatrix, encode_dna}};
    /// let reference = encode_dna(b"GGCCACAGGATTGAG");
    /// let query = encode_dna(b"CTCAGATTG");
    /// let matrix = WeightMatrix::new_dna_matrix(4, -2, None);
    ///
    /// let profile = StripedProfile::<8>::new(&query, &matrix, 3, 1).unwrap();
    /// let ends = profile.smith_waterman_ends(&reference).unwrap().unwrap();
    /// assert_eq!(
    ///     ends,
    ///     ScoreAndEnds {
    ///         score:     27,
    ///         ref_end:   12,
    ///         query_end: 8,
    ///     }
    /// );
    /// ```
    #[inline]
    pub fn smith_waterman_ends(&self, reference: &[u8]) -> Result<MaybeAligned<ScoreAndEnds>, AlignmentError> {
        sw_striped_score_ends(reference, self, ScanDirection::Forward, None)
    }

    /// Computes the best local alignment between the profile and `reference`,
    /// including its start coordinates.
    ///
    /// For more info, see: [`sw_striped_align`].
    ///
    /// ## Errors
    ///
    /// See [`sw_striped_align`].
    #[inline]
    pub fn smith_waterman_alignment(&self, reference: &[u8]) -> Result<MaybeAligned<LocalAlignment>, AlignmentError> {
        sw_striped_align(reference, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::encode_dna;

    #[test]
    fn index_mapping_round_trips() {
        for number_vectors in 1..6 {
            for position in 0..40 {
                let (v, lane) = striped_index(position, number_vectors);
                assert!(v < number_vectors);
                assert_eq!(logical_index(v, lane, number_vectors), position);
            }
        }
    }

    #[test]
    fn striped_layout() {
        let query = encode_dna(b"ACGTA");
        let matrix = WeightMatrix::new_dna_matrix(2, -3, None);
        let profile = StripedProfile::<4>::new(&query, &matrix, 3, 1).unwrap();

        // Two vectors: positions 0,2,4,pad and 1,3,pad,pad
        assert_eq!(profile.number_vectors(), 2);
        let a = profile.symbol_vectors(0);
        assert_eq!(a[0].to_array(), [2, -3, 2, 0]);
        assert_eq!(a[1].to_array(), [-3, -3, 0, 0]);

        let n = profile.symbol_vectors(4);
        assert_eq!(n[0].to_array(), [0; 4]);
        assert_eq!(n[1].to_array(), [0; 4]);
    }

    #[test]
    fn single_lane_is_sequential() {
        let query = encode_dna(b"GATC");
        let matrix = WeightMatrix::new_dna_matrix(1, -1, None);
        let profile = StripedProfile::<1>::new(&query, &matrix, 2, 1).unwrap();
        assert_eq!(profile.number_vectors(), 4);
        let g: Vec<i8> = profile.symbol_vectors(2).iter().map(|v| v[0]).collect();
        assert_eq!(g, vec![1, -1, -1, -1]);
    }

    #[test]
    fn profile_errors() {
        let matrix = WeightMatrix::new_dna_matrix(2, -2, None);
        assert_eq!(StripedProfile::<8>::new(&[], &matrix, 3, 1), Err(AlignmentError::EmptyQuery));
        assert_eq!(
            StripedProfile::<8>::new(&[0, 1, 7], &matrix, 3, 1),
            Err(AlignmentError::InvalidSymbol { symbol: 7, position: 2 })
        );
        assert_eq!(
            StripedProfile::<8>::new(&[0, 1], &matrix, 1, 3),
            Err(AlignmentError::BadGapWeights {
                gap_open:   1,
                gap_extend: 3,
            })
        );
        assert_eq!(
            ScalarProfile::new(&[], &matrix, 3, 1).unwrap_err(),
            AlignmentError::EmptyQuery
        );
        assert!(StripedProfile::<8>::new(&[0, 1], &matrix, 2, 2).is_ok());
    }

    #[test]
    fn reverse_profile_keeps_scoring() {
        let query = encode_dna(b"ACGNTTGA");
        let matrix = WeightMatrix::new_dna_matrix(3, -1, Some(-2));
        let profile = StripedProfile::<2>::new(&query, &matrix, 5, 2).unwrap();

        let reverse = profile.reverse_from_forward(4).unwrap().unwrap();
        assert_eq!(reverse.seq_len(), 5);
        assert_eq!(reverse.gap_penalties(), (5, 2));
        assert_eq!(reverse.matrix(), &matrix);
        assert_eq!(reverse, StripedProfile::<2>::new(&encode_dna(b"TNGCA"), &matrix, 5, 2).unwrap());

        let whole = profile.reverse_from_forward(query.len() - 1).unwrap().unwrap();
        assert_eq!(whole.seq_len(), query.len());
        assert_eq!(profile.reverse_from_forward(query.len()), Ok(None));
        assert_eq!(profile.reverse_from_forward(usize::MAX), Ok(None));
    }
}
