use super::*;
use crate::data::WeightMatrix;

/// Smith-Waterman alignment with [`LANES`] lanes. See [`sw_align`].
///
/// ## Errors
///
/// See [`sw_align`].
#[inline]
pub fn align(
    query: &[u8], reference: &[u8], matrix: &WeightMatrix, gap_open: u8, gap_extend: u8,
) -> Result<MaybeAligned<LocalAlignment>, AlignmentError> {
    sw_align::<LANES>(query, reference, matrix, gap_open, gap_extend)
}

/// Smith-Waterman algorithm (striped), yielding the optimal local alignment's
/// score with its start and end coordinates.
///
/// `query` and `reference` are encoded symbols (see
/// [`encode_dna`](crate::data::encode_dna)). A query profile with `N` lanes
/// is built, then [`sw_striped_align`] locates the alignment.
///
/// An empty `query` or `reference` is [`MaybeAligned::Unmapped`], as is any
/// pair of sequences with no positively scoring alignment.
///
/// ## Errors
///
/// * [`AlignmentError::InvalidSymbol`] if either sequence contains a symbol
///   outside of the alphabet
/// * [`AlignmentError::BadGapWeights`] if `gap_extend` is greater than
///   `gap_open`
/// * [`AlignmentError::AllocationFailed`] if a profile or buffer could not be
///   allocated
/// * [`AlignmentError::BeginNotFound`] if the reverse pass does not reproduce
///   the best score
///
/// ## Example
///
/// ```
/// # use ssw_lite::{alignment::sw::sw_align, data::{WeightMatrix, encode_dna}};
/// let reference = encode_dna(b"GGACGGGGGGACGGG");
/// let query = encode_dna(b"ACGTTTTTTTACG");
/// let matrix = WeightMatrix::new_dna_matrix(2, -2, None);
///
/// // Two equally good copies of ACG; the earliest wins
/// let alignment = sw_align::<16>(&query, &reference, &matrix, 3, 1).unwrap().unwrap();
/// assert_eq!(alignment.score, 6);
/// assert_eq!(alignment.ref_range(), 2..5);
/// assert_eq!(alignment.query_range(), 0..3);
/// ```
pub fn sw_align<const N: usize>(
    query: &[u8], reference: &[u8], matrix: &WeightMatrix, gap_open: u8, gap_extend: u8,
) -> Result<MaybeAligned<LocalAlignment>, AlignmentError> {
    if query.is_empty() || reference.is_empty() {
        if gap_extend > gap_open {
            return Err(AlignmentError::BadGapWeights { gap_open, gap_extend });
        }
        validate_symbols(query)?;
        validate_symbols(reference)?;
        return Ok(MaybeAligned::Unmapped);
    }

    let profile = StripedProfile::<N>::new(query, matrix, gap_open, gap_extend)?;
    sw_striped_align(reference, &profile)
}

/// Locates the full alignment with an existing forward `profile`.
///
/// The forward pass finds the best score and its end coordinates. The query
/// prefix ending there is then reversed and profiled (see
/// [`StripedProfile::reverse_from_forward`]), and a reverse pass over the
/// reference prefix ending there stops at the first column reaching the same
/// score, which gives the start coordinates.
///
/// ## Errors
///
/// * [`AlignmentError::InvalidSymbol`] if `reference` contains a symbol
///   outside of the alphabet
/// * [`AlignmentError::AllocationFailed`] if a profile or buffer could not be
///   allocated
/// * [`AlignmentError::BeginNotFound`] if the reverse pass does not reproduce
///   the best score
pub fn sw_striped_align<const N: usize>(
    reference: &[u8], profile: &StripedProfile<N>,
) -> Result<MaybeAligned<LocalAlignment>, AlignmentError> {
    let forward = match sw_striped_score_ends(reference, profile, ScanDirection::Forward, None)? {
        MaybeAligned::Some(forward) => forward,
        MaybeAligned::Overflowed => return Ok(MaybeAligned::Overflowed),
        MaybeAligned::Unmapped => return Ok(MaybeAligned::Unmapped),
    };

    let Some(profile_rev) = profile.reverse_from_forward(forward.query_end)? else {
        return Ok(MaybeAligned::Unmapped);
    };

    let reverse = sw_striped_score_ends(
        &reference[..=forward.ref_end],
        &profile_rev,
        ScanDirection::Reverse,
        Some(forward.score),
    )?;

    let alignment = locate_begin(forward, reverse)?;
    log::trace!("Local alignment: {alignment}");
    Ok(MaybeAligned::Some(alignment))
}

/// Combines a forward pass with the reverse pass run from its end cell.
///
/// The reverse pass reports its reference position as an index into the full
/// reference, but its query position counts back from the forward `query_end`.
pub(crate) fn locate_begin(
    forward: ScoreAndEnds, reverse: MaybeAligned<ScoreAndEnds>,
) -> Result<LocalAlignment, AlignmentError> {
    match reverse {
        MaybeAligned::Some(reverse) if reverse.score == forward.score => Ok(LocalAlignment {
            score:       forward.score,
            ref_begin:   reverse.ref_end,
            ref_end:     forward.ref_end,
            query_begin: forward.query_end - reverse.query_end,
            query_end:   forward.query_end,
        }),
        reverse => {
            let reverse = match reverse {
                MaybeAligned::Some(ends) => ends.score,
                MaybeAligned::Overflowed => u16::MAX,
                MaybeAligned::Unmapped => 0,
            };
            log::warn!(
                "The reverse pass scored {reverse}, not {}; the alignment start was not found",
                forward.score
            );
            Err(AlignmentError::BeginNotFound {
                forward: forward.score,
                reverse,
            })
        }
    }
}
