use super::*;
use crate::data::vec_types::{try_filled_vec, try_reversed};

/// Smith-Waterman algorithm (scalar), yielding the optimal score and the cell
/// where it is first reached.
///
/// This computes the same recurrence (1, 2) as [`sw_striped_score_ends`], one
/// cell at a time with 32-bit scores, and breaks ties the same way: the first
/// reference column visited reaching the best score wins, then the smallest
/// query position within it. A best score of at least [`u16::MAX`] is reported
/// as [`MaybeAligned::Overflowed`] so that both algorithms agree.
///
/// See **[module citations](crate::alignment::sw#module-citations)**.
///
/// ## Complexity
///
/// For query length $m$ and reference length $n$:
///
/// - Time: $O(mn)$
/// - Space: $O(m)$
///
/// ## Errors
///
/// * [`AlignmentError::InvalidSymbol`] if `reference` contains a symbol
///   outside of the alphabet
/// * [`AlignmentError::AllocationFailed`] if the column buffers could not be
///   allocated
///
/// ## Example
///
/// ```
/// # use ssw_lite::{alignment::{ScalarProfile, ScanDirection, sw::sw_scalar_score_ends}, data::{WeightMatrix, encode_dna}};
/// let reference = encode_dna(b"GGCCACAGGATTGAG");
/// let query = encode_dna(b"CTCAGATTG");
/// let matrix = WeightMatrix::new_dna_matrix(4, -2, None);
///
/// let profile = ScalarProfile::new(&query, &matrix, 3, 1).unwrap();
/// let ends = sw_scalar_score_ends(&reference, &profile, ScanDirection::Forward, None)
///     .unwrap()
///     .unwrap();
/// assert_eq!((ends.score, ends.ref_end, ends.query_end), (27, 12, 8));
/// ```
pub fn sw_scalar_score_ends(
    reference: &[u8], query: &ScalarProfile<'_>, direction: ScanDirection, terminate: Option<u16>,
) -> Result<MaybeAligned<ScoreAndEnds>, AlignmentError> {
    validate_symbols(reference)?;
    if reference.is_empty() || query.query.is_empty() {
        return Ok(MaybeAligned::Unmapped);
    }

    let q_len = query.query.len();
    let terminate = terminate.map(i32::from);

    // Scores of the previous column, and the horizontal gap scores entering
    // the current one
    let mut h_prev = try_filled_vec(0i32, q_len)?;
    let mut h_curr = try_filled_vec(0i32, q_len)?;
    let mut e_scores = try_filled_vec(0i32, q_len)?;

    let mut best = 0;
    let mut r_end = 0;
    let mut c_end = 0;

    let len = reference.len();
    for r in 0..len {
        let ref_pos = if direction.is_forward() { r } else { len - 1 - r };
        let ref_symbol = reference[ref_pos];

        let mut diagonal = 0;
        let mut f_score = 0;
        let mut col_best = 0;
        let mut col_end = 0;

        for (c, &query_symbol) in query.query.iter().enumerate() {
            let h = (diagonal + i32::from(query.matrix.get_weight(ref_symbol, query_symbol)))
                .max(e_scores[c])
                .max(f_score)
                .max(0);
            h_curr[c] = h;

            if h > col_best {
                col_best = h;
                col_end = c;
            }

            e_scores[c] = (e_scores[c] - query.gap_extend).max(h - query.gap_open);
            f_score = (f_score - query.gap_extend).max(h - query.gap_open);
            diagonal = h_prev[c];
        }

        if col_best > best {
            if col_best >= i32::from(u16::MAX) {
                return Ok(MaybeAligned::Overflowed);
            }
            best = col_best;
            r_end = ref_pos;
            c_end = col_end;
        }

        if terminate == Some(col_best) {
            break;
        }

        std::mem::swap(&mut h_prev, &mut h_curr);
    }

    // `best` is below u16::MAX here
    Ok(match u16::try_from(best) {
        Ok(0) | Err(_) => MaybeAligned::Unmapped,
        Ok(score) => MaybeAligned::Some(ScoreAndEnds {
            score,
            ref_end: r_end,
            query_end: c_end,
        }),
    })
}

/// Smith-Waterman algorithm (scalar), yielding the optimal score with the
/// start and end coordinates of the alignment.
///
/// The same two passes as [`sw_striped_align`] are used, so both algorithms
/// report identical alignments.
///
/// ## Errors
///
/// * [`AlignmentError::InvalidSymbol`] if `reference` contains a symbol
///   outside of the alphabet
/// * [`AlignmentError::AllocationFailed`] if a buffer could not be allocated
/// * [`AlignmentError::BeginNotFound`] if the reverse pass does not reproduce
///   the best score
pub fn sw_scalar_align(reference: &[u8], query: &ScalarProfile<'_>) -> Result<MaybeAligned<LocalAlignment>, AlignmentError> {
    let forward = match sw_scalar_score_ends(reference, query, ScanDirection::Forward, None)? {
        MaybeAligned::Some(forward) => forward,
        MaybeAligned::Overflowed => return Ok(MaybeAligned::Overflowed),
        MaybeAligned::Unmapped => return Ok(MaybeAligned::Unmapped),
    };

    let query_rev = try_reversed(&query.query[..=forward.query_end])?;
    let profile_rev = ScalarProfile { query: &query_rev, ..*query };

    let reverse = sw_scalar_score_ends(
        &reference[..=forward.ref_end],
        &profile_rev,
        ScanDirection::Reverse,
        Some(forward.score),
    )?;
    locate_begin(forward, reverse).map(MaybeAligned::Some)
}
