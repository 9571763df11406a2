use super::*;
use crate::{data::vec_types::try_filled_vec, simd::Lanes};

/// Buffers reused across the columns of one striped pass.
struct StripedWorkspace<const N: usize> {
    load:     Vec<Lanes<u16, N>>,
    store:    Vec<Lanes<u16, N>>,
    e_scores: Vec<Lanes<u16, N>>,
    best_col: Vec<Lanes<u16, N>>,
}

impl<const N: usize> StripedWorkspace<N> {
    fn new(num_vecs: usize) -> Result<Self, AlignmentError> {
        let zeros = Lanes::splat(0);
        Ok(StripedWorkspace {
            load:     try_filled_vec(zeros, num_vecs)?,
            store:    try_filled_vec(zeros, num_vecs)?,
            e_scores: try_filled_vec(zeros, num_vecs)?,
            best_col: try_filled_vec(zeros, num_vecs)?,
        })
    }
}

/// Smith-Waterman algorithm (striped), yielding the optimal score and the
/// cell where it is first reached.
///
/// Provides the locally optimal sequence alignment score (1) using affine gap
/// penalties (2). We adapt Farrar's striped implementation (3) with the
/// column bookkeeping of the SSW library (4).
///
/// See **[module citations](crate::alignment::sw#module-citations)**.
///
/// The reference is visited in the order given by `direction`, and
/// `ref_end` is always an index into `reference` as passed. If the best score
/// is reached in several columns, the first column visited wins; within that
/// column the smallest query position wins. When `terminate` is set, the pass
/// stops after the first column whose maximum equals it.
///
/// ## Complexity
///
/// For query length $m$, reference length $n$, and $N$ lanes:
///
/// - Time: $O(mn)$, with the average case as $O(mn/N)$
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
/// # use ssw_lite::{alignment::{ScanDirection, StripedProfile, sw::sw_striped_score_ends}, data::{WeightMatrix, encode_dna}};
/// let reference = encode_dna(b"GGGGTTTTTTAAAA");
/// let query = encode_dna(b"AAAACCCCGGGG");
/// let matrix = WeightMatrix::new_dna_matrix(2, -2, None);
///
/// let profile = StripedProfile::<4>::new(&query, &matrix, 3, 1).unwrap();
/// let ends = sw_striped_score_ends(&reference, &profile, ScanDirection::Forward, None)
///     .unwrap()
///     .unwrap();
/// assert_eq!((ends.score, ends.ref_end, ends.query_end), (8, 3, 11));
/// ```
pub fn sw_striped_score_ends<const N: usize>(
    reference: &[u8], query: &StripedProfile<N>, direction: ScanDirection, terminate: Option<u16>,
) -> Result<MaybeAligned<ScoreAndEnds>, AlignmentError> {
    validate_symbols(reference)?;
    if reference.is_empty() || query.seq_len() == 0 {
        return Ok(MaybeAligned::Unmapped);
    }

    let mut workspace = StripedWorkspace::new(query.number_vectors())?;
    let out = match direction {
        ScanDirection::Forward => sw_striped_score_ends_dir::<N, true>(reference, query, terminate, &mut workspace),
        ScanDirection::Reverse => sw_striped_score_ends_dir::<N, false>(reference, query, terminate, &mut workspace),
    };

    if let MaybeAligned::Some(ends) = &out {
        log::trace!("Striped {direction:?} pass: {ends}");
    }
    Ok(out)
}

/// The striped kernel. `reference` must be nonempty and already validated.
#[allow(non_snake_case)]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn sw_striped_score_ends_dir<const N: usize, const FORWARD: bool>(
    reference: &[u8], query: &StripedProfile<N>, terminate: Option<u16>, workspace: &mut StripedWorkspace<N>,
) -> MaybeAligned<ScoreAndEnds> {
    let num_vecs = query.number_vectors();
    let profile = &query.profile;

    let zeros = Lanes::splat(0u16);
    let gap_opens = Lanes::splat(u16::from(query.gap_open));
    let gap_extends = Lanes::splat(u16::from(query.gap_extend));

    let StripedWorkspace {
        load,
        store,
        e_scores,
        best_col,
    } = workspace;

    let mut best = 0u16;
    let mut r_end = 0;

    let len = reference.len();
    for r in 0..len {
        let ref_pos = if FORWARD { r } else { len - 1 - r };
        let ref_index = usize::from(reference[ref_pos]);

        let mut F = zeros;
        let mut H = store[num_vecs - 1].shift_elements_right(0);

        std::mem::swap(load, store);

        // This statement helps with bounds checks.
        let scores_vec = &profile[(ref_index * num_vecs)..(ref_index * num_vecs + num_vecs)];
        let mut max_scores = zeros;

        for v in 0..num_vecs {
            let mut E = e_scores[v];

            H = H.saturating_add_weights(scores_vec[v]);
            H = H.simd_max(E).simd_max(F);
            max_scores = max_scores.simd_max(H);

            store[v] = H;

            H = H.saturating_sub(gap_opens);
            E = E.saturating_sub(gap_extends).simd_max(H);
            F = F.saturating_sub(gap_extends).simd_max(H);

            e_scores[v] = E;
            H = load[v];
        }

        // F from the bottom of one stripe continues at the top of the next
        // lane. Stop as soon as it can no longer raise any cell.
        'lazy_f: for _ in 0..N {
            F = F.shift_elements_right(0);

            for v in 0..num_vecs {
                H = store[v];

                if !F.simd_gt(H.saturating_sub(gap_opens)).any() {
                    break 'lazy_f;
                }

                H = H.simd_max(F);
                store[v] = H;
                max_scores = max_scores.simd_max(H);
                e_scores[v] = e_scores[v].simd_max(H.saturating_sub(gap_opens));

                F = F.saturating_sub(gap_extends);
            }
        }

        let col_best = max_scores.reduce_max();
        if col_best > best {
            if col_best == u16::MAX {
                log::warn!("The alignment score saturated at {} in reference column {ref_pos}", u16::MAX);
                return MaybeAligned::Overflowed;
            }
            best = col_best;
            r_end = ref_pos;
            best_col.copy_from_slice(store);
        }

        if terminate.is_some_and(|t| col_best == t) {
            break;
        }
    }

    if best == 0 {
        return MaybeAligned::Unmapped;
    }

    // The column holding `best` was copied when it was reached, so some real
    // (non-padding) cell of it holds the score.
    let c_end = (0..query.seq_len())
        .find(|&ci| {
            let (v, lane) = striped_index(ci, num_vecs);
            best_col[v][lane] == best
        })
        .unwrap_or(query.seq_len() - 1);

    MaybeAligned::Some(ScoreAndEnds {
        score:     best,
        ref_end:   r_end,
        query_end: c_end,
    })
}
