use ssw_lite::prelude::*;

const WEIGHTS: WeightMatrix = WeightMatrix::new_dna_matrix(2, -2, None);

#[test]
fn align_reports_begin_and_end() {
    let reference = encode_dna(b"AATCGTCAGATCNNAGTCTGC");
    let query = encode_dna(b"ATCGN");

    let alignment = align(&query, &reference, &WEIGHTS, 3, 1).unwrap().unwrap();
    assert_eq!(alignment.score, 8);
    assert_eq!(alignment.ref_range(), 1..5);
    assert_eq!(alignment.query_range(), 0..4);
    assert_eq!(alignment.to_string(), "8\t1\t4\t0\t3");
}

#[test]
fn lowercase_input() {
    let upper = align(&encode_dna(b"GATTACA"), &encode_dna(b"CCGATTACACC"), &WEIGHTS, 3, 1).unwrap();
    let lower = align(&encode_dna(b"gattaca"), &encode_dna(b"ccgattacacc"), &WEIGHTS, 3, 1).unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn profile_matches_align() {
    let query = encode_dna(b"ACGTACGTAC");
    let reference = encode_dna(b"TTACGTAGTACTT");
    let profile = StripedProfile::<16>::new(&query, &WEIGHTS, 3, 1).unwrap();

    let ends = profile.smith_waterman_ends(&reference).unwrap().unwrap();
    let alignment = align(&query, &reference, &WEIGHTS, 3, 1).unwrap().unwrap();
    assert_eq!(ends, alignment.ends());
    assert_eq!(
        profile.smith_waterman_alignment(&reference),
        Ok(MaybeAligned::Some(alignment))
    );
}

#[test]
fn unmapped_and_errors() {
    let query = encode_dna(b"NNNN");
    assert_eq!(align(&query, &encode_dna(b"ACGT"), &WEIGHTS, 3, 1), Ok(MaybeAligned::Unmapped));

    let err = align(b"ACGT", &encode_dna(b"ACGT"), &WEIGHTS, 3, 1).unwrap_err();
    assert_eq!(err.get_code(), 1);
    assert_eq!(err.to_string(), "The symbol 65 at position 0 is not part of the alphabet");
}
