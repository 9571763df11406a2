use super::*;

const ALIGNMENT: LocalAlignment = LocalAlignment {
    score:       8,
    ref_begin:   1,
    ref_end:     4,
    query_begin: 0,
    query_end:   3,
};

#[test]
fn local_alignment_ranges() {
    assert_eq!(ALIGNMENT.ref_range(), 1..5);
    assert_eq!(ALIGNMENT.query_range(), 0..4);
    assert_eq!(
        ALIGNMENT.ends(),
        ScoreAndEnds {
            score:     8,
            ref_end:   4,
            query_end: 3,
        }
    );
}

#[test]
fn display_rows() {
    assert_eq!(ALIGNMENT.to_string(), "8\t1\t4\t0\t3");
    assert_eq!(ALIGNMENT.ends().to_string(), "8\t4\t3");
}

#[test]
fn maybe_aligned_combinators() {
    let some = MaybeAligned::Some(ALIGNMENT);
    assert!(some.is_some());
    assert_eq!(some.clone().map(|a| a.score).get(), Some(8));
    assert_eq!(
        some.and_then(|a| if a.score > 10 { MaybeAligned::Some(a) } else { MaybeAligned::Unmapped }),
        MaybeAligned::Unmapped
    );

    let overflowed: MaybeAligned<LocalAlignment> = MaybeAligned::Overflowed;
    assert_eq!(overflowed.clone().map(|a| a.score), MaybeAligned::Overflowed);
    assert_eq!(overflowed.get(), None);
}

#[test]
#[should_panic(expected = "Sequence could not be mapped!")]
fn unwrap_unmapped_panics() {
    let _ = MaybeAligned::<LocalAlignment>::Unmapped.unwrap();
}

#[test]
fn scan_direction() {
    assert!(ScanDirection::default().is_forward());
    assert!(!ScanDirection::Reverse.is_forward());
}
