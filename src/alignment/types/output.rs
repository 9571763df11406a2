use std::ops::Range;

/// The output of an alignment algorithm, allowing unmapped and overflowed
/// alignments to be represented.
///
/// Often this is some value, but if no portion of the query mapped to the
/// reference (the best score was 0, or one of the sequences was empty),
/// [`Unmapped`] is used. [`Overflowed`] is used when the score reached the
/// ceiling of the 16-bit score range, so that the reported score and
/// coordinates could not be trusted.
///
/// [`Some`]: MaybeAligned::Some
/// [`Overflowed`]: MaybeAligned::Overflowed
/// [`Unmapped`]: MaybeAligned::Unmapped
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum MaybeAligned<T> {
    /// Contains a successful alignment result
    Some(T),
    /// Indicates the alignment score overflowed the numeric type
    Overflowed,
    /// Indicates the sequence could not be mapped/aligned
    Unmapped,
}

impl<T> MaybeAligned<T> {
    /// Unwraps the alignment, consuming the [`MaybeAligned<T>`] and returning
    /// the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is [`MaybeAligned::Overflowed`] or
    /// [`MaybeAligned::Unmapped`].
    #[inline]
    #[must_use]
    pub fn unwrap(self) -> T {
        match self {
            MaybeAligned::Some(aln) => aln,
            MaybeAligned::Overflowed => panic!("Alignment score overflowed!"),
            MaybeAligned::Unmapped => panic!("Sequence could not be mapped!"),
        }
    }

    /// Gets the contained value as an [`Option`].
    #[inline]
    #[must_use]
    pub fn get(self) -> Option<T> {
        match self {
            MaybeAligned::Some(aln) => Some(aln),
            _ => None,
        }
    }

    /// Returns `true` if this is [`MaybeAligned::Some`].
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, MaybeAligned::Some(_))
    }

    /// Maps a [`MaybeAligned<T>`] to [`MaybeAligned<U>`] by applying a function
    /// to the contained value. Leaves [`Overflowed`] and [`Unmapped`] variants
    /// unchanged.
    ///
    /// [`Overflowed`]: MaybeAligned::Overflowed
    /// [`Unmapped`]: MaybeAligned::Unmapped
    #[inline]
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MaybeAligned<U> {
        match self {
            MaybeAligned::Some(value) => MaybeAligned::Some(f(value)),
            MaybeAligned::Overflowed => MaybeAligned::Overflowed,
            MaybeAligned::Unmapped => MaybeAligned::Unmapped,
        }
    }

    /// Returns [`Unmapped`] if the [`MaybeAligned`] is [`Unmapped`],
    /// [`Overflowed`] if it is [`Overflowed`], otherwise calls `f` with the
    /// wrapped value and returns the result.
    ///
    /// [`Overflowed`]: MaybeAligned::Overflowed
    /// [`Unmapped`]: MaybeAligned::Unmapped
    #[inline]
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> MaybeAligned<U>
    where
        F: FnOnce(T) -> MaybeAligned<U>, {
        match self {
            MaybeAligned::Some(x) => f(x),
            MaybeAligned::Overflowed => MaybeAligned::Overflowed,
            MaybeAligned::Unmapped => MaybeAligned::Unmapped,
        }
    }
}

/// The best score of a single striped (or scalar) pass and the cell where it
/// was first reached.
///
/// For a [`Forward`] pass these are the 0-based, inclusive end coordinates of
/// the alignment. For a [`Reverse`] pass over reversed inputs, they locate the
/// alignment's start: `ref_end` is already an index into the reference, while
/// `query_end` counts backwards from the end of the reversed query prefix.
///
/// [`Forward`]: super::ScanDirection::Forward
/// [`Reverse`]: super::ScanDirection::Reverse
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct ScoreAndEnds {
    /// The best local alignment score
    pub score:     u16,
    /// The reference index of the first column reaching `score`
    pub ref_end:   usize,
    /// The smallest query index reaching `score` in that column
    pub query_end: usize,
}

// Coordinates are 0-based and inclusive on both ends. The ranges returned by
// `ref_range` and `query_range` are end-exclusive, for slicing.

/// The score and location of the best local alignment between a query and a
/// reference.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct LocalAlignment {
    /// The score of the alignment
    pub score:       u16,
    /// Index of the first reference symbol in the alignment
    pub ref_begin:   usize,
    /// Index of the last reference symbol in the alignment
    pub ref_end:     usize,
    /// Index of the first query symbol in the alignment
    pub query_begin: usize,
    /// Index of the last query symbol in the alignment
    pub query_end:   usize,
}

impl LocalAlignment {
    /// The reference indices covered by the alignment, for slicing.
    #[inline]
    #[must_use]
    pub fn ref_range(&self) -> Range<usize> {
        self.ref_begin..self.ref_end + 1
    }

    /// The query indices covered by the alignment, for slicing.
    #[inline]
    #[must_use]
    pub fn query_range(&self) -> Range<usize> {
        self.query_begin..self.query_end + 1
    }

    /// The end coordinates of the alignment with its score.
    #[inline]
    #[must_use]
    pub fn ends(&self) -> ScoreAndEnds {
        ScoreAndEnds {
            score:     self.score,
            ref_end:   self.ref_end,
            query_end: self.query_end,
        }
    }
}
