/// The order in which a striped pass visits the reference.
///
/// The reference itself is never copied or reversed; only the iteration order
/// changes. Coordinates reported by either direction are indices into the
/// reference as passed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScanDirection {
    /// Visit the reference from index 0 upward
    #[default]
    Forward,
    /// Visit the reference from its last index down to 0
    Reverse,
}

impl ScanDirection {
    /// Whether this is [`ScanDirection::Forward`].
    #[inline]
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, ScanDirection::Forward)
    }
}
