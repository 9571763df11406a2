use std::collections::TryReserveError;

/// Builds a vector of `len` copies of `value`, reporting an allocation failure
/// instead of aborting.
#[inline]
pub(crate) fn try_filled_vec<T: Clone>(value: T, len: usize) -> Result<Vec<T>, TryReserveError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)?;
    out.resize(len, value);
    Ok(out)
}

/// Copies `seq` into a new vector.
#[inline]
pub(crate) fn try_copied(seq: &[u8]) -> Result<Vec<u8>, TryReserveError> {
    let mut out = Vec::new();
    out.try_reserve_exact(seq.len())?;
    out.extend_from_slice(seq);
    Ok(out)
}

/// Copies `seq` into a new vector in reverse order.
#[inline]
pub(crate) fn try_reversed(seq: &[u8]) -> Result<Vec<u8>, TryReserveError> {
    let mut out = Vec::new();
    out.try_reserve_exact(seq.len())?;
    out.extend(seq.iter().rev());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn filled() {
        assert_eq!(try_filled_vec(3u16, 4), Ok(vec![3, 3, 3, 3]));
        assert_eq!(try_filled_vec(0u8, 0), Ok(Vec::new()));
        assert!(try_filled_vec(0u64, usize::MAX).is_err());
    }

    #[test]
    fn copied_and_reversed() {
        let seq = [0, 3, 1, 2, 4];
        assert_eq!(try_copied(&seq), Ok(seq.to_vec()));
        assert_eq!(try_reversed(&seq[..=3]), Ok(vec![2, 1, 3, 0]));
        assert_eq!(try_reversed(&seq[..1]), Ok(vec![0]));
        assert_eq!(try_reversed(&seq), Ok(vec![4, 2, 1, 3, 0]));
        assert_eq!(try_reversed(&[]), Ok(Vec::new()));
    }
}
