//! ## Portable lane vectors
//!
//! [`Lanes`] is a fixed-width array of scores processed together by the
//! striped algorithm. Its operations mirror the handful of vector
//! instructions the algorithm needs (saturating add/subtract, lane-wise
//! maximum, comparisons, and a one-lane shift), written over plain arrays so
//! that the compiler can auto-vectorize them on any target.

use std::ops::Index;

/// A vector of `N` lanes holding values of type `T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Lanes<T, const N: usize>(pub(crate) [T; N]);

/// The result of a lane-wise comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaneMask<const N: usize>([bool; N]);

impl<const N: usize> LaneMask<N> {
    /// Whether any lane is set.
    #[inline]
    #[must_use]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&b| b)
    }

    /// Whether every lane is set.
    #[inline]
    #[must_use]
    pub fn all(&self) -> bool {
        self.0.iter().all(|&b| b)
    }
}

impl<T: Copy, const N: usize> Lanes<T, N> {
    /// Creates a vector with every lane set to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: T) -> Self {
        Lanes([value; N])
    }

    #[inline]
    #[must_use]
    pub const fn from_array(array: [T; N]) -> Self {
        Lanes(array)
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Moves every element one lane up (towards the last lane), filling lane
    /// 0 with `padding`. The last element is discarded.
    #[inline]
    #[must_use]
    pub fn shift_elements_right(self, padding: T) -> Self {
        let mut out = [padding; N];
        if N > 1 {
            out[1..].copy_from_slice(&self.0[..N - 1]);
        }
        Lanes(out)
    }
}

impl<const N: usize> Lanes<u16, N> {
    /// Adds signed weights to each lane, clamping to `0..=u16::MAX`.
    #[inline]
    #[must_use]
    pub fn saturating_add_weights(self, weights: Lanes<i8, N>) -> Self {
        let mut out = self.0;
        for (score, weight) in out.iter_mut().zip(weights.0) {
            *score = score.saturating_add_signed(i16::from(weight));
        }
        Lanes(out)
    }

    /// Subtracts lane-wise, clamping at zero.
    #[inline]
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (score, penalty) in out.iter_mut().zip(rhs.0) {
            *score = score.saturating_sub(penalty);
        }
        Lanes(out)
    }

    #[inline]
    #[must_use]
    pub fn simd_max(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(rhs.0) {
            *a = (*a).max(b);
        }
        Lanes(out)
    }

    #[inline]
    #[must_use]
    pub fn simd_gt(self, rhs: Self) -> LaneMask<N> {
        let mut out = [false; N];
        for ((o, a), b) in out.iter_mut().zip(self.0).zip(rhs.0) {
            *o = a > b;
        }
        LaneMask(out)
    }

    #[inline]
    #[must_use]
    pub fn simd_eq(self, rhs: Self) -> LaneMask<N> {
        let mut out = [false; N];
        for ((o, a), b) in out.iter_mut().zip(self.0).zip(rhs.0) {
            *o = a == b;
        }
        LaneMask(out)
    }

    /// The largest value across all lanes (0 when `N` is 0).
    #[inline]
    #[must_use]
    pub fn reduce_max(self) -> u16 {
        self.0.into_iter().max().unwrap_or(0)
    }
}

impl<T, const N: usize> Index<usize> for Lanes<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}
