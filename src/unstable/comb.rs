//! Comb sort, bubble sort over a shrinking gap.

use std::cmp::Ordering;

use crate::unstable::bubble::bubble_sort;
use crate::SortError;

sort_impl!("comb_unstable");

/// Shrink factor used by [`sort`] and [`sort_by`].
pub const DEFAULT_SHRINK_FACTOR: f64 = 1.247;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    // The default factor is always accepted.
    let _ = comb_sort(v, DEFAULT_SHRINK_FACTOR, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let _ = comb_sort(v, DEFAULT_SHRINK_FACTOR, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Sorts `v` in natural order, shrinking the gap by `factor` after every sweep.
///
/// # Errors
///
/// Returns [`SortError::InvalidArgument`] if `factor` is not greater than 1, leaving `v` as it
/// was.
pub fn sort_with_factor<T>(v: &mut [T], factor: f64) -> Result<(), SortError>
where
    T: Ord,
{
    comb_sort(v, factor, &mut |a, b| a.lt(b))
}

/// Same as [`sort_with_factor`], ordering by `compare`.
pub fn sort_by_with_factor<T, F>(v: &mut [T], factor: f64, mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    comb_sort(v, factor, &mut |a, b| compare(a, b) == Ordering::Less)
}

/// Sorts `v` with comb sort.
///
/// The gap starts at `len - 1` and is divided by `factor`, rounding down, after every sweep until
/// it reaches zero. A final bubble sort pass with the same `is_less` removes whatever disorder the
/// gapped sweeps left behind.
///
/// # Errors
///
/// Returns [`SortError::InvalidArgument`] if `factor` is not greater than 1, NaN included. The
/// check happens before the first comparison, also for empty and single element slices.
pub fn comb_sort<T, F>(v: &mut [T], factor: f64, is_less: &mut F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    if factor.is_nan() || factor <= 1.0 {
        #[cfg(feature = "tracing")]
        tracing::error!(factor, "comb sort shrink factor must be greater than 1");

        return Err(SortError::InvalidArgument {
            name: "factor",
            value: factor,
        });
    }

    let len = v.len();
    let mut gap = len.saturating_sub(1);

    while gap >= 1 {
        for i in gap..len {
            if is_less(&v[i], &v[i - gap]) {
                v.swap(i - gap, i);
            }
        }

        // Truncation towards zero is the floor for the non-negative quotient.
        gap = (gap as f64 / factor) as usize;
    }

    bubble_sort(v, is_less);

    Ok(())
}
