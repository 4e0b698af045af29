//! Introsort: quicksort that falls back to heapsort once recursion gets too deep, with insertion
//! sort for short slices.

use std::cmp::Ordering;
use std::mem;

use crate::partition::partition;
use crate::unstable::heap::heapsort;
use crate::unstable::insertion::insertion_sort;

sort_impl!("intro_unstable");

/// Slices shorter than this are insertion sorted.
pub const SMALL_SORT_THRESHOLD: usize = 16;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    introsort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    introsort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with introsort.
///
/// The depth budget starts at `floor(log2(len))` and every partition round spends one unit of it.
/// A sub-slice that still needs partitioning after the budget is exhausted is heapsorted instead.
pub fn introsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return;
    }

    let limit = v.len().ilog2();
    recurse(v, is_less, limit);
}

fn recurse<'a, T, F>(mut v: &'a mut [T], is_less: &mut F, mut limit: u32)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();

        if len < SMALL_SORT_THRESHOLD {
            insertion_sort(v, is_less);
            return;
        }

        if limit == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(len, "introsort depth limit reached, falling back to heapsort");

            heapsort(v, is_less);
            return;
        }

        let (lt_end, gt_start) = partition(v, is_less);
        limit -= 1;

        let tail = mem::take(&mut v);
        let (left, rest) = tail.split_at_mut(lt_end);
        let right: &'a mut [T] = &mut rest[gt_start - lt_end..];

        // Both sides continue with the same budget, only the order of processing changes.
        if left.len() < right.len() {
            recurse(left, is_less, limit);
            v = right;
        } else {
            recurse(right, is_less, limit);
            v = left;
        }
    }
}
