use std::cmp::Ordering;
use std::mem;

use crate::partition::partition;

sort_impl!("quick_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with a median-of-three, three-way quicksort.
///
/// There is no depth limit, inputs that defeat the median-of-three pivot take quadratic time.
/// Use [`introsort`](crate::unstable::intro::introsort) where that matters. The smaller side of
/// every partition is sorted recursively and the larger one by the loop, so the stack stays
/// *O*(log(*n*)) regardless.
pub fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let (lt_end, gt_start) = partition(v, is_less);

        let tail = mem::take(&mut v);
        let (left, rest) = tail.split_at_mut(lt_end);
        let right = &mut rest[gt_start - lt_end..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}
