//! Top-down merge sort with a single scratch allocation.

use std::cmp::Ordering;
use std::mem::MaybeUninit;
use std::ptr;

sort_impl!("merge_stable");

/// Sorts the slice, preserving the order of equal elements.
///
/// This sort is stable, allocates a buffer of `v.len()` elements and is *O*(*n* \* log(*n*))
/// worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with a stable top-down merge sort.
///
/// Splits at `len / 2`, sorts both halves and merges them into scratch space, taking from the
/// left run on ties, then copies the merged run back. Slices of length 0 and 1 do not allocate.
///
/// If `is_less` panics, `v` still holds every original element exactly once.
pub fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The buffer never owns its contents, its length stays 0 and dropping it frees only the
    // allocation.
    let mut buf = Vec::<T>::with_capacity(len);
    let scratch = &mut buf.spare_capacity_mut()[..len];

    sort_into_place(v, scratch, is_less);
}

fn sort_into_place<T, F>(v: &mut [T], scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    sort_into_place(&mut v[..mid], &mut scratch[..mid], is_less);
    sort_into_place(&mut v[mid..], &mut scratch[mid..len], is_less);

    merge(v, mid, &mut scratch[..len], is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` through `scratch`, which must be at least as
/// long as `v`.
fn merge<T, F>(v: &mut [T], mid: usize, scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid <= len && scratch.len() >= len);

    let src = v.as_ptr();
    let dst = scratch.as_mut_ptr().cast::<T>();

    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    // SAFETY: `left < mid <= len` and `right < len` keep every read inside `v`, and
    // `out = (left) + (right - mid) < len` keeps every write inside `scratch`. `v` is only read
    // until the final copy, so a panicking `is_less` leaves it untouched, and the copies in
    // `scratch` are never dropped. Each element is copied out after its last comparison in this
    // merge, so any change `is_less` makes through interior mutability is carried along.
    unsafe {
        while left < mid && right < len {
            let take_right = is_less(&*src.add(right), &*src.add(left));
            let from = if take_right { right } else { left };

            ptr::copy_nonoverlapping(src.add(from), dst.add(out), 1);

            if take_right {
                right += 1;
            } else {
                left += 1;
            }
            out += 1;
        }

        let left_rest = mid - left;
        ptr::copy_nonoverlapping(src.add(left), dst.add(out), left_rest);
        out += left_rest;

        let right_rest = len - right;
        ptr::copy_nonoverlapping(src.add(right), dst.add(out), right_rest);

        // No user code runs past this point.
        ptr::copy_nonoverlapping(dst, v.as_mut_ptr(), len);
    }
}
