//! Three-way partition shared by quicksort and introsort.

/// Partitions `v` around a median-of-three pivot into three zones and returns their boundaries
/// `(lt_end, gt_start)`:
///
/// - `v[..lt_end]` is strictly less than the pivot,
/// - `v[lt_end..gt_start]` is equal to the pivot, the pivot itself sits at `v[lt_end]`,
/// - `v[gt_start..]` is strictly greater than the pivot.
///
/// The equal zone is never empty, so recursing into the two outer zones always makes progress,
/// even if `is_less` does not implement a strict weak ordering.
///
/// Relative order of elements is not preserved.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn partition<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_pos = median_of_three(v, is_less);

    // Park the pivot at the front, so it can be compared by reference while the rest of the slice
    // is reordered.
    v.swap(0, pivot_pos);
    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    let lt_len = partition_in_place(rest, |elem| is_less(elem, pivot));
    let eq_len = partition_in_place(&mut rest[lt_len..], |elem| !is_less(pivot, elem));

    // v: [pivot, less.., equal.., greater..] -> [less.., pivot, equal.., greater..]
    v.swap(0, lt_len);

    (lt_len, lt_len + 1 + eq_len)
}

/// Orders `v[0]`, `v[len / 2]` and `v[len - 1]` among themselves with up to three conditional
/// swaps and returns the position of their median, `len / 2`.
fn median_of_three<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(len > 0);

    let mid = len / 2;
    let last = len - 1;

    if is_less(&v[mid], &v[0]) {
        v.swap(mid, 0);
    }
    if is_less(&v[last], &v[0]) {
        v.swap(last, 0);
    }
    if is_less(&v[last], &v[mid]) {
        v.swap(last, mid);
    }

    mid
}

/// Moves every element that satisfies `pred` to the front of `v`, Lomuto style, and returns how
/// many there are.
fn partition_in_place<T>(v: &mut [T], mut pred: impl FnMut(&T) -> bool) -> usize {
    let mut left = 0;

    for right in 0..v.len() {
        if pred(&v[right]) {
            v.swap(left, right);
            left += 1;
        }
    }

    left
}
