use std::cmp::Ordering;

sort_impl!("selection_unstable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with selection sort. Always performs `n * (n - 1) / 2` comparisons and at most
/// `n - 1` swaps.
pub fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        // Leftmost minimum of the unsorted suffix.
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
        }
    }
}
